use std::process::{Command, Output};

use bucket_image_sync::config::{ACCESS_KEY_ENV, SECRET_KEY_ENV};

fn run_binary(args: &[&str]) -> Output {
    run_binary_with_env(args, &[])
}

fn run_binary_with_env(args: &[&str], envs: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bucket-image-sync"))
        .args(args)
        .env_remove(ACCESS_KEY_ENV)
        .env_remove(SECRET_KEY_ENV)
        .envs(envs.iter().copied())
        .output()
        .expect("Failed to start application")
}

// Nothing listens on port 1, so listing fails fast with a storage error
const CLOSED_ENDPOINT: &str = "http://127.0.0.1:1";
const ENV_CREDENTIALS: [(&str, &str); 2] =
    [(ACCESS_KEY_ENV, "AKIA1234"), (SECRET_KEY_ENV, "s3cr3t")];

#[test]
fn missing_local_dir_exits_nonzero_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let missing = tmp.path().join("gallery");

    let output = run_binary(&["--local-dir", missing.to_str().ok_or("non-UTF-8 temp path")?]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "nothing should reach stdout");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn missing_credentials_exit_nonzero_before_any_request() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    std::fs::write(tmp.path().join("a.jpeg"), "x")?;

    // unroutable endpoint: reaching the network would hang or fail differently
    let output = run_binary(&[
        "--local-dir",
        tmp.path().to_str().ok_or("non-UTF-8 temp path")?,
        "--endpoint",
        "http://192.0.2.1:9",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(ACCESS_KEY_ENV), "stderr: {stderr}");
    Ok(())
}

#[test]
fn endpoint_without_scheme_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;

    let output = run_binary(&[
        "--local-dir",
        tmp.path().to_str().ok_or("non-UTF-8 temp path")?,
        "--endpoint",
        "s3.example.net",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--endpoint"));
    Ok(())
}

#[test]
fn import_subcommand_runs_without_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let source = tempfile::tempdir()?;
    let gallery = tempfile::tempdir()?;

    let output = run_binary(&[
        "import",
        source.path().to_str().ok_or("non-UTF-8 temp path")?,
        gallery.path().to_str().ok_or("non-UTF-8 temp path")?,
    ]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No JPEG files found"));
    Ok(())
}

#[test]
fn home_relative_local_dir_reaches_the_bucket() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempfile::tempdir()?;
    std::fs::create_dir(home.path().join("gallery"))?;
    std::fs::write(home.path().join("gallery/a.jpeg"), "x")?;
    let home_str = home.path().to_str().ok_or("non-UTF-8 temp path")?;

    let envs = [ENV_CREDENTIALS[0], ENV_CREDENTIALS[1], ("HOME", home_str)];
    let output = run_binary_with_env(
        &["--local-dir", "~/gallery", "--endpoint", CLOSED_ENDPOINT],
        &envs,
    );

    // the scan succeeded; only the unreachable endpoint stops the run
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("does not exist"), "stderr: {stderr}");
    assert!(stderr.contains("Failed to list bucket"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn env_credentials_skip_broken_vault_setup() -> Result<(), Box<dyn std::error::Error>> {
    let gallery = tempfile::tempdir()?;
    std::fs::write(gallery.path().join("a.jpeg"), "x")?;

    let output = run_binary_with_env(
        &[
            "--local-dir",
            gallery.path().to_str().ok_or("non-UTF-8 temp path")?,
            "--endpoint",
            CLOSED_ENDPOINT,
            "--vault-name",
            "gallery-vault",
            "--client-id",
            "client",
            "--tenant-id",
            "tenant",
            "--client-secret-path",
            "/nonexistent/secret",
        ],
        &ENV_CREDENTIALS,
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Key Vault"), "stderr: {stderr}");
    assert!(stderr.contains("Failed to list bucket"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn sync_subcommand_accepts_sync_flags() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let missing = tmp.path().join("gallery");

    let output = run_binary(&[
        "sync",
        "--dry-run",
        "--local-dir",
        missing.to_str().ok_or("non-UTF-8 temp path")?,
    ]);

    // parsed fine and got as far as validating the directory
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("unexpected argument"), "stderr: {stderr}");
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
    Ok(())
}
