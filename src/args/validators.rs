use super::types::{Args, Command, ImportArgs, KeyVaultArgs};
use crate::utils::path_utils::check_readable_dir_path;

/// Validate the args for the selected command
///
/// # Errors
///
/// Returns an error if the arguments are invalid for the selected command.
pub fn validate(args: &Args) -> Result<(), String> {
    match args.command() {
        Command::Sync => validate_sync(args),
        Command::Import(import) => validate_import(&import),
    }
}

fn validate_sync(args: &Args) -> Result<(), String> {
    if args.bucket.trim().is_empty() {
        return Err("--bucket must not be empty".to_string());
    }
    if !(args.endpoint.starts_with("https://") || args.endpoint.starts_with("http://")) {
        return Err(format!(
            "--endpoint must start with http:// or https://, got '{}'",
            args.endpoint
        ));
    }
    check_readable_dir_path(&args.local_dir)?;
    validate_key_vault(&args.key_vault)
}

fn validate_key_vault(kv: &KeyVaultArgs) -> Result<(), String> {
    if !kv.enabled() {
        return Ok(());
    }
    let mut missing = Vec::new();
    if kv.client_id.is_none() {
        missing.push("--client-id");
    }
    if kv.tenant_id.is_none() {
        missing.push("--tenant-id");
    }
    if kv.client_secret_path.is_none() {
        missing.push("--client-secret-path");
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("--vault-name requires {}", missing.join(", ")))
    }
}

fn validate_import(import: &ImportArgs) -> Result<(), String> {
    if import.prefix.is_empty() {
        return Err("--prefix must not be empty".to_string());
    }
    check_readable_dir_path(&import.source).map(|_| ())
}
