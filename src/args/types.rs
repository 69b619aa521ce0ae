use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::validators::validate;
use crate::config::{
    DEFAULT_ACCESS_KEY_SECRET, DEFAULT_BUCKET, DEFAULT_ENDPOINT, DEFAULT_LOCAL_DIR,
    DEFAULT_REGION, DEFAULT_SECRET_KEY_SECRET, SyncSettings,
};
use crate::utils::path_utils::expand_tilde;

pub const DEFAULT_SERIAL_PREFIX: &str = "LOP25";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Mirror the image gallery to its public bucket", long_about = None)]
pub struct Args {
    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Target bucket
    #[arg(long, global = true, default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    /// Local directory mirrored into the bucket
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_LOCAL_DIR)]
    pub local_dir: PathBuf,

    /// Base URL of the S3-compatible storage service
    #[arg(long, global = true, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Signing region for the storage service
    #[arg(long, global = true, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Show what would be uploaded and deleted without touching the bucket
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Fall back to Azure Key Vault when credentials are not in the environment
    #[command(flatten)]
    pub key_vault: KeyVaultArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mirror the local directory to the bucket (default)
    Sync,
    /// Copy camera images into the gallery with sequential names and thumbnails
    Import(ImportArgs),
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct ImportArgs {
    /// Directory containing the images to import
    pub source: PathBuf,

    /// Gallery directory; images/ and thumbs/ are created inside it
    pub destination: PathBuf,

    /// Photographer name written to the EXIF Artist tag
    #[arg(long)]
    pub photographer: Option<String>,

    /// TOML index file to append the imported images to
    #[arg(long, value_name = "PATH")]
    pub index_file: Option<PathBuf>,

    /// Prefix for the sequential file names
    #[arg(long, default_value = DEFAULT_SERIAL_PREFIX)]
    pub prefix: String,
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct KeyVaultArgs {
    /// Key vault name, URL, or path to a file containing either
    #[arg(long, global = true)]
    pub vault_name: Option<String>,

    /// Azure client id, or path to a file containing it
    #[arg(long, global = true)]
    pub client_id: Option<String>,

    /// Azure tenant id, or path to a file containing it
    #[arg(long, global = true)]
    pub tenant_id: Option<String>,

    /// File holding the Azure client secret
    #[arg(long, global = true, value_name = "PATH")]
    pub client_secret_path: Option<PathBuf>,

    /// Name of the secret holding the bucket access key
    #[arg(long, global = true, default_value = DEFAULT_ACCESS_KEY_SECRET)]
    pub access_key_secret: String,

    /// Name of the secret holding the bucket secret key
    #[arg(long, global = true, default_value = DEFAULT_SECRET_KEY_SECRET)]
    pub secret_key_secret: String,
}

impl Default for KeyVaultArgs {
    fn default() -> Self {
        Self {
            vault_name: None,
            client_id: None,
            tenant_id: None,
            client_secret_path: None,
            access_key_secret: DEFAULT_ACCESS_KEY_SECRET.to_string(),
            secret_key_secret: DEFAULT_SECRET_KEY_SECRET.to_string(),
        }
    }
}

impl KeyVaultArgs {
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.vault_name.is_some()
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            verbose: 0,
            bucket: DEFAULT_BUCKET.to_string(),
            local_dir: PathBuf::from(DEFAULT_LOCAL_DIR),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            region: DEFAULT_REGION.to_string(),
            dry_run: false,
            key_vault: KeyVaultArgs::default(),
            command: None,
        }
    }
}

impl Args {
    /// Validate the arguments for the selected command, without modifying the Args
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid for the selected command.
    pub fn validate(&self) -> Result<(), String> {
        validate(self)
    }

    /// The command to run; no subcommand means sync
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Sync)
    }

    /// Settings for the sync, with a leading `~` in the local directory expanded
    #[must_use]
    pub fn sync_settings(&self) -> SyncSettings {
        SyncSettings {
            bucket: self.bucket.clone(),
            local_dir: expand_tilde(&self.local_dir).unwrap_or_else(|_| self.local_dir.clone()),
            endpoint: self.endpoint.clone(),
            region: self.region.clone(),
            dry_run: self.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn sync_flags_work_after_the_subcommand() {
        let args = parse(&[
            "bucket-image-sync",
            "sync",
            "--dry-run",
            "--bucket",
            "photos",
            "--local-dir",
            "public/gallery",
            "--endpoint",
            "https://s3.example.net",
            "--region",
            "eu1",
        ]);
        assert_eq!(args.command(), Command::Sync);
        let settings = args.sync_settings();
        assert!(settings.dry_run);
        assert_eq!(settings.bucket, "photos");
        assert_eq!(settings.local_dir, PathBuf::from("public/gallery"));
        assert_eq!(settings.endpoint, "https://s3.example.net");
        assert_eq!(settings.region, "eu1");
    }

    #[test]
    fn vault_flags_work_after_the_subcommand() {
        let args = parse(&["bucket-image-sync", "sync", "--vault-name", "gallery-vault"]);
        assert_eq!(args.key_vault.vault_name.as_deref(), Some("gallery-vault"));
    }

    #[test]
    fn no_subcommand_means_sync() {
        let args = parse(&["bucket-image-sync", "--dry-run"]);
        assert_eq!(args.command(), Command::Sync);
        assert!(args.dry_run);
    }

    #[test]
    fn local_dir_tilde_is_expanded_in_settings() {
        let Some(home) = home::home_dir() else {
            return;
        };
        let args = parse(&["bucket-image-sync", "--local-dir", "~/gallery"]);
        assert_eq!(args.sync_settings().local_dir, home.join("gallery"));
    }
}
