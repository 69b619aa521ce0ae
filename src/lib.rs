pub mod args;
pub mod config;
pub mod errors;
pub mod import;
pub mod interfaces;
pub mod output;
pub mod secrets;
pub mod storage;
pub mod sync;
pub mod utils;

pub use args::Args;
pub use errors::{Result, SyncError};

use args::Command;
use config::SyncSettings;
use interfaces::{CredentialSource, ObjectStore};
use storage::{S3Config, S3StorageClient};
use utils::log_utils::Logger;

/// Run the selected command
///
/// # Errors
///
/// Returns the first error from credential resolution, the sync, or the import.
pub fn run_app(args: &Args) -> Result<()> {
    let logger = Logger::new(args.verbose);

    match args.command() {
        Command::Sync => {
            let settings = args.sync_settings();
            let chain = secrets::credential_chain(
                secrets::EnvCredentialSource::from_env(),
                &args.key_vault,
                args.verbose,
            );
            let store = connect(&chain, &settings, args.verbose)?;
            let url = sync_and_report(&store, &settings, &logger)?;
            println!("{url}");
        }
        Command::Import(import_args) => {
            import::run_import(&import_args, &logger)?;
        }
    }
    Ok(())
}

/// Resolve credentials and build the storage client for `settings`
///
/// # Errors
///
/// Returns an error if no credential source yields credentials.
pub fn connect(
    credentials: &dyn CredentialSource,
    settings: &SyncSettings,
    verbose: u8,
) -> Result<S3StorageClient> {
    let credentials = credentials.credentials()?;
    S3StorageClient::new(
        S3Config {
            endpoint: settings.endpoint.clone(),
            region: settings.region.clone(),
            bucket: settings.bucket.clone(),
            credentials,
        },
        verbose,
    )
}

/// Mirror the local directory and return the public base URL to print
///
/// # Errors
///
/// Returns the first scan or storage error.
pub fn sync_and_report(
    store: &dyn ObjectStore,
    settings: &SyncSettings,
    logger: &Logger,
) -> Result<String> {
    let report = sync::run_sync(store, settings, logger)?;
    logger.info(&format!(
        "{} uploaded, {} deleted, {} unchanged",
        report.uploaded.len(),
        report.deleted.len(),
        report.unchanged
    ));
    Ok(settings.public_base_url())
}
