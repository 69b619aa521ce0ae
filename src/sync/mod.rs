//! One-way mirror of a local directory into a bucket.

pub mod local;
pub mod plan;

pub use local::{LocalFile, scan_local_dir};
pub use plan::{SyncPlan, plan_sync};

use crate::config::SyncSettings;
use crate::errors::Result;
use crate::interfaces::ObjectStore;
use crate::storage::content_type_for;
use crate::utils::log_utils::Logger;

/// What a mirror run did
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub uploaded: Vec<String>,
    pub deleted: Vec<String>,
    pub unchanged: usize,
    pub dry_run: bool,
}

/// Make the bucket behind `store` match `settings.local_dir`.
///
/// New and changed files are uploaded with a public-read ACL, then objects
/// missing locally are deleted. The local directory is scanned before the
/// bucket is touched, so a missing directory fails without any request.
///
/// # Errors
///
/// Returns the first scan or storage error; nothing is retried.
pub fn run_sync(store: &dyn ObjectStore, settings: &SyncSettings, logger: &Logger) -> Result<SyncReport> {
    logger.info(&format!(
        "Mirroring '{}' to bucket '{}'",
        settings.local_dir.display(),
        settings.bucket
    ));

    let local = scan_local_dir(&settings.local_dir)?;
    logger.debug(&format!("Found {} local files", local.len()));

    let remote = store.list_objects()?;
    let plan = plan_sync(local, &remote);
    logger.info(&format!(
        "{} to upload, {} to delete, {} unchanged",
        plan.uploads.len(),
        plan.deletes.len(),
        plan.unchanged
    ));

    execute_plan(store, plan, settings.dry_run, logger)
}

/// Apply a plan: uploads first, then deletes
///
/// # Errors
///
/// Returns the first storage error.
pub fn execute_plan(
    store: &dyn ObjectStore,
    plan: SyncPlan,
    dry_run: bool,
    logger: &Logger,
) -> Result<SyncReport> {
    let mut report = SyncReport {
        unchanged: plan.unchanged,
        dry_run,
        ..Default::default()
    };
    let prefix = if dry_run { "(dry run) " } else { "" };

    for file in plan.uploads {
        logger.normal(&format!("{prefix}upload: {}", file.key));
        if !dry_run {
            let content_type = content_type_for(&file.path);
            store.put_public_object(&file.key, &file.path, &content_type)?;
        }
        report.uploaded.push(file.key);
    }

    for key in plan.deletes {
        logger.normal(&format!("{prefix}delete: {key}"));
        if !dry_run {
            store.delete_object(&key)?;
        }
        report.deleted.push(key);
    }

    Ok(report)
}
