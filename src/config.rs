//! Fixed configuration for the gallery bucket.
//!
//! Running the binary without arguments uses these values as-is; the CLI
//! flags in [`crate::args`] only override them.

use std::path::PathBuf;

pub const DEFAULT_BUCKET: &str = "lop25-images";
pub const DEFAULT_LOCAL_DIR: &str = "static/gallery";
pub const DEFAULT_ENDPOINT: &str = "https://hel1.your-objectstorage.com";
pub const DEFAULT_REGION: &str = "hel1";

pub const ACCESS_KEY_ENV: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_KEY_ENV: &str = "AWS_SECRET_ACCESS_KEY";

pub const DEFAULT_ACCESS_KEY_SECRET: &str = "bucket-access-key";
pub const DEFAULT_SECRET_KEY_SECRET: &str = "bucket-secret-key";

/// Everything the sync needs apart from credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSettings {
    pub bucket: String,
    pub local_dir: PathBuf,
    pub endpoint: String,
    pub region: String,
    pub dry_run: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            local_dir: PathBuf::from(DEFAULT_LOCAL_DIR),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            region: DEFAULT_REGION.to_string(),
            dry_run: false,
        }
    }
}

impl SyncSettings {
    /// Base URL under which synced objects are publicly readable
    pub fn public_base_url(&self) -> String {
        crate::output::public_base_url(&self.endpoint, &self.bucket)
    }
}
