use crate::errors::{Result, SyncError};
use md5::{Digest, Md5};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file under the local root, keyed the way it will be stored in the bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub key: String,
    pub path: PathBuf,
    pub size: u64,
    /// Lowercase hex MD5, comparable with a single-part ETag
    pub md5: String,
}

/// Bucket key for `path` relative to `root`, always `/`-separated
///
/// # Errors
///
/// Returns an error if `path` is not under `root` or is not valid UTF-8.
pub fn object_key(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        SyncError::InvalidPath(format!(
            "'{}' is not under '{}'",
            path.display(),
            root.display()
        ))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        let part = component.as_os_str().to_str().ok_or_else(|| {
            SyncError::InvalidPath(format!(
                "'{}' contains non-UTF-8 characters",
                path.display()
            ))
        })?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}

/// Hex MD5 of a file's contents, streamed
pub fn file_md5(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// Every regular file below `root`, sorted by key.
///
/// # Errors
///
/// Returns an error if `root` is missing or not a directory, or if any entry
/// cannot be read.
pub fn scan_local_dir(root: &Path) -> Result<Vec<LocalFile>> {
    if !root.is_dir() {
        return Err(SyncError::InvalidPath(format!(
            "local directory '{}' does not exist or is not a directory",
            root.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let size = entry
            .metadata()
            .map_err(io::Error::from)?
            .len();
        files.push(LocalFile {
            key: object_key(root, path)?,
            path: path.to_path_buf(),
            size,
            md5: file_md5(path)?,
        });
    }

    files.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(files)
}
