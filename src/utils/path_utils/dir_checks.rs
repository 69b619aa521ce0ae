use super::expansion::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

/// Expand `dir` and make sure it is a directory that can be listed.
///
/// Returns the expanded path; callers should use it rather than `dir`.
///
/// # Errors
///
/// Returns an error if the directory is missing, is not a directory, or cannot be listed.
pub fn check_readable_dir_path(dir: &Path) -> Result<PathBuf, String> {
    let expanded = expand_tilde(dir)?;
    let shown = dir.display();

    match fs::metadata(&expanded) {
        Err(_) => Err(format!("The directory '{shown}' does not exist.")),
        Ok(meta) if !meta.is_dir() => Err(format!("'{shown}' is not a directory.")),
        Ok(_) => fs::read_dir(&expanded)
            .map(|_| expanded.clone())
            .map_err(|e| format!("The directory '{shown}' is not readable: {e}")),
    }
}

/// Expand `dir`, create it if needed, and make sure a file can be created in it.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or written to.
pub fn check_writable_dir(dir: &Path) -> Result<PathBuf, String> {
    let expanded = expand_tilde(dir)?;
    fs::create_dir_all(&expanded)
        .map_err(|e| format!("Cannot create directory '{}': {e}", dir.display()))?;
    // the scratch file is removed when dropped
    tempfile::tempfile_in(&expanded)
        .map_err(|e| format!("Directory '{}' is not writable: {e}", dir.display()))?;
    Ok(expanded)
}
