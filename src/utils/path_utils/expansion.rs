use home::home_dir;
use std::path::{Path, PathBuf};

/// Resolve `~` and `~/rest` against the home directory; any other path is returned as given.
///
/// # Errors
///
/// Returns an error if the path starts with `~` and no home directory is known.
pub fn expand_tilde(path: &Path) -> Result<PathBuf, String> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = home_dir()
        .ok_or_else(|| format!("cannot expand '{}': no home directory", path.display()))?;
    if rest.as_os_str().is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}
