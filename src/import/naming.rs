use crate::errors::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Sequential file name, e.g. `LOP25-0007.jpeg`
pub fn serial_file_name(prefix: &str, serial: u32) -> String {
    format!("{prefix}-{serial:04}.jpeg")
}

fn serial_pattern(prefix: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r"^{}-(\d{{4,}})\.jpeg$", regex::escape(prefix)))?)
}

/// Highest serial used by files directly inside `dir`, or 0
///
/// # Errors
///
/// Returns an error if the prefix cannot be turned into a pattern.
pub fn find_highest_serial(dir: &Path, prefix: &str) -> Result<u32> {
    if !dir.exists() {
        return Ok(0);
    }
    let pattern = serial_pattern(prefix)?;

    let highest = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let name = e.file_name().to_str()?.to_string();
            pattern.captures(&name)?.get(1)?.as_str().parse::<u32>().ok()
        })
        .max()
        .unwrap_or(0);
    Ok(highest)
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpeg") || ext.eq_ignore_ascii_case("jpg"))
}

/// JPEG files directly inside `dir`, sorted by path
pub fn find_source_images(dir: &Path) -> Vec<PathBuf> {
    let mut images: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_jpeg(e.path()))
        .map(|e| e.into_path())
        .collect();
    images.sort();
    images
}
