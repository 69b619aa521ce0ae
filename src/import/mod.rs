//! Bringing camera images into the gallery directory that `sync` mirrors.
//!
//! Images get sequential names (`<prefix>-NNNN.jpeg`) continuing from the
//! highest serial already in the gallery, a thumbnail, and optionally an
//! EXIF Artist tag and an entry in a TOML index.

pub mod exif;
pub mod index;
pub mod naming;
pub mod thumbnail;

use crate::args::ImportArgs;
use crate::errors::{Result, SyncError};
use crate::utils::log_utils::Logger;
use crate::utils::path_utils::{check_readable_dir_path, check_writable_dir, expand_tilde};
use naming::{find_highest_serial, find_source_images, serial_file_name};
use std::fs;
use std::path::Path;

pub const IMAGES_DIR: &str = "images";
pub const THUMBS_DIR: &str = "thumbs";

/// Names given to the imported files, in import order
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: Vec<String>,
}

/// Import every JPEG in `args.source` into `args.destination`
///
/// # Errors
///
/// Returns an error if the source is not a readable directory, the
/// destination cannot be created, or an image cannot be copied. EXIF,
/// thumbnail and index problems are only logged.
pub fn run_import(args: &ImportArgs, logger: &Logger) -> Result<ImportReport> {
    let source_dir = check_readable_dir_path(&args.source)
        .map_err(|e| SyncError::InvalidPath(format!("Source directory: {e}")))?;
    let dest_dir = check_writable_dir(&args.destination).map_err(SyncError::InvalidPath)?;

    let images_dir = dest_dir.join(IMAGES_DIR);
    let thumbs_dir = dest_dir.join(THUMBS_DIR);
    fs::create_dir_all(&images_dir)?;
    fs::create_dir_all(&thumbs_dir)?;

    let highest = find_highest_serial(&images_dir, &args.prefix)?;
    logger.normal(&format!("Found highest serial number: {highest:04}"));

    let sources = find_source_images(&source_dir);
    if sources.is_empty() {
        logger.normal(&format!(
            "No JPEG files found in '{}'",
            source_dir.display()
        ));
        return Ok(ImportReport::default());
    }
    logger.normal(&format!("Found {} image files to import", sources.len()));

    let mut report = ImportReport::default();
    for (serial, source) in (highest + 1..).zip(sources) {
        let new_name = serial_file_name(&args.prefix, serial);
        import_one(&source, &images_dir.join(&new_name), &thumbs_dir.join(&new_name), args, logger)?;
        logger.normal(&format!(
            "Imported: {} -> {} (with thumbnail)",
            display_name(&source),
            new_name
        ));
        report.imported.push(new_name);
    }

    if let Some(index_file) = &args.index_file {
        let index_file = expand_tilde(index_file).map_err(SyncError::InvalidPath)?;
        index::update_index(&index_file, &report.imported, logger);
    }

    logger.normal(&format!(
        "Successfully imported {} images",
        report.imported.len()
    ));
    Ok(report)
}

fn import_one(
    source: &Path,
    dest: &Path,
    thumb: &Path,
    args: &ImportArgs,
    logger: &Logger,
) -> Result<()> {
    fs::copy(source, dest)?;

    if let Some(photographer) = &args.photographer {
        if let Err(e) = exif::set_artist(dest, photographer) {
            logger.warn(&format!(
                "Could not update EXIF data for {}: {e}",
                display_name(dest)
            ));
        }
    }

    // thumbnails come from the untouched source
    if let Err(e) = thumbnail::create_thumbnail(source, thumb) {
        logger.warn(&format!(
            "Could not create thumbnail for {}: {e}",
            display_name(source)
        ));
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
