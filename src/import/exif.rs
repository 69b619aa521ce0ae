use crate::errors::Result;
use little_exif::exif_tag::ExifTag;
use little_exif::metadata::Metadata;
use std::path::Path;

/// Set the EXIF Artist tag of a JPEG in place, keeping its other tags
///
/// # Errors
///
/// Returns an error if the file cannot be rewritten.
pub fn set_artist(image: &Path, photographer: &str) -> Result<()> {
    // files without an EXIF segment start from empty metadata
    let mut metadata = Metadata::new_from_path(image).unwrap_or_else(|_| Metadata::new());
    metadata.set_tag(ExifTag::Artist(photographer.to_string()));
    metadata.write_to_file(image)?;
    Ok(())
}
