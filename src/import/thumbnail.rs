use crate::errors::Result;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub const THUMB_MAX_WIDTH: u32 = 400;
pub const THUMB_MAX_HEIGHT: u32 = 300;
pub const THUMB_JPEG_QUALITY: u8 = 85;

/// Size that fits within the bounds keeping the aspect ratio; never larger than the original
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let scale = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    let scaled = |v: u32| ((f64::from(v) * scale).round() as u32).max(1);
    (scaled(width), scaled(height))
}

/// Write a JPEG thumbnail of `source` to `dest`, sized for a three-wide grid
///
/// # Errors
///
/// Returns an error if the source cannot be decoded or the thumbnail cannot be written.
pub fn create_thumbnail(source: &Path, dest: &Path) -> Result<()> {
    let img = image::open(source)?;
    let (width, height) = fit_within(img.width(), img.height(), THUMB_MAX_WIDTH, THUMB_MAX_HEIGHT);

    let thumb = if (width, height) == (img.width(), img.height()) {
        img
    } else {
        img.resize_exact(width, height, FilterType::Lanczos3)
    };

    let writer = BufWriter::new(File::create(dest)?);
    let mut encoder = JpegEncoder::new_with_quality(writer, THUMB_JPEG_QUALITY);
    encoder.encode_image(&thumb.to_rgb8())?;
    Ok(())
}
