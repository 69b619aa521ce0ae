use std::path::Path;

/// Content type to store with an object, derived from its file extension
pub fn content_type_for(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let mime = match ext.as_str() {
        "jpg" | "jpeg" => mime::IMAGE_JPEG,
        "png" => mime::IMAGE_PNG,
        "gif" => mime::IMAGE_GIF,
        "bmp" => mime::IMAGE_BMP,
        "svg" => mime::IMAGE_SVG,
        "txt" => mime::TEXT_PLAIN_UTF_8,
        "html" | "htm" => mime::TEXT_HTML_UTF_8,
        "css" => mime::TEXT_CSS_UTF_8,
        "js" => mime::APPLICATION_JAVASCRIPT_UTF_8,
        "json" => mime::APPLICATION_JSON,
        "pdf" => mime::APPLICATION_PDF,
        // not in the mime crate's constants
        "webp" => return "image/webp".to_string(),
        "avif" => return "image/avif".to_string(),
        "toml" => return "application/toml".to_string(),
        _ => mime::APPLICATION_OCTET_STREAM,
    };
    mime.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_by_extension() {
        assert_eq!(content_type_for(Path::new("images/LOP25-0001.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("thumbs/a.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("logo.png")), "image/png");
        assert_eq!(content_type_for(Path::new("hero.webp")), "image/webp");
    }

    #[test]
    fn unknown_falls_back_to_octet_stream() {
        assert_eq!(
            content_type_for(Path::new("README")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(Path::new("archive.xyz")),
            "application/octet-stream"
        );
    }
}
