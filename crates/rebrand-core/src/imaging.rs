//! Re-encoding of replacement images into the container of the image they
//! replace.

#[cfg(feature = "imaging")]
use image::{DynamicImage, ImageFormat};
#[cfg(feature = "imaging")]
use std::io::Cursor;

/// Re-encode `bytes` for a media entry with extension `target_extension`
/// (with or without the leading dot).
///
/// PNG, GIF, WebP and TIFF keep an alpha channel; JPEG and BMP are flattened
/// to RGB. Unknown extensions are encoded as PNG. Returns `None` when the
/// bytes cannot be decoded or encoded; callers then keep the original media.
#[cfg(feature = "imaging")]
pub fn reencode_image(bytes: &[u8], target_extension: &str) -> Option<Vec<u8>> {
    match try_reencode(bytes, target_extension) {
        Ok(out) => Some(out),
        Err(e) => {
            log::warn!(
                "replacement image rejected ({} bytes, target '{}'): {}",
                bytes.len(),
                target_extension,
                e
            );
            None
        }
    }
}

/// Without `imaging` nothing is decoded and the bytes are used as supplied.
#[cfg(not(feature = "imaging"))]
pub fn reencode_image(bytes: &[u8], _target_extension: &str) -> Option<Vec<u8>> {
    Some(bytes.to_vec())
}

#[cfg(feature = "imaging")]
fn try_reencode(bytes: &[u8], target_extension: &str) -> image::ImageResult<Vec<u8>> {
    let decoded = image::load_from_memory(bytes)?;
    let format = target_format(target_extension);

    let prepared = match format {
        ImageFormat::Jpeg | ImageFormat::Bmp => DynamicImage::ImageRgb8(decoded.to_rgb8()),
        _ => DynamicImage::ImageRgba8(decoded.to_rgba8()),
    };

    let mut buffer = Cursor::new(Vec::with_capacity(bytes.len()));
    prepared.write_to(&mut buffer, format)?;
    Ok(buffer.into_inner())
}

#[cfg(feature = "imaging")]
fn target_format(extension: &str) -> ImageFormat {
    let ext = extension.trim_start_matches('.').to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => ImageFormat::Jpeg,
        "gif" => ImageFormat::Gif,
        "webp" => ImageFormat::WebP,
        "bmp" => ImageFormat::Bmp,
        "tif" | "tiff" => ImageFormat::Tiff,
        _ => ImageFormat::Png,
    }
}
