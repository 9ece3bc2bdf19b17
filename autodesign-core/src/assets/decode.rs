use std::path::Path;

use image::RgbaImage;

use crate::foundation::error::{AutodesignError, AutodesignResult};

/// File suffixes (lowercase, without dot) that the batch driver treats as posters.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// `true` when `file_name` ends in a supported image suffix (case-insensitive).
pub fn is_supported_image_name(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// Decode encoded image bytes into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> AutodesignResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| AutodesignError::source_image(format!("decode image: {e}")))?;
    ensure_non_empty(dyn_img.to_rgba8())
}

/// Read and decode an image file into straight RGBA8.
///
/// The format is sniffed from the content, so a PNG saved under a `.jpg` name still loads.
pub fn load_image(path: &Path) -> AutodesignResult<RgbaImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        AutodesignError::source_image(format!("read image '{}': {e}", path.display()))
    })?;
    decode_image(&bytes).map_err(|e| match e {
        AutodesignError::SourceImage(msg) => {
            AutodesignError::source_image(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })
}

fn ensure_non_empty(img: RgbaImage) -> AutodesignResult<RgbaImage> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(AutodesignError::source_image(format!(
            "image has no pixels ({w}x{h})"
        )));
    }
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
