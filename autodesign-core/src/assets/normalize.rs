use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::foundation::error::{AutodesignError, AutodesignResult};

/// Poster width used when no override is configured.
pub const DEFAULT_TARGET_WIDTH: u32 = 800;

/// Largest width or height a normalized poster may have.
pub const MAX_POSTER_DIM: u32 = 16_384;

/// Resize `poster` to exactly `target_width`, keeping its aspect ratio.
///
/// The new height is `round(height * target_width / width)`, never below one pixel. Resampling
/// uses Lanczos3 for both up- and downscaling. Posters whose resized height would exceed
/// [`MAX_POSTER_DIM`] are rejected before any pixel buffer is allocated.
pub fn normalize(poster: &RgbaImage, target_width: u32) -> AutodesignResult<RgbaImage> {
    if target_width == 0 || target_width > MAX_POSTER_DIM {
        return Err(AutodesignError::invalid_parameter(format!(
            "poster target width must be in 1..={MAX_POSTER_DIM}px, got {target_width}"
        )));
    }
    let (w, h) = poster.dimensions();
    if w == 0 || h == 0 {
        return Err(AutodesignError::source_image(format!(
            "cannot normalize an empty poster ({w}x{h})"
        )));
    }

    let target_height = scaled_height(w, h, target_width);
    if target_height > MAX_POSTER_DIM {
        return Err(AutodesignError::source_image(format!(
            "poster {w}x{h} would resize to {target_width}x{target_height} (max height {MAX_POSTER_DIM}px)"
        )));
    }
    if (w, h) == (target_width, target_height) {
        return Ok(poster.clone());
    }

    Ok(imageops::resize(
        poster,
        target_width,
        target_height,
        FilterType::Lanczos3,
    ))
}

/// Height matching `target_width` under the source aspect ratio.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scale = f64::from(target_width) / f64::from(width);
    let h = (f64::from(height) * scale).round();
    h.clamp(1.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/assets/normalize.rs"]
mod tests;
