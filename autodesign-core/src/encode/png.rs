use std::path::Path;

use image::RgbaImage;

use crate::foundation::error::{AutodesignError, AutodesignResult};

/// Create `dir` and all missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> AutodesignResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AutodesignError::output(format!(
            "failed to create output directory '{}': {e}",
            dir.display()
        ))
    })
}

/// Encode `img` losslessly as PNG at `path`, whatever extension `path` carries.
pub fn write_png(path: &Path, img: &RgbaImage) -> AutodesignResult<()> {
    image::save_buffer_with_format(
        path,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| AutodesignError::output(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
