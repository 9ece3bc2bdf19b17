use image::RgbaImage;

use crate::assets::normalize::DEFAULT_TARGET_WIDTH;
use crate::effects::composite::paste_masked;
use crate::foundation::core::BorderSpec;
use crate::foundation::error::{AutodesignError, AutodesignResult};
use crate::foundation::math::half_floor;
use crate::gradient::border::render_border;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Placement knobs for posters on the template.
pub struct LayoutOpts {
    /// Width every poster is resized to before framing.
    pub target_width: u32,
    /// Normalized posters taller than this get pushed down by [`Self::tall_poster_nudge_px`].
    pub tall_poster_threshold_px: u32,
    /// Extra downward offset applied to tall posters.
    pub tall_poster_nudge_px: i64,
}

impl Default for LayoutOpts {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            tall_poster_threshold_px: 1340,
            tall_poster_nudge_px: 50,
        }
    }
}

/// Top-left offset of a frame centered on a canvas, including the tall-poster nudge.
///
/// Centering uses floor division, so frames larger than the canvas get negative offsets.
pub fn frame_offset(
    canvas_size: (u32, u32),
    frame_size: (u32, u32),
    thickness_px: u32,
    layout: &LayoutOpts,
) -> (i64, i64) {
    let x = half_floor(i64::from(canvas_size.0) - i64::from(frame_size.0));
    let mut y = half_floor(i64::from(canvas_size.1) - i64::from(frame_size.1));

    let content_h = i64::from(frame_size.1) - 2 * i64::from(thickness_px);
    if content_h > i64::from(layout.tall_poster_threshold_px) {
        y += layout.tall_poster_nudge_px;
    }
    (x, y)
}

/// Frame `poster` with a gradient border and center it on a copy of `template`.
///
/// `poster` is expected to be normalized already. The template is never modified; the returned
/// canvas has the template's dimensions.
pub fn composite(
    template: &RgbaImage,
    poster: &RgbaImage,
    border: &BorderSpec,
    layout: &LayoutOpts,
) -> AutodesignResult<RgbaImage> {
    border.validate()?;
    if template.width() == 0 || template.height() == 0 {
        return Err(AutodesignError::source_image("template image has no pixels"));
    }

    let t = border.thickness_px;
    let mut frame = render_border(poster.dimensions(), t, border.start, border.end)?;
    paste_masked(&mut frame, poster, i64::from(t), i64::from(t));

    let mut canvas = template.clone();
    let (x, y) = frame_offset(canvas.dimensions(), frame.dimensions(), t, layout);
    tracing::trace!(x, y, frame_w = frame.width(), frame_h = frame.height(), "placing frame");
    paste_masked(&mut canvas, &frame, x, y);

    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
