use image::{Rgba, RgbaImage};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{AutodesignError, AutodesignResult};
use crate::gradient::interpolate::gradient_steps;

/// Render a standalone gradient frame around a `content_size` (width, height) seat.
///
/// The frame is `(w + 2t, h + 2t)` on a transparent background. Ring `i` (inset by `i` pixels)
/// gets gradient step `i` of `t`, so the outer edge is `start`. The seat at `(t, t)` of exactly
/// `content_size` is filled with opaque `end`.
pub fn render_border(
    content_size: (u32, u32),
    thickness_px: u32,
    start: Rgb8,
    end: Rgb8,
) -> AutodesignResult<RgbaImage> {
    if thickness_px == 0 {
        return Err(AutodesignError::invalid_parameter(
            "border thickness must be >= 1px",
        ));
    }

    let (w, h) = content_size;
    let grow = |v: u32| {
        thickness_px
            .checked_mul(2)
            .and_then(|d| v.checked_add(d))
            .ok_or_else(|| AutodesignError::invalid_parameter("gradient frame size overflow"))
    };
    let (fw, fh) = (grow(w)?, grow(h)?);

    let mut frame = RgbaImage::new(fw, fh);
    for (i, color) in gradient_steps(start, end, thickness_px)?
        .into_iter()
        .enumerate()
    {
        let i = i as u32;
        outline_rect(&mut frame, i, i, fw - i - 1, fh - i - 1, color.to_rgba());
    }
    fill_rect(
        &mut frame,
        thickness_px,
        thickness_px,
        w,
        h,
        end.to_rgba(),
    );

    Ok(frame)
}

/// One-pixel outline of the inclusive rectangle `[x0, x1] x [y0, y1]`.
fn outline_rect(img: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, px: Rgba<u8>) {
    for x in x0..=x1 {
        img.put_pixel(x, y0, px);
        img.put_pixel(x, y1, px);
    }
    for y in y0..=y1 {
        img.put_pixel(x0, y, px);
        img.put_pixel(x1, y, px);
    }
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, px: Rgba<u8>) {
    for yy in y..y + h {
        for xx in x..x + w {
            img.put_pixel(xx, yy, px);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/border.rs"]
mod tests;
