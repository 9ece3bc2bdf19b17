use image::RgbaImage;

use crate::foundation::math::mix_div255_u8;

/// Straight (non-premultiplied) RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Blend `src` into `dst` using `src`'s own alpha as the mask.
///
/// All four channels are mixed as `src * m + dst * (1 - m)`, so an opaque source replaces the
/// destination exactly and a transparent one leaves it untouched.
pub fn mask_blend(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let m = src[3];
    match m {
        0 => dst,
        255 => src,
        _ => [
            mix_div255_u8(dst[0], src[0], m),
            mix_div255_u8(dst[1], src[1], m),
            mix_div255_u8(dst[2], src[2], m),
            mix_div255_u8(dst[3], src[3], m),
        ],
    }
}

/// Paste `src` onto `dst` with its top-left corner at `(x, y)`, masked by `src` alpha.
///
/// Offsets may be negative or push `src` past the edges of `dst`; the non-overlapping part is
/// clipped. Pixels of `dst` outside the pasted box are never touched.
pub fn paste_masked(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + sw).min(dw);
    let y1 = (y + sh).min(dh);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for dy in y0..y1 {
        for dx in x0..x1 {
            let s = src.get_pixel((dx - x) as u32, (dy - y) as u32).0;
            let d = dst.get_pixel_mut(dx as u32, dy as u32);
            d.0 = mask_blend(d.0, s);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
