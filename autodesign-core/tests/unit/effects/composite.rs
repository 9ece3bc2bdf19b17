use image::Rgba;

use super::*;

#[test]
fn mask_blend_extremes() {
    let dst = [10, 20, 30, 255];
    assert_eq!(mask_blend(dst, [200, 200, 200, 0]), dst);
    assert_eq!(mask_blend(dst, [1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn mask_blend_half_alpha_mixes_every_channel() {
    let out = mask_blend([0, 0, 255, 255], [255, 0, 0, 128]);
    assert_eq!(out, [128, 0, 127, 191]);
}

#[test]
fn paste_inside_bounds() {
    let mut dst = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    let src = RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]));
    paste_masked(&mut dst, &src, 1, 1);

    assert_eq!(*dst.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    assert_eq!(*dst.get_pixel(1, 1), Rgba([9, 9, 9, 255]));
    assert_eq!(*dst.get_pixel(2, 2), Rgba([9, 9, 9, 255]));
    assert_eq!(*dst.get_pixel(3, 3), Rgba([0, 0, 0, 255]));
}

#[test]
fn paste_clips_negative_and_overflowing_offsets() {
    let mut dst = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
    let mut src = RgbaImage::from_pixel(2, 2, Rgba([5, 5, 5, 255]));
    src.put_pixel(1, 1, Rgba([7, 7, 7, 255]));

    paste_masked(&mut dst, &src, -1, -1);
    assert_eq!(*dst.get_pixel(0, 0), Rgba([7, 7, 7, 255]));
    assert_eq!(*dst.get_pixel(1, 0), Rgba([0, 0, 0, 255]));

    paste_masked(&mut dst, &src, 2, 2);
    assert_eq!(*dst.get_pixel(2, 2), Rgba([5, 5, 5, 255]));

    let before = dst.clone();
    paste_masked(&mut dst, &src, 10, -10);
    assert_eq!(dst, before);
}

#[test]
fn transparent_source_pixels_leave_destination() {
    let mut dst = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 255, 255]));
    let mut src = RgbaImage::from_pixel(2, 1, Rgba([255, 0, 0, 255]));
    src.put_pixel(1, 0, Rgba([255, 0, 0, 0]));

    paste_masked(&mut dst, &src, 0, 0);
    assert_eq!(*dst.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
    assert_eq!(*dst.get_pixel(1, 0), Rgba([0, 0, 255, 255]));
}
