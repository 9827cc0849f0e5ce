use super::*;
use crate::color::Rgb;

#[test]
fn over_opaque_src_replaces_dst() {
    assert_eq!(over([1, 2, 3, 255], [9, 8, 7, 255], 1.0), [9, 8, 7, 255]);
}

#[test]
fn over_zero_opacity_is_noop() {
    assert_eq!(over([1, 2, 3, 255], [9, 8, 7, 255], 0.0), [1, 2, 3, 255]);
}

#[test]
fn over_half_alpha_mixes() {
    // Premultiplied white at ~50% over opaque black.
    let out = over([0, 0, 0, 255], [128, 128, 128, 128], 1.0);
    assert_eq!(out, [128, 128, 128, 255]);
}

#[test]
fn over_in_place_requires_same_size() {
    let mut a = Surface::transparent(2, 2).unwrap();
    let b = Surface::transparent(3, 2).unwrap();
    assert!(over_in_place(&mut a, &b, 1.0).is_err());
}

#[test]
fn screen_never_darkens() {
    let mut dst = Surface::filled(4, 1, Rgb::new(60, 120, 200)).unwrap();
    let before = dst.clone();
    let src = Surface::filled(4, 1, Rgb::new(90, 10, 255)).unwrap();
    screen_in_place(&mut dst, &src, 0.25).unwrap();
    for (a, b) in dst.data().iter().zip(before.data()) {
        assert!(a >= b);
    }
    assert!(dst.pixel(0, 0).unwrap()[0] > 60);
}

#[test]
fn screen_with_black_is_identity() {
    let mut dst = Surface::filled(2, 2, Rgb::new(60, 120, 200)).unwrap();
    let before = dst.clone();
    let src = Surface::filled(2, 2, Rgb::new(0, 0, 0)).unwrap();
    screen_in_place(&mut dst, &src, 0.25).unwrap();
    assert_eq!(dst, before);
}

#[test]
fn mask_scales_all_channels() {
    let src = Surface::filled(2, 1, Rgb::new(200, 100, 50)).unwrap();
    let mask = GrayImage::from_raw(2, 1, vec![255, 0]).unwrap();
    let out = apply_mask(&src, &mask).unwrap();
    assert_eq!(out.pixel(0, 0), Some([200, 100, 50, 255]));
    assert_eq!(out.pixel(1, 0), Some([0, 0, 0, 0]));
}

#[test]
fn darken_only_where_mask_is_bright() {
    let mut dst = Surface::filled(2, 1, Rgb::new(200, 200, 200)).unwrap();
    let mask = GrayImage::from_raw(2, 1, vec![255, 0]).unwrap();
    darken_through_mask(&mut dst, &mask, 0.5).unwrap();
    assert_eq!(dst.pixel(1, 0), Some([200, 200, 200, 255]));
    let darkened = dst.pixel(0, 0).unwrap();
    assert!((99..=101).contains(&darkened[0]), "{darkened:?}");
    assert_eq!(darkened[3], 255);
}
