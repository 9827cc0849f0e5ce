use super::*;
use crate::color::Rgb;

fn size() -> CanvasSize {
    CanvasSize::new(400, 240).unwrap()
}

#[test]
fn masks_are_bright_in_the_middle() {
    for kind in [VignetteMask::Radial, VignetteMask::SoftRect] {
        let m = center_mask(size(), kind).unwrap();
        assert_eq!(m.dimensions(), (400, 240));
        let center = m.get_pixel(200, 120).0[0];
        let corner = m.get_pixel(0, 0).0[0];
        assert!(center > 200, "{kind:?} center {center}");
        assert!(corner < 40, "{kind:?} corner {corner}");
    }
}

#[test]
fn radial_mask_is_dark_on_the_inscribed_ellipse() {
    let m = center_mask(size(), VignetteMask::Radial).unwrap();
    assert!(m.get_pixel(0, 120).0[0] < 8);
    assert!(m.get_pixel(200, 0).0[0] < 8);
}

#[test]
fn edges_darken_more_than_center() {
    let base = Surface::filled(400, 240, Rgb::new(200, 200, 200)).unwrap();
    let out = apply(base, 1.0, VignetteMask::Radial).unwrap();
    let center = out.pixel(200, 120).unwrap()[0];
    let corner = out.pixel(2, 2).unwrap()[0];
    assert!(corner < center, "corner {corner} center {center}");
    assert!(corner < 200);
    assert!(out.data().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn zero_strength_is_a_pass_through() {
    let base = Surface::filled(400, 240, Rgb::new(9, 9, 9)).unwrap();
    assert_eq!(apply(base.clone(), 0.0, VignetteMask::SoftRect).unwrap(), base);
}

#[test]
fn opacity_is_capped() {
    assert_eq!(vignette_opacity(1.0), 0.35);
    assert_eq!(vignette_opacity(2.0), 0.55);
    assert_eq!(vignette_opacity(-1.0), 0.0);
}

#[test]
fn mask_names_parse() {
    assert_eq!("radial".parse::<VignetteMask>().unwrap(), VignetteMask::Radial);
    assert_eq!("Soft-Rect".parse::<VignetteMask>().unwrap(), VignetteMask::SoftRect);
    assert!("oval".parse::<VignetteMask>().is_err());
    assert_eq!(VignetteMask::SoftRect.as_str(), "soft-rect");
}
