use super::*;
use crate::color::Rgb;

#[test]
fn zero_sigma_is_identity() {
    let src = Surface::from_premul_bytes(1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(blur_surface(&src, 0.0).unwrap(), src);
}

#[test]
fn constant_image_is_identity() {
    let src = Surface::filled(4, 3, Rgb::new(10, 20, 30)).unwrap();
    assert_eq!(blur_surface(&src, 2.0).unwrap(), src);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let mut src = Surface::transparent(5, 5).unwrap();
    let center = ((2 * 5 + 2) * 4) as usize;
    src.data_mut()[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let out = blur_surface(&src, 0.8).unwrap();

    let nonzero = out.data().chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(nonzero > 1);

    let sum_a: u32 = out.data().chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 12, "{sum_a}");
}

#[test]
fn gray_blur_softens_edges() {
    let mut raw = vec![0u8; 20];
    raw[10..].fill(255);
    let src = GrayImage::from_raw(20, 1, raw).unwrap();
    let out = blur_gray(&src, 2.0).unwrap();
    let row = out.as_raw();
    assert_eq!(row[0], 0);
    assert_eq!(row[19], 255);
    assert!(row[9] > 0 && row[9] < 128);
    assert!(row[10] > 128 && row[10] < 255);
}

#[test]
fn radius_covers_three_sigma() {
    assert_eq!(radius_for_sigma(2.0), 6);
    assert_eq!(radius_for_sigma(0.0), 0);
    assert_eq!(radius_for_sigma(f32::NAN), 0);
}
