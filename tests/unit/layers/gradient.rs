use super::*;

fn palette() -> Palette {
    Palette {
        c1: Rgb::new(0, 0, 0),
        c2: Rgb::new(200, 100, 0),
        accent: Rgb::new(0, 0, 255),
        text: Rgb::new(255, 255, 255),
    }
}

#[test]
fn corners_follow_the_weighted_ramps() {
    let size = CanvasSize::new(320, 200).unwrap();
    let s = paint(size, &palette()).unwrap();
    // Top-left: vertical c1, horizontal c2 -> 30% of c2.
    assert_eq!(s.pixel(0, 0), Some([60, 30, 0, 255]));
    // Top-right: vertical c1, horizontal c1.
    assert_eq!(s.pixel(319, 0), Some([0, 0, 0, 255]));
    // Bottom-left: both c2.
    assert_eq!(s.pixel(0, 199), Some([200, 100, 0, 255]));
    // Bottom-right: vertical c2, horizontal c1 -> 70% of c2.
    assert_eq!(s.pixel(319, 199), Some([140, 70, 0, 255]));
}

#[test]
fn gradient_is_opaque_and_monotonic_down_a_column() {
    let size = CanvasSize::new(320, 200).unwrap();
    let s = paint(size, &palette()).unwrap();
    let mut prev = 0u8;
    for y in 0..200 {
        let px = s.pixel(160, y).unwrap();
        assert_eq!(px[3], 255);
        assert!(px[0] >= prev);
        prev = px[0];
    }
}
