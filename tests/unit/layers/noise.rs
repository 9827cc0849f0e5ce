use super::*;

fn base() -> Surface {
    Surface::filled(320, 200, Rgb::new(40, 60, 90)).unwrap()
}

#[test]
fn zero_strength_is_a_pass_through() {
    let mut rng = Rng64::new(3);
    let out = apply(base(), 0.0, &mut rng).unwrap();
    assert_eq!(out, base());
    assert_eq!(rng.next_u64(), Rng64::new(3).next_u64());
}

#[test]
fn grain_consumes_two_draws() {
    let mut rng = Rng64::new(3);
    apply(base(), 1.0, &mut rng).unwrap();
    let mut expected = Rng64::new(3);
    expected.next_u64();
    expected.next_u64();
    assert_eq!(rng.next_u64(), expected.next_u64());
}

#[test]
fn grain_is_deterministic_and_lightens() {
    let a = apply(base(), 1.0, &mut Rng64::new(9)).unwrap();
    let b = apply(base(), 1.0, &mut Rng64::new(9)).unwrap();
    assert_eq!(a, b);

    let before = base();
    let mut changed = 0usize;
    for (o, i) in a.data().chunks_exact(4).zip(before.data().chunks_exact(4)) {
        assert!(o[0] >= i[0] && o[1] >= i[1] && o[2] >= i[2]);
        assert_eq!(o[3], 255);
        changed += usize::from(o[..3] != i[..3]);
    }
    assert!(changed > 320 * 200 / 2);
}

#[test]
fn field_statistics_track_sigma() {
    let field = gaussian_field(200, 200, 77, 40.0);
    let n = field.as_raw().len() as f64;
    let mean = field.as_raw().iter().map(|&v| f64::from(v)).sum::<f64>() / n;
    let var = field
        .as_raw()
        .iter()
        .map(|&v| (f64::from(v) - mean).powi(2))
        .sum::<f64>()
        / n;
    assert!((mean - 128.0).abs() < 2.0, "mean {mean}");
    assert!((var.sqrt() - 40.0).abs() < 3.0, "sd {}", var.sqrt());
}

#[test]
fn field_does_not_depend_on_canvas_size() {
    let small = gaussian_field(10, 10, 5, 30.0);
    let large = gaussian_field(40, 40, 5, 30.0);
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(small.get_pixel(x, y), large.get_pixel(x, y));
        }
    }
}

#[test]
fn strength_curves() {
    assert_eq!(grain_sigma(0.0), 20.0);
    assert_eq!(grain_sigma(2.0), 140.0);
    assert_eq!(grain_opacity(1.0), 0.1);
    assert_eq!(grain_opacity(2.0), 0.2);
    assert_eq!(grain_opacity(9.0), 0.25);
}
