use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    a.write_bytes(b"covergen");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_bytes(b"cover");
    b.write_bytes(b"gen");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn hash_xy_depends_on_every_input() {
    let base = hash_xy(7, 10, 20);
    assert_eq!(base, hash_xy(7, 10, 20));
    assert_ne!(base, hash_xy(8, 10, 20));
    assert_ne!(base, hash_xy(7, 11, 20));
    assert_ne!(base, hash_xy(7, 10, 21));
    assert_ne!(hash_xy(7, 1, 2), hash_xy(7, 2, 1));
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(200, 0), 0);
}

#[test]
fn opacity_and_unit_conversions_clamp() {
    assert_eq!(opacity_u8(-1.0), 0);
    assert_eq!(opacity_u8(0.5), 128);
    assert_eq!(opacity_u8(3.0), 255);
    assert_eq!(unit_to_u8(1.5), 255);
    assert_eq!(unit_to_u8(-0.2), 0);
    assert_eq!(unit_to_u8(0.5), 128);
}
