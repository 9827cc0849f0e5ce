use std::collections::HashSet;

use sha2::Digest as _;

use super::*;

#[test]
fn derive_seed_is_deterministic() {
    assert_eq!(
        derive_seed("agent skills", "default", None),
        derive_seed("agent skills", "default", None)
    );
}

#[test]
fn derive_seed_matches_digest_prefix() {
    let digest = Sha256::digest("hello|neon".as_bytes());
    let expected = u64::from_be_bytes(digest[..8].try_into().unwrap());
    assert_eq!(derive_seed("hello", "neon", None), expected);
}

#[test]
fn explicit_seed_is_used_verbatim() {
    assert_eq!(derive_seed("a", "default", Some(42)), 42);
    assert_eq!(derive_seed("b", "light", Some(42)), 42);
}

#[test]
fn distinct_text_or_style_yields_distinct_seeds() {
    let texts = [
        "Go 包命名指南",
        "Go 包命名指南 ",
        "agent skills",
        "Agent skills",
        "a dependency resolver",
        "",
        "x",
        "y",
    ];
    let styles = ["default", "minimal", "neon", "light"];
    let mut seen = HashSet::new();
    for t in texts {
        for s in styles {
            assert!(seen.insert(derive_seed(t, s, None)), "collision for {t:?}/{s}");
        }
    }
}

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn rng_ranges_are_respected() {
    let mut rng = Rng64::new(9);
    let mut hit = [false; 4];
    for _ in 0..1000 {
        let f = rng.next_f64();
        assert!((0.0..1.0).contains(&f));
        let u = rng.uniform(-2.0, 2.0);
        assert!((-2.0..2.0).contains(&u));
        let k = rng.range_inclusive(3, 6);
        assert!((3..=6).contains(&k));
        hit[(k - 3) as usize] = true;
    }
    assert!(hit.iter().all(|h| *h), "every integer in range drawn");
    assert_eq!(rng.range_inclusive(5, 5), 5);
}

#[test]
fn choose_handles_empty_and_nonempty() {
    let mut rng = Rng64::new(1);
    let empty: [u8; 0] = [];
    assert!(rng.choose(&empty).is_none());
    let items = ["circle", "poly", "stripe"];
    for _ in 0..20 {
        assert!(items.contains(rng.choose(&items).unwrap()));
    }
}

#[test]
fn sha256_hex_is_lowercase_and_full_length() {
    let hex = sha256_hex(b"abc");
    assert_eq!(hex.len(), 64);
    assert!(hex.starts_with("ba7816bf"));
}
