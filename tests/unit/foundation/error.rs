use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CoverError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(CoverError::font("x").to_string().contains("font error:"));
    assert!(CoverError::render("x").to_string().contains("render error:"));
    assert!(CoverError::encode("x").to_string().contains("encode error:"));
    assert!(
        CoverError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CoverError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
