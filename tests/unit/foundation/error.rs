use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BolotoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BolotoError::render("x").to_string().contains("render error:"));
    assert!(BolotoError::encode("x").to_string().contains("encode error:"));
    assert!(
        BolotoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BolotoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
