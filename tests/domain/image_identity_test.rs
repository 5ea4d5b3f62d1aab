use auralens::domain::{ImageIdentity, identity_of};

#[test]
fn given_same_bytes_when_hashing_twice_then_identities_match() {
    let first = identity_of(b"image bytes");
    let second = identity_of(b"image bytes");

    assert_eq!(first, second);
}

#[test]
fn given_different_bytes_when_hashing_then_identities_differ() {
    assert_ne!(identity_of(b"image A"), identity_of(b"image B"));
}

#[test]
fn given_empty_input_when_hashing_then_returns_sha256_of_empty_string() {
    let identity = identity_of(b"");

    assert_eq!(
        identity.as_str(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn given_computed_identity_when_parsing_its_string_then_round_trips() {
    let identity = identity_of(b"round trip");

    let parsed = ImageIdentity::parse(identity.as_str()).unwrap();

    assert_eq!(parsed, identity);
}

#[test]
fn given_malformed_identity_when_parsing_then_returns_error() {
    assert!(ImageIdentity::parse("").is_err());
    assert!(ImageIdentity::parse("abc123").is_err());
    assert!(ImageIdentity::parse(&"G".repeat(64)).is_err());
    assert!(ImageIdentity::parse(&"A".repeat(64)).is_err());
}
