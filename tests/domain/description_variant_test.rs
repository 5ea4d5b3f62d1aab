use auralens::domain::{CaptionProfile, DescriptionVariant};

#[test]
fn given_blank_input_when_parsing_then_defaults_to_detailed() {
    let variant = DescriptionVariant::parse("   ").unwrap();

    assert_eq!(variant, DescriptionVariant::detailed());
}

#[test]
fn given_mixed_case_input_when_parsing_then_normalizes() {
    let variant = DescriptionVariant::parse(" Simplified ").unwrap();

    assert_eq!(variant.as_str(), "simplified");
}

#[test]
fn given_free_form_variant_when_parsing_then_accepted() {
    let variant = DescriptionVariant::parse("kid_friendly").unwrap();

    assert_eq!(variant.as_str(), "kid_friendly");
}

#[test]
fn given_free_form_text_when_parsing_then_keeps_canonical_text() {
    let spaced = DescriptionVariant::parse("Very Detailed").unwrap();
    let accented = DescriptionVariant::parse("Détaillé").unwrap();
    let long = DescriptionVariant::parse(&"x".repeat(45)).unwrap();

    assert_eq!(spaced.as_str(), "very detailed");
    assert_eq!(accented.as_str(), "détaillé");
    assert_eq!(long.as_str().len(), 45);
}

#[test]
fn given_separators_in_variant_when_encoding_then_escaped() {
    let variant = DescriptionVariant::parse("../etc/passwd").unwrap();

    assert_eq!(variant.as_str(), "../etc/passwd");
    assert!(!variant.encoded().contains('/'));
    assert!(!variant.encoded().contains('\\'));
}

#[test]
fn given_encoded_variant_when_decoding_then_round_trips() {
    for raw in ["detailed", "kid_friendly", "very detailed", "détaillé", "a/b\\c", "100%"] {
        let variant = DescriptionVariant::parse(raw).unwrap();

        assert_eq!(DescriptionVariant::decode(&variant.encoded()).unwrap(), variant);
    }
}

#[test]
fn given_non_canonical_encoding_when_decoding_then_rejected() {
    assert!(DescriptionVariant::decode("Detailed").is_err());
    assert!(DescriptionVariant::decode("%64etailed").is_err());
    assert!(DescriptionVariant::decode("very detailed").is_err());
    assert!(DescriptionVariant::decode("").is_err());
    assert!(DescriptionVariant::decode("%FF").is_err());
}

#[test]
fn given_oversized_variant_when_parsing_then_rejected() {
    assert!(DescriptionVariant::parse(&"x".repeat(161)).is_err());
    assert!(DescriptionVariant::parse(&"é".repeat(40)).is_err());
}

#[test]
fn given_detailed_variant_when_profiling_then_uses_long_length_bounds() {
    let profile = DescriptionVariant::detailed().caption_profile();

    assert_eq!(profile, CaptionProfile::DETAILED);
    assert_eq!(profile.max_length, 150);
    assert_eq!(profile.min_length, 40);
}

#[test]
fn given_other_variant_when_profiling_then_uses_brief_settings() {
    let profile = DescriptionVariant::simplified().caption_profile();

    assert_eq!(profile, CaptionProfile::BRIEF);
    assert_eq!(profile.max_length, 40);
    assert_eq!(profile.min_length, 8);
    assert!(!profile.is_detailed());
}
