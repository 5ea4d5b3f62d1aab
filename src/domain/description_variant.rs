use std::fmt;

use super::InvalidKey;

/// Longest accepted variant, measured in its encoded form so the audio file
/// name stays under common filesystem limits.
const MAX_ENCODED_LEN: usize = 160;

/// Named description style. Open set; `detailed` and `simplified` are the
/// ones clients send today.
///
/// The canonical form is the trimmed, lowercased input. `encoded()` is the
/// form used inside file names and record field names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DescriptionVariant(String);

impl DescriptionVariant {
    pub const DETAILED: &'static str = "detailed";
    pub const SIMPLIFIED: &'static str = "simplified";

    pub fn detailed() -> Self {
        Self(Self::DETAILED.to_string())
    }

    pub fn simplified() -> Self {
        Self(Self::SIMPLIFIED.to_string())
    }

    /// Normalizes free-form form input. Blank input falls back to `detailed`.
    pub fn parse(raw: &str) -> Result<Self, InvalidKey> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Ok(Self::detailed());
        }

        let variant = Self(normalized);
        if variant.encoded().len() > MAX_ENCODED_LEN {
            return Err(InvalidKey::Variant(raw.to_string()));
        }

        Ok(variant)
    }

    /// Inverse of `encoded()`. Only canonical encodings decode.
    pub fn decode(encoded: &str) -> Result<Self, InvalidKey> {
        let invalid = || InvalidKey::Variant(encoded.to_string());

        let decoded = urlencoding::decode(encoded).map_err(|_| invalid())?;
        let variant = Self::parse(&decoded)?;
        if variant.encoded() != encoded {
            return Err(invalid());
        }

        Ok(variant)
    }

    /// Percent-encoded form; contains only `[A-Za-z0-9._~%-]` and `_`.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_detailed(&self) -> bool {
        self.0 == Self::DETAILED
    }

    pub fn caption_profile(&self) -> CaptionProfile {
        if self.is_detailed() {
            CaptionProfile::DETAILED
        } else {
            CaptionProfile::BRIEF
        }
    }
}

impl Default for DescriptionVariant {
    fn default() -> Self {
        Self::detailed()
    }
}

impl fmt::Display for DescriptionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generation parameters handed to the captioning backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionProfile {
    pub max_length: u32,
    pub min_length: u32,
}

impl CaptionProfile {
    pub const DETAILED: Self = Self {
        max_length: 150,
        min_length: 40,
    };

    pub const BRIEF: Self = Self {
        max_length: 40,
        min_length: 8,
    };

    pub fn is_detailed(&self) -> bool {
        *self == Self::DETAILED
    }
}
