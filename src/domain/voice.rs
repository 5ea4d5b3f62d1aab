use std::fmt;
use std::str::FromStr;

use super::InvalidKey;

/// Synthesis voice profile. Part of the audio key, not the description key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Voice {
    #[default]
    Female,
    Male,
}

impl Voice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Female => "female",
            Voice::Male => "male",
        }
    }

    /// Lenient parse for form input: anything that is not "male" is female.
    pub fn from_form(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("male") {
            Voice::Male
        } else {
            Voice::Female
        }
    }
}

impl FromStr for Voice {
    type Err = InvalidKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "female" => Ok(Voice::Female),
            "male" => Ok(Voice::Male),
            other => Err(InvalidKey::Voice(other.to_string())),
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
