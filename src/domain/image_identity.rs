use std::fmt;

use sha2::{Digest, Sha256};

use super::InvalidKey;

const IDENTITY_HEX_LEN: usize = 64;

/// Content address of an uploaded image: lowercase hex SHA-256 of its bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageIdentity(String);

impl ImageIdentity {
    pub fn parse(raw: &str) -> Result<Self, InvalidKey> {
        let well_formed = raw.len() == IDENTITY_HEX_LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        if well_formed {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidKey::Identity(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives the durable identity of an image from its raw bytes.
pub fn identity_of(bytes: &[u8]) -> ImageIdentity {
    ImageIdentity(hex::encode(Sha256::digest(bytes)))
}
