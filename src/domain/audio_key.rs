use std::fmt;

use super::{DescriptionVariant, ImageIdentity, InvalidKey, StoragePath, Voice};

const AUDIO_SUFFIX: &str = "_audio.wav";

/// Composite key of a synthesized audio artifact.
///
/// The file name is the serialized form of the key:
/// `{identity}_{variant}_{voice}_audio.wav`, with the variant
/// percent-encoded. The identity is hex and the voice has no underscore, so
/// a variant containing `_` still decodes unambiguously, and no variant can
/// introduce a path separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AudioKey {
    pub identity: ImageIdentity,
    pub variant: DescriptionVariant,
    pub voice: Voice,
}

impl AudioKey {
    pub fn new(identity: ImageIdentity, variant: DescriptionVariant, voice: Voice) -> Self {
        Self {
            identity,
            variant,
            voice,
        }
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}{}",
            self.identity,
            self.variant.encoded(),
            self.voice,
            AUDIO_SUFFIX
        )
    }

    pub fn parse_file_name(name: &str) -> Result<Self, InvalidKey> {
        let invalid = || InvalidKey::FileName(name.to_string());

        if name.contains(['/', '\\']) {
            return Err(invalid());
        }

        let stem = name.strip_suffix(AUDIO_SUFFIX).ok_or_else(invalid)?;
        let (identity, rest) = stem.split_once('_').ok_or_else(invalid)?;
        let (raw_variant, voice) = rest.rsplit_once('_').ok_or_else(invalid)?;

        let identity = ImageIdentity::parse(identity).map_err(|_| invalid())?;
        let variant = DescriptionVariant::decode(raw_variant).map_err(|_| invalid())?;
        let voice = voice.parse::<Voice>().map_err(|_| invalid())?;

        Ok(Self::new(identity, variant, voice))
    }

    pub fn storage_path(&self) -> StoragePath {
        StoragePath::from_raw(self.file_name())
    }

    /// Path under which the transport layer serves this artifact. The file
    /// name is escaped once more since the router decodes the segment.
    pub fn url_path(&self) -> String {
        format!("/audio/{}", urlencoding::encode(&self.file_name()))
    }
}

impl fmt::Display for AudioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}
