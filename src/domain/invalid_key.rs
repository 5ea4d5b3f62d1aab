#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidKey {
    #[error("invalid image identity: {0:?}")]
    Identity(String),
    #[error("invalid description variant: {0:?}")]
    Variant(String),
    #[error("invalid voice: {0:?}")]
    Voice(String),
    #[error("invalid audio file name: {0:?}")]
    FileName(String),
}
