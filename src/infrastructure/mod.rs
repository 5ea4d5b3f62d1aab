pub mod audio;
pub mod collaborators;
pub mod observability;
pub mod persistence;
pub mod storage;
pub mod vision;

pub use collaborators::{CollaboratorFactoryError, Collaborators};
