mod environment;
mod scaffold_config;
mod settings;

pub use environment::Environment;
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    CaptioningSettings, CollaboratorSettings, DescriptionStoreProvider, DescriptionStoreSettings,
    LoggingSettings, ServerSettings, Settings, SpeechSettings, StorageProviderSetting,
    StorageSettings,
};
