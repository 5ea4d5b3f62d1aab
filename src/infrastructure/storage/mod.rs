mod audio_store_factory;
mod object_audio_store;

pub use audio_store_factory::AudioStoreFactory;
pub use object_audio_store::ObjectAudioStore;
