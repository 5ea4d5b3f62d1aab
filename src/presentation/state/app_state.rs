use std::sync::Arc;

use crate::application::services::{AudioArtifactResolver, DescribeService};

#[derive(Clone)]
pub struct AppState {
    pub describe_service: Arc<DescribeService>,
    pub audio_resolver: Arc<AudioArtifactResolver>,
}
