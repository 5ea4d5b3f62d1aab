use std::sync::Arc;

use tokio::net::TcpListener;

use auralens::application::services::{AudioArtifactResolver, DescribeService, DescriptionCache};
use auralens::infrastructure::Collaborators;
use auralens::infrastructure::observability::{TracingConfig, init_tracing};
use auralens::infrastructure::persistence::DescriptionStoreFactory;
use auralens::infrastructure::storage::AudioStoreFactory;
use auralens::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::new(environment, settings.logging.json),
        &settings.logging.filter,
    );

    let scaffold = ScaffoldConfig::default();

    let description_store = DescriptionStoreFactory::create(&settings.descriptions).await?;
    let audio_store = AudioStoreFactory::create(&settings.storage)?;

    let collaborators = if scaffold.enabled {
        tracing::warn!("Scaffold mode enabled, using canned captions and silent audio");
        Collaborators::scaffold()
    } else {
        Collaborators::from_settings(&settings.captioning, &settings.speech)?
    };

    let collaborator_timeout = settings.collaborators.timeout();

    let descriptions = Arc::new(DescriptionCache::new(description_store));
    let audio_resolver = Arc::new(AudioArtifactResolver::new(
        audio_store,
        Arc::clone(&descriptions),
        Arc::clone(&collaborators.synthesizer),
        collaborator_timeout,
    ));
    let describe_service = Arc::new(DescribeService::new(
        descriptions,
        Arc::clone(&audio_resolver),
        collaborators.captioner,
        collaborators.refiner,
        collaborator_timeout,
    ));

    let state = AppState {
        describe_service,
        audio_resolver,
    };

    let router = create_router(state, settings.server.max_upload_bytes());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        environment = %environment,
        storage = ?settings.storage.provider,
        descriptions = ?settings.descriptions.provider,
        "Listening on {}",
        addr
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
