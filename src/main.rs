use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use mt_gateway::config::Config;
use mt_gateway::forwarder::TranslationForwarder;
use mt_gateway::orchestrator::TranslationService;
use mt_gateway::reference::ReferenceDataStore;
use mt_gateway::refresher::ReferenceDataRefresher;
use mt_gateway::{scheduler, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mt_gateway=info".parse()?),
        )
        .init();

    info!("Starting machine translation gateway");

    let config = Config::from_env()?;
    let client = reqwest::Client::new();
    let store = Arc::new(ReferenceDataStore::new());

    let refresher = Arc::new(ReferenceDataRefresher::new(
        client.clone(),
        config.mt_api_url.clone(),
        Arc::clone(&store),
    ));

    // Populate the cache before accepting traffic.
    info!("Fetching initial reference data");
    refresher.refresh_all().await;

    // Keep the scheduler alive for the lifetime of the process.
    let _scheduler = scheduler::start_scheduler(&config, refresher).await?;

    let forwarder = TranslationForwarder::new(client, config.mt_api_url.clone());
    let service = Arc::new(TranslationService::new(store, forwarder));

    let app = server::build_router(service);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
