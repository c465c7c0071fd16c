//! Server entrypoint for sitewright
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use sitewright_application::{HandleChatUseCase, SiteHostingService, SiteStore};
use sitewright_infrastructure::{
    ConfigLoader, FileConfig, InMemorySiteStore, OpenRouterGateway, StorageBackend,
};
use sitewright_presentation::{AppState, Cli, LogFormat, router};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    init_tracing(&cli);

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to load configuration")?
    };
    if let Some(host) = cli.host.clone() {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate().context("Invalid configuration")?;

    info!(
        classifier = %config.pipeline.classifier.model,
        generator = %config.pipeline.generator.model,
        storage = ?config.storage.backend,
        "Starting sitewright"
    );

    // === Dependency Injection ===
    let gateway = Arc::new(
        OpenRouterGateway::new(config.to_openrouter_config())
            .context("Failed to create gateway client")?,
    );
    let store = build_store(&config).await?;

    let chat = HandleChatUseCase::new(gateway, config.to_pipeline_config());
    let hosting = SiteHostingService::new(store, config.to_hosting_config());
    let app = router(AppState::new(chat, hosting), config.server.cors);

    // === Serve ===
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, public_url = %config.public_base_url(), "sitewright server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the `-v` count.
fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    match cli.log_format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .init(),
    }
}

async fn build_store(config: &FileConfig) -> Result<Arc<dyn SiteStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory site storage; hosted sites are lost on restart");
            Ok(Arc::new(InMemorySiteStore::new()))
        }
        StorageBackend::S3 => build_s3_store(config).await,
    }
}

#[cfg(feature = "s3")]
async fn build_s3_store(config: &FileConfig) -> Result<Arc<dyn SiteStore>> {
    use sitewright_infrastructure::S3SiteStore;

    let Some(s3_config) = config.to_s3_config() else {
        bail!("storage.bucket is required for the s3 backend");
    };
    Ok(Arc::new(S3SiteStore::new(&s3_config).await))
}

#[cfg(not(feature = "s3"))]
async fn build_s3_store(_config: &FileConfig) -> Result<Arc<dyn SiteStore>> {
    bail!("this build does not include S3 support; rebuild with --features s3")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
