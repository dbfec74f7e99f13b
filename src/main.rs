//! Wananchi Portal server binary.
//!
//! Loads configuration from the environment, opens collection storage,
//! picks the AI collaborator and serves the HTTP API until Ctrl+C or
//! SIGTERM.

use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::ExposeSecret;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wananchi_portal::adapters::ai::{
    GeminiConfig, GeminiProvider, LlmCivicIntelligence, UnconfiguredIntelligence,
};
use wananchi_portal::adapters::http::portal_router;
use wananchi_portal::adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
use wananchi_portal::application::PortalStore;
use wananchi_portal::config::{AiConfig, AppConfig, ServerConfig, StorageBackend, StorageConfig};
use wananchi_portal::ports::{CivicIntelligence, KeyValueStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let storage = open_storage(&config.storage);
    let intelligence = build_intelligence(&config.ai)?;
    let store = Arc::new(PortalStore::load(storage).await?);

    let app = portal_router(store, intelligence)
        .await
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "wananchi portal listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("wananchi portal stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn open_storage(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::File => {
            info!(data_dir = %config.data_dir.display(), "using file storage");
            Arc::new(FileKeyValueStore::new(&config.data_dir))
        }
        StorageBackend::Memory => {
            warn!("using in-memory storage, state is lost on restart");
            Arc::new(InMemoryKeyValueStore::new())
        }
    }
}

fn build_intelligence(
    config: &AiConfig,
) -> Result<Arc<dyn CivicIntelligence>, Box<dyn std::error::Error>> {
    let Some(key) = config.api_key() else {
        warn!("no Gemini API key configured, AI features will use fallbacks");
        return Ok(Arc::new(UnconfiguredIntelligence));
    };

    let provider = GeminiProvider::new(
        GeminiConfig::new(key.expose_secret().clone())
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone())
            .with_timeout(config.timeout())
            .with_max_retries(config.max_retries),
    )?;
    info!(model = %config.model, "Gemini provider configured");
    Ok(Arc::new(LlmCivicIntelligence::new(Arc::new(provider))))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() && !config.is_production() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received terminate signal, shutting down"),
    }
}
