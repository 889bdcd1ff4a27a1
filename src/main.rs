//! Maglinc Site Backend
//!
//! REST backend for the marketing site: contact lead capture plus read-only
//! content collections, persisted as JSON documents in SQLite.

mod api;
mod catalog;
mod config;
mod db;
mod errors;
mod models;
mod service;

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, CorsOrigins, LogFormat};
use db::SqliteStore;
use service::ContentService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    init_tracing(&config);

    tracing::info!("Starting Maglinc backend");
    tracing::info!("Database name: {}", config.db_name);
    tracing::info!("CORS origins: {:?}", config.cors_origins);
    tracing::info!("Bind address: {}", config.bind_addr);

    // The store pool lives for the whole process and is closed on shutdown
    let store = Arc::new(SqliteStore::connect(&config.database_url, &config.db_name).await?);

    let state = AppState {
        content: Arc::new(ContentService::new(store.clone())),
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Store connection closed");

    Ok(())
}

fn init_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let (json_layer, text_layer) = match config.log_format {
        LogFormat::Json => (Some(tracing_subscriber::fmt::layer().json()), None),
        LogFormat::Text => (None, Some(tracing_subscriber::fmt::layer())),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let api_routes = Router::new()
        .route("/contacts", get(api::list_contacts).post(api::create_contact))
        .route("/testimonials", get(api::list_testimonials))
        .route("/case-studies", get(api::list_case_studies))
        .route("/team", get(api::list_team))
        .route("/services", get(api::list_services))
        .route("/resources", get(api::list_resources))
        .route("/blog", get(api::list_blog_posts))
        .route("/blog/{slug}", get(api::get_blog_post))
        .route("/stats", get(api::get_stats));

    Router::new()
        .route("/api/", get(api::root))
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wildcard origins can't carry credentials, so only an explicit list enables them.
fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    match origins {
        CorsOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(values))
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
