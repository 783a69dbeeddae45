use crate::config::WikiConfig;
use crate::features::health::health_router;
use crate::features::wiki::wiki_router;
use crate::io::local::FilePageStore;
use crate::io::PageStore;
use crate::render::Templates;
use anyhow::Context;
use axum::http::Request;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod config;
mod domain;
mod error;
mod features;
mod io;
mod render;


#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PageStore>,
    // parsed once in main, read-only from then on
    pub templates: Arc<Templates>,
    pub config: Arc<WikiConfig>,
}

// where features are composed
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(wiki_router())
        .merge(health_router::<AppState>())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WikiConfig::from_env()?;

    // a broken template set is fatal, never serve with it
    let templates = Templates::load(&config.template_dir)?;

    let app_state = AppState {
        store: Arc::new(FilePageStore::new(config.data_dir.clone())),
        templates: Arc::new(templates),
        config: Arc::new(config.clone()),
    };

    let app = app_router(app_state).layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }),
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "wiki server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
