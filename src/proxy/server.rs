//! Server wiring for the humanize proxy

use axum::{routing::any, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

use super::handler::humanize_route;
use crate::config::AppConfig;
use crate::upstream::{CompletionClient, OpenAiClient};

/// Shared state for the proxy
#[derive(Clone)]
pub struct ProxyState {
    pub config: Arc<AppConfig>,
    pub completion_client: Arc<dyn CompletionClient>,
}

/// Build an HTTP client for upstream connections
fn build_http_client(config: &AppConfig) -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream.timeout_seconds))
        .pool_max_idle_per_host(10)
        .build()?;
    Ok(client)
}

/// Build the router. Every path funnels into the humanize handler, which
/// dispatches on method; CORS headers are attached inside the handler so they
/// appear on every response.
pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/humanize", any(humanize_route))
        .fallback(humanize_route)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the proxy server
pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let http_client = build_http_client(&config)?;
    let completion_client = OpenAiClient::new(http_client, config.upstream.base_url());

    let state = ProxyState {
        config: Arc::new(config.clone()),
        completion_client: Arc::new(completion_client),
    };

    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("humanize-proxy listening on {}", addr);
    tracing::info!("Rewriting via {}", config.upstream.base_url());

    axum::serve(listener, app).await?;
    Ok(())
}
