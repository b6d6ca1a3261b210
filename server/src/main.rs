mod config;
mod routes;
mod services;
mod state;
mod views;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = config::SiteConfig::from_env().expect("invalid configuration");

    let lookup = services::lookup::HttpLookup::new(&config).expect("HTTP client init failed");
    if !lookup.images_enabled() {
        tracing::warn!("PEXELS_API_KEY not set; word pages will have no images");
    }

    let state = state::AppState::new(&config, Arc::new(lookup));
    let app = routes::app(state, &config.static_dir);

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, static_dir = %config.static_dir.display(), "lexicon listening");
    axum::serve(listener, app).await.expect("server failed");
}
