use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{Environment, ServerConfig};

async fn health_check() -> &'static str {
    "OK"
}

/// Serves the bundle directory. Paths without a file fall back to
/// `index.html` so client-side routes like `/galerie` load the app.
pub fn build_router(config: &ServerConfig) -> Router {
    let index = config.static_dir.join("index.html");
    let site = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    let router = Router::new()
        .route("/health", get(health_check))
        .fallback_service(site)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));

    let router = match config.environment {
        Environment::Production => router.layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        )),
        Environment::Development => router.layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        )),
    };

    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}
