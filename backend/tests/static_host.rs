use std::fs;
use std::path::Path;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use musterbetrieb_server::config::Environment;
use musterbetrieb_server::{build_router, ServerConfig};

const INDEX: &str = "<!DOCTYPE html><html><body>musterbetrieb</body></html>";
const MANIFEST: &str = r#"{"items":[]}"#;

fn bundle() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "index.html", INDEX);
    write(dir.path(), "assets/gallery.json", MANIFEST);
    dir
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, contents).expect("write bundle file");
}

fn router(dir: &TempDir, environment: Environment) -> Router {
    build_router(&ServerConfig {
        port: 0,
        static_dir: dir.path().to_path_buf(),
        environment,
    })
}

async fn get(router: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, headers, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn health_check_answers_ok() {
    let dir = bundle();
    let (status, _, body) = get(router(&dir, Environment::Development), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn root_serves_index() {
    let dir = bundle();
    let (status, _, body) = get(router(&dir, Environment::Development), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn serves_gallery_manifest_as_json() {
    let dir = bundle();
    let (status, headers, body) =
        get(router(&dir, Environment::Development), "/assets/gallery.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, MANIFEST);
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("application/json"), "got {content_type}");
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let dir = bundle();
    for path in ["/galerie", "/kontakt", "/leistungen"] {
        let (status, _, body) = get(router(&dir, Environment::Development), path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body, INDEX, "{path}");
    }
}

#[tokio::test]
async fn security_and_cache_headers_depend_on_environment() {
    let dir = bundle();

    let (_, headers, _) = get(router(&dir, Environment::Development), "/").await;
    assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).map(|v| v.as_bytes()), Some(&b"nosniff"[..]));
    assert_eq!(headers.get(header::CACHE_CONTROL).map(|v| v.as_bytes()), Some(&b"no-cache"[..]));

    let (_, headers, _) = get(router(&dir, Environment::Production), "/").await;
    assert_eq!(
        headers.get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
        Some(&b"public, max-age=3600"[..])
    );
}
