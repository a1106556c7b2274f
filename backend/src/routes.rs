use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{error, info};

use crate::config::Config;
use crate::error::Error;

/// Seconds before the same address is logged as a new visit.
const VISIT_LOG_EXPIRY: u64 = 3600;

const NO_CACHE: &str = "no-cache, no-store, must-revalidate";
const IMMUTABLE: &str = "public, max-age=31536000, immutable";

#[derive(Clone)]
pub struct AppState {
    index_path: PathBuf,
    visits: Arc<Mutex<VisitLog>>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            index_path: config.index_path(),
            visits: Arc::new(Mutex::new(VisitLog::default())),
        }
    }
}

/// Last-seen time per client address.
#[derive(Debug, Default)]
pub struct VisitLog {
    seen: HashMap<String, u64>,
}

impl VisitLog {
    /// True the first time `ip` shows up and again once the expiry has elapsed.
    /// Recording a visit drops every address whose window has run out.
    pub fn should_log(&mut self, ip: &str, now: u64) -> bool {
        match self.seen.get(ip) {
            Some(last) if now.saturating_sub(*last) <= VISIT_LOG_EXPIRY => false,
            _ => {
                self.seen.retain(|_, last| now.saturating_sub(*last) <= VISIT_LOG_EXPIRY);
                self.seen.insert(ip.to_string(), now);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

pub fn app(config: &Config) -> Router {
    let state = AppState::new(config);

    let assets = ServeDir::new(&config.dist_dir)
        .append_index_html_on_directories(false)
        .fallback(get(serve_index).with_state(state.clone()));

    Router::new()
        .route("/api/health_check", get(health_check))
        .route("/", get(serve_index))
        .fallback_service(assets)
        .layer(middleware::from_fn(cache_control_middleware))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn_with_state(state.clone(), log_visit_middleware))
        .with_state(state)
}

async fn health_check() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Serves index.html for `/` and for any path that is not a bundle file, so in-page anchors still resolve.
async fn serve_index(State(state): State<AppState>) -> Result<Response, Error> {
    match tokio::fs::read(&state.index_path).await {
        Ok(data) => Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            Body::from(data),
        )
            .into_response()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            error!("Error reading index.html: {} (attempted path: {:?})", e, state.index_path);
            Err(Error::MissingBundle)
        }
        Err(e) => {
            error!("Error reading index.html: {}", e);
            Err(Error::Io(e))
        }
    }
}

/// Trunk emits `name-<hash>.js`, `name-<hash>_bg.wasm` and `name-<hash>.css`.
pub fn is_hashed_asset(path: &str) -> bool {
    let file = path.rsplit('/').next().unwrap_or_default();
    let Some((stem, ext)) = file.rsplit_once('.') else {
        return false;
    };
    if !matches!(ext, "js" | "wasm" | "css") {
        return false;
    }
    let stem = stem.trim_end_matches("_bg");
    match stem.rsplit_once('-') {
        Some((_, hash)) => hash.len() >= 8 && hash.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

async fn cache_control_middleware(request: Request, next: Next) -> Response {
    let hashed = is_hashed_asset(request.uri().path());
    let is_api = request.uri().path().starts_with("/api/");
    let mut response = next.run(request).await;

    let value = if hashed && response.status().is_success() {
        IMMUTABLE
    } else {
        NO_CACHE
    };
    if !is_api || !response.headers().contains_key(header::CACHE_CONTROL) {
        response.headers_mut().insert(header::CACHE_CONTROL, HeaderValue::from_static(value));
    }
    response
}

fn client_ip(request: &Request) -> String {
    let headers = request.headers();
    let header_str = |name: &str| headers.get(name).and_then(|h| h.to_str().ok());

    if let Some(ip) = header_str("cf-connecting-ip") {
        ip.trim().to_string()
    } else if let Some(forwarded) = header_str("x-forwarded-for") {
        forwarded.split(',').next().unwrap_or("unknown").trim().to_string()
    } else if let Some(ip) = header_str("x-real-ip") {
        ip.trim().to_string()
    } else {
        "unknown".to_string()
    }
}

async fn log_visit_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let ip = client_ip(&request);
    let path = request.uri().path().to_string();
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_secs();

    let should_log = {
        let mut visits = match state.visits.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let is_page = !path.starts_with("/api/") && !is_hashed_asset(&path);
        is_page && visits.should_log(&ip, now)
    };

    let response = next.run(request).await;
    if should_log {
        info!(%ip, %path, status = response.status().as_u16(), "👋 Website visit");
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>portfolio</body></html>";
    const WASM: &str = "portfolio-frontend-1a2b3c4d5e6f7a8b_bg.wasm";

    /// The dist directory is removed when the returned `TempDir` drops.
    fn router(with_index: bool) -> (TempDir, Router) {
        let dist = TempDir::new().unwrap();
        if with_index {
            std::fs::write(dist.path().join("index.html"), INDEX).unwrap();
        }
        std::fs::write(dist.path().join(WASM), b"\0asm").unwrap();

        let dist_dir = dist.path().to_string_lossy().to_string();
        let config = Config::from_lookup(|key| match key {
            "PORTFOLIO_DIST_DIR" => Some(dist_dir.clone()),
            _ => None,
        })
        .unwrap();
        let router = app(&config);
        (dist, router)
    }

    async fn send(router: Router, uri: &str) -> Response {
        router
            .oneshot(HttpRequest::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (_dist, router) = router(true);
        let response = send(router, "/api/health_check").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_root_serves_index_without_caching() {
        let (_dist, router) = router(true);
        let response = send(router, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], NO_CACHE);
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(body_string(response).await, INDEX);
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let (_dist, router) = router(true);
        let response = send(router, "/projects").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, INDEX);
    }

    #[tokio::test]
    async fn test_hashed_bundle_is_cached() {
        let (_dist, router) = router(true);
        let response = send(router, &format!("/{}", WASM)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], IMMUTABLE);
    }

    #[tokio::test]
    async fn test_missing_bundle_is_not_found() {
        let (_dist, router) = router(false);
        let response = send(router, "/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CACHE_CONTROL], NO_CACHE);
    }

    #[test]
    fn test_hashed_asset_names() {
        assert!(is_hashed_asset("/portfolio-frontend-1a2b3c4d5e6f7a8b_bg.wasm"));
        assert!(is_hashed_asset("/portfolio-frontend-1a2b3c4d5e6f7a8b.js"));
        assert!(is_hashed_asset("/styles-00ff00ff00ff.css"));
        assert!(!is_hashed_asset("/index.html"));
        assert!(!is_hashed_asset("/portfolio-frontend.js"));
        assert!(!is_hashed_asset("/my-app.js"));
        assert!(!is_hashed_asset("/"));
    }

    #[tokio::test]
    async fn test_dist_dir_removed_with_fixture() {
        let (dist, router) = router(true);
        let path = dist.path().to_path_buf();
        let response = send(router, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        drop(dist);
        assert!(!path.exists());
    }

    #[test]
    fn test_visit_log_evicts_expired_addresses() {
        let mut visits = VisitLog::default();
        for i in 0..1_000 {
            assert!(visits.should_log(&format!("10.0.{}.{}", i / 256, i % 256), 1_000));
        }
        assert_eq!(visits.len(), 1_000);

        assert!(visits.should_log("192.0.2.1", 1_000 + 10 * VISIT_LOG_EXPIRY));
        assert_eq!(visits.len(), 1);
        assert!(!visits.is_empty());
    }

    #[test]
    fn test_visit_log_expiry() {
        let mut visits = VisitLog::default();
        assert!(visits.should_log("10.0.0.1", 1_000));
        assert!(!visits.should_log("10.0.0.1", 1_000 + VISIT_LOG_EXPIRY));
        assert!(visits.should_log("10.0.0.2", 1_001));
        assert!(visits.should_log("10.0.0.1", 1_001 + VISIT_LOG_EXPIRY));
    }

    #[test]
    fn test_client_ip_prefers_proxy_headers() {
        let request = HttpRequest::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(Body::empty())
            .unwrap();
        assert_eq!(client_ip(&request), "203.0.113.7");

        let request = HttpRequest::builder().body(Body::empty()).unwrap();
        assert_eq!(client_ip(&request), "unknown");
    }
}
