//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method check, route lookup,
//! dispatch and access logging.

use crate::config::AppState;
use crate::handler::pages;
use crate::http::{self, ResponseOptions};
use crate::logger::{self, AccessLogEntry, AccessLogFormat};
use crate::routing::Route;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// Generic over the request body since no route reads it.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let opts = ResponseOptions {
        server_name: &state.config.http.server_name,
        is_head: req.method() == Method::HEAD,
    };

    let response = match *req.method() {
        Method::GET | Method::HEAD => {
            let route = state.routes.resolve(req.uri().path());
            logger::log_debug(&format!(
                "{} {} -> {}",
                req.method(),
                req.uri().path(),
                route.name()
            ));
            dispatch(route, &state, opts).await
        }
        _ => {
            logger::log_warning(&format!("Method not implemented: {}", req.method()));
            http::build_501_response(opts)
        }
    };

    if state.access_log_enabled() {
        let entry = access_entry(&req, &response, opts.is_head, peer_addr, started);
        logger::log_access(
            &entry,
            AccessLogFormat::parse(&state.config.logging.access_log_format),
        );
    }

    Ok(response)
}

async fn dispatch(
    route: Route,
    state: &AppState,
    opts: ResponseOptions<'_>,
) -> Response<Full<Bytes>> {
    match route {
        Route::Index => pages::serve_index(state, opts).await,
        Route::ApiFiles => pages::serve_api_files(state, opts).await,
        Route::Health => pages::serve_health(opts),
        Route::NotFound => http::build_404_response(opts),
    }
}

fn access_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    is_head: bool,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    // HEAD responses advertise the GET length but send no body
    entry.body_bytes = if is_head {
        0
    } else {
        response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    };
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use hyper::StatusCode;
    use std::collections::HashSet;

    fn state_for(dir: &std::path::Path) -> Arc<AppState> {
        let mut config = Config::default();
        config.bee.workspace_dir = dir.to_string_lossy().into_owned();
        config.logging.access_log = false;
        Arc::new(AppState::new(&config))
    }

    async fn send(
        state: &Arc<AppState>,
        method: Method,
        uri: &str,
    ) -> (StatusCode, hyper::HeaderMap, Bytes) {
        let req = Request::builder().method(method).uri(uri).body(()).unwrap();
        let peer: SocketAddr = "127.0.0.1:50000".parse().unwrap();
        let response = handle_request(req, Arc::clone(state), peer).await.unwrap();
        let (parts, body) = response.into_parts();
        let bytes = body.collect().await.unwrap().to_bytes();
        (parts.status, parts.headers, bytes)
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());
        let (status, headers, body) = send(&state, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["content-type"], "text/plain; charset=utf-8");
        assert_eq!(body, "OK - BuzyBeez Worker Bee is buzzing!");
    }

    #[tokio::test]
    async fn test_api_files_lists_workspace() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"hello").unwrap();
        std::fs::create_dir(dir.path().join("b")).unwrap();
        let state = state_for(dir.path());

        let (status, headers, body) = send(&state, Method::GET, "/api/files").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["content-type"], "application/json");

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Hello World from BuzyBeez!");
        assert_eq!(json["bee_id"], "bee-001");
        assert_eq!(json["total_files"], 2);

        let files: HashSet<String> = json["files"]
            .as_array()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        let expected: HashSet<String> = [
            serde_json::json!({"name": "a.txt", "size": 5, "type": "file"}),
            serde_json::json!({"name": "b", "type": "directory"}),
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(files, expected);
    }

    #[tokio::test]
    async fn test_api_files_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());
        let (_, _, body) = send(&state, Method::GET, "/api/files").await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        let positions: Vec<usize> = ["\"message\"", "\"bee_id\"", "\"files\"", "\"total_files\""]
            .iter()
            .map(|k| text.find(k).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
    }

    #[tokio::test]
    async fn test_listing_error_stays_in_band() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(&dir.path().join("missing"));

        let (status, _, body) = send(&state, Method::GET, "/api/files").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().starts_with("no such directory"));
        assert!(json.get("files").is_none());

        let (status, _, body) = send(&state, Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8_lossy(&body).contains("Could not list workspace"));
    }

    #[tokio::test]
    async fn test_listing_error_surfaced_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.bee.workspace_dir = dir.path().join("missing").to_string_lossy().into_owned();
        config.bee.surface_listing_errors = true;
        config.logging.access_log = false;
        let state = Arc::new(AppState::new(&config));

        let (status, _, _) = send(&state, Method::GET, "/api/files").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let (status, _, _) = send(&state, Method::GET, "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_index_embeds_listing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("honey.txt"), b"sweet").unwrap();
        let state = state_for(dir.path());

        let (status, headers, body) = send(&state, Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["content-type"], "text/html; charset=utf-8");
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("honey.txt (5 bytes) - file"));
        assert!(html.contains("Current time: "));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());
        let (status, headers, body) = send(&state, Method::GET, "/unknown/path").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(headers["content-type"], "text/html; charset=utf-8");
        assert!(String::from_utf8_lossy(&body).contains("404 - Buzz off!"));
    }

    #[tokio::test]
    async fn test_query_string_ignored_for_routing() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());
        let (status, _, _) = send(&state, Method::GET, "/health?verbose=1").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_head_health_has_length_but_no_body() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());
        let (status, headers, body) = send(&state, Method::HEAD, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["content-length"], "36");
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_other_methods_not_implemented() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());
        let (status, _, _) = send(&state, Method::POST, "/").await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        let (status, _, _) = send(&state, Method::DELETE, "/health").await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn test_access_entry_counts_sent_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());
        let peer: SocketAddr = "127.0.0.1:50000".parse().unwrap();

        for (method, expected) in [(Method::GET, 36), (Method::HEAD, 0)] {
            let request = || Request::builder().method(method.clone()).uri("/health").body(()).unwrap();
            let response = handle_request(request(), Arc::clone(&state), peer).await.unwrap();
            assert_eq!(response.headers()["content-length"], "36");

            let entry = access_entry(&request(), &response, method == Method::HEAD, peer, Instant::now());
            assert_eq!(entry.body_bytes, expected, "{method}");
            assert_eq!(entry.status, 200);
            assert_eq!(entry.path, "/health");
        }
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(Version::HTTP_10), "1.0");
        assert_eq!(version_label(Version::HTTP_11), "1.1");
    }
}
