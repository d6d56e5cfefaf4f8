//! HTTP response building module
//!
//! Every builder sets `Content-Type`, `Content-Length` and `Server`, and
//! drops the body (but keeps the length) for HEAD requests.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ALLOW};
use hyper::{Response, StatusCode};
use serde::Serialize;

pub const NOT_FOUND_BODY: &str =
    "<h1>404 - Buzz off! Page not found</h1><p>🐝 This bee worker only knows certain routes!</p>";
pub const NOT_IMPLEMENTED_BODY: &str =
    "<h1>501 - Not Implemented</h1><p>🐝 This bee worker only answers GET and HEAD.</p>";

const HTML: &str = "text/html; charset=utf-8";
const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

/// Per-request settings every builder needs
#[derive(Debug, Clone, Copy)]
pub struct ResponseOptions<'a> {
    pub server_name: &'a str,
    pub is_head: bool,
}

/// Build 404 Not Found response
pub fn build_404_response(opts: ResponseOptions<'_>) -> Response<Full<Bytes>> {
    build_response(
        StatusCode::NOT_FOUND,
        HTML,
        Bytes::from_static(NOT_FOUND_BODY.as_bytes()),
        opts,
    )
}

/// Build 501 Not Implemented response (unsupported method)
pub fn build_501_response(opts: ResponseOptions<'_>) -> Response<Full<Bytes>> {
    let mut response = build_response(
        StatusCode::NOT_IMPLEMENTED,
        HTML,
        Bytes::from_static(NOT_IMPLEMENTED_BODY.as_bytes()),
        opts,
    );
    response
        .headers_mut()
        .insert(ALLOW, HeaderValue::from_static("GET, HEAD"));
    response
}

/// Build HTML response
pub fn build_html_response(
    status: StatusCode,
    content: String,
    opts: ResponseOptions<'_>,
) -> Response<Full<Bytes>> {
    build_response(status, HTML, Bytes::from(content), opts)
}

/// Build plain-text response
pub fn build_text_response(
    status: StatusCode,
    content: &'static str,
    opts: ResponseOptions<'_>,
) -> Response<Full<Bytes>> {
    build_response(status, TEXT, Bytes::from_static(content.as_bytes()), opts)
}

/// Build pretty-printed (two-space indent) JSON response
pub fn build_json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    opts: ResponseOptions<'_>,
) -> Response<Full<Bytes>> {
    match serde_json::to_string_pretty(body) {
        Ok(json) => build_response(status, JSON, Bytes::from(json), opts),
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            build_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                JSON,
                Bytes::from_static(br#"{"error":"Internal server error"}"#),
                opts,
            )
        }
    }
}

fn build_response(
    status: StatusCode,
    content_type: &str,
    body: Bytes,
    opts: ResponseOptions<'_>,
) -> Response<Full<Bytes>> {
    let content_length = body.len();
    let body = if opts.is_head { Bytes::new() } else { body };

    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Server", opts.server_name)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status, &e);
            let mut fallback = Response::new(Full::new(Bytes::new()));
            *fallback.status_mut() = status;
            fallback
        })
}

/// Log response build error
fn log_build_error(status: StatusCode, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
