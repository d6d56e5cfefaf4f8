//! Worker bee pages
//!
//! The three endpoints: HTML listing, JSON listing and health check.

use crate::config::AppState;
use crate::http::{self, ResponseOptions};
use crate::listing::{self, DirectoryEntry, ListError};
use crate::logger;
use chrono::Utc;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::fmt::Write;

pub const HEALTH_BODY: &str = "OK - BuzyBeez Worker Bee is buzzing!";
pub const GREETING: &str = "Hello World from BuzyBeez!";

/// `/api/files` success body
#[derive(Debug, Serialize)]
struct FilesPayload<'a> {
    message: &'static str,
    bee_id: &'a str,
    files: &'a [DirectoryEntry],
    total_files: usize,
}

/// In-band listing failure body
#[derive(Debug, Serialize)]
struct ErrorPayload {
    error: String,
}

pub fn serve_health(opts: ResponseOptions<'_>) -> Response<Full<Bytes>> {
    http::build_text_response(StatusCode::OK, HEALTH_BODY, opts)
}

pub async fn serve_api_files(state: &AppState, opts: ResponseOptions<'_>) -> Response<Full<Bytes>> {
    match listing::list_directory(&state.workspace_dir).await {
        Ok(files) => {
            let payload = FilesPayload {
                message: GREETING,
                bee_id: &state.config.bee.id,
                files: &files,
                total_files: files.len(),
            };
            http::build_json_response(StatusCode::OK, &payload, opts)
        }
        Err(e) => {
            let status = listing_error_status(state, &e);
            let payload = ErrorPayload {
                error: e.to_string(),
            };
            http::build_json_response(status, &payload, opts)
        }
    }
}

pub async fn serve_index(state: &AppState, opts: ResponseOptions<'_>) -> Response<Full<Bytes>> {
    let listing = listing::list_directory(&state.workspace_dir).await;
    let status = match &listing {
        Ok(_) => StatusCode::OK,
        Err(e) => listing_error_status(state, e),
    };
    let now = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
    let html = render_index(&state.config.bee.id, &listing, &now);
    http::build_html_response(status, html, opts)
}

/// Listing failures stay in-band (200) unless configured to surface as 500
fn listing_error_status(state: &AppState, err: &ListError) -> StatusCode {
    logger::log_warning(&format!("Workspace listing failed: {err}"));
    if state.config.bee.surface_listing_errors {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

/// Render the index page for a listing snapshot
pub fn render_index(
    bee_id: &str,
    listing: &Result<Vec<DirectoryEntry>, ListError>,
    now: &str,
) -> String {
    let mut items = String::new();
    match listing {
        Ok(entries) => {
            for entry in entries {
                let size = entry
                    .size
                    .map_or_else(|| "N/A".to_string(), |s| s.to_string());
                let _ = writeln!(
                    items,
                    r#"            <div class="file-item">📄 {} ({size} bytes) - {}</div>"#,
                    escape_html(&entry.name),
                    entry.kind.as_str(),
                );
            }
        }
        Err(e) => {
            let _ = writeln!(
                items,
                r#"            <div class="file-item error">⚠️ Could not list workspace: {}</div>"#,
                escape_html(&e.to_string()),
            );
        }
    }

    let bee_id = escape_html(bee_id);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>BuzyBeez Worker Bee Server</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; background: #fff3cd; }}
        h1 {{ color: #ff6b00; }}
        .file-list {{ background: white; padding: 20px; border-radius: 8px; margin: 20px 0; }}
        .file-item {{ padding: 8px; border-bottom: 1px solid #eee; }}
        .file-item:last-child {{ border-bottom: none; }}
        .error {{ color: #b00020; }}
    </style>
</head>
<body>
    <h1>🐝 Hello World from BuzyBeez Worker Bee! 🐝</h1>
    <p>This is Worker Bee ({bee_id}) serving from the hive!</p>
    <p>Current time: {now}</p>

    <div class="file-list">
        <h2>📁 Files in my workspace:</h2>
{items}    </div>

    <h3>🛠️ Available endpoints:</h3>
    <ul>
        <li><a href="/">/ - This page</a></li>
        <li><a href="/api/files">/api/files - JSON file list</a></li>
        <li><a href="/health">/health - Health check</a></li>
    </ul>
</body>
</html>
"#
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    const NOW: &str = "Sun, 18 Oct 2026 12:00:00 GMT";

    #[test]
    fn test_index_lists_entries_with_sizes() {
        let listing = Ok(vec![
            DirectoryEntry::file("a.txt", 5),
            DirectoryEntry::directory("b"),
        ]);
        let html = render_index("bee-001", &listing, NOW);
        assert!(html.contains("📄 a.txt (5 bytes) - file"));
        assert!(html.contains("📄 b (N/A bytes) - directory"));
        assert!(html.contains("Worker Bee (bee-001)"));
        assert!(html.contains(NOW));
    }

    #[test]
    fn test_index_escapes_names() {
        let listing = Ok(vec![DirectoryEntry::file("<script>.txt", 1)]);
        let html = render_index("bee-001", &listing, NOW);
        assert!(html.contains("&lt;script&gt;.txt"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_index_renders_error_inline() {
        let listing = Err(ListError::from_io(
            Path::new("hive"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        ));
        let html = render_index("bee-001", &listing, NOW);
        assert!(html.contains("Could not list workspace: permission denied: &#39;hive&#39;"));
    }
}
