// Server loop module
// Accepts one connection at a time and serves it before accepting the next

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::serve_connection;
use super::signal::SignalHandler;
use crate::config;
use crate::logger;

/// Run the accept loop until shutdown is requested.
///
/// Connections are never served concurrently: each one is driven to
/// completion before `accept` is polled again. On shutdown the listener is
/// dropped and the farewell line is logged.
#[allow(clippy::ignored_unit_patterns)]
pub async fn run_server(
    listener: TcpListener,
    state: Arc<config::AppState>,
    signals: Arc<SignalHandler>,
) {
    loop {
        tokio::select! {
            biased;

            _ = signals.wait_for_shutdown() => break,

            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        serve_connection(stream, peer_addr, Arc::clone(&state)).await;
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }
        }
    }

    drop(listener);
    logger::log_server_stopped();
}
