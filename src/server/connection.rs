// Connection handling module
// Serves a single TCP connection to completion

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;

use crate::config;
use crate::handler;
use crate::logger;

/// Serve one connection until the response is written.
///
/// Keep-alive is disabled, so each connection carries exactly one request.
/// The configured connection timeout bounds how long a slow client can
/// hold the accept loop.
pub async fn serve_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: Arc<config::AppState>,
) {
    logger::log_connection_accepted(&peer_addr);

    let io = TokioIo::new(stream);
    let timeout = state.config.connection_timeout();

    let mut builder = http1::Builder::new();
    builder.keep_alive(false);

    let conn = builder.serve_connection(
        io,
        service_fn(move |req| handler::handle_request(req, Arc::clone(&state), peer_addr)),
    );

    let result = match timeout {
        Some(duration) => match tokio::time::timeout(duration, conn).await {
            Ok(result) => result,
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    duration.as_secs()
                ));
                return;
            }
        },
        None => conn.await,
    };

    if let Err(err) = result {
        logger::log_connection_error(&err);
    }
}
