//! BuzyBeez worker bee
//!
//! A single-threaded HTTP server that reports on its workspace directory,
//! plus the fibonacci generator used by the `fib` binary.

pub mod config;
pub mod fibonacci;
pub mod handler;
pub mod http;
pub mod listing;
pub mod logger;
pub mod routing;
pub mod server;
