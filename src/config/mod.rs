// Configuration module entry point
// Loads the worker configuration and holds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::time::Duration;

// Re-export public types
pub use state::AppState;
pub use types::{BeeConfig, Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

impl Config {
    /// Load configuration from `config.toml` in the working directory (optional)
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Sources, lowest priority first: built-in defaults, the config file,
    /// `BEE_*` environment variables (`BEE_SERVER__PORT=9000`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("BEE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", types::DEFAULT_HOST)?
            .set_default("server.port", i64::from(types::DEFAULT_PORT))?
            .set_default("bee.id", types::DEFAULT_BEE_ID)?
            .set_default("bee.workspace_dir", types::DEFAULT_WORKSPACE_DIR)?
            .set_default("bee.surface_listing_errors", false)?
            .set_default("logging.level", types::DEFAULT_LOG_LEVEL)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", types::DEFAULT_ACCESS_LOG_FORMAT)?
            .set_default("http.server_name", types::DEFAULT_SERVER_NAME)?
            .set_default(
                "performance.connection_timeout",
                i64::from(types::DEFAULT_CONNECTION_TIMEOUT),
            )?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Connection timeout, `None` when disabled
    pub const fn connection_timeout(&self) -> Option<Duration> {
        match self.performance.connection_timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
