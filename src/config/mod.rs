// Configuration module entry point
// Manages configuration loading, the watched file path and runtime state

mod path;
mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use path::WatchedFile;
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, RefreshConfig, ServerConfig};

impl Config {
    /// Load configuration from `config.toml` in the working directory.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension).
    /// The file is optional; environment variables with the `SERVER` prefix
    /// override it, and coded defaults fill the rest.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("refresh.interval_secs", 5)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("http.default_content_type", "text/plain; charset=utf-8")?
            .set_default("http.server_name", "File-Poll-Server/0.1")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
