//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before a server starts.
//! Both services read the same variables; the shortener ignores the database
//! settings and the user service ignores `BASE_URL` and `CODE_MAX_ATTEMPTS`.
//!
//! ## Database
//!
//! ```bash
//! export DATABASE_URL="sqlite://users.db?mode=rwc"
//! # or
//! export DATABASE_PATH="/var/lib/link-desk/users.db"
//! ```
//!
//! If `DATABASE_URL` is not set, it is built from `DATABASE_PATH`
//! (default: `users.db`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `127.0.0.1:5000`)
//! - `BASE_URL` - Prefix of generated short URLs (default: `http://localhost:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_MAX_ATTEMPTS` - Short code collision retries (default: 16)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::Result;
use std::env;

use crate::infrastructure::memory::DEFAULT_MAX_ATTEMPTS;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Scheme and authority prepended to short codes in API responses.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound on short code generation attempts per insert.
    pub code_max_attempts: usize,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparsable numeric values fall back to their defaults; [`Config::validate`]
    /// checks ranges afterwards.
    pub fn from_env() -> Self {
        let database_url = Self::load_database_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
        let base_url = env::var("BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string())
            .trim_end_matches('/')
            .to_string();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_max_attempts = env::var("CODE_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            database_url,
            listen_addr,
            base_url,
            log_level,
            log_format,
            code_max_attempts,
            db_max_connections,
            db_connect_timeout,
        }
    }

    /// Loads the database URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. Built from `DATABASE_PATH` (default `users.db`)
    fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path = env::var("DATABASE_PATH").unwrap_or_else(|_| "users.db".to_string());
        format!("sqlite://{}?mode=rwc", path)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` has no port
    /// - `base_url` is not http(s)
    /// - `database_url` is not a `sqlite:` URL
    /// - numeric settings are out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > 1000 {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 1000, got {}",
                self.code_max_attempts
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Code max attempts: {}", self.code_max_attempts);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
