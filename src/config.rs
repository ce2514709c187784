//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, before the server starts.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base URL that short links are rendered under
//!   (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! A `.env` file in the working directory is honored via `dotenvy`.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub listen_addr: SocketAddr,
    /// Public prefix for rendered short URLs, e.g. `https://s.example.com`.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN` is set but not a valid socket
    /// address.
    pub fn from_env() -> Result<Self> {
        let listen = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let listen_addr: SocketAddr = listen
            .parse()
            .with_context(|| format!("Invalid LISTEN address: {listen}"))?;

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
        })
    }
}
