//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`). When unset, `PORT`
//!   alone may be given and the service binds `0.0.0.0:$PORT`.
//! - `PUBLIC_HOST` (or a URL-shaped `HOSTNAME`) - Public host prefixed to
//!   every short link (default: `http://localhost:3000`)
//! - `DEFAULT_VALIDITY_MINUTES` - Validity when a request omits one (default: 30)
//! - `LOG_API_URL` - Remote event log collector; remote logging is disabled if unset
//! - `ACCESS_TOKEN` - Bearer token for the collector (required with `LOG_API_URL`)
//! - `LOG_QUEUE_CAPACITY` - Event log buffer size (default: 1024, min: 16)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Prefix of every short link, e.g. `https://s.example.com`.
    pub public_host: String,
    pub default_validity_minutes: u32,
    pub log_api_url: Option<String>,
    /// Bearer credential for the log collector. Never printed.
    pub access_token: Option<String>,
    pub log_queue_capacity: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr();

        let public_host = Self::load_public_host();

        let default_validity_minutes = match env::var("DEFAULT_VALIDITY_MINUTES") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("DEFAULT_VALIDITY_MINUTES is not a number: '{v}'"))?,
            Err(_) => 30,
        };

        let log_api_url = env::var("LOG_API_URL").ok().filter(|v| !v.is_empty());
        let access_token = env::var("ACCESS_TOKEN").ok().filter(|v| !v.is_empty());

        let log_queue_capacity = env::var("LOG_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1024);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            public_host,
            default_validity_minutes,
            log_api_url,
            access_token,
            log_queue_capacity,
            log_level,
            log_format,
        })
    }

    /// Resolves the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN`
    /// 2. `0.0.0.0:$PORT`
    /// 3. `0.0.0.0:3000`
    fn load_listen_addr() -> String {
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        match env::var("PORT") {
            Ok(port) => format!("0.0.0.0:{}", port),
            Err(_) => "0.0.0.0:3000".to_string(),
        }
    }

    /// Resolves the public host used in short links.
    ///
    /// Priority:
    /// 1. `PUBLIC_HOST`
    /// 2. `HOSTNAME`, only when it is an `http(s)://` URL (shells and
    ///    containers set it to the bare machine name)
    /// 3. `http://localhost:3000`
    fn load_public_host() -> String {
        if let Ok(host) = env::var("PUBLIC_HOST") {
            return host;
        }

        env::var("HOSTNAME")
            .ok()
            .filter(|h| h.starts_with("http://") || h.starts_with("https://"))
            .unwrap_or_else(|| "http://localhost:3000".to_string())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `public_host` is not an `http://` or `https://` URL
    /// - `default_validity_minutes` is zero
    /// - `log_queue_capacity` is outside 16..=1000000
    /// - `log_format` is not `text` or `json`
    /// - `log_api_url` is malformed or set without `access_token`
    pub fn validate(&self) -> Result<()> {
        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.public_host.starts_with("http://") && !self.public_host.starts_with("https://")
        {
            anyhow::bail!(
                "PUBLIC_HOST must start with 'http://' or 'https://', got '{}'",
                self.public_host
            );
        }

        if self.default_validity_minutes == 0 {
            anyhow::bail!("DEFAULT_VALIDITY_MINUTES must be greater than 0");
        }

        if self.log_queue_capacity < 16 {
            anyhow::bail!(
                "LOG_QUEUE_CAPACITY must be at least 16, got {}",
                self.log_queue_capacity
            );
        }

        if self.log_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "LOG_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.log_queue_capacity
            );
        }

        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(ref url) = self.log_api_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!(
                    "LOG_API_URL must start with 'http://' or 'https://', got '{}'",
                    url
                );
            }

            if self.access_token.is_none() {
                anyhow::bail!("ACCESS_TOKEN must be set when LOG_API_URL is provided");
            }
        }

        Ok(())
    }

    /// Returns whether events are forwarded to a remote collector.
    pub fn is_remote_logging_enabled(&self) -> bool {
        self.log_api_url.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Public host: {}", self.public_host);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );

        if let Some(ref url) = self.log_api_url {
            tracing::info!(
                "  Remote event log: {} (token: {})",
                url,
                mask_token(self.access_token.as_deref().unwrap_or_default())
            );
        } else {
            tracing::info!("  Remote event log: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Event log queue capacity: {}", self.log_queue_capacity);
    }
}

/// Masks a bearer token for logging, keeping only its last four characters.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
