//! Centralized error types
//!
//! The logging surface itself never fails. These errors come from the
//! edges: reading configuration and shipping records to a server.
//! Use `Result<T>` as shorthand for `std::result::Result<T, SploggerError>`.

use std::fmt;
use std::path::PathBuf;

/// All splogger errors
#[derive(Debug)]
pub enum SploggerError {
    // === Configuration ===
    /// Failed to read a config file
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config file is not valid TOML for `SploggerConfig`
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Invalid config value
    ConfigValidation { field: &'static str, reason: String },

    // === Transport ===
    /// Failed to build the HTTP client
    HttpClient { source: reqwest::Error },
    /// POST could not be completed
    HttpRequest {
        url: String,
        source: reqwest::Error,
    },
    /// Server answered with a non-success status
    HttpStatus { url: String, status: u16 },
    /// Background sender is gone; the record was not queued
    TransportClosed,
}

impl std::error::Error for SploggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigRead { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            Self::HttpClient { source } | Self::HttpRequest { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for SploggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigRead { path, .. } => write!(f, "Cannot read config: {}", path.display()),
            Self::ConfigParse { path, source } => {
                write!(f, "Invalid config {}: {}", path.display(), source)
            }
            Self::ConfigValidation { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            Self::HttpClient { source } => write!(f, "Cannot create HTTP client: {}", source),
            Self::HttpRequest { url, source } => write!(f, "POST {} failed: {}", url, source),
            Self::HttpStatus { url, status } => write!(f, "HTTP {} from POST {}", status, url),
            Self::TransportClosed => write!(f, "Log transport is closed"),
        }
    }
}

/// Alias for Result with SploggerError
pub type Result<T> = std::result::Result<T, SploggerError>;
