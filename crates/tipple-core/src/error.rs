//! Error types for the tipple client.

use thiserror::Error;

/// Catalog access errors.
///
/// These never cross the catalog seam: the client logs them and resolves
/// the call to an absent or empty result instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network-level failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Catalog answered with a non-success status.
    #[error("Catalog returned status {status}")]
    Status { status: u16 },

    /// Response body was not the expected JSON shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}
