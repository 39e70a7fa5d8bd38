//! # Magnum Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the magnum client.
//! Every invocation performs exactly one logical action, so every error is
//! terminal: there is no recovery path, only a message and an exit code.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `MagnumError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error kinds fall into three groups:
//! - Local input errors (missing files, malformed JSON bodies, unknown creation
//!   attributes), raised before any network call
//! - Configuration errors (no endpoint, unparsable config file)
//! - Remote errors returned by the API or the HTTP transport, propagated as-is
//!
//! Usage errors (bad or missing flags) are reported by `clap` itself and never
//! reach this type.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !path.is_file() {
//!     anyhow::bail!(MagnumError::FileSystem(format!("Not a file: {}", path.display())));
//! }
//!
//! // Check whether the server reported a missing resource
//! if let Some(MagnumError::Api { status: 404, .. }) = err.downcast_ref::<MagnumError>() {
//!     // ...
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the magnum client.
#[derive(Error, Debug)]
pub enum MagnumError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Invalid attribute '{attribute}' for {kind}. Allowed attributes: {allowed}")]
    InvalidAttribute {
        kind: String,
        attribute: String,
        allowed: String,
    },

    /// A non-2xx response. `message` is the server's own explanation.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("HTTP request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("Unexpected response from server: {0}")]
    InvalidResponse(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = MagnumError::Config("No endpoint configured".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: No endpoint configured"
        );

        let not_found = MagnumError::Api {
            status: 404,
            message: "Bay abc could not be found.".into(),
        };
        assert_eq!(not_found.to_string(), "Bay abc could not be found. (HTTP 404)");

        let bad_attr = MagnumError::InvalidAttribute {
            kind: "container".into(),
            attribute: "colour".into(),
            allowed: "name, image_id".into(),
        };
        assert_eq!(
            bad_attr.to_string(),
            "Invalid attribute 'colour' for container. Allowed attributes: name, image_id"
        );
    }

    #[test]
    fn test_api_error_survives_anyhow_downcast() {
        let err: anyhow::Error = MagnumError::Api {
            status: 404,
            message: "gone".into(),
        }
        .into();
        assert!(matches!(
            err.downcast_ref::<MagnumError>(),
            Some(MagnumError::Api { status: 404, .. })
        ));
    }
}
