//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`Error`] covers the fallible edges of the engine:
//! - Parsing serialized scene descriptions
//! - Fetching scenes from disk or over HTTP
//! - Hot reload gating
//!
//! Per-frame timeline evaluation never returns an error. Malformed descriptor
//! pieces are logged and skipped while the runtime is built.
//!
//! # Usage
//!
//! ```rust,ignore
//! use stagehand_core::{Error, Result};
//!
//! fn parse(bytes: &[u8]) -> Result<()> {
//!     let _value: serde_json::Value = serde_json::from_slice(bytes)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the Stagehand engine.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // HTTP & Network Errors
    // ========================================================================
    /// URL parsing error.
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP response error with status code.
    #[error("HTTP response error: status {status}")]
    HttpResponse {
        /// HTTP status code
        status: u16,
    },

    /// The transport failed before a response was received.
    #[error("Transport error: {0}")]
    Transport(String),

    // ========================================================================
    // Hot Reload Errors
    // ========================================================================
    /// Hot reload was triggered while the development gate is closed.
    #[error("Hot reload is disabled outside development mode")]
    HotReloadDisabled,

    /// The fetch completed but its result could not be delivered.
    #[error("Scene unavailable: {0}")]
    SceneUnavailable(String),
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
