//! Error types for the Lumina shade engine
//!
//! This module defines the error types used throughout the engine.
//! Query-path failures ("space unknown", "attribute unavailable") are NOT
//! errors — they are surfaced as `None` to the shading executor. The
//! variants here cover wiring and frame-invocation failures only.

use std::fmt;

/// Result type for Lumina engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Lumina engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Initialization failed (engine singleton, renderer wiring)
    InitializationFailed(String),

    /// The shading executor reported a failure while shading a frame
    ShadingFailed(String),

    /// Internal failure (poisoned lock, inconsistent singleton state)
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::ShadingFailed(msg) => write!(f, "Shading failed: {}", msg),
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
