//! Error types for the outer surfaces (profiles and parsed values).
//!
//! Classification itself never fails; only loading a signal profile and
//! parsing user-supplied names can.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while loading signal profiles or parsing values.
#[derive(Error, Diagnostic, Debug)]
pub enum PerftierError {
    // =========================================================================
    // Profile Errors
    // =========================================================================
    #[error("Failed to read signal profile '{}': {message}", path.display())]
    #[diagnostic(code(perftier::profile::read_error))]
    ProfileRead {
        path: PathBuf,
        message: String,
    },

    #[error("Invalid signal profile: {message}")]
    #[diagnostic(
        code(perftier::profile::invalid_json),
        help("Profiles are JSON objects with optional keys: prefersReducedMotion, deviceMemory, hardwareConcurrency, effectiveType, userAgent, viewportWidth")
    )]
    InvalidProfile {
        message: String,
    },

    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("Unknown performance tier: {value}")]
    #[diagnostic(
        code(perftier::parse::unknown_tier),
        help("Use one of: high, medium, low (or auto to detect)")
    )]
    UnknownTier {
        value: String,
    },

    #[error("Unknown effective connection type: {value}")]
    #[diagnostic(
        code(perftier::parse::unknown_connection),
        help("Use one of: slow-2g, 2g, 3g, 4g")
    )]
    UnknownConnection {
        value: String,
    },
}

impl PerftierError {
    /// Creates a profile read error.
    pub fn profile_read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ProfileRead {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result alias for fallible perftier operations.
pub type Result<T> = std::result::Result<T, PerftierError>;
