// ── Core error types ──
//
// The mutation mappers are total and never produce these. They exist for
// projections that can fail and for configuration handed in by callers.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Cannot project {entity_type} {identifier}: {message}")]
    Projection {
        entity_type: String,
        identifier: String,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}
