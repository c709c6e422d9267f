// ── Wire-level error types ──

use thiserror::Error;

/// Failures decoding request bodies into the REST model.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid {shape} body: {source}")]
    Decode {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
