//! Capability error types

use thiserror::Error;

/// Failures of the external clipboard and share capabilities
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// Clipboard could not be opened or written
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Share target reported a failure
    #[error("Share failed: {0}")]
    Share(String),

    /// Spawning or talking to a helper process failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
