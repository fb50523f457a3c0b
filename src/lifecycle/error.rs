//! Lifecycle-specific error types

use thiserror::Error;

/// Errors that can occur while starting or running the application
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Application could not be assembled
    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    /// Listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Server stopped with an I/O error
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

impl LifecycleError {
    /// Create an initialization failure error
    pub fn init_failed(msg: impl Into<String>) -> Self {
        Self::InitializationFailed(msg.into())
    }
}

/// A specialized Result type for lifecycle operations
pub type Result<T> = std::result::Result<T, LifecycleError>;
