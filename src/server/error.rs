//! Error types for the server module.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that stop the server from running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Listening socket could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: SocketAddr,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Server loop failed while serving connections.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    /// Async runtime could not be created.
    #[error("Failed to create runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
