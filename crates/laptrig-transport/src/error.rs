use tokio_tungstenite::tungstenite;

/// Errors that can occur in transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The endpoint configuration is not usable.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Failed to establish the connection.
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        source: tungstenite::Error,
    },

    /// An error occurred on the established connection.
    #[error("websocket error: {0}")]
    Ws(#[from] tungstenite::Error),

    /// The connection is closed.
    #[error("connection closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, TransportError>;
