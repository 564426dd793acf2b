use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("websocket connection error: {0}")]
    Connection(#[from] tungstenite::Error),

    #[error("websocket connection closed by peer")]
    ConnectionClosed,

    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("history request failed: {0}")]
    RequestFailed(String),

    #[error("message codec error: {0}")]
    Codec(#[from] serde_json::Error),
}
