use std::io;

use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay bind failed on {addr}: {source}")]
    Bind { addr: String, source: io::Error },
    #[error("could not reach relay at {url}: {source}")]
    Connect { url: String, source: tungstenite::Error },
    #[error("WebSocket handshake failed: {0}")]
    Handshake(tungstenite::Error),
    #[error("WebSocket transport error: {0}")]
    Transport(#[from] tungstenite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed publish payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected 4 fields, got {0}")]
    FieldCount(usize),
    #[error("field {index} is not an integer: {value:?}")]
    InvalidField { index: usize, value: String },
    #[error("field {index} does not fit in a byte: {value}")]
    OutOfByteRange { index: usize, value: i32 },
}
