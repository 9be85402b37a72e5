use crate::net::types::MsgId;
use crate::protocol::enums::encoding_error::EncodingError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("Invalid bus address: {0}")]
    Format(String),

    #[error("Handler already registered for message id {0}")]
    DuplicateHandler(MsgId),

    #[error("No route: consistent hash ring is empty")]
    EmptyRing,

    #[error("Failed to start connection to {0}")]
    ConnectFailure(String),

    #[error("No handler for message id {0}")]
    UnroutableMessage(MsgId),

    #[error("Peer not found: {0}")]
    PeerNotFound(String),

    #[error("Peer not connected: {0}")]
    NotConnected(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Frame error: {0}")]
    Frame(String),

    #[error("Invalid endpoint: {0}")]
    Endpoint(String),

    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),
}
