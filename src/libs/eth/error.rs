use alloy::transports::TransportError;
use netsepio::AbiError;
use thiserror::Error;

/// Failure of a single menu query.  None of these end the session.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("`{0}` is not a hex address (expected 0x followed by 40 hex digits)")]
    InvalidAddress(String),

    #[error("node id must not be empty")]
    EmptyNodeId,

    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error("rpc call failed: {0}")]
    Rpc(#[from] TransportError),
}
