use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between `ABI.json` on disk and the
/// encoded calldata for a registry read.
#[derive(Error, Debug)]
pub enum AbiError {
    #[error("failed to read ABI file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse ABI JSON: {0}")]
    Document(#[source] serde_json::Error),

    #[error("failed to parse ABI: {0}")]
    Interface(#[source] serde_json::Error),

    #[error("function `{0}` not found in ABI")]
    MissingFunction(String),

    #[error("function `{name}` takes {expected} inputs, got {got}")]
    Arity {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("argument `{value}` does not fit `{ty}`: {source}")]
    Argument {
        value: String,
        ty: String,
        #[source]
        source: alloy::dyn_abi::Error,
    },

    #[error("failed to pack data: {0}")]
    Encode(#[source] alloy::dyn_abi::Error),

    #[error("failed to unpack result: {0}")]
    Decode(#[source] alloy::dyn_abi::Error),
}
