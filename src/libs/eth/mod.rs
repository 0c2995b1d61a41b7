//! Ethereum JSON‑RPC access.  [`client::EthClient`] owns the single
//! node connection; [`spells`] builds the menu reads on top of it.
pub mod client;
pub mod error;
pub mod spells;

pub use error::QueryError;
