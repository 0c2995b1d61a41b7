pub mod abi;
pub mod addresses;
pub mod error;

pub use abi::*;
pub use addresses::*;
pub use error::AbiError;
