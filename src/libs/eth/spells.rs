//! The two menu reads on top of [`EthClient`]: native balance and the
//! registry's `nodes` mapping, plus input validation and amount
//! formatting.
use std::{fmt, path::Path};

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::Provider;
use netsepio::Registry;

use super::client::EthClient;
use super::error::QueryError;
use crate::constants::{DISPLAY_DECIMALS, NATIVE_DECIMALS, NATIVE_SYMBOL};
use crate::libs::lookup::save_log_to_file;

/// A native balance as returned by `eth_getBalance`, plus its display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub wei: U256,
    /// `wei / 10^18` with exactly three fraction digits, e.g. `"1.500"`.
    pub eth: String,
}

impl Balance {
    pub fn from_wei(wei: U256) -> Self {
        Self {
            wei,
            eth: format_eth(wei),
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.eth, NATIVE_SYMBOL)
    }
}

/// Return data of one `nodes(id)` read.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub raw: Bytes,
    /// Outputs decoded against the ABI, when it declares any and they fit.
    pub fields: Option<Vec<(String, DynSolValue)>>,
}

impl NodeData {
    /// Raw return data as lowercase hex without `0x`.
    pub fn hex(&self) -> String {
        hex::encode(&self.raw)
    }
}

/// Validate `address` and query its balance at the chain head.
pub async fn get_balance<P: Provider>(
    client: &EthClient<P>,
    address: &str,
) -> Result<Balance, QueryError> {
    let address = parse_address(address)?;
    let wei = client.balance(address).await?;
    Ok(Balance::from_wei(wei))
}

/// Read `nodes(node_id)` from the registry.  The interface file is
/// loaded fresh on every call.
pub async fn read_node<P: Provider>(
    client: &EthClient<P>,
    abi_path: impl AsRef<Path>,
    node_id: &str,
) -> Result<NodeData, QueryError> {
    let node_id = node_id.trim();
    if node_id.is_empty() {
        return Err(QueryError::EmptyNodeId);
    }

    let registry = Registry::from_file(abi_path)?;
    let data = registry.encode_nodes(node_id)?;
    let raw = client.call(registry.address, data).await?;

    let fields = match registry.decode_nodes(&raw) {
        Ok(fields) => fields,
        Err(e) => {
            save_log_to_file(&format!("[nodes] {node_id}: {e}"));
            None
        }
    };
    Ok(NodeData { raw, fields })
}

/// Exactly `0x` + 40 hex digits, any case.  Checksums are not enforced.
pub fn parse_address(input: &str) -> Result<Address, QueryError> {
    let s = input.trim();
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"));
    match digits {
        Some(h) if h.len() == 40 && h.bytes().all(|b| b.is_ascii_hexdigit()) => h
            .parse::<Address>()
            .map_err(|_| QueryError::InvalidAddress(s.to_string())),
        _ => Err(QueryError::InvalidAddress(s.to_string())),
    }
}

/// Wei to ETH with three fraction digits.
pub fn format_eth(wei: U256) -> String {
    format_fixed(wei, NATIVE_DECIMALS, DISPLAY_DECIMALS)
}

/// Render `amount / 10^decimals` with `places` fraction digits, rounding
/// half up.  All arithmetic stays in `U256`.
pub fn format_fixed(amount: U256, decimals: u8, places: u8) -> String {
    let places = places.min(decimals);
    let ten = U256::from(10u64);
    let scale = ten.pow(U256::from(decimals - places));

    let mut rounded = amount / scale;
    let rem = amount % scale;
    if scale > U256::from(1u64) && rem >= scale / U256::from(2u64) {
        rounded += U256::from(1u64);
    }

    if places == 0 {
        return rounded.to_string();
    }
    let unit = ten.pow(U256::from(places));
    let whole = rounded / unit;
    let frac = (rounded % unit).to_string();
    format!("{whole}.{frac:0>width$}", width = places as usize)
}
