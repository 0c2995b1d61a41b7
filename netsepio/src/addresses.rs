use alloy::primitives::address;
use alloy::primitives::Address;

/// NetSepio registry holding the public `nodes(string)` mapping.
pub const NETSEPIO_REGISTRY: Address = address!("0x8063E4BA4b473DDdAc016dF9765EB869fcFAf843");

/// Name of the mapping accessor read by the node lookup.
pub const NODES_FN: &str = "nodes";
