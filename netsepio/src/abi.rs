//! Runtime view of the NetSepio registry interface.
//!
//! The interface is not baked in with `sol!`; it is read from an
//! artifact shaped like `{ "abi": [...] }` on every lookup.
use std::{fs, path::Path};

use alloy::dyn_abi::{DynSolType, DynSolValue, FunctionExt, JsonAbiExt, Specifier};
use alloy::json_abi::{Function, JsonAbi};
use alloy::primitives::{Address, Bytes};
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::addresses::{NETSEPIO_REGISTRY, NODES_FN};
use crate::error::AbiError;

#[derive(Debug, Deserialize)]
struct AbiFile {
    abi: Box<RawValue>,
}

/// Parsed interface bound to a contract address.  Built per read and
/// dropped afterwards.
#[derive(Debug, Clone)]
pub struct Registry {
    pub abi: JsonAbi,
    pub address: Address,
}

impl Registry {
    /// Load `{ "abi": [...] }` from disk and bind it to the NetSepio registry.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AbiError> {
        let path = path.as_ref();
        let doc = fs::read_to_string(path).map_err(|source| AbiError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&doc, NETSEPIO_REGISTRY)
    }

    pub fn from_json(doc: &str, address: Address) -> Result<Self, AbiError> {
        let file: AbiFile = serde_json::from_str(doc).map_err(AbiError::Document)?;
        let abi: JsonAbi = serde_json::from_str(file.abi.get()).map_err(AbiError::Interface)?;
        Ok(Self { abi, address })
    }

    /// Pick the overload of `name` taking `arity` inputs.
    pub fn function(&self, name: &str, arity: usize) -> Result<&Function, AbiError> {
        let overloads = self
            .abi
            .function(name)
            .filter(|list| !list.is_empty())
            .ok_or_else(|| AbiError::MissingFunction(name.to_string()))?;

        overloads
            .iter()
            .find(|f| f.inputs.len() == arity)
            .ok_or_else(|| AbiError::Arity {
                name: name.to_string(),
                expected: overloads[0].inputs.len(),
                got: arity,
            })
    }

    /// Encode a call to `name`.  `string` inputs take the argument text
    /// verbatim; every other type is parsed from it as a literal.
    pub fn encode_call(&self, name: &str, args: &[&str]) -> Result<Bytes, AbiError> {
        let func = self.function(name, args.len())?;

        let mut values = Vec::with_capacity(args.len());
        for (param, arg) in func.inputs.iter().zip(args) {
            let ty = param.resolve().map_err(AbiError::Encode)?;
            let value = match ty {
                DynSolType::String => DynSolValue::String(arg.to_string()),
                ty => ty.coerce_str(arg).map_err(|source| AbiError::Argument {
                    value: arg.to_string(),
                    ty: param.ty.clone(),
                    source,
                })?,
            };
            values.push(value);
        }

        let data = func.abi_encode_input(&values).map_err(AbiError::Encode)?;
        Ok(data.into())
    }

    /// Calldata for `nodes(node_id)`.
    pub fn encode_nodes(&self, node_id: &str) -> Result<Bytes, AbiError> {
        self.encode_call(NODES_FN, &[node_id])
    }

    /// Decode the return data of `name` into `(output name, value)` pairs.
    /// Unnamed outputs are labelled `output<i>`.  Returns `Ok(None)` when
    /// the function declares no outputs.
    pub fn decode_output(
        &self,
        name: &str,
        arity: usize,
        data: &[u8],
    ) -> Result<Option<Vec<(String, DynSolValue)>>, AbiError> {
        let func = self.function(name, arity)?;
        if func.outputs.is_empty() {
            return Ok(None);
        }
        let values = func.abi_decode_output(data).map_err(AbiError::Decode)?;
        let fields = func
            .outputs
            .iter()
            .zip(values)
            .enumerate()
            .map(|(i, (param, value))| {
                let label = if param.name.is_empty() {
                    format!("output{i}")
                } else {
                    param.name.clone()
                };
                (label, value)
            })
            .collect();
        Ok(Some(fields))
    }

    pub fn decode_nodes(
        &self,
        data: &[u8],
    ) -> Result<Option<Vec<(String, DynSolValue)>>, AbiError> {
        self.decode_output(NODES_FN, 1, data)
    }
}

/// Human readable rendering of a decoded ABI value.
pub fn display_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Int(i, _) => i.to_string(),
        DynSolValue::Uint(u, _) => u.to_string(),
        DynSolValue::FixedBytes(word, size) => format!("0x{}", hex::encode(&word[..*size])),
        DynSolValue::Address(a) => a.to_string(),
        DynSolValue::Function(f) => format!("0x{}", hex::encode(f.as_slice())),
        DynSolValue::Bytes(b) => format!("0x{}", hex::encode(b)),
        DynSolValue::String(s) => s.clone(),
        DynSolValue::Array(items) | DynSolValue::FixedArray(items) => {
            let inner: Vec<String> = items.iter().map(display_value).collect();
            format!("[{}]", inner.join(", "))
        }
        DynSolValue::Tuple(items) => {
            let inner: Vec<String> = items.iter().map(display_value).collect();
            format!("({})", inner.join(", "))
        }
        #[allow(unreachable_patterns)]
        other => format!("{other:?}"),
    }
}
