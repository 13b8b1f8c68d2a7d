//! Native ⇄ VM address conversion
//!
//! Every account has two faces: a bech32 address on the native ledger
//! (`evmos1...`) and a 20-byte address inside the virtual machine
//! (`0x...`). Both carry the same 20 payload bytes, so the conversion is a
//! bech32 decode/encode with a fixed human-readable prefix.
//!
//! ```text
//! evmos1glht96kr2rseywuvhhay894qw7ekuc4qg9z5nw  <->  0x47eeb2eac350e1923b8cbdfa4396a077b36e62a0
//! ```

use std::fmt;
use std::str::FromStr;

use bech32::{FromBase32, ToBase32, Variant};
use cosmwasm_std::{Addr, StdError, StdResult};
use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Length of a VM account address in bytes
pub const VM_ADDRESS_LEN: usize = 20;

// ============================================================================
// VM Address
// ============================================================================

/// A 20-byte account or contract address inside the virtual machine.
///
/// Serialized as a lowercase `0x`-prefixed hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct VmAddress(pub [u8; VM_ADDRESS_LEN]);

impl VmAddress {
    /// Parse from a hex string, with or without the `0x` prefix
    pub fn from_hex(addr: &str) -> StdResult<Self> {
        parse_vm_address(addr).map(Self)
    }

    /// Lowercase hex with `0x` prefix
    pub fn to_hex(&self) -> String {
        encode_vm_address(&self.0)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Native bech32 representation of this account
    pub fn to_native(&self, hrp: &str) -> StdResult<Addr> {
        encode_bech32_address(&self.0, hrp).map(Addr::unchecked)
    }

    /// VM representation of a native bech32 account.
    ///
    /// The address must carry `hrp` as its prefix and a valid checksum.
    pub fn from_native(addr: &Addr, hrp: &str) -> StdResult<Self> {
        decode_bech32_with_prefix(addr.as_str(), hrp).map(Self)
    }
}

impl fmt::Display for VmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for VmAddress {
    type Err = StdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<VmAddress> for String {
    fn from(addr: VmAddress) -> Self {
        addr.to_hex()
    }
}

impl TryFrom<String> for VmAddress {
    type Error = StdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl JsonSchema for VmAddress {
    fn schema_name() -> String {
        "VmAddress".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }
}

// ============================================================================
// Hex Helpers
// ============================================================================

/// Parse a hex VM address (optional `0x` prefix) to 20 bytes
pub fn parse_vm_address(addr: &str) -> StdResult<[u8; VM_ADDRESS_LEN]> {
    let hex_str = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr);

    if hex_str.len() != VM_ADDRESS_LEN * 2 {
        return Err(StdError::generic_err(format!(
            "Invalid VM address length: expected 40 hex chars, got {}",
            hex_str.len()
        )));
    }

    let bytes =
        hex::decode(hex_str).map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))?;

    let mut result = [0u8; VM_ADDRESS_LEN];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Encode 20 bytes to a lowercase hex string with `0x` prefix
pub fn encode_vm_address(bytes: &[u8; VM_ADDRESS_LEN]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// ============================================================================
// Bech32
// ============================================================================

/// Decode a bech32 address with the expected prefix to its 20-byte payload.
///
/// Rejects mixed case, a foreign prefix, a bad checksum, and payloads that
/// are not exactly 20 bytes.
pub fn decode_bech32_with_prefix(addr: &str, hrp: &str) -> StdResult<[u8; VM_ADDRESS_LEN]> {
    let (addr_hrp, payload) = decode_bech32_address(addr)?;
    if addr_hrp != hrp {
        return Err(StdError::generic_err(format!(
            "Invalid bech32 prefix: expected {}, got {}",
            hrp, addr_hrp
        )));
    }
    Ok(payload)
}

/// Decode a bech32 address to its (lowercase) prefix and raw 20 bytes
pub fn decode_bech32_address(addr: &str) -> StdResult<(String, [u8; VM_ADDRESS_LEN])> {
    let (hrp, data, variant) = bech32::decode(addr)
        .map_err(|e| StdError::generic_err(format!("Invalid bech32 address: {}", e)))?;
    if variant != Variant::Bech32 {
        return Err(StdError::generic_err("Invalid bech32 address: bech32m checksum"));
    }

    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|e| StdError::generic_err(format!("Invalid base32 data: {}", e)))?;

    if bytes.len() != VM_ADDRESS_LEN {
        return Err(StdError::generic_err(format!(
            "Invalid address length: expected 20 bytes, got {}",
            bytes.len()
        )));
    }

    let mut result = [0u8; VM_ADDRESS_LEN];
    result.copy_from_slice(&bytes);
    Ok((hrp, result))
}

/// Encode raw 20 bytes to a bech32 address with the given prefix
pub fn encode_bech32_address(bytes: &[u8; VM_ADDRESS_LEN], hrp: &str) -> StdResult<String> {
    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32).map_err(|e| {
        StdError::generic_err(format!("Failed to encode bech32 with prefix {:?}: {}", hrp, e))
    })
}
