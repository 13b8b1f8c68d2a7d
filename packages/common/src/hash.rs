//! Deterministic identifiers for token pairs and module accounts
//!
//! # Byte Layout
//! - Token pair id: `keccak256(contract (20 bytes) || denom (utf-8))`
//! - Module address: first 20 bytes of `sha256(module_name)`, the native
//!   ledger's module account derivation

use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

use crate::address_codec::{VmAddress, VM_ADDRESS_LEN};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Identifier of a (contract, denom) pairing.
///
/// Stable for the lifetime of the pair since both inputs are immutable
/// once registered.
pub fn compute_token_pair_id(contract: &VmAddress, denom: &str) -> [u8; 32] {
    let mut data = Vec::with_capacity(VM_ADDRESS_LEN + denom.len());
    data.extend_from_slice(contract.as_slice());
    data.extend_from_slice(denom.as_bytes());
    keccak256(&data)
}

/// VM address a module signs privileged calls with
pub fn module_address(module_name: &str) -> VmAddress {
    let hash = Sha256::digest(module_name.as_bytes());
    let mut raw = [0u8; VM_ADDRESS_LEN];
    raw.copy_from_slice(&hash[..VM_ADDRESS_LEN]);
    VmAddress(raw)
}
