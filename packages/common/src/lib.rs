//! Common - Shared Types for the Coin Bridge
//!
//! This package provides the address and hashing primitives shared by the
//! bridge keeper and the VM-hosted token contract:
//!
//! - **Address Codec** - 20-byte VM addresses and native bech32 conversion
//! - **Hash** - keccak256 token pair ids and module authority addresses

pub mod address_codec;
pub mod hash;

pub use address_codec::{
    decode_bech32_address, decode_bech32_with_prefix, encode_bech32_address, encode_vm_address,
    parse_vm_address, VmAddress, VM_ADDRESS_LEN,
};
pub use hash::{compute_token_pair_id, keccak256, module_address};
