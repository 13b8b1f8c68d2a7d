//! Module parameters
//!
//! Parameters are an explicit value handed to every operation through its
//! call context; nothing here is process-wide state.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, StdError, StdResult};

/// Name the bridge module signs privileged VM calls under
pub const MODULE_NAME: &str = "erc20";

/// Default bech32 prefix for native account addresses
pub const DEFAULT_BECH32_PREFIX: &str = "evmos";

#[cw_serde]
pub struct Params {
    /// Global switch for every bridge operation
    pub enable_erc20: bool,
    /// Human-readable prefix of native account addresses
    pub bech32_prefix: String,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            enable_erc20: true,
            bech32_prefix: DEFAULT_BECH32_PREFIX.to_string(),
        }
    }
}

impl Params {
    pub fn new(enable_erc20: bool, bech32_prefix: impl Into<String>) -> Self {
        Self {
            enable_erc20,
            bech32_prefix: bech32_prefix.into(),
        }
    }

    /// Load from a JSON document and validate
    pub fn from_json(json: &str) -> StdResult<Self> {
        let params: Params = from_json(json.as_bytes())?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> StdResult<()> {
        if self.bech32_prefix.is_empty() {
            return Err(StdError::generic_err("bech32 prefix must not be empty"));
        }
        if !self
            .bech32_prefix
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        {
            return Err(StdError::generic_err(format!(
                "bech32 prefix must be lowercase alphanumeric, got {:?}",
                self.bech32_prefix
            )));
        }
        Ok(())
    }
}
