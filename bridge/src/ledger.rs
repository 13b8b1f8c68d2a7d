//! Native ledger view
//!
//! The bridge asks the native ledger two questions before moving value:
//! may this account receive funds, and may this denom be sent between
//! distinct accounts.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

pub trait NativeLedger {
    /// Whether `addr` is barred from receiving funds (module accounts etc.)
    fn is_blocked_addr(&self, addr: &Addr) -> bool;

    /// Whether coins of `denom` may be sent to another account
    fn is_send_enabled(&self, denom: &str) -> bool;
}

impl<T: NativeLedger + ?Sized> NativeLedger for &T {
    fn is_blocked_addr(&self, addr: &Addr) -> bool {
        (**self).is_blocked_addr(addr)
    }

    fn is_send_enabled(&self, denom: &str) -> bool {
        (**self).is_send_enabled(denom)
    }
}

/// Per-denom override of the default send-enabled flag
#[cw_serde]
pub struct SendEnabled {
    pub denom: String,
    pub enabled: bool,
}

/// Bank settings snapshot implementing [`NativeLedger`]
#[cw_serde]
pub struct BankParams {
    pub blocked_addrs: Vec<Addr>,
    pub default_send_enabled: bool,
    pub send_enabled: Vec<SendEnabled>,
}

impl Default for BankParams {
    fn default() -> Self {
        Self {
            blocked_addrs: vec![],
            default_send_enabled: true,
            send_enabled: vec![],
        }
    }
}

impl BankParams {
    pub fn with_blocked_addr(mut self, addr: Addr) -> Self {
        self.blocked_addrs.push(addr);
        self
    }

    pub fn with_send_enabled(mut self, denom: impl Into<String>, enabled: bool) -> Self {
        let denom = denom.into();
        self.send_enabled.retain(|s| s.denom != denom);
        self.send_enabled.push(SendEnabled { denom, enabled });
        self
    }
}

impl NativeLedger for BankParams {
    fn is_blocked_addr(&self, addr: &Addr) -> bool {
        self.blocked_addrs.contains(addr)
    }

    fn is_send_enabled(&self, denom: &str) -> bool {
        self.send_enabled
            .iter()
            .find(|s| s.denom == denom)
            .map(|s| s.enabled)
            .unwrap_or(self.default_send_enabled)
    }
}
