//! Coin Bridge - Native Coins to VM-hosted Tokens
//!
//! Moves value between the native coin ledger and token contracts running
//! inside the virtual machine. Every operation is gated, executed as a single
//! call against the token contract, verified against the observed balance
//! delta, and only then recorded as an event.
//!
//! # Operations
//! - **Mint** - privileged `mint` signed by the module authority
//! - **Burn** - privileged `burnCoins` signed by the module authority
//! - **Transfer** - `transfer` signed by the sending account
//!
//! # Collaborators
//! The keeper is built from three injected collaborators:
//! - [`TokenPairRegistry`] - denom/contract pairings and their enabled flag
//! - [`VirtualMachineBridge`] - token contract calls and balance reads
//! - [`NativeLedger`] - blocked addresses and send-enabled flags
//!
//! Rollback of a failed operation is the job of the enclosing state
//! transition; the keeper itself never compensates.

pub mod error;
pub mod events;
pub mod gating;
pub mod invariance;
pub mod keeper;
pub mod ledger;
pub mod msg;
pub mod msg_server;
pub mod params;
pub mod registry;
pub mod state;
pub mod vm;

pub use crate::error::BridgeError;
pub use crate::events::{BridgeOperationRecord, EventEmitter, EventLog, OperationKind};
pub use crate::gating::{check_eligibility, Gate};
pub use crate::invariance::{check_balance, Delta};
pub use crate::keeper::{BridgeKeeper, Context};
pub use crate::ledger::{BankParams, NativeLedger};
pub use crate::msg::ExecuteMsg;
pub use crate::params::{Params, MODULE_NAME};
pub use crate::registry::{StoreRegistry, TokenPairRegistry};
pub use crate::state::{Owner, TokenPair, TokenPairId};
pub use crate::vm::{TokenCall, VirtualMachineBridge, VmError};
