//! Bridge events
//!
//! One event per committed operation, appended to the log of the enclosing
//! state transition. The log is returned with the transition result and is
//! discarded with it when the transition fails.

use cosmwasm_std::{Event, Uint256};

use common::VmAddress;

pub const EVENT_TYPE_MINT: &str = "mint";
pub const EVENT_TYPE_BURN: &str = "burn";
pub const EVENT_TYPE_TRANSFER: &str = "transfer";

pub const ATTRIBUTE_KEY_SENDER: &str = "sender";
pub const ATTRIBUTE_KEY_RECEIVER: &str = "receiver";
pub const ATTRIBUTE_KEY_AMOUNT: &str = "amount";
pub const ATTRIBUTE_KEY_COSMOS_COIN: &str = "cosmos_coin";
pub const ATTRIBUTE_KEY_ERC20_TOKEN: &str = "erc20_token";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Mint,
    Burn,
    Transfer,
}

impl OperationKind {
    pub fn event_type(&self) -> &'static str {
        match self {
            OperationKind::Mint => EVENT_TYPE_MINT,
            OperationKind::Burn => EVENT_TYPE_BURN,
            OperationKind::Transfer => EVENT_TYPE_TRANSFER,
        }
    }
}

/// Outcome of one successful bridge operation
#[derive(Clone, Debug, PartialEq)]
pub struct BridgeOperationRecord {
    pub kind: OperationKind,
    pub sender: String,
    pub receiver: String,
    pub amount: Uint256,
    /// Native denom of the pair
    pub denom: String,
    pub contract_address: VmAddress,
}

impl BridgeOperationRecord {
    pub fn to_event(&self) -> Event {
        Event::new(self.kind.event_type())
            .add_attribute(ATTRIBUTE_KEY_SENDER, &self.sender)
            .add_attribute(ATTRIBUTE_KEY_RECEIVER, &self.receiver)
            .add_attribute(ATTRIBUTE_KEY_AMOUNT, self.amount.to_string())
            .add_attribute(ATTRIBUTE_KEY_COSMOS_COIN, &self.denom)
            .add_attribute(ATTRIBUTE_KEY_ERC20_TOKEN, self.contract_address.to_hex())
    }
}

pub trait EventEmitter {
    fn emit(&mut self, record: BridgeOperationRecord);
}

/// Transition-scoped event log, in append order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventEmitter for EventLog {
    fn emit(&mut self, record: BridgeOperationRecord) {
        self.events.push(record.to_event());
    }
}
