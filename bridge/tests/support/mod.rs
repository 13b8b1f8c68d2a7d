//! Shared fixtures for the bridge integration tests.
//!
//! - `MockVm`: in-memory token contracts with configurable misbehavior
//! - `transition`: host-style rollback of VM writes on a failed operation
//! - `Harness`: registry storage, params, bank settings and a `MockVm`

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};

use cosmwasm_std::{Addr, Binary, Event, MemoryStorage, Response, Uint256};
use tracing_subscriber::EnvFilter;

use coin_bridge::msg_server;
use coin_bridge::registry::{register_token_pair, toggle_conversion};
use coin_bridge::{
    BankParams, BridgeError, BridgeKeeper, Context, EventLog, ExecuteMsg, Owner, Params,
    StoreRegistry, TokenCall, TokenPair, VirtualMachineBridge, VmError, MODULE_NAME,
};
use common::{module_address, VmAddress};

// ============================================================================
// Accounts
// ============================================================================

pub const FOO: &str = "foo";
pub const FOO_CONTRACT: VmAddress = VmAddress([0xAA; 20]);
pub const BOB: VmAddress = VmAddress([0xBB; 20]);
pub const CAROL: VmAddress = VmAddress([0xCC; 20]);
pub const DAVE: VmAddress = VmAddress([0xDD; 20]);

pub fn u(amount: u128) -> Uint256 {
    Uint256::from(amount)
}

pub fn authority() -> VmAddress {
    module_address(MODULE_NAME)
}

/// Native signer `C` of the requests
pub fn creator() -> Addr {
    VmAddress([0xC0; 20]).to_native("evmos").unwrap()
}

pub fn native(account: &VmAddress) -> Addr {
    account.to_native("evmos").unwrap()
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init()
        .ok();
}

pub fn attr(event: &Event, key: &str) -> String {
    event
        .attributes
        .iter()
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("event {} has no attribute {}", event.ty, key))
}

// ============================================================================
// Mock VM
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Behavior {
    Standard,
    /// Transfer delivers `amount - fee`; the fee disappears
    FeeOnTransfer { fee: Uint256 },
    /// Mint credits one unit less than requested
    ShortMint,
    /// Every call reverts
    Revert,
    /// Burn succeeds past the holder's balance and floors at zero
    LenientBurn,
    /// Balance queries fail
    QueryUnavailable,
}

pub type Balances = BTreeMap<(VmAddress, VmAddress), Uint256>;

#[derive(Clone, Debug)]
pub struct MockVm {
    behavior: Behavior,
    /// contract -> minter
    minters: HashMap<VmAddress, VmAddress>,
    balances: Balances,
    calls: usize,
    queries: Cell<usize>,
}

impl MockVm {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            minters: HashMap::new(),
            balances: BTreeMap::new(),
            calls: 0,
            queries: Cell::new(0),
        }
    }

    pub fn with_contract(mut self, contract: VmAddress, minter: VmAddress) -> Self {
        self.minters.insert(contract, minter);
        self
    }

    pub fn set_behavior(&mut self, behavior: Behavior) {
        self.behavior = behavior;
    }

    pub fn set_balance(&mut self, contract: VmAddress, account: VmAddress, amount: Uint256) {
        self.balances.insert((contract, account), amount);
    }

    pub fn balance(&self, contract: &VmAddress, account: &VmAddress) -> Uint256 {
        self.balances
            .get(&(*contract, *account))
            .copied()
            .unwrap_or_else(Uint256::zero)
    }

    pub fn balances(&self) -> Balances {
        self.balances.clone()
    }

    pub fn restore(&mut self, balances: Balances) {
        self.balances = balances;
    }

    /// State-changing calls attempted so far
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Balance queries answered or refused so far
    pub fn queries(&self) -> usize {
        self.queries.get()
    }

    fn revert(reason: &str) -> VmError {
        VmError::Reverted {
            reason: reason.to_string(),
        }
    }

    fn credit(&mut self, contract: &VmAddress, account: &VmAddress, amount: Uint256) -> Result<(), VmError> {
        let balance = self
            .balance(contract, account)
            .checked_add(amount)
            .map_err(|e| VmError::Execution {
                reason: e.to_string(),
            })?;
        self.set_balance(*contract, *account, balance);
        Ok(())
    }

    fn debit(&mut self, contract: &VmAddress, account: &VmAddress, amount: Uint256) -> Result<(), VmError> {
        let balance = self
            .balance(contract, account)
            .checked_sub(amount)
            .map_err(|_| Self::revert("amount exceeds balance"))?;
        self.set_balance(*contract, *account, balance);
        Ok(())
    }
}

impl VirtualMachineBridge for MockVm {
    fn call(
        &mut self,
        caller: &VmAddress,
        contract: &VmAddress,
        call: &TokenCall,
    ) -> Result<Binary, VmError> {
        self.calls += 1;

        let minter = *self
            .minters
            .get(contract)
            .ok_or_else(|| VmError::ContractNotFound {
                address: contract.to_hex(),
            })?;
        if self.behavior == Behavior::Revert {
            return Err(Self::revert("execution reverted"));
        }

        match call {
            TokenCall::Mint { to, amount } => {
                if *caller != minter {
                    return Err(Self::revert("caller is not the minter"));
                }
                let credited = match self.behavior {
                    Behavior::ShortMint => *amount - Uint256::from(1u128),
                    _ => *amount,
                };
                self.credit(contract, to, credited)?;
            }
            TokenCall::BurnCoins { from, amount } => {
                if *caller != minter {
                    return Err(Self::revert("caller is not the minter"));
                }
                if self.behavior == Behavior::LenientBurn {
                    let left = self.balance(contract, from).saturating_sub(*amount);
                    self.set_balance(*contract, *from, left);
                } else {
                    self.debit(contract, from, *amount)?;
                }
            }
            TokenCall::Transfer { to, amount } => {
                self.debit(contract, caller, *amount)?;
                let delivered = match &self.behavior {
                    Behavior::FeeOnTransfer { fee } => amount.saturating_sub(*fee),
                    _ => *amount,
                };
                self.credit(contract, to, delivered)?;
            }
        }

        Ok(Binary::from(b"true".to_vec()))
    }

    fn balance_of(&self, contract: &VmAddress, account: &VmAddress) -> Result<Uint256, VmError> {
        self.queries.set(self.queries.get() + 1);
        if self.behavior == Behavior::QueryUnavailable {
            return Err(VmError::Execution {
                reason: "state unavailable".to_string(),
            });
        }
        if !self.minters.contains_key(contract) {
            return Err(VmError::ContractNotFound {
                address: contract.to_hex(),
            });
        }
        Ok(self.balance(contract, account))
    }
}

/// Run `op` as one state transition: VM writes are discarded when it fails.
pub fn transition<T>(
    vm: &mut MockVm,
    op: impl FnOnce(&mut MockVm) -> Result<T, BridgeError>,
) -> Result<T, BridgeError> {
    let checkpoint = vm.balances();
    let result = op(vm);
    if result.is_err() {
        vm.restore(checkpoint);
    }
    result
}

// ============================================================================
// Harness
// ============================================================================

pub struct Harness {
    pub storage: MemoryStorage,
    pub params: Params,
    pub bank: BankParams,
    pub vm: MockVm,
}

impl Harness {
    /// Registry with the enabled pair `{foo, 0xaa..aa}` and a standard VM
    pub fn new() -> Self {
        Self::with_behavior(Behavior::Standard)
    }

    pub fn with_behavior(behavior: Behavior) -> Self {
        init_tracing();

        let mut storage = MemoryStorage::new();
        register_token_pair(&mut storage, &TokenPair::new(FOO, FOO_CONTRACT, Owner::Module))
            .unwrap();

        Self {
            storage,
            params: Params::default(),
            bank: BankParams::default(),
            vm: MockVm::new(behavior).with_contract(FOO_CONTRACT, authority()),
        }
    }

    pub fn toggle(&mut self, token: &str) -> TokenPair {
        toggle_conversion(&mut self.storage, token).unwrap()
    }

    pub fn balance(&self, account: &VmAddress) -> Uint256 {
        self.vm.balance(&FOO_CONTRACT, account)
    }

    pub fn mint(&mut self, account: &VmAddress, amount: u128) -> Result<Vec<Event>, BridgeError> {
        self.mint_token(FOO, account, amount)
    }

    pub fn mint_token(
        &mut self,
        token: &str,
        account: &VmAddress,
        amount: u128,
    ) -> Result<Vec<Event>, BridgeError> {
        let (storage, params, bank) = (&self.storage, &self.params, &self.bank);
        transition(&mut self.vm, |vm| {
            let mut keeper =
                BridgeKeeper::new(StoreRegistry::new(storage), vm, bank, authority());
            let mut log = EventLog::new();
            keeper.mint(
                &mut Context::new(params, &mut log),
                &creator(),
                account,
                token,
                u(amount),
            )?;
            Ok(log.into_events())
        })
    }

    pub fn burn(&mut self, account: &VmAddress, amount: u128) -> Result<Vec<Event>, BridgeError> {
        let (storage, params, bank) = (&self.storage, &self.params, &self.bank);
        transition(&mut self.vm, |vm| {
            let mut keeper =
                BridgeKeeper::new(StoreRegistry::new(storage), vm, bank, authority());
            let mut log = EventLog::new();
            keeper.burn(
                &mut Context::new(params, &mut log),
                &creator(),
                account,
                FOO,
                u(amount),
            )?;
            Ok(log.into_events())
        })
    }

    pub fn transfer(
        &mut self,
        from: &VmAddress,
        to: &VmAddress,
        amount: u128,
    ) -> Result<Vec<Event>, BridgeError> {
        let (storage, params, bank) = (&self.storage, &self.params, &self.bank);
        transition(&mut self.vm, |vm| {
            let mut keeper =
                BridgeKeeper::new(StoreRegistry::new(storage), vm, bank, authority());
            let mut log = EventLog::new();
            keeper.transfer(&mut Context::new(params, &mut log), from, to, FOO, u(amount))?;
            Ok(log.into_events())
        })
    }

    pub fn execute(&mut self, msg: ExecuteMsg) -> Result<Response, BridgeError> {
        let (storage, params, bank) = (&self.storage, &self.params, &self.bank);
        transition(&mut self.vm, |vm| {
            let mut keeper =
                BridgeKeeper::new(StoreRegistry::new(storage), vm, bank, authority());
            msg_server::execute(&mut keeper, params, msg)
        })
    }
}
