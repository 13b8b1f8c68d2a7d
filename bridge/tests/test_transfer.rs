//! Transfer path: signed by the sender, both legs verified.

mod support;

use coin_bridge::events::{
    ATTRIBUTE_KEY_AMOUNT, ATTRIBUTE_KEY_COSMOS_COIN, ATTRIBUTE_KEY_RECEIVER, ATTRIBUTE_KEY_SENDER,
};
use coin_bridge::{BridgeError, Params};

use support::*;

#[test]
fn test_mint_then_transfer_scenario() {
    let mut h = Harness::new();
    h.mint(&BOB, 100).unwrap();

    let events = h.transfer(&BOB, &CAROL, 40).unwrap();

    assert_eq!(h.balance(&BOB), u(60));
    assert_eq!(h.balance(&CAROL), u(40));

    let event = &events[0];
    assert_eq!(event.ty, "transfer");
    assert_eq!(attr(event, ATTRIBUTE_KEY_SENDER), BOB.to_hex());
    assert_eq!(attr(event, ATTRIBUTE_KEY_RECEIVER), CAROL.to_hex());
    assert_eq!(attr(event, ATTRIBUTE_KEY_AMOUNT), "40");
    assert_eq!(attr(event, ATTRIBUTE_KEY_COSMOS_COIN), "foo");
}

#[test]
fn test_transfer_conserves_sum_and_spares_third_party() {
    let mut h = Harness::new();
    h.vm.set_balance(FOO_CONTRACT, BOB, u(500));
    h.vm.set_balance(FOO_CONTRACT, CAROL, u(20));
    h.vm.set_balance(FOO_CONTRACT, DAVE, u(9));

    for amount in [1u128, 77, 422] {
        let sum_before = h.balance(&BOB) + h.balance(&CAROL);
        h.transfer(&BOB, &CAROL, amount).unwrap();
        assert_eq!(h.balance(&BOB) + h.balance(&CAROL), sum_before);
        assert_eq!(h.balance(&DAVE), u(9));
    }
    assert_eq!(h.balance(&BOB), u(0));
    assert_eq!(h.balance(&CAROL), u(520));
}

#[test]
fn test_fee_on_transfer_is_balance_invariance() {
    let mut h = Harness::with_behavior(Behavior::FeeOnTransfer { fee: u(1) });
    h.vm.set_balance(FOO_CONTRACT, BOB, u(100));

    let err = h.transfer(&BOB, &CAROL, 40).unwrap_err();

    assert_eq!(
        err,
        BridgeError::BalanceInvariance {
            account: CAROL.to_hex(),
            expected: "40".to_string(),
            actual: u(39),
        }
    );
    assert_eq!(h.balance(&BOB), u(100));
    assert_eq!(h.balance(&CAROL), u(0));
}

#[test]
fn test_insufficient_balance_is_bridge_call_failed() {
    let mut h = Harness::new();
    h.vm.set_balance(FOO_CONTRACT, BOB, u(10));

    let err = h.transfer(&BOB, &CAROL, 11).unwrap_err();

    assert!(matches!(
        err,
        BridgeError::BridgeCallFailed { ref entry_point, .. } if entry_point == "transfer"
    ));
    assert_eq!(h.balance(&BOB), u(10));
    assert_eq!(h.balance(&CAROL), u(0));
}

#[test]
fn test_transfer_ignores_pair_enabled_flag() {
    let mut h = Harness::new();
    h.vm.set_balance(FOO_CONTRACT, BOB, u(10));
    h.toggle(FOO);

    h.transfer(&BOB, &CAROL, 10).unwrap();
    assert_eq!(h.balance(&CAROL), u(10));
}

#[test]
fn test_transfer_module_disabled() {
    let mut h = Harness::new();
    h.vm.set_balance(FOO_CONTRACT, BOB, u(10));
    h.params = Params::new(false, "evmos");

    assert_eq!(
        h.transfer(&BOB, &CAROL, 1).unwrap_err(),
        BridgeError::ModuleDisabled
    );
    assert_eq!(h.vm.calls(), 0);
}

#[test]
fn test_transfer_send_disabled_except_to_self() {
    let mut h = Harness::new();
    h.vm.set_balance(FOO_CONTRACT, BOB, u(10));
    h.bank = h.bank.clone().with_send_enabled(FOO, false);

    assert_eq!(
        h.transfer(&BOB, &CAROL, 1).unwrap_err(),
        BridgeError::SendDisabled {
            denom: FOO.to_string()
        }
    );

    let events = h.transfer(&BOB, &BOB, 4).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(h.balance(&BOB), u(10));
}

#[test]
fn test_transfer_to_blocked_receiver() {
    let mut h = Harness::new();
    h.vm.set_balance(FOO_CONTRACT, BOB, u(10));
    h.bank = h.bank.clone().with_blocked_addr(native(&CAROL));

    assert!(matches!(
        h.transfer(&BOB, &CAROL, 1).unwrap_err(),
        BridgeError::Unauthorized { .. }
    ));
    assert_eq!(h.balance(&BOB), u(10));
}

#[test]
fn test_self_transfer_leaves_balance_unchanged() {
    let mut h = Harness::new();
    h.vm.set_balance(FOO_CONTRACT, BOB, u(10));

    h.transfer(&BOB, &BOB, 10).unwrap();
    assert_eq!(h.balance(&BOB), u(10));

    // still bounded by the balance
    assert!(matches!(
        h.transfer(&BOB, &BOB, 11).unwrap_err(),
        BridgeError::BridgeCallFailed { .. }
    ));
}
