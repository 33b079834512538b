// SPDX-License-Identifier: AGPL-3.0-only
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PROPERTY-BASED TESTS — tv-vendor
//
// Swaps deliver exactly floor(amount_in * n / d) and conserve both assets;
// any rejected invocation leaves the whole store byte-identical.
// Run: cargo test -p tv-vendor --test prop_vendor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use proptest::prelude::*;
use tv_asset::MockToken;
use tv_core::{PairId, VendorError};
use tv_vendor::{Ledger, NewPair};

const OWNER: &str = "LOSWowner";
const PAYER: &str = "LOSWpayer";
const RECIPIENT: &str = "LOSWrecipient";
const DEV: &str = "LOSWdev";
const VENDOR: &str = "LOSConVendor";
const TI: &str = "LOSConTI";
const TO: &str = "LOSConTO";

fn setup(payer_balance: u128, allowance: u128, custody: u128, n: u128, d: u128) -> (Ledger, PairId) {
    let ledger = Ledger::new(VENDOR, OWNER);
    ledger
        .register_asset(MockToken::new(TI, "tokenIn Token", "TI", 18, payer_balance, PAYER).unwrap().into())
        .unwrap();
    ledger
        .register_asset(MockToken::new(TO, "tokenOut Token", "TO", 18, custody, VENDOR).unwrap().into())
        .unwrap();
    ledger.approve(TI, PAYER, VENDOR, allowance).unwrap();
    let id = ledger
        .create_pair(
            OWNER,
            NewPair {
                token_in: TI.to_string(),
                token_out: TO.to_string(),
                numerator: n,
                denominator: d,
                beneficiary: DEV.to_string(),
            },
        )
        .unwrap();
    (ledger, id)
}

// ─────────────────────────────────────────────────────────────────
// SWAP PROPERTIES
// ─────────────────────────────────────────────────────────────────

proptest! {
    /// PROPERTY: a funded swap delivers exactly floor(amount_in * n / d)
    #[test]
    fn prop_swap_matches_floor(
        amount_in in 1u128..=1_000_000_000,
        n in 1u128..=1_000_000,
        d in 1u128..=1_000_000,
    ) {
        let expected = amount_in * n / d;
        let (ledger, id) = setup(amount_in, amount_in, expected, n, d);

        let out = ledger.swap_tokens(id, amount_in, PAYER, RECIPIENT).unwrap();
        prop_assert_eq!(out, expected);
        prop_assert_eq!(ledger.balance_of(TI, PAYER).unwrap(), 0);
        prop_assert_eq!(ledger.balance_of(TI, DEV).unwrap(), amount_in);
        prop_assert_eq!(ledger.balance_of(TO, RECIPIENT).unwrap(), expected);
        prop_assert_eq!(ledger.custody_balance(TO).unwrap(), 0);
    }

    /// PROPERTY: any rejected swap changes nothing, including the event log
    #[test]
    fn prop_failed_swap_changes_nothing(
        amount_in in 0u128..=10_000,
        payer_balance in 0u128..=10_000,
        allowance in 0u128..=10_000,
        custody in 0u128..=10_000,
        n in 1u128..=100,
        d in 1u128..=100,
    ) {
        let (ledger, id) = setup(payer_balance, allowance, custody, n, d);
        let before = ledger.serialize_all().unwrap();

        if let Err(e) = ledger.swap_tokens(id, amount_in, PAYER, RECIPIENT) {
            let expected_kind = matches!(
                e,
                VendorError::InvalidAmount
                    | VendorError::InsufficientFunds(_)
                    | VendorError::InsufficientLiquidity { .. }
            );
            prop_assert!(expected_kind);
            prop_assert_eq!(ledger.serialize_all().unwrap(), before);
        }
    }

    /// PROPERTY: custody never goes negative; an oversized swap is refused
    #[test]
    fn prop_custody_never_overdrawn(
        custody in 0u128..=1_000,
        amount_in in 1u128..=100_000,
    ) {
        let (ledger, id) = setup(amount_in, amount_in, custody, 12, 100);
        let required = amount_in * 12 / 100;
        let result = ledger.swap_tokens(id, amount_in, PAYER, PAYER);
        if required > custody {
            prop_assert_eq!(
                result,
                Err(VendorError::InsufficientLiquidity { available: custody, required })
            );
            prop_assert_eq!(ledger.custody_balance(TO).unwrap(), custody);
        } else {
            prop_assert_eq!(result, Ok(required));
            prop_assert_eq!(ledger.custody_balance(TO).unwrap(), custody - required);
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// REGISTRY PROPERTIES
// ─────────────────────────────────────────────────────────────────

proptest! {
    /// PROPERTY: ids run 1, 2, 3, ... in call order; failed calls burn no id
    #[test]
    fn prop_ids_sequential(calls in prop::collection::vec((any::<bool>(), 0u128..=3), 1..30)) {
        let (ledger, _) = setup(0, 0, 0, 1, 1);
        let mut expected_next = 2u64;
        for (as_owner, n) in calls {
            let caller = if as_owner { OWNER } else { PAYER };
            let result = ledger.create_pair(
                caller,
                NewPair {
                    token_in: TI.to_string(),
                    token_out: TO.to_string(),
                    numerator: n,
                    denominator: 1,
                    beneficiary: DEV.to_string(),
                },
            );
            if as_owner && n > 0 {
                prop_assert_eq!(result, Ok(expected_next));
                expected_next += 1;
            } else {
                prop_assert!(result.is_err());
            }
            prop_assert_eq!(ledger.next_pair_id().unwrap(), expected_next);
        }
    }

    /// PROPERTY: a zero ratio part is InvalidRatio for every caller
    #[test]
    fn prop_zero_ratio_always_invalid(as_owner in any::<bool>(), x in 1u128..) {
        let (ledger, id) = setup(0, 0, 0, 1, 1);
        let caller = if as_owner { OWNER } else { PAYER };
        let invalid = |r: Result<(), VendorError>| matches!(r, Err(VendorError::InvalidRatio { .. }));
        prop_assert!(invalid(ledger.set_price(caller, id, 0, x)));
        prop_assert!(invalid(ledger.set_price(caller, id, x, 0)));
    }
}
