// SPDX-License-Identifier: AGPL-3.0-only
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PROPERTY-BASED TESTS — tv-asset
//
// Both asset implementations conserve supply across arbitrary transfer
// sequences and agree with each other step for step.
// Run: cargo test -p tv-asset --test prop_asset
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use proptest::prelude::*;
use tv_asset::{Asset, AssetHandle, ContractStateAsset, MockToken};

const HOLDERS: [&str; 4] = ["LOSWa", "LOSWb", "LOSWc", "LOSWd"];
const SUPPLY: u128 = 1_000_000;

#[derive(Debug, Clone)]
enum Op {
    Transfer { from: usize, to: usize, amount: u128 },
    Approve { owner: usize, spender: usize, amount: u128 },
    TransferFrom { spender: usize, from: usize, to: usize, amount: u128 },
}

fn op() -> impl Strategy<Value = Op> {
    let who = 0usize..HOLDERS.len();
    let amount = 0u128..=SUPPLY / 2;
    prop_oneof![
        (who.clone(), who.clone(), amount.clone())
            .prop_map(|(from, to, amount)| Op::Transfer { from, to, amount }),
        (who.clone(), who.clone(), amount.clone())
            .prop_map(|(owner, spender, amount)| Op::Approve { owner, spender, amount }),
        (who.clone(), who.clone(), who, amount).prop_map(|(spender, from, to, amount)| {
            Op::TransferFrom { spender, from, to, amount }
        }),
    ]
}

fn apply(asset: &mut Asset, op: &Op) -> bool {
    match *op {
        Op::Transfer { from, to, amount } => asset.transfer(HOLDERS[from], HOLDERS[to], amount),
        Op::Approve { owner, spender, amount } => {
            asset.approve(HOLDERS[owner], HOLDERS[spender], amount)
        }
        Op::TransferFrom { spender, from, to, amount } => {
            asset.transfer_from(HOLDERS[spender], HOLDERS[from], HOLDERS[to], amount)
        }
    }
    .is_ok()
}

fn total(asset: &Asset) -> u128 {
    HOLDERS.iter().map(|h| asset.balance_of(h)).sum()
}

proptest! {
    /// PROPERTY: no sequence of transfers creates or destroys units
    #[test]
    fn prop_supply_conserved(ops in prop::collection::vec(op(), 1..50)) {
        let mut mock: Asset = MockToken::new("LOSConM", "Mock", "MCK", 8, SUPPLY, HOLDERS[0])
            .unwrap()
            .into();
        for op in &ops {
            apply(&mut mock, op);
            prop_assert_eq!(total(&mock), SUPPLY);
        }
    }

    /// PROPERTY: the in-memory token and the USP-01 state adapter accept and
    /// reject the same operations and end with the same balances
    #[test]
    fn prop_implementations_agree(ops in prop::collection::vec(op(), 1..50)) {
        let mut mock: Asset = MockToken::new("LOSConM", "Mock", "MCK", 8, SUPPLY, HOLDERS[0])
            .unwrap()
            .into();
        let mut contract: Asset = ContractStateAsset::deploy("LOSConC", "Mock", "MCK", 8, SUPPLY, HOLDERS[0])
            .unwrap()
            .into();
        for op in &ops {
            prop_assert_eq!(apply(&mut mock, op), apply(&mut contract, op));
        }
        for owner in HOLDERS {
            prop_assert_eq!(mock.balance_of(owner), contract.balance_of(owner));
            for spender in HOLDERS {
                prop_assert_eq!(mock.allowance(owner, spender), contract.allowance(owner, spender));
            }
        }
    }
}
