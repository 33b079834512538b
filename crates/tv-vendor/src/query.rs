// SPDX-License-Identifier: AGPL-3.0-only
//! # Pair queries
//!
//! Read-only views over a [`Ledger`] for callers that want a pair together
//! with its live custody, or a quote that says whether it can be filled.
//! Nothing here starts an invocation or touches the event log.

use serde::Serialize;
use tv_core::{Address, AssetId, Pair, PairId, VendorResult};

use crate::ledger::Ledger;
use crate::state::VendorState;

/// Pair record plus live custody of its output asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairInfo {
    pub pair_id: PairId,
    pub token_in: AssetId,
    pub token_out: AssetId,
    pub numerator: u128,
    pub denominator: u128,
    pub beneficiary: Address,
    /// Vendor's balance of `token_out` (atomic units)
    pub custody: u128,
    /// Output per input scaled by `PRICE_PRECISION`; `None` if it overflows
    pub scaled_price: Option<u128>,
}

/// Result of [`compute_quote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub amount_out: u128,
    pub custody: u128,
    /// Custody covers `amount_out`
    pub fillable: bool,
}

fn pair_info(state: &VendorState, pair: &Pair) -> PairInfo {
    PairInfo {
        pair_id: pair.id,
        token_in: pair.token_in.clone(),
        token_out: pair.token_out.clone(),
        numerator: pair.numerator(),
        denominator: pair.denominator(),
        beneficiary: pair.beneficiary.clone(),
        custody: state.custody_balance(&pair.token_out),
        scaled_price: pair.ratio.scaled_price(),
    }
}

pub fn query_pair_info(ledger: &Ledger, pair_id: PairId) -> VendorResult<PairInfo> {
    ledger.read(|state| {
        let pair = state.registry().get_pair(pair_id)?;
        Ok(pair_info(state, pair))
    })?
}

/// Every pair in ascending id order.
pub fn list_all_pairs(ledger: &Ledger) -> VendorResult<Vec<PairInfo>> {
    ledger.read(|state| {
        state
            .registry()
            .pairs()
            .map(|pair| pair_info(state, pair))
            .collect()
    })
}

/// Quote a swap without executing it.
pub fn compute_quote(ledger: &Ledger, pair_id: PairId, amount_in: u128) -> VendorResult<Quote> {
    ledger.read(|state| {
        let amount_out = state
            .engine()
            .quote(state.registry(), pair_id, amount_in)?;
        let pair = state.registry().get_pair(pair_id)?;
        let custody = state.custody_balance(&pair.token_out);
        Ok(Quote {
            amount_out,
            custody,
            fillable: custody >= amount_out,
        })
    })?
}
