// SPDX-License-Identifier: AGPL-3.0-only
//! # Swap engine
//!
//! Price changes and swaps against registered pairs.
//!
//! A swap is two asset movements:
//! 1. `amount_in` of `token_in`: payer → beneficiary (vendor spends the
//!    payer's allowance)
//! 2. `amount_out` of `token_out`: vendor custody → recipient
//!
//! with `amount_out = floor(amount_in * numerator / denominator)`.
//!
//! Custody is checked before either leg moves. The engine mutates the
//! state it is handed, so callers run it against a working copy and
//! discard that copy on `Err` (see [`crate::ledger::Ledger`]).

use serde::{Deserialize, Serialize};
use tv_asset::{AssetBook, AssetHandle};
use tv_core::{
    Address, AssetError, PairId, Ratio, VendorError, VendorEvent, VendorResult,
};

use crate::access::AccessControl;
use crate::registry::PairRegistry;

/// One swap invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub pair_id: PairId,
    pub amount_in: u128,
    pub payer: Address,
    pub recipient: Address,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapEngine {
    /// Fail with `ZeroOutput` instead of taking input for nothing
    reject_zero_output: bool,
}

impl SwapEngine {
    pub fn new(reject_zero_output: bool) -> Self {
        Self { reject_zero_output }
    }

    /// Overwrite a pair's ratio. Nothing else on the pair changes.
    #[allow(clippy::too_many_arguments)]
    pub fn set_price(
        &self,
        access: &AccessControl,
        registry: &mut PairRegistry,
        caller: &str,
        pair_id: PairId,
        numerator: u128,
        denominator: u128,
        events: &mut Vec<VendorEvent>,
    ) -> VendorResult<()> {
        let ratio = Ratio::new(numerator, denominator)?;
        access.require_owner(caller)?;
        let pair = registry.get_pair_mut(pair_id)?;
        pair.ratio = ratio;
        events.push(VendorEvent::PriceChanged {
            pair_id,
            numerator,
            denominator,
        });
        Ok(())
    }

    /// Output a swap of `amount_in` would deliver, without moving anything.
    pub fn quote(
        &self,
        registry: &PairRegistry,
        pair_id: PairId,
        amount_in: u128,
    ) -> VendorResult<u128> {
        let pair = registry.get_pair(pair_id)?;
        if amount_in == 0 {
            return Err(VendorError::InvalidAmount);
        }
        let amount_out = pair.ratio.apply(amount_in)?;
        if amount_out == 0 && self.reject_zero_output {
            return Err(VendorError::ZeroOutput { amount_in });
        }
        Ok(amount_out)
    }

    /// Execute a swap and return `amount_out`.
    pub fn swap_tokens(
        &self,
        registry: &PairRegistry,
        assets: &mut AssetBook,
        vendor: &str,
        request: &SwapRequest,
        events: &mut Vec<VendorEvent>,
    ) -> VendorResult<u128> {
        let amount_out = self.quote(registry, request.pair_id, request.amount_in)?;
        let pair = registry.get_pair(request.pair_id)?;

        let available = assets
            .get(&pair.token_out)
            .ok_or_else(|| VendorError::UnknownAsset(pair.token_out.clone()))?
            .balance_of(vendor);
        if available < amount_out {
            return Err(VendorError::InsufficientLiquidity {
                available,
                required: amount_out,
            });
        }

        // Leg 1: payer → beneficiary
        assets
            .get_mut(&pair.token_in)
            .ok_or_else(|| VendorError::UnknownAsset(pair.token_in.clone()))?
            .transfer_from(
                vendor,
                &request.payer,
                &pair.beneficiary,
                request.amount_in,
            )
            .map_err(payer_leg_error)?;

        // Leg 2: custody → recipient
        assets
            .get_mut(&pair.token_out)
            .ok_or_else(|| VendorError::UnknownAsset(pair.token_out.clone()))?
            .transfer(vendor, &request.recipient, amount_out)
            .map_err(custody_leg_error)?;

        events.push(VendorEvent::Swap {
            pair_id: pair.id,
            payer: request.payer.clone(),
            recipient: request.recipient.clone(),
            amount_in: request.amount_in,
            amount_out,
        });
        Ok(amount_out)
    }
}

fn payer_leg_error(e: AssetError) -> VendorError {
    match e {
        AssetError::InsufficientBalance { .. } | AssetError::InsufficientAllowance { .. } => {
            VendorError::InsufficientFunds(e)
        }
        other => VendorError::Asset(other),
    }
}

fn custody_leg_error(e: AssetError) -> VendorError {
    match e {
        AssetError::InsufficientBalance { have, need } => VendorError::InsufficientLiquidity {
            available: have,
            required: need,
        },
        other => VendorError::Asset(other),
    }
}
