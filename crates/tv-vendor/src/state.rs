// SPDX-License-Identifier: AGPL-3.0-only
//! Everything one vendor owns: identity, owner, pairs, swap policy and the
//! assets it trades. [`crate::ledger::Ledger`] keeps one committed copy and
//! runs each invocation against a clone of it.
//!
//! The registry and each asset sit behind an `Arc`, so that clone is
//! shallow; an invocation copies only what it writes.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tv_asset::{AssetBook, AssetHandle};
use tv_core::{Address, AssetId, PairId, VendorEvent, VendorResult};

use crate::access::AccessControl;
use crate::registry::{NewPair, PairRegistry};
use crate::swap::{SwapEngine, SwapRequest};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorState {
    pub(crate) vendor_address: Address,
    pub(crate) wrapped_native: Option<AssetId>,
    pub(crate) access: AccessControl,
    pub(crate) registry: Arc<PairRegistry>,
    pub(crate) engine: SwapEngine,
    pub(crate) assets: AssetBook,
}

impl VendorState {
    pub fn new(vendor_address: &str, owner: &str) -> Self {
        Self {
            vendor_address: vendor_address.to_string(),
            wrapped_native: None,
            access: AccessControl::new(owner),
            registry: Arc::new(PairRegistry::new()),
            engine: SwapEngine::default(),
            assets: AssetBook::new(),
        }
    }

    pub fn vendor_address(&self) -> &str {
        &self.vendor_address
    }

    pub fn wrapped_native(&self) -> Option<&str> {
        self.wrapped_native.as_deref()
    }

    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    pub fn registry(&self) -> &PairRegistry {
        &self.registry
    }

    pub fn engine(&self) -> &SwapEngine {
        &self.engine
    }

    pub fn assets(&self) -> &AssetBook {
        &self.assets
    }

    /// Vendor's own balance of `asset`; 0 for unknown assets.
    pub fn custody_balance(&self, asset: &str) -> u128 {
        self.assets
            .get(asset)
            .map(|a| a.balance_of(&self.vendor_address))
            .unwrap_or(0)
    }

    // ── Mutations (run against a working copy) ──

    pub(crate) fn create_pair(
        &mut self,
        caller: &str,
        new_pair: NewPair,
        events: &mut Vec<VendorEvent>,
    ) -> VendorResult<PairId> {
        Arc::make_mut(&mut self.registry)
            .create_pair(&self.access, &self.assets, caller, new_pair, events)
    }

    pub(crate) fn set_price(
        &mut self,
        caller: &str,
        pair_id: PairId,
        numerator: u128,
        denominator: u128,
        events: &mut Vec<VendorEvent>,
    ) -> VendorResult<()> {
        self.engine.set_price(
            &self.access,
            Arc::make_mut(&mut self.registry),
            caller,
            pair_id,
            numerator,
            denominator,
            events,
        )
    }

    pub(crate) fn swap_tokens(
        &mut self,
        request: &SwapRequest,
        events: &mut Vec<VendorEvent>,
    ) -> VendorResult<u128> {
        self.engine.swap_tokens(
            &self.registry,
            &mut self.assets,
            &self.vendor_address,
            request,
            events,
        )
    }

    pub(crate) fn transfer_ownership(
        &mut self,
        caller: &str,
        new_owner: &str,
        events: &mut Vec<VendorEvent>,
    ) -> VendorResult<()> {
        self.access.transfer_ownership(caller, new_owner, events)
    }
}
