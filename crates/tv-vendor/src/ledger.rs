// SPDX-License-Identifier: AGPL-3.0-only
//! # Ledger store
//!
//! Owns the committed [`VendorState`] and the event log behind one mutex.
//! Every entry point is an *invocation*:
//!
//! 1. lock
//! 2. clone the committed state into a working copy
//! 3. run the operation against the copy, collecting events
//! 4. on `Ok`: swap the copy in and append the events with sequence numbers;
//!    on `Err`: drop the copy, append nothing
//!
//! so a failed call leaves balances, allowances, pairs and owner exactly as
//! they were.
//!
//! ## Snapshot Layout (JSON)
//! - `vendor`   → [`VendorState`] (identity, owner, pairs, policy, assets)
//! - `events`   → committed [`EventRecord`]s in order
//! - `next_seq` → sequence number of the next committed event

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tv_asset::{Asset, AssetBook, AssetHandle};
use tv_core::{
    Address, AssetError, AssetId, EventRecord, Pair, PairId, VendorConfig, VendorError,
    VendorEvent, VendorResult,
};

use crate::registry::NewPair;
use crate::state::VendorState;
use crate::swap::{SwapEngine, SwapRequest};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LedgerInner {
    vendor: VendorState,
    events: Vec<EventRecord>,
    next_seq: u64,
}

/// Shared handle to one vendor's committed state. Clones point at the same
/// store.
#[derive(Debug, Clone)]
pub struct Ledger {
    inner: Arc<Mutex<LedgerInner>>,
}

impl Ledger {
    pub fn new(vendor_address: &str, owner: &str) -> Self {
        Self::from_state(VendorState::new(vendor_address, owner))
    }

    fn from_state(vendor: VendorState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LedgerInner {
                vendor,
                events: Vec::new(),
                next_seq: 1,
            })),
        }
    }

    /// Build a store from configuration and an asset book, then create the
    /// configured bootstrap pairs in order through the owner-gated path.
    pub fn from_config(config: &VendorConfig, assets: AssetBook) -> VendorResult<Self> {
        config.validate()?;
        let mut vendor = VendorState::new(&config.vendor_address, &config.owner);
        vendor.wrapped_native = config.wrapped_native.clone();
        vendor.engine = SwapEngine::new(config.reject_zero_output);
        vendor.assets = assets;

        let ledger = Self::from_state(vendor);
        for pair in &config.pairs {
            ledger.create_pair(
                &config.owner,
                NewPair {
                    token_in: pair.token_in.clone(),
                    token_out: pair.token_out.clone(),
                    numerator: pair.numerator,
                    denominator: pair.denominator,
                    beneficiary: pair.beneficiary.clone(),
                },
            )?;
        }
        log::info!(
            "vendor {} ready: {} bootstrap pair(s)",
            config.vendor_address,
            config.pairs.len()
        );
        Ok(ledger)
    }

    fn lock(&self) -> VendorResult<MutexGuard<'_, LedgerInner>> {
        self.inner
            .lock()
            .map_err(|_| VendorError::Storage("Failed to lock vendor state".to_string()))
    }

    /// Run `op` as one invocation: commit on `Ok`, discard on `Err`.
    fn invoke<T>(
        &self,
        name: &str,
        op: impl FnOnce(&mut VendorState, &mut Vec<VendorEvent>) -> VendorResult<T>,
    ) -> VendorResult<T> {
        let mut inner = self.lock()?;
        let mut working = inner.vendor.clone();
        let mut events = Vec::new();

        match op(&mut working, &mut events) {
            Ok(value) => {
                inner.vendor = working;
                for event in events {
                    let seq = inner.next_seq;
                    inner.next_seq = seq.saturating_add(1);
                    inner.events.push(EventRecord { seq, event });
                }
                Ok(value)
            }
            Err(e) => {
                log::warn!("{} rejected: {}", name, e);
                Err(e)
            }
        }
    }

    /// Read committed state under the lock.
    pub fn read<T>(&self, f: impl FnOnce(&VendorState) -> T) -> VendorResult<T> {
        let inner = self.lock()?;
        Ok(f(&inner.vendor))
    }

    // ─────────────────────────────────────────────────────────────
    // ENTRY POINTS
    // ─────────────────────────────────────────────────────────────

    pub fn create_pair(&self, caller: &str, new_pair: NewPair) -> VendorResult<PairId> {
        let id = self.invoke("create_pair", |state, events| {
            state.create_pair(caller, new_pair, events)
        })?;
        log::info!("pair {} created by {}", id, caller);
        Ok(id)
    }

    pub fn set_price(
        &self,
        caller: &str,
        pair_id: PairId,
        numerator: u128,
        denominator: u128,
    ) -> VendorResult<()> {
        self.invoke("set_price", |state, events| {
            state.set_price(caller, pair_id, numerator, denominator, events)
        })?;
        log::info!("pair {} repriced to {}/{}", pair_id, numerator, denominator);
        Ok(())
    }

    /// Swap `amount_in` of the pair's input asset for its output asset.
    /// Returns the amount delivered to `recipient`.
    pub fn swap_tokens(
        &self,
        pair_id: PairId,
        amount_in: u128,
        payer: &str,
        recipient: &str,
    ) -> VendorResult<u128> {
        let request = SwapRequest {
            pair_id,
            amount_in,
            payer: payer.to_string(),
            recipient: recipient.to_string(),
        };
        let amount_out = self.invoke("swap_tokens", |state, events| {
            state.swap_tokens(&request, events)
        })?;
        log::debug!(
            "swap on pair {}: {} in from {}, {} out to {}",
            pair_id,
            amount_in,
            payer,
            amount_out,
            recipient
        );
        Ok(amount_out)
    }

    pub fn transfer_ownership(&self, caller: &str, new_owner: &str) -> VendorResult<()> {
        self.invoke("transfer_ownership", |state, events| {
            state.transfer_ownership(caller, new_owner, events)
        })?;
        log::info!("ownership moved from {} to {}", caller, new_owner);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    // ASSET-LEVEL INVOCATIONS
    // ─────────────────────────────────────────────────────────────

    /// Add an asset to the book. Ids are unique.
    pub fn register_asset(&self, asset: Asset) -> VendorResult<()> {
        self.invoke("register_asset", |state, _| {
            state
                .assets
                .insert(asset)
                .map_err(|rejected| VendorError::DuplicateAsset(rejected.asset_id().to_string()))
        })
    }

    /// Run `f` against one asset as its own invocation (holders approving
    /// the vendor, funding custody, minting test balances).
    pub fn with_asset_mut<T>(
        &self,
        asset_id: &str,
        f: impl FnOnce(&mut Asset) -> Result<T, AssetError>,
    ) -> VendorResult<T> {
        self.invoke("asset_call", |state, _| {
            let asset = state
                .assets
                .get_mut(asset_id)
                .ok_or_else(|| VendorError::UnknownAsset(asset_id.to_string()))?;
            f(asset).map_err(VendorError::from)
        })
    }

    pub fn approve(
        &self,
        asset_id: &str,
        owner: &str,
        spender: &str,
        amount: u128,
    ) -> VendorResult<()> {
        self.with_asset_mut(asset_id, |a| a.approve(owner, spender, amount))
    }

    pub fn transfer(&self, asset_id: &str, from: &str, to: &str, amount: u128) -> VendorResult<()> {
        self.with_asset_mut(asset_id, |a| a.transfer(from, to, amount))
    }

    // ─────────────────────────────────────────────────────────────
    // READ ACCESSORS
    // ─────────────────────────────────────────────────────────────

    pub fn get_pair(&self, pair_id: PairId) -> VendorResult<Pair> {
        self.read(|s| s.registry.get_pair(pair_id).cloned())?
    }

    pub fn owner(&self) -> VendorResult<Address> {
        self.read(|s| s.access.owner().to_string())
    }

    pub fn wrapped_native(&self) -> VendorResult<Option<AssetId>> {
        self.read(|s| s.wrapped_native.clone())
    }

    pub fn vendor_address(&self) -> VendorResult<Address> {
        self.read(|s| s.vendor_address.clone())
    }

    pub fn custody_balance(&self, asset_id: &str) -> VendorResult<u128> {
        self.read(|s| s.custody_balance(asset_id))
    }

    pub fn balance_of(&self, asset_id: &str, account: &str) -> VendorResult<u128> {
        self.read(|s| {
            s.assets
                .get(asset_id)
                .map(|a| a.balance_of(account))
                .ok_or_else(|| VendorError::UnknownAsset(asset_id.to_string()))
        })?
    }

    pub fn allowance(&self, asset_id: &str, owner: &str, spender: &str) -> VendorResult<u128> {
        self.read(|s| {
            s.assets
                .get(asset_id)
                .map(|a| a.allowance(owner, spender))
                .ok_or_else(|| VendorError::UnknownAsset(asset_id.to_string()))
        })?
    }

    pub fn pair_count(&self) -> VendorResult<usize> {
        self.read(|s| s.registry.pair_count())
    }

    /// All pairs in ascending id order.
    pub fn list_pairs(&self) -> VendorResult<Vec<Pair>> {
        self.read(|s| s.registry.pairs().cloned().collect())
    }

    pub fn next_pair_id(&self) -> VendorResult<PairId> {
        self.read(|s| s.registry.next_pair_id())
    }

    /// Output a swap would deliver right now. Moves nothing.
    pub fn quote(&self, pair_id: PairId, amount_in: u128) -> VendorResult<u128> {
        self.read(|s| s.engine.quote(&s.registry, pair_id, amount_in))?
    }

    pub fn events(&self) -> VendorResult<Vec<EventRecord>> {
        Ok(self.lock()?.events.clone())
    }

    /// Committed events with `seq > after`.
    pub fn events_since(&self, after: u64) -> VendorResult<Vec<EventRecord>> {
        let inner = self.lock()?;
        Ok(inner
            .events
            .iter()
            .filter(|r| r.seq > after)
            .cloned()
            .collect())
    }
}

// ─────────────────────────────────────────────────────────────────
// PERSISTENCE: Serialize/Deserialize the whole store
// ─────────────────────────────────────────────────────────────────

impl Ledger {
    pub fn serialize_all(&self) -> VendorResult<Vec<u8>> {
        let inner = self.lock()?;
        serde_json::to_vec(&*inner)
            .map_err(|e| VendorError::Storage(format!("Failed to serialize vendor state: {}", e)))
    }

    /// Replace the committed state with a snapshot. Returns the number of
    /// pairs restored.
    pub fn deserialize_all(&self, data: &[u8]) -> VendorResult<usize> {
        let snapshot: LedgerInner = serde_json::from_slice(data).map_err(|e| {
            VendorError::Storage(format!("Failed to deserialize vendor state: {}", e))
        })?;
        let count = snapshot.vendor.registry.pair_count();
        *self.lock()? = snapshot;
        Ok(count)
    }

    pub fn save_snapshot(&self, path: &Path) -> VendorResult<()> {
        let data = self.serialize_all()?;
        std::fs::write(path, data)
            .map_err(|e| VendorError::Storage(format!("Failed to write snapshot: {}", e)))
    }

    pub fn load_snapshot(&self, path: &Path) -> VendorResult<usize> {
        let data = std::fs::read(path)
            .map_err(|e| VendorError::Storage(format!("Failed to read snapshot: {}", e)))?;
        self.deserialize_all(&data)
    }
}
