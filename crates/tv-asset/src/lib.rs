// SPDX-License-Identifier: AGPL-3.0-only
//! # Asset handles
//!
//! The vendor never implements a fungible token itself; it consumes one
//! through the narrow [`AssetHandle`] interface (balance, allowance,
//! approve, transfer, transferFrom).
//!
//! Two implementations are provided:
//! - [`MockToken`]: in-memory token used by tests and light simulations.
//! - [`ContractStateAsset`]: adapter over a deployed USP-01 token contract's
//!   key/value state (`bal:{addr}`, `allow:{owner}:{spender}`).
//!
//! [`Asset`] wraps either one so a single [`AssetBook`] can hold both.
//!
//! ## Transfer contract
//! Implementations validate before they mutate: a call that returns `Err`
//! leaves balances and allowances untouched. Zero-amount transfers succeed
//! as no-ops.

pub mod contract_state;
pub mod mock;

pub use contract_state::{ContractStateAsset, TokenInfo};
pub use mock::{MockToken, TokenMetadata};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tv_core::{AssetError, AssetId};

/// Read/transfer capability over one fungible asset.
pub trait AssetHandle {
    /// Ledger address of the asset contract.
    fn asset_id(&self) -> &str;

    fn balance_of(&self, account: &str) -> u128;

    fn allowance(&self, owner: &str, spender: &str) -> u128;

    /// Set `spender`'s allowance over `owner`'s balance (0 revokes).
    fn approve(&mut self, owner: &str, spender: &str, amount: u128) -> Result<(), AssetError>;

    /// Move `amount` from `from` (the caller) to `to`.
    fn transfer(&mut self, from: &str, to: &str, amount: u128) -> Result<(), AssetError>;

    /// Move `amount` from `from` to `to` on behalf of `spender`, consuming
    /// allowance.
    fn transfer_from(
        &mut self,
        spender: &str,
        from: &str,
        to: &str,
        amount: u128,
    ) -> Result<(), AssetError>;
}

/// Either asset implementation, dispatched through [`AssetHandle`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Asset {
    Mock(MockToken),
    Contract(ContractStateAsset),
}

impl Asset {
    fn handle(&self) -> &dyn AssetHandle {
        match self {
            Asset::Mock(t) => t,
            Asset::Contract(c) => c,
        }
    }

    fn handle_mut(&mut self) -> &mut dyn AssetHandle {
        match self {
            Asset::Mock(t) => t,
            Asset::Contract(c) => c,
        }
    }
}

impl From<MockToken> for Asset {
    fn from(t: MockToken) -> Self {
        Asset::Mock(t)
    }
}

impl From<ContractStateAsset> for Asset {
    fn from(c: ContractStateAsset) -> Self {
        Asset::Contract(c)
    }
}

impl AssetHandle for Asset {
    fn asset_id(&self) -> &str {
        self.handle().asset_id()
    }

    fn balance_of(&self, account: &str) -> u128 {
        self.handle().balance_of(account)
    }

    fn allowance(&self, owner: &str, spender: &str) -> u128 {
        self.handle().allowance(owner, spender)
    }

    fn approve(&mut self, owner: &str, spender: &str, amount: u128) -> Result<(), AssetError> {
        self.handle_mut().approve(owner, spender, amount)
    }

    fn transfer(&mut self, from: &str, to: &str, amount: u128) -> Result<(), AssetError> {
        self.handle_mut().transfer(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &str,
        from: &str,
        to: &str,
        amount: u128,
    ) -> Result<(), AssetError> {
        self.handle_mut().transfer_from(spender, from, to, amount)
    }
}

/// Assets known to a vendor store, keyed by asset id.
///
/// Entries are shared between clones of the book; [`AssetBook::get_mut`]
/// copies an asset only when another clone still holds it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetBook {
    assets: BTreeMap<AssetId, Arc<Asset>>,
}

impl AssetBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset under its own id. Returns the asset back if the id
    /// is already taken.
    pub fn insert(&mut self, asset: Asset) -> Result<(), Asset> {
        let id = asset.asset_id().to_string();
        if self.assets.contains_key(&id) {
            return Err(asset);
        }
        log::debug!("asset registered: {}", id);
        self.assets.insert(id, Arc::new(asset));
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.assets.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.get(id).map(Arc::as_ref)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Asset> {
        self.assets.get_mut(id).map(Arc::make_mut)
    }

    /// Whether `self` and `other` hold the same copy of asset `id`.
    pub fn shares(&self, other: &AssetBook, id: &str) -> bool {
        match (self.assets.get(id), other.assets.get(id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn ids(&self) -> Vec<AssetId> {
        self.assets.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────
// SHARED BALANCE MATH
// ─────────────────────────────────────────────────────────────

/// Balances after moving `amount` from `from_bal` to `to_bal`.
/// Returns `(new_from, new_to)` without touching storage.
pub(crate) fn checked_move(
    from_bal: u128,
    to_bal: u128,
    amount: u128,
) -> Result<(u128, u128), AssetError> {
    let new_from = from_bal
        .checked_sub(amount)
        .ok_or(AssetError::InsufficientBalance {
            have: from_bal,
            need: amount,
        })?;
    let new_to = to_bal.checked_add(amount).ok_or(AssetError::Overflow)?;
    Ok((new_from, new_to))
}
