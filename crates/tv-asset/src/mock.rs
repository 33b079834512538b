// SPDX-License-Identifier: AGPL-3.0-only
//! # In-memory token
//!
//! Reference fungible token used for:
//! 1. Unit and integration testing of the vendor
//! 2. Light simulation without a deployed token contract
//!
//! Mirrors the USP-01 semantics: the creator receives the initial supply,
//! `transfer_from` consumes allowance, amounts are atomic `u128` units.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tv_core::{AssetError, AssetId};

use crate::{checked_move, AssetHandle};

// ─────────────────────────────────────────────────────────────
// TOKEN METADATA
// ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenMetadata {
    /// Human-readable name (e.g. "tokenIn Token")
    pub name: String,
    /// Ticker symbol, max 8 characters
    pub symbol: String,
    /// Decimal places for display (0-18)
    pub decimals: u8,
    /// Total supply in atomic units
    pub total_supply: u128,
}

impl TokenMetadata {
    pub fn validate(&self) -> Result<(), AssetError> {
        if self.name.is_empty() || self.name.len() > 64 {
            return Err(AssetError::InvalidMetadata(
                "Name must be 1-64 characters".to_string(),
            ));
        }
        if self.symbol.is_empty() || self.symbol.len() > 8 {
            return Err(AssetError::InvalidMetadata(
                "Symbol must be 1-8 characters".to_string(),
            ));
        }
        if self.decimals > 18 {
            return Err(AssetError::InvalidMetadata(
                "Decimals must be 0-18".to_string(),
            ));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
// TOKEN STATE
// ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockToken {
    pub address: AssetId,
    pub metadata: TokenMetadata,
    /// BTreeMap for deterministic serialization
    balances: BTreeMap<String, u128>,
    /// owner → spender → allowance
    allowances: BTreeMap<String, BTreeMap<String, u128>>,
}

impl MockToken {
    /// Create a token with `total_supply` assigned to `creator`.
    /// A zero supply is allowed; fund holders later with [`MockToken::mint`].
    pub fn new(
        address: &str,
        name: &str,
        symbol: &str,
        decimals: u8,
        total_supply: u128,
        creator: &str,
    ) -> Result<Self, AssetError> {
        if address.is_empty() || creator.is_empty() {
            return Err(AssetError::InvalidAddress);
        }
        let metadata = TokenMetadata {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
            total_supply,
        };
        metadata.validate()?;

        let mut balances = BTreeMap::new();
        if total_supply > 0 {
            balances.insert(creator.to_string(), total_supply);
        }

        Ok(Self {
            address: address.to_string(),
            metadata,
            balances,
            allowances: BTreeMap::new(),
        })
    }

    pub fn total_supply(&self) -> u128 {
        self.metadata.total_supply
    }

    /// Create new units for `to`, growing total supply.
    pub fn mint(&mut self, to: &str, amount: u128) -> Result<(), AssetError> {
        if to.is_empty() {
            return Err(AssetError::InvalidAddress);
        }
        let supply = self
            .metadata
            .total_supply
            .checked_add(amount)
            .ok_or(AssetError::Overflow)?;
        let bal = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(AssetError::Overflow)?;
        self.set_balance(to, bal);
        self.metadata.total_supply = supply;
        Ok(())
    }

    /// Permanently destroy `amount` of `from`'s balance.
    pub fn burn(&mut self, from: &str, amount: u128) -> Result<(), AssetError> {
        let have = self.balance_of(from);
        let bal = have
            .checked_sub(amount)
            .ok_or(AssetError::InsufficientBalance { have, need: amount })?;
        self.set_balance(from, bal);
        self.metadata.total_supply = self.metadata.total_supply.saturating_sub(amount);
        Ok(())
    }

    fn set_balance(&mut self, account: &str, amount: u128) {
        if amount == 0 {
            self.balances.remove(account);
        } else {
            self.balances.insert(account.to_string(), amount);
        }
    }

    /// Debit/credit pair, validated before either write.
    fn move_balance(&mut self, from: &str, to: &str, amount: u128) -> Result<(), AssetError> {
        if from == to {
            let have = self.balance_of(from);
            if have < amount {
                return Err(AssetError::InsufficientBalance { have, need: amount });
            }
            return Ok(());
        }
        let (new_from, new_to) = checked_move(self.balance_of(from), self.balance_of(to), amount)?;
        self.set_balance(from, new_from);
        self.set_balance(to, new_to);
        Ok(())
    }
}

impl AssetHandle for MockToken {
    fn asset_id(&self) -> &str {
        &self.address
    }

    fn balance_of(&self, account: &str) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn allowance(&self, owner: &str, spender: &str) -> u128 {
        self.allowances
            .get(owner)
            .and_then(|m| m.get(spender))
            .copied()
            .unwrap_or(0)
    }

    fn approve(&mut self, owner: &str, spender: &str, amount: u128) -> Result<(), AssetError> {
        if owner.is_empty() || spender.is_empty() {
            return Err(AssetError::InvalidAddress);
        }
        if amount > 0 {
            self.allowances
                .entry(owner.to_string())
                .or_default()
                .insert(spender.to_string(), amount);
        } else if let Some(spenders) = self.allowances.get_mut(owner) {
            spenders.remove(spender);
            if spenders.is_empty() {
                self.allowances.remove(owner);
            }
        }
        Ok(())
    }

    fn transfer(&mut self, from: &str, to: &str, amount: u128) -> Result<(), AssetError> {
        if to.is_empty() {
            return Err(AssetError::InvalidAddress);
        }
        if amount == 0 {
            return Ok(());
        }
        self.move_balance(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &str,
        from: &str,
        to: &str,
        amount: u128,
    ) -> Result<(), AssetError> {
        if to.is_empty() {
            return Err(AssetError::InvalidAddress);
        }
        if amount == 0 {
            return Ok(());
        }
        let allowance = self.allowance(from, spender);
        if allowance < amount {
            return Err(AssetError::InsufficientAllowance {
                have: allowance,
                need: amount,
            });
        }
        self.move_balance(from, to, amount)?;
        self.approve(from, spender, allowance - amount)
    }
}

// ─────────────────────────────────────────────────────────────
// TESTS
// ─────────────────────────────────────────────────────────────
