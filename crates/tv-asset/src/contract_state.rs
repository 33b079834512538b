// SPDX-License-Identifier: AGPL-3.0-only
//! # USP-01 contract-state adapter
//!
//! Operates on a deployed USP-01 token contract's key/value state directly,
//! without executing WASM. The host hands the contract state in, the vendor
//! reads and mutates it through [`AssetHandle`], and the host writes
//! [`ContractStateAsset::state`] back on commit.
//!
//! ## State Layout (decimal strings)
//! - `usp01:init`              → "1" when initialized
//! - `usp01:name`              → Token name
//! - `usp01:symbol`            → Ticker symbol
//! - `usp01:decimals`          → Decimal places
//! - `usp01:total_supply`      → Total supply
//! - `usp01:owner`             → Token creator address
//! - `bal:{address}`           → Balance
//! - `allow:{owner}:{spender}` → Allowance

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tv_core::{AssetError, AssetId};

use crate::{checked_move, AssetHandle};

const INIT_KEY: &str = "usp01:init";
const NAME_KEY: &str = "usp01:name";
const SYMBOL_KEY: &str = "usp01:symbol";
const DECIMALS_KEY: &str = "usp01:decimals";
const TOTAL_SUPPLY_KEY: &str = "usp01:total_supply";
const OWNER_KEY: &str = "usp01:owner";

/// Summary of a USP-01 token, derived from contract state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenInfo {
    pub contract: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u64,
    pub total_supply: u128,
    pub owner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractStateAsset {
    contract: AssetId,
    state: BTreeMap<String, String>,
}

/// Check if a contract's state represents an initialized USP-01 token.
pub fn is_usp01_token(state: &BTreeMap<String, String>) -> bool {
    state.get(INIT_KEY).map(String::as_str) == Some("1")
        && state.get(SYMBOL_KEY).is_some_and(|v| !v.is_empty())
}

impl ContractStateAsset {
    /// Wrap existing contract state. Fails if it isn't an initialized
    /// USP-01 token.
    pub fn from_state(contract: &str, state: BTreeMap<String, String>) -> Result<Self, AssetError> {
        if contract.is_empty() {
            return Err(AssetError::InvalidAddress);
        }
        if !is_usp01_token(&state) {
            return Err(AssetError::NotInitialized);
        }
        Ok(Self {
            contract: contract.to_string(),
            state,
        })
    }

    /// Build the state an initialized USP-01 contract would hold right after
    /// deployment, with the whole supply credited to `creator`.
    pub fn deploy(
        contract: &str,
        name: &str,
        symbol: &str,
        decimals: u64,
        total_supply: u128,
        creator: &str,
    ) -> Result<Self, AssetError> {
        if name.is_empty() || name.len() > 64 {
            return Err(AssetError::InvalidMetadata(
                "name required (1-64 chars)".to_string(),
            ));
        }
        if symbol.is_empty() || symbol.len() > 8 {
            return Err(AssetError::InvalidMetadata(
                "symbol required (1-8 chars)".to_string(),
            ));
        }
        if decimals > 18 {
            return Err(AssetError::InvalidMetadata(
                "decimals must be 0-18".to_string(),
            ));
        }
        if creator.is_empty() {
            return Err(AssetError::InvalidAddress);
        }

        let mut state = BTreeMap::new();
        state.insert(INIT_KEY.to_string(), "1".to_string());
        state.insert(NAME_KEY.to_string(), name.to_string());
        state.insert(SYMBOL_KEY.to_string(), symbol.to_string());
        state.insert(DECIMALS_KEY.to_string(), decimals.to_string());
        state.insert(TOTAL_SUPPLY_KEY.to_string(), total_supply.to_string());
        state.insert(OWNER_KEY.to_string(), creator.to_string());
        state.insert(bal_key(creator), total_supply.to_string());
        Self::from_state(contract, state)
    }

    /// Current contract state, for the host to persist.
    pub fn state(&self) -> &BTreeMap<String, String> {
        &self.state
    }

    pub fn into_state(self) -> BTreeMap<String, String> {
        self.state
    }

    pub fn token_info(&self) -> TokenInfo {
        TokenInfo {
            contract: self.contract.clone(),
            name: self.state.get(NAME_KEY).cloned().unwrap_or_default(),
            symbol: self.state.get(SYMBOL_KEY).cloned().unwrap_or_default(),
            decimals: parse_state_u64(&self.state, DECIMALS_KEY),
            total_supply: parse_state_u128(&self.state, TOTAL_SUPPLY_KEY),
            owner: self.state.get(OWNER_KEY).cloned().unwrap_or_default(),
        }
    }

    fn set_u128(&mut self, key: String, val: u128) {
        self.state.insert(key, val.to_string());
    }

    fn move_balance(&mut self, from: &str, to: &str, amount: u128) -> Result<(), AssetError> {
        let from_bal = self.balance_of(from);
        if from == to {
            if from_bal < amount {
                return Err(AssetError::InsufficientBalance {
                    have: from_bal,
                    need: amount,
                });
            }
            return Ok(());
        }
        let (new_from, new_to) = checked_move(from_bal, self.balance_of(to), amount)?;
        self.set_u128(bal_key(from), new_from);
        self.set_u128(bal_key(to), new_to);
        Ok(())
    }
}

impl AssetHandle for ContractStateAsset {
    fn asset_id(&self) -> &str {
        &self.contract
    }

    fn balance_of(&self, account: &str) -> u128 {
        parse_state_u128(&self.state, &bal_key(account))
    }

    fn allowance(&self, owner: &str, spender: &str) -> u128 {
        parse_state_u128(&self.state, &allow_key(owner, spender))
    }

    fn approve(&mut self, owner: &str, spender: &str, amount: u128) -> Result<(), AssetError> {
        if owner.is_empty() || spender.is_empty() {
            return Err(AssetError::InvalidAddress);
        }
        self.set_u128(allow_key(owner, spender), amount);
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
        self.set_u128(allow_key(from, spender), allowance - amount);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
// INTERNAL HELPERS
// ─────────────────────────────────────────────────────────────

fn bal_key(addr: &str) -> String {
    format!("bal:{}", addr)
}

fn allow_key(owner: &str, spender: &str) -> String {
    format!("allow:{}:{}", owner, spender)
}

/// Parse a u128 from contract state (decimal string). Missing or
/// malformed entries read as 0.
fn parse_state_u128(state: &BTreeMap<String, String>, key: &str) -> u128 {
    state
        .get(key)
        .and_then(|v| v.parse::<u128>().ok())
        .unwrap_or(0)
}

fn parse_state_u64(state: &BTreeMap<String, String>, key: &str) -> u64 {
    state
        .get(key)
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0)
}

// ─────────────────────────────────────────────────────────────
// TESTS
// ─────────────────────────────────────────────────────────────
