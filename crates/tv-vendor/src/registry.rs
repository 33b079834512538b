// SPDX-License-Identifier: AGPL-3.0-only
//! # Pair registry
//!
//! Append-only map of pair id → [`Pair`]. Ids start at
//! [`FIRST_PAIR_ID`] and increase by one per successful `create_pair`;
//! entries are mutated in place by price changes and never removed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tv_asset::AssetBook;
use tv_core::{
    Address, AssetId, Pair, PairId, Ratio, VendorError, VendorEvent, VendorResult, FIRST_PAIR_ID,
};

use crate::access::AccessControl;

/// Arguments to `create_pair`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPair {
    pub token_in: AssetId,
    pub token_out: AssetId,
    pub numerator: u128,
    pub denominator: u128,
    pub beneficiary: Address,
}

/// Restored registries are checked on load: every key matches its pair's
/// id and lies in `[FIRST_PAIR_ID, next_id)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawRegistry")]
pub struct PairRegistry {
    pairs: BTreeMap<PairId, Pair>,
    next_id: PairId,
}

#[derive(Deserialize)]
struct RawRegistry {
    pairs: BTreeMap<PairId, Pair>,
    next_id: PairId,
}

impl TryFrom<RawRegistry> for PairRegistry {
    type Error = VendorError;

    fn try_from(raw: RawRegistry) -> VendorResult<Self> {
        if raw.next_id < FIRST_PAIR_ID {
            return Err(VendorError::Storage(format!(
                "next pair id {} below {}",
                raw.next_id, FIRST_PAIR_ID
            )));
        }
        for (key, pair) in &raw.pairs {
            if *key != pair.id {
                return Err(VendorError::Storage(format!(
                    "pair stored under {} has id {}",
                    key, pair.id
                )));
            }
            if *key < FIRST_PAIR_ID || *key >= raw.next_id {
                return Err(VendorError::Storage(format!(
                    "pair id {} outside [{}, {})",
                    key, FIRST_PAIR_ID, raw.next_id
                )));
            }
        }
        Ok(Self {
            pairs: raw.pairs,
            next_id: raw.next_id,
        })
    }
}

impl Default for PairRegistry {
    fn default() -> Self {
        Self {
            pairs: BTreeMap::new(),
            next_id: FIRST_PAIR_ID,
        }
    }
}

impl PairRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pair and return its id.
    ///
    /// Checks, in order: ratio parts non-zero (for any caller), caller is
    /// owner, both assets resolvable in `assets`.
    pub fn create_pair(
        &mut self,
        access: &AccessControl,
        assets: &AssetBook,
        caller: &str,
        new_pair: NewPair,
        events: &mut Vec<VendorEvent>,
    ) -> VendorResult<PairId> {
        let ratio = Ratio::new(new_pair.numerator, new_pair.denominator)?;
        access.require_owner(caller)?;
        for token in [&new_pair.token_in, &new_pair.token_out] {
            if !assets.contains(token) {
                return Err(VendorError::UnknownAsset(token.clone()));
            }
        }

        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| VendorError::Storage("pair id space exhausted".to_string()))?;

        let pair = Pair {
            id,
            token_in: new_pair.token_in,
            token_out: new_pair.token_out,
            ratio,
            beneficiary: new_pair.beneficiary,
        };
        events.push(VendorEvent::PairCreated {
            pair_id: id,
            token_in: pair.token_in.clone(),
            token_out: pair.token_out.clone(),
            beneficiary: pair.beneficiary.clone(),
        });
        self.pairs.insert(id, pair);
        Ok(id)
    }

    pub fn get_pair(&self, id: PairId) -> VendorResult<&Pair> {
        self.pairs.get(&id).ok_or(VendorError::NotFound(id))
    }

    pub(crate) fn get_pair_mut(&mut self, id: PairId) -> VendorResult<&mut Pair> {
        self.pairs.get_mut(&id).ok_or(VendorError::NotFound(id))
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Id the next successful `create_pair` will assign.
    pub fn next_pair_id(&self) -> PairId {
        self.next_id
    }

    /// All pairs in ascending id order.
    pub fn pairs(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.values()
    }
}
