// SPDX-License-Identifier: AGPL-3.0-only
//! Vendor notifications.
//!
//! Emitted after the state change they describe, collected per invocation
//! and appended to the ledger's event log only when the invocation commits.

use serde::{Deserialize, Serialize};

use crate::{Address, AssetId, PairId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum VendorEvent {
    /// Emitted on createPair
    PairCreated {
        pair_id: PairId,
        token_in: AssetId,
        token_out: AssetId,
        beneficiary: Address,
    },
    /// Emitted on setPrice
    PriceChanged {
        pair_id: PairId,
        #[serde(with = "crate::serde_u128")]
        numerator: u128,
        #[serde(with = "crate::serde_u128")]
        denominator: u128,
    },
    /// Emitted on swapTokens
    Swap {
        pair_id: PairId,
        payer: Address,
        recipient: Address,
        #[serde(with = "crate::serde_u128")]
        amount_in: u128,
        #[serde(with = "crate::serde_u128")]
        amount_out: u128,
    },
    /// Emitted on transferOwnership
    OwnershipTransferred {
        previous_owner: Address,
        new_owner: Address,
    },
}

impl VendorEvent {
    /// Short type tag, as used in the serialized form.
    pub fn event_type(&self) -> &'static str {
        match self {
            VendorEvent::PairCreated { .. } => "PairCreated",
            VendorEvent::PriceChanged { .. } => "PriceChanged",
            VendorEvent::Swap { .. } => "Swap",
            VendorEvent::OwnershipTransferred { .. } => "OwnershipTransferred",
        }
    }

    /// Pair the event refers to, if any.
    pub fn pair_id(&self) -> Option<PairId> {
        match self {
            VendorEvent::PairCreated { pair_id, .. }
            | VendorEvent::PriceChanged { pair_id, .. }
            | VendorEvent::Swap { pair_id, .. } => Some(*pair_id),
            VendorEvent::OwnershipTransferred { .. } => None,
        }
    }
}

/// A committed event with its position in the log (starting at 1).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventRecord {
    pub seq: u64,
    pub event: VendorEvent,
}
