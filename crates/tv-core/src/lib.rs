// SPDX-License-Identifier: AGPL-3.0-only
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TOKEN VENDOR - CORE TYPES
//
// Shared building blocks for the fixed-ratio token vendor.
// - Pair records and exact-integer ratio arithmetic (u128, no floats)
// - Error taxonomy for vendor and asset operations
// - Notifications emitted after committed state changes
// - TOML configuration for vendor identity, policy and bootstrap pairs
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub mod error;
pub mod events;
pub mod pair;
pub mod serde_u128;
pub mod vendor_config;

pub use error::{AssetError, VendorError, VendorResult};
pub use events::{EventRecord, VendorEvent};
pub use pair::{Pair, Ratio};
pub use vendor_config::{PairConfig, VendorConfig};

/// Ledger identity of an account, contract or the vendor itself.
pub type Address = String;

/// Ledger address of a fungible asset contract.
pub type AssetId = String;

/// Sequential pair identifier assigned by the registry.
pub type PairId = u64;

/// First identifier handed out by a fresh registry. Ids are never 0.
pub const FIRST_PAIR_ID: PairId = 1;

/// Fixed-point scale used for display prices (10^12).
pub const PRICE_PRECISION: u128 = 1_000_000_000_000;
