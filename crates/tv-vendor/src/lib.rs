// SPDX-License-Identifier: AGPL-3.0-only
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TOKEN VENDOR - FIXED-RATIO MULTI-PAIR SWAPS
//
// Converts an input asset into an output asset at an owner-set integer ratio.
// - AccessControl: one owner gates pair creation, repricing, ownership moves
// - PairRegistry: sequential pair ids, append-only
// - SwapEngine: floor(amount_in * n / d), payer → beneficiary, custody → recipient
// - Ledger: one mutex, working-copy invocations, event log, JSON snapshots
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub mod access;
pub mod ledger;
pub mod query;
pub mod registry;
pub mod single_pair;
pub mod state;
pub mod swap;

pub use access::AccessControl;
pub use ledger::Ledger;
pub use query::{compute_quote, list_all_pairs, query_pair_info, PairInfo, Quote};
pub use registry::{NewPair, PairRegistry};
pub use single_pair::SinglePairVendor;
pub use state::VendorState;
pub use swap::{SwapEngine, SwapRequest};
