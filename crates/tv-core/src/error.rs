// SPDX-License-Identifier: AGPL-3.0-only
//! Vendor and asset errors.
//!
//! Every variant aborts the invocation that raised it; the ledger store
//! discards the working copy so no partial effect is retained.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AssetId, PairId};

/// Failure reported by a fungible asset implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetError {
    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: u128, need: u128 },

    #[error("Allowance exceeded: have {have}, need {need}")]
    InsufficientAllowance { have: u128, need: u128 },

    #[error("Arithmetic overflow crediting balance")]
    Overflow,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Address must not be empty")]
    InvalidAddress,

    #[error("Token contract not initialized")]
    NotInitialized,

    #[error("Invalid token metadata: {0}")]
    InvalidMetadata(String),
}

/// Failure of a vendor invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VendorError {
    #[error("Unauthorized: {caller} is not the owner")]
    Unauthorized { caller: String },

    #[error("Invalid ratio {numerator}/{denominator}: both parts must be > 0")]
    InvalidRatio { numerator: u128, denominator: u128 },

    #[error("Invalid amount: amount_in must be > 0")]
    InvalidAmount,

    #[error("Pair {0} not found")]
    NotFound(PairId),

    #[error("Insufficient funds: {0}")]
    InsufficientFunds(AssetError),

    #[error("Insufficient liquidity: custody holds {available}, swap needs {required}")]
    InsufficientLiquidity { available: u128, required: u128 },

    #[error("Arithmetic overflow: {amount_in} * {numerator} exceeds u128")]
    ArithmeticOverflow { amount_in: u128, numerator: u128 },

    #[error("Swap of {amount_in} would deliver zero output")]
    ZeroOutput { amount_in: u128 },

    #[error("Unknown asset {0}")]
    UnknownAsset(AssetId),

    #[error("Asset {0} is already registered")]
    DuplicateAsset(AssetId),

    #[error("Asset error: {0}")]
    Asset(AssetError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<AssetError> for VendorError {
    fn from(e: AssetError) -> Self {
        VendorError::Asset(e)
    }
}

/// Result type for vendor operations
pub type VendorResult<T> = Result<T, VendorError>;
