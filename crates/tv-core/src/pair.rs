// SPDX-License-Identifier: AGPL-3.0-only
//! # Pairs and ratio arithmetic
//!
//! A pair converts `token_in` into `token_out` at an owner-set ratio:
//!
//! ```text
//! amount_out = floor(amount_in * numerator / denominator)
//! ```
//!
//! All math is integer-only (`u128`). The multiply is checked and runs
//! before the divide, so truncation happens exactly once.

use serde::{Deserialize, Serialize};

use crate::error::{VendorError, VendorResult};
use crate::{Address, AssetId, PairId, PRICE_PRECISION};

/// Output units per input unit, as an exact fraction.
///
/// Both parts are > 0 for every value, including deserialized ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRatio")]
pub struct Ratio {
    #[serde(with = "crate::serde_u128")]
    numerator: u128,
    #[serde(with = "crate::serde_u128")]
    denominator: u128,
}

#[derive(Deserialize)]
struct RawRatio {
    #[serde(with = "crate::serde_u128")]
    numerator: u128,
    #[serde(with = "crate::serde_u128")]
    denominator: u128,
}

impl TryFrom<RawRatio> for Ratio {
    type Error = VendorError;

    fn try_from(raw: RawRatio) -> VendorResult<Self> {
        Ratio::new(raw.numerator, raw.denominator)
    }
}

impl Ratio {
    pub fn new(numerator: u128, denominator: u128) -> VendorResult<Self> {
        if numerator == 0 || denominator == 0 {
            return Err(VendorError::InvalidRatio {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> u128 {
        self.numerator
    }

    pub fn denominator(&self) -> u128 {
        self.denominator
    }

    /// Convert an input amount to the output amount, rounding toward zero.
    pub fn apply(&self, amount_in: u128) -> VendorResult<u128> {
        let product =
            amount_in
                .checked_mul(self.numerator)
                .ok_or(VendorError::ArithmeticOverflow {
                    amount_in,
                    numerator: self.numerator,
                })?;
        Ok(product / self.denominator)
    }

    /// Price scaled by [`PRICE_PRECISION`], for display only. `None` if the
    /// scaled numerator doesn't fit.
    pub fn scaled_price(&self) -> Option<u128> {
        self.numerator
            .checked_mul(PRICE_PRECISION)
            .map(|n| n / self.denominator)
    }
}

/// A registered trading pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub id: PairId,
    pub token_in: AssetId,
    pub token_out: AssetId,
    pub ratio: Ratio,
    /// Receives the full `amount_in` of every swap against this pair
    pub beneficiary: Address,
}

impl Pair {
    pub fn numerator(&self) -> u128 {
        self.ratio.numerator()
    }

    pub fn denominator(&self) -> u128 {
        self.ratio.denominator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_rejects_zero_parts() {
        assert_eq!(
            Ratio::new(0, 1),
            Err(VendorError::InvalidRatio {
                numerator: 0,
                denominator: 1
            })
        );
        assert!(Ratio::new(1, 0).is_err());
        assert!(Ratio::new(0, 0).is_err());
    }

    #[test]
    fn test_apply_floors() {
        let r = Ratio::new(12, 100).unwrap();
        assert_eq!(r.apply(100).unwrap(), 12);
        assert_eq!(r.apply(99).unwrap(), 11); // 11.88
        assert_eq!(r.apply(8).unwrap(), 0); // 0.96

        let r = Ratio::new(11, 99).unwrap();
        assert_eq!(r.apply(100).unwrap(), 11); // 11.11
    }

    #[test]
    fn test_apply_overflow() {
        let r = Ratio::new(2, 1).unwrap();
        assert_eq!(
            r.apply(u128::MAX),
            Err(VendorError::ArithmeticOverflow {
                amount_in: u128::MAX,
                numerator: 2
            })
        );
        // Multiply-before-divide still fits when the product does
        let r = Ratio::new(1, 3).unwrap();
        assert_eq!(r.apply(u128::MAX).unwrap(), u128::MAX / 3);
    }

    #[test]
    fn test_scaled_price() {
        let r = Ratio::new(12, 100).unwrap();
        assert_eq!(r.scaled_price(), Some(120_000_000_000));
        let r = Ratio::new(u128::MAX, 1).unwrap();
        assert_eq!(r.scaled_price(), None);
    }

    #[test]
    fn test_ratio_json() {
        let r = Ratio::new(12, 100).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"numerator":"12","denominator":"100"}"#);
        assert_eq!(serde_json::from_str::<Ratio>(&json).unwrap(), r);

        let zero = r#"{"numerator":"0","denominator":"100"}"#;
        assert!(serde_json::from_str::<Ratio>(zero).is_err());
    }
}
