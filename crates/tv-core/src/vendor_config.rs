// SPDX-License-Identifier: AGPL-3.0-only
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{VendorError, VendorResult};
use crate::{Address, AssetId};

/// Vendor deployment configuration.
/// Names the vendor's own identity, its first owner, the swap policy and
/// the pairs to register at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorConfig {
    /// Custody identity: the vendor holds tokenOut reserves here
    pub vendor_address: Address,
    pub owner: Address,
    /// Wrapped native asset (e.g. WLOS), exposed read-only
    #[serde(default)]
    pub wrapped_native: Option<AssetId>,
    /// Fail swaps whose floor(amount_in * n / d) is 0 instead of taking the input
    #[serde(default)]
    pub reject_zero_output: bool,
    /// Created in order at startup, so they receive ids 1..=n
    #[serde(default)]
    pub pairs: Vec<PairConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairConfig {
    pub token_in: AssetId,
    pub token_out: AssetId,
    #[serde(with = "crate::serde_u128")]
    pub numerator: u128,
    #[serde(with = "crate::serde_u128")]
    pub denominator: u128,
    pub beneficiary: Address,
}

impl VendorConfig {
    /// Minimal config: no wrapped asset, default policy, no bootstrap pairs.
    pub fn new(vendor_address: &str, owner: &str) -> Self {
        Self {
            vendor_address: vendor_address.to_string(),
            owner: owner.to_string(),
            wrapped_native: None,
            reject_zero_output: false,
            pairs: Vec::new(),
        }
    }

    /// Load vendor config from TOML file
    pub fn load_from_file(path: &Path) -> VendorResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| VendorError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> VendorResult<Self> {
        let config: VendorConfig =
            toml::from_str(content).map_err(|e| VendorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &Path) -> VendorResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| VendorError::Config(e.to_string()))?;
        fs::write(path, content)
            .map_err(|e| VendorError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    pub fn validate(&self) -> VendorResult<()> {
        if self.vendor_address.is_empty() {
            return Err(VendorError::Config("vendor_address is empty".to_string()));
        }
        if self.owner.is_empty() {
            return Err(VendorError::Config("owner is empty".to_string()));
        }
        if matches!(&self.wrapped_native, Some(w) if w.is_empty()) {
            return Err(VendorError::Config("wrapped_native is empty".to_string()));
        }
        for (i, pair) in self.pairs.iter().enumerate() {
            if pair.token_in.is_empty() || pair.token_out.is_empty() {
                return Err(VendorError::Config(format!("pairs[{}]: token is empty", i)));
            }
            if pair.beneficiary.is_empty() {
                return Err(VendorError::Config(format!(
                    "pairs[{}]: beneficiary is empty",
                    i
                )));
            }
            if pair.numerator == 0 || pair.denominator == 0 {
                return Err(VendorError::Config(format!(
                    "pairs[{}]: ratio {}/{} has a zero part",
                    i, pair.numerator, pair.denominator
                )));
            }
        }
        Ok(())
    }
}
