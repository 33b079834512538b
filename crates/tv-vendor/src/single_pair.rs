// SPDX-License-Identifier: AGPL-3.0-only
//! Single-pair vendor: one implicit pair fixed at construction.
//!
//! A [`Ledger`] whose registry holds exactly one entry (id
//! [`FIRST_PAIR_ID`]). Swap and price-change semantics are the multi-pair
//! ones with the id filled in.

use tv_asset::AssetBook;
use tv_core::{
    Address, Pair, PairConfig, PairId, VendorConfig, VendorError, VendorResult, FIRST_PAIR_ID,
};

use crate::ledger::Ledger;

#[derive(Debug, Clone)]
pub struct SinglePairVendor {
    ledger: Ledger,
}

impl SinglePairVendor {
    pub const PAIR_ID: PairId = FIRST_PAIR_ID;

    /// Create the vendor and its pair in one step.
    pub fn new(
        vendor_address: &str,
        owner: &str,
        wrapped_native: Option<&str>,
        pair: PairConfig,
        assets: AssetBook,
    ) -> VendorResult<Self> {
        let mut config = VendorConfig::new(vendor_address, owner);
        config.wrapped_native = wrapped_native.map(str::to_string);
        config.pairs.push(pair);
        Self::from_config(&config, assets)
    }

    /// Build from configuration holding exactly one `[[pairs]]` entry.
    pub fn from_config(config: &VendorConfig, assets: AssetBook) -> VendorResult<Self> {
        if config.pairs.len() != 1 {
            return Err(VendorError::Config(format!(
                "single-pair vendor needs exactly one pair, got {}",
                config.pairs.len()
            )));
        }
        Ok(Self {
            ledger: Ledger::from_config(config, assets)?,
        })
    }

    pub fn pair(&self) -> VendorResult<Pair> {
        self.ledger.get_pair(Self::PAIR_ID)
    }

    pub fn swap_tokens(&self, amount_in: u128, payer: &str, recipient: &str) -> VendorResult<u128> {
        self.ledger
            .swap_tokens(Self::PAIR_ID, amount_in, payer, recipient)
    }

    pub fn set_price(&self, caller: &str, numerator: u128, denominator: u128) -> VendorResult<()> {
        self.ledger
            .set_price(caller, Self::PAIR_ID, numerator, denominator)
    }

    pub fn quote(&self, amount_in: u128) -> VendorResult<u128> {
        self.ledger.quote(Self::PAIR_ID, amount_in)
    }

    pub fn owner(&self) -> VendorResult<Address> {
        self.ledger.owner()
    }

    pub fn transfer_ownership(&self, caller: &str, new_owner: &str) -> VendorResult<()> {
        self.ledger.transfer_ownership(caller, new_owner)
    }

    /// Underlying store, for balances, events and snapshots.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tv_asset::{AssetHandle, MockToken};

    const OWNER: &str = "LOSWowner";
    const ALICE: &str = "LOSWalice";
    const DEV: &str = "LOSWdev";
    const VENDOR: &str = "LOSConVendor";

    fn vendor() -> SinglePairVendor {
        let mut assets = AssetBook::new();
        let mut ti = MockToken::new("LOSConTI", "tokenIn Token", "TI", 18, 1_000, ALICE).unwrap();
        ti.approve(ALICE, VENDOR, 1_000).unwrap();
        assets.insert(ti.into()).unwrap();
        assets
            .insert(MockToken::new("LOSConTO", "tokenOut Token", "TO", 18, 1_000, VENDOR).unwrap().into())
            .unwrap();
        SinglePairVendor::new(
            VENDOR,
            OWNER,
            Some("LOSConWLOS"),
            PairConfig {
                token_in: "LOSConTI".to_string(),
                token_out: "LOSConTO".to_string(),
                numerator: 12,
                denominator: 100,
                beneficiary: DEV.to_string(),
            },
            assets,
        )
        .unwrap()
    }

    #[test]
    fn test_swap_and_reprice() {
        let v = vendor();
        assert_eq!(v.pair().unwrap().id, 1);
        assert_eq!(v.swap_tokens(100, ALICE, ALICE).unwrap(), 12);
        v.set_price(OWNER, 11, 99).unwrap();
        assert_eq!(v.quote(100).unwrap(), 11);
        assert_eq!(v.ledger().balance_of("LOSConTI", DEV).unwrap(), 100);
        assert_eq!(
            v.ledger().wrapped_native().unwrap().as_deref(),
            Some("LOSConWLOS")
        );
    }

    #[test]
    fn test_set_price_by_stranger() {
        let v = vendor();
        assert!(matches!(
            v.set_price(ALICE, 1, 1),
            Err(VendorError::Unauthorized { .. })
        ));
        assert_eq!(v.pair().unwrap().numerator(), 12);
    }

    #[test]
    fn test_from_config_needs_one_pair() {
        let config = VendorConfig::new(VENDOR, OWNER);
        assert!(matches!(
            SinglePairVendor::from_config(&config, AssetBook::new()),
            Err(VendorError::Config(_))
        ));
    }
}
