// SPDX-License-Identifier: AGPL-3.0-only
//! Single-owner access control.

use serde::{Deserialize, Serialize};
use tv_core::{Address, VendorError, VendorEvent, VendorResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControl {
    owner: Address,
}

impl AccessControl {
    pub fn new(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn require_owner(&self, caller: &str) -> VendorResult<()> {
        if caller != self.owner {
            return Err(VendorError::Unauthorized {
                caller: caller.to_string(),
            });
        }
        Ok(())
    }

    /// Hand ownership to `new_owner`. The new identity is not validated.
    pub fn transfer_ownership(
        &mut self,
        caller: &str,
        new_owner: &str,
        events: &mut Vec<VendorEvent>,
    ) -> VendorResult<()> {
        self.require_owner(caller)?;
        let previous_owner = std::mem::replace(&mut self.owner, new_owner.to_string());
        events.push(VendorEvent::OwnershipTransferred {
            previous_owner,
            new_owner: new_owner.to_string(),
        });
        Ok(())
    }
}
