// Vault State
//
// Tokens locked by a maker for a named taker. The taker can claim once
// `unlock_at` has passed; the maker can cancel at any point while open.

use anchor_lang::prelude::*;

use crate::{constants::*, derivation::DerivedAuthority, errors::CustodyError};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum VaultStatus {
    Open,
    Claimed,
    Cancelled,
}

#[account]
#[derive(InitSpace)]
pub struct VaultState {
    pub maker: Pubkey,
    pub taker: Pubkey,
    pub mint: Pubkey,
    pub seed: u64,
    pub amount: u64,

    // Unix timestamp; UNLOCK_IMMEDIATE or UNLOCK_NEVER are sentinels
    pub unlock_at: i64,
    pub created_at: i64,

    pub status: VaultStatus,
    pub bump: u8,
    pub authority_bump: u8,
}

impl VaultState {
    pub fn validate_unlock_at(unlock_at: i64) -> core::result::Result<(), CustodyError> {
        if unlock_at < UNLOCK_IMMEDIATE {
            return Err(CustodyError::InvalidUnlockTime);
        }
        Ok(())
    }

    pub fn is_unlocked(&self, now: i64) -> bool {
        match self.unlock_at {
            UNLOCK_IMMEDIATE => true,
            UNLOCK_NEVER => false,
            unlock_at => now >= unlock_at,
        }
    }

    // Open -> Claimed
    pub fn claim(&mut self, now: i64) -> core::result::Result<(), CustodyError> {
        if self.status != VaultStatus::Open {
            return Err(CustodyError::InvalidState);
        }
        if !self.is_unlocked(now) {
            return Err(CustodyError::NotYetUnlocked);
        }
        self.status = VaultStatus::Claimed;
        Ok(())
    }

    // Open -> Cancelled
    pub fn cancel(&mut self) -> core::result::Result<(), CustodyError> {
        if self.status != VaultStatus::Open {
            return Err(CustodyError::InvalidState);
        }
        self.status = VaultStatus::Cancelled;
        Ok(())
    }

    pub fn authority(&self, vault_state: Pubkey) -> DerivedAuthority {
        DerivedAuthority::new(VAULT_AUTHORITY_SEED, vault_state, self.authority_bump)
    }
}
