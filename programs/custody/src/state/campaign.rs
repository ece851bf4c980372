// Campaign State

use anchor_lang::prelude::*;

use crate::{constants::CAMPAIGN_AUTHORITY_SEED, derivation::DerivedAuthority, errors::CustodyError};

#[account]
#[derive(InitSpace)]
pub struct Campaign {
    pub maker: Pubkey,
    pub mint: Pubkey,
    pub target_amount: u64,
    pub collected: u64,         // Sum of all donations
    pub bump: u8,
    pub authority_bump: u8,
}

impl Campaign {
    pub fn record_donation(&mut self, amount: u64) -> core::result::Result<(), CustodyError> {
        if amount == 0 {
            return Err(CustodyError::ZeroAmount);
        }
        self.collected = self
            .collected
            .checked_add(amount)
            .ok_or(CustodyError::Overflow)?;
        Ok(())
    }

    pub fn target_reached(&self) -> bool {
        self.collected >= self.target_amount
    }

    pub fn assert_withdrawable(&self) -> core::result::Result<(), CustodyError> {
        if !self.target_reached() {
            return Err(CustodyError::TargetNotReached);
        }
        Ok(())
    }

    pub fn authority(&self, campaign: Pubkey) -> DerivedAuthority {
        DerivedAuthority::new(CAMPAIGN_AUTHORITY_SEED, campaign, self.authority_bump)
    }
}
