// Swap State
//
// One open offer: the maker locked `amount_offered` of mint_a and wants
// `amount_wanted` of mint_b in return. The record only exists while the offer
// is open; cancel and take both close it.

use anchor_lang::prelude::*;

use crate::{constants::SWAP_AUTHORITY_SEED, derivation::DerivedAuthority, errors::CustodyError};

#[account]
#[derive(InitSpace)]
pub struct SwapState {
    pub maker: Pubkey,
    pub seed: u64,
    pub mint_a: Pubkey,         // Offered
    pub mint_b: Pubkey,         // Wanted
    pub amount_offered: u64,
    pub amount_wanted: u64,
    pub bump: u8,
    pub authority_bump: u8,
}

impl SwapState {
    pub fn validate_offer(
        mint_a: &Pubkey,
        mint_b: &Pubkey,
        amount_offered: u64,
        amount_wanted: u64,
    ) -> core::result::Result<(), CustodyError> {
        if amount_offered == 0 || amount_wanted == 0 {
            return Err(CustodyError::ZeroAmount);
        }
        if mint_a == mint_b {
            return Err(CustodyError::IdenticalMints);
        }
        Ok(())
    }

    pub fn authority(&self, swap: Pubkey) -> DerivedAuthority {
        DerivedAuthority::new(SWAP_AUTHORITY_SEED, swap, self.authority_bump)
    }
}
