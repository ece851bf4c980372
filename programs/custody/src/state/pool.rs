// Pool State
//
// Reserves and LP supply are tracked on the record rather than read from the
// vaults, so tokens sent to a vault directly never move the price.

use anchor_lang::prelude::*;

use crate::{
    constants::POOL_AUTHORITY_SEED,
    curve::{self, DepositQuote, SwapQuote},
    derivation::DerivedAuthority,
    errors::CustodyError,
};

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub seed: u64,
    pub authority: Option<Pubkey>, // Can lock/unlock; None means never lockable
    pub mint_x: Pubkey,
    pub mint_y: Pubkey,
    pub lp_mint: Pubkey,
    pub reserve_x: u64,
    pub reserve_y: u64,
    pub lp_supply: u64,            // Includes the locked minimum liquidity
    pub fee_bps: u16,              // Swap fee (e.g., 30 = 0.30%)
    pub locked: bool,
    pub bump: u8,
    pub authority_bump: u8,
    pub lp_mint_bump: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    XToY,
    YToX,
}

impl Pool {
    pub fn lock(&mut self) -> core::result::Result<(), CustodyError> {
        if self.locked {
            return Err(CustodyError::PoolAlreadyLocked);
        }
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) -> core::result::Result<(), CustodyError> {
        if !self.locked {
            return Err(CustodyError::PoolAlreadyUnlocked);
        }
        self.locked = false;
        Ok(())
    }

    pub fn assert_not_locked(&self) -> core::result::Result<(), CustodyError> {
        if self.locked {
            return Err(CustodyError::PoolLocked);
        }
        Ok(())
    }

    pub fn assert_is_authority(&self, caller: &Pubkey) -> core::result::Result<(), CustodyError> {
        match self.authority {
            Some(authority) if authority == *caller => Ok(()),
            _ => Err(CustodyError::Unauthorized),
        }
    }

    pub fn direction(&self, mint_in: &Pubkey) -> core::result::Result<SwapDirection, CustodyError> {
        if *mint_in == self.mint_x {
            Ok(SwapDirection::XToY)
        } else if *mint_in == self.mint_y {
            Ok(SwapDirection::YToX)
        } else {
            Err(CustodyError::InvalidMint)
        }
    }

    pub fn quote_deposit(&self, amount_x: u64, amount_y: u64) -> core::result::Result<DepositQuote, CustodyError> {
        if self.lp_supply == 0 {
            curve::first_deposit(amount_x, amount_y)
        } else {
            curve::proportional_deposit(amount_x, amount_y, self.reserve_x, self.reserve_y, self.lp_supply)
        }
    }

    pub fn quote_withdrawal(&self, lp_amount: u64) -> core::result::Result<(u64, u64), CustodyError> {
        curve::withdrawal_amounts(lp_amount, self.reserve_x, self.reserve_y, self.lp_supply)
    }

    pub fn quote_swap(
        &self,
        direction: SwapDirection,
        amount_in: u64,
        min_amount_out: u64,
    ) -> core::result::Result<SwapQuote, CustodyError> {
        let (reserve_in, reserve_out) = match direction {
            SwapDirection::XToY => (self.reserve_x, self.reserve_y),
            SwapDirection::YToX => (self.reserve_y, self.reserve_x),
        };
        curve::quote_swap(amount_in, reserve_in, reserve_out, self.fee_bps, min_amount_out)
    }

    pub fn apply_deposit(&mut self, quote: &DepositQuote) -> core::result::Result<(), CustodyError> {
        self.reserve_x = self.reserve_x.checked_add(quote.amount_x).ok_or(CustodyError::Overflow)?;
        self.reserve_y = self.reserve_y.checked_add(quote.amount_y).ok_or(CustodyError::Overflow)?;
        self.lp_supply = self
            .lp_supply
            .checked_add(quote.lp_supply_added)
            .ok_or(CustodyError::Overflow)?;
        Ok(())
    }

    pub fn apply_withdrawal(
        &mut self,
        amount_x: u64,
        amount_y: u64,
        lp_burned: u64,
    ) -> core::result::Result<(), CustodyError> {
        self.reserve_x = self.reserve_x.checked_sub(amount_x).ok_or(CustodyError::InsufficientLiquidity)?;
        self.reserve_y = self.reserve_y.checked_sub(amount_y).ok_or(CustodyError::InsufficientLiquidity)?;
        self.lp_supply = self
            .lp_supply
            .checked_sub(lp_burned)
            .ok_or(CustodyError::InsufficientLiquidity)?;
        Ok(())
    }

    pub fn apply_swap(&mut self, direction: SwapDirection, quote: &SwapQuote) -> core::result::Result<(), CustodyError> {
        let (reserve_in, reserve_out) = match direction {
            SwapDirection::XToY => (&mut self.reserve_x, &mut self.reserve_y),
            SwapDirection::YToX => (&mut self.reserve_y, &mut self.reserve_x),
        };
        *reserve_in = reserve_in.checked_add(quote.amount_in).ok_or(CustodyError::Overflow)?;
        *reserve_out = reserve_out
            .checked_sub(quote.amount_out)
            .ok_or(CustodyError::InsufficientLiquidity)?;
        Ok(())
    }

    pub fn pool_authority(&self, pool: Pubkey) -> DerivedAuthority {
        DerivedAuthority::new(POOL_AUTHORITY_SEED, pool, self.authority_bump)
    }
}
