// Unlock Pool Instruction

use anchor_lang::prelude::*;

use crate::{constants::*, events::PoolLockChanged, state::*};

#[derive(Accounts)]
pub struct UnlockPool<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.seed.to_le_bytes().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

impl<'info> UnlockPool<'info> {
    pub fn unlock_pool(&mut self) -> Result<()> {
        self.pool.assert_is_authority(&self.authority.key())?;
        self.pool.unlock()?;

        emit!(PoolLockChanged {
            pool: self.pool.key(),
            authority: self.authority.key(),
            locked: false,
        });
        msg!("Pool unlocked by {}", self.authority.key());

        Ok(())
    }
}
