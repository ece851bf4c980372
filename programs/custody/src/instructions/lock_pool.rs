// Lock Pool Instruction
//
// Emergency pause. Only the pool authority can lock.

use anchor_lang::prelude::*;

use crate::{constants::*, events::PoolLockChanged, state::*};

#[derive(Accounts)]
pub struct LockPool<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.seed.to_le_bytes().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

impl<'info> LockPool<'info> {
    pub fn lock_pool(&mut self) -> Result<()> {
        self.pool.assert_is_authority(&self.authority.key())?;
        self.pool.lock()?;

        emit!(PoolLockChanged {
            pool: self.pool.key(),
            authority: self.authority.key(),
            locked: true,
        });
        msg!("Pool locked by {}", self.authority.key());

        Ok(())
    }
}
