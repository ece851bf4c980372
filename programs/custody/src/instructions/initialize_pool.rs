// Initialize Pool Instruction
//
// Creates a constant-product pool for a token pair, its LP mint and both
// reserve vaults. The pool authority (if any) can pause it later.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::PoolInitialized, state::*};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub initializer: Signer<'info>,

    pub mint_x: Box<Account<'info, Mint>>,
    pub mint_y: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = initializer,
        space = ANCHOR_DISCRIMINATOR + Pool::INIT_SPACE,
        seeds = [POOL_SEED, seed.to_le_bytes().as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: PDA signer for vault operations and LP mint authority
    #[account(
        seeds = [POOL_AUTHORITY_SEED, pool.key().as_ref()],
        bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = initializer,
        seeds = [LP_MINT_SEED, pool.key().as_ref()],
        bump,
        mint::decimals = LP_DECIMALS,
        mint::authority = pool_authority,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = initializer,
        associated_token::mint = mint_x,
        associated_token::authority = pool_authority,
    )]
    pub vault_x: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = initializer,
        associated_token::mint = mint_y,
        associated_token::authority = pool_authority,
    )]
    pub vault_y: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializePool<'info> {
    pub fn initialize_pool(
        &mut self,
        seed: u64,
        fee_bps: u16,
        authority: Option<Pubkey>,
        bumps: &InitializePoolBumps,
    ) -> Result<()> {
        require!(fee_bps <= MAX_FEE_BASIS_POINTS, CustodyError::FeeTooHigh);
        require!(
            self.mint_x.key() != self.mint_y.key(),
            CustodyError::IdenticalMints
        );

        self.pool.set_inner(Pool {
            seed,
            authority,
            mint_x: self.mint_x.key(),
            mint_y: self.mint_y.key(),
            lp_mint: self.lp_mint.key(),
            reserve_x: 0,
            reserve_y: 0,
            lp_supply: 0,
            fee_bps,
            locked: false,
            bump: bumps.pool,
            authority_bump: bumps.pool_authority,
            lp_mint_bump: bumps.lp_mint,
        });

        emit!(PoolInitialized {
            pool: self.pool.key(),
            seed,
            authority,
            mint_x: self.mint_x.key(),
            mint_y: self.mint_y.key(),
            fee_bps,
        });
        msg!(
            "Pool initialized: {} / {}, fee {} bps",
            self.mint_x.key(),
            self.mint_y.key(),
            fee_bps
        );

        Ok(())
    }
}
