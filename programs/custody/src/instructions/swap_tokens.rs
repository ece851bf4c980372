// Swap Tokens Instruction
//
// Swaps along x * y = k. The fee is taken from the input before pricing and
// stays in the pool, so k never decreases.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{accounting, constants::*, errors::*, events::TokensSwapped, state::*};

#[derive(Accounts)]
pub struct SwapTokens<'info> {
    #[account(mut)]
    pub swapper: Signer<'info>,

    #[account(
        mut,
        has_one = mint_x @ CustodyError::InvalidMint,
        has_one = mint_y @ CustodyError::InvalidMint,
        seeds = [POOL_SEED, pool.seed.to_le_bytes().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: PDA signer
    #[account(
        seeds = [POOL_AUTHORITY_SEED, pool.key().as_ref()],
        bump = pool.authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    pub mint_x: Box<Account<'info, Mint>>,
    pub mint_y: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = swapper,
        associated_token::mint = mint_x,
        associated_token::authority = swapper,
    )]
    pub swapper_x: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = swapper,
        associated_token::mint = mint_y,
        associated_token::authority = swapper,
    )]
    pub swapper_y: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint_x,
        associated_token::authority = pool_authority,
    )]
    pub vault_x: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint_y,
        associated_token::authority = pool_authority,
    )]
    pub vault_y: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> SwapTokens<'info> {
    pub fn swap_tokens(
        &mut self,
        mint_in: Pubkey,
        amount_in: u64,
        min_amount_out: u64,
        expiration: i64,
    ) -> Result<()> {
        self.pool.assert_not_locked()?;
        accounting::validate_expiration(expiration, Clock::get()?.unix_timestamp)?;

        accounting::assert_tracked_balance(self.vault_x.amount, self.pool.reserve_x)?;
        accounting::assert_tracked_balance(self.vault_y.amount, self.pool.reserve_y)?;

        let direction = self.pool.direction(&mint_in)?;
        let quote = self.pool.quote_swap(direction, amount_in, min_amount_out)?;

        let (user_in, vault_in, vault_out, user_out) = match direction {
            SwapDirection::XToY => (&self.swapper_x, &self.vault_x, &self.vault_y, &self.swapper_y),
            SwapDirection::YToX => (&self.swapper_y, &self.vault_y, &self.vault_x, &self.swapper_x),
        };
        accounting::assert_sufficient(user_in.amount, quote.amount_in)?;

        accounting::deposit(
            quote.amount_in,
            &self.token_program.to_account_info(),
            &user_in.to_account_info(),
            &vault_in.to_account_info(),
            &self.swapper.to_account_info(),
        )?;

        let proof = self.pool.pool_authority(self.pool.key());
        accounting::withdraw(
            quote.amount_out,
            &self.token_program.to_account_info(),
            &vault_out.to_account_info(),
            &user_out.to_account_info(),
            &self.pool_authority.to_account_info(),
            &proof,
        )?;

        self.pool.apply_swap(direction, &quote)?;

        emit!(TokensSwapped {
            pool: self.pool.key(),
            swapper: self.swapper.key(),
            mint_in,
            amount_in: quote.amount_in,
            fee: quote.fee,
            amount_out: quote.amount_out,
        });
        msg!("Swapped {} in -> {} out (fee {})", quote.amount_in, quote.amount_out, quote.fee);

        Ok(())
    }
}
