// Deposit Liquidity Instruction
//
// First deposit sets the price and permanently locks MINIMUM_LIQUIDITY.
// Later deposits must match the pool ratio; only the tokens backing the
// minted shares are pulled.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{accounting, constants::*, errors::*, events::LiquidityDeposited, state::*};

#[derive(Accounts)]
pub struct DepositLiquidity<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        has_one = mint_x @ CustodyError::InvalidMint,
        has_one = mint_y @ CustodyError::InvalidMint,
        has_one = lp_mint @ CustodyError::InvalidMint,
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
        mut,
        seeds = [LP_MINT_SEED, pool.key().as_ref()],
        bump = pool.lp_mint_bump,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint_x,
        associated_token::authority = depositor,
    )]
    pub depositor_x: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint_y,
        associated_token::authority = depositor,
    )]
    pub depositor_y: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = lp_mint,
        associated_token::authority = depositor,
    )]
    pub depositor_lp: Box<Account<'info, TokenAccount>>,

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

impl<'info> DepositLiquidity<'info> {
    pub fn deposit_liquidity(&mut self, amount_x: u64, amount_y: u64, expiration: i64) -> Result<()> {
        self.pool.assert_not_locked()?;
        accounting::validate_expiration(expiration, Clock::get()?.unix_timestamp)?;

        accounting::assert_tracked_balance(self.vault_x.amount, self.pool.reserve_x)?;
        accounting::assert_tracked_balance(self.vault_y.amount, self.pool.reserve_y)?;

        let quote = self.pool.quote_deposit(amount_x, amount_y)?;
        accounting::assert_sufficient(self.depositor_x.amount, quote.amount_x)?;
        accounting::assert_sufficient(self.depositor_y.amount, quote.amount_y)?;

        accounting::deposit(
            quote.amount_x,
            &self.token_program.to_account_info(),
            &self.depositor_x.to_account_info(),
            &self.vault_x.to_account_info(),
            &self.depositor.to_account_info(),
        )?;
        accounting::deposit(
            quote.amount_y,
            &self.token_program.to_account_info(),
            &self.depositor_y.to_account_info(),
            &self.vault_y.to_account_info(),
            &self.depositor.to_account_info(),
        )?;

        let proof = self.pool.pool_authority(self.pool.key());
        accounting::mint_derivative(
            quote.lp_minted,
            &self.token_program.to_account_info(),
            &self.lp_mint.to_account_info(),
            &self.depositor_lp.to_account_info(),
            &self.pool_authority.to_account_info(),
            &proof,
        )?;

        self.pool.apply_deposit(&quote)?;

        emit!(LiquidityDeposited {
            pool: self.pool.key(),
            depositor: self.depositor.key(),
            amount_x: quote.amount_x,
            amount_y: quote.amount_y,
            lp_minted: quote.lp_minted,
        });
        msg!(
            "Deposited {} X / {} Y, minted {} LP",
            quote.amount_x,
            quote.amount_y,
            quote.lp_minted
        );

        Ok(())
    }
}
