// Withdraw Liquidity Instruction
//
// Burns LP shares for a pro-rata (rounded down) slice of both reserves.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{accounting, constants::*, errors::*, events::LiquidityWithdrawn, state::*};

#[derive(Accounts)]
pub struct WithdrawLiquidity<'info> {
    #[account(mut)]
    pub withdrawer: Signer<'info>,

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
        init_if_needed,
        payer = withdrawer,
        associated_token::mint = mint_x,
        associated_token::authority = withdrawer,
    )]
    pub withdrawer_x: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = withdrawer,
        associated_token::mint = mint_y,
        associated_token::authority = withdrawer,
    )]
    pub withdrawer_y: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = lp_mint,
        associated_token::authority = withdrawer,
    )]
    pub withdrawer_lp: Box<Account<'info, TokenAccount>>,

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

impl<'info> WithdrawLiquidity<'info> {
    pub fn withdraw_liquidity(
        &mut self,
        lp_amount: u64,
        min_amount_x: u64,
        min_amount_y: u64,
        expiration: i64,
    ) -> Result<()> {
        self.pool.assert_not_locked()?;
        accounting::validate_expiration(expiration, Clock::get()?.unix_timestamp)?;

        require!(lp_amount > 0, CustodyError::ZeroAmount);
        accounting::assert_sufficient(self.withdrawer_lp.amount, lp_amount)?;
        accounting::assert_tracked_balance(self.vault_x.amount, self.pool.reserve_x)?;
        accounting::assert_tracked_balance(self.vault_y.amount, self.pool.reserve_y)?;

        let (amount_x, amount_y) = self.pool.quote_withdrawal(lp_amount)?;
        require!(
            amount_x >= min_amount_x && amount_y >= min_amount_y,
            CustodyError::SlippageExceeded
        );

        accounting::burn_derivative(
            lp_amount,
            &self.token_program.to_account_info(),
            &self.lp_mint.to_account_info(),
            &self.withdrawer_lp.to_account_info(),
            &self.withdrawer.to_account_info(),
        )?;

        let proof = self.pool.pool_authority(self.pool.key());
        if amount_x > 0 {
            accounting::withdraw(
                amount_x,
                &self.token_program.to_account_info(),
                &self.vault_x.to_account_info(),
                &self.withdrawer_x.to_account_info(),
                &self.pool_authority.to_account_info(),
                &proof,
            )?;
        }
        if amount_y > 0 {
            accounting::withdraw(
                amount_y,
                &self.token_program.to_account_info(),
                &self.vault_y.to_account_info(),
                &self.withdrawer_y.to_account_info(),
                &self.pool_authority.to_account_info(),
                &proof,
            )?;
        }

        self.pool.apply_withdrawal(amount_x, amount_y, lp_amount)?;

        emit!(LiquidityWithdrawn {
            pool: self.pool.key(),
            withdrawer: self.withdrawer.key(),
            amount_x,
            amount_y,
            lp_burned: lp_amount,
        });
        msg!("Withdrew {} X / {} Y for {} LP", amount_x, amount_y, lp_amount);

        Ok(())
    }
}
