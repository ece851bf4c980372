// Take Swap Instruction
//
// Taker pays `amount_wanted` of mint_b to the maker and receives the locked
// mint_a. Both legs run in one instruction so neither can land alone.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{accounting, constants::*, errors::*, events::SwapTaken, state::*};

#[derive(Accounts)]
pub struct TakeSwap<'info> {
    #[account(mut)]
    pub taker: Signer<'info>,

    #[account(mut)]
    pub maker: SystemAccount<'info>,

    pub mint_a: Box<Account<'info, Mint>>,
    pub mint_b: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_a,
        associated_token::authority = taker,
    )]
    pub taker_ata_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint_b,
        associated_token::authority = taker,
    )]
    pub taker_ata_b: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_b,
        associated_token::authority = maker,
    )]
    pub maker_ata_b: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        close = maker,
        has_one = maker,
        has_one = mint_a @ CustodyError::InvalidMint,
        has_one = mint_b @ CustodyError::InvalidMint,
        seeds = [SWAP_SEED, swap.maker.as_ref(), swap.seed.to_le_bytes().as_ref()],
        bump = swap.bump,
    )]
    pub swap: Box<Account<'info, SwapState>>,

    /// CHECK: PDA signer for the swap vault
    #[account(
        seeds = [SWAP_AUTHORITY_SEED, swap.key().as_ref()],
        bump = swap.authority_bump,
    )]
    pub swap_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = swap_authority,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> TakeSwap<'info> {
    pub fn take_swap(&mut self) -> Result<()> {
        let amount_wanted = self.swap.amount_wanted;
        let received = self.vault.amount;

        accounting::assert_sufficient(self.taker_ata_b.amount, amount_wanted)?;
        accounting::assert_tracked_balance(received, self.swap.amount_offered)?;

        // Leg 1: taker pays the maker
        accounting::deposit(
            amount_wanted,
            &self.token_program.to_account_info(),
            &self.taker_ata_b.to_account_info(),
            &self.maker_ata_b.to_account_info(),
            &self.taker.to_account_info(),
        )?;

        // Leg 2: vault pays the taker
        let proof = self.swap.authority(self.swap.key());
        accounting::drain_and_close(
            &self.token_program.to_account_info(),
            &self.vault.to_account_info(),
            received,
            &self.taker_ata_a.to_account_info(),
            &self.maker.to_account_info(),
            &self.swap_authority.to_account_info(),
            &proof,
        )?;

        emit!(SwapTaken {
            swap: self.swap.key(),
            maker: self.maker.key(),
            taker: self.taker.key(),
            amount_paid: amount_wanted,
            amount_received: received,
        });
        msg!("Swap {} taken by {}", self.swap.seed, self.taker.key());

        Ok(())
    }
}
