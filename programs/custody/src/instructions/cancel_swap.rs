// Cancel Swap Instruction
//
// Maker takes the locked tokens back. Vault and record are closed, rent
// returns to the maker.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{accounting, constants::*, errors::*, events::SwapCancelled, state::*};

#[derive(Accounts)]
pub struct CancelSwap<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,

    pub mint_a: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint_a,
        associated_token::authority = maker,
    )]
    pub maker_ata_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        close = maker,
        has_one = maker @ CustodyError::Unauthorized,
        has_one = mint_a @ CustodyError::InvalidMint,
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

impl<'info> CancelSwap<'info> {
    pub fn cancel_swap(&mut self) -> Result<()> {
        let refunded = self.vault.amount;
        let proof = self.swap.authority(self.swap.key());

        accounting::drain_and_close(
            &self.token_program.to_account_info(),
            &self.vault.to_account_info(),
            refunded,
            &self.maker_ata_a.to_account_info(),
            &self.maker.to_account_info(),
            &self.swap_authority.to_account_info(),
            &proof,
        )?;

        emit!(SwapCancelled {
            swap: self.swap.key(),
            maker: self.maker.key(),
            refunded,
        });
        msg!("Swap {} cancelled, refunded {}", self.swap.seed, refunded);

        Ok(())
    }
}
