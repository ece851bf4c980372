// Make Swap Instruction
//
// Maker locks `amount_offered` of mint_a and names the price in mint_b.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{accounting, constants::*, events::SwapMade, state::*};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct MakeSwap<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,

    pub mint_a: Box<Account<'info, Mint>>,
    pub mint_b: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = maker,
    )]
    pub maker_ata_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = maker,
        space = ANCHOR_DISCRIMINATOR + SwapState::INIT_SPACE,
        seeds = [SWAP_SEED, maker.key().as_ref(), seed.to_le_bytes().as_ref()],
        bump
    )]
    pub swap: Box<Account<'info, SwapState>>,

    /// CHECK: PDA signer for the swap vault
    #[account(
        seeds = [SWAP_AUTHORITY_SEED, swap.key().as_ref()],
        bump
    )]
    pub swap_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint_a,
        associated_token::authority = swap_authority,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> MakeSwap<'info> {
    pub fn make_swap(
        &mut self,
        seed: u64,
        amount_offered: u64,
        amount_wanted: u64,
        bumps: &MakeSwapBumps,
    ) -> Result<()> {
        SwapState::validate_offer(
            &self.mint_a.key(),
            &self.mint_b.key(),
            amount_offered,
            amount_wanted,
        )?;
        accounting::assert_sufficient(self.maker_ata_a.amount, amount_offered)?;

        self.swap.set_inner(SwapState {
            maker: self.maker.key(),
            seed,
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            amount_offered,
            amount_wanted,
            bump: bumps.swap,
            authority_bump: bumps.swap_authority,
        });

        accounting::deposit(
            amount_offered,
            &self.token_program.to_account_info(),
            &self.maker_ata_a.to_account_info(),
            &self.vault.to_account_info(),
            &self.maker.to_account_info(),
        )?;

        emit!(SwapMade {
            swap: self.swap.key(),
            maker: self.maker.key(),
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            amount_offered,
            amount_wanted,
        });
        msg!("Swap {} opened: {} offered for {}", seed, amount_offered, amount_wanted);

        Ok(())
    }
}
