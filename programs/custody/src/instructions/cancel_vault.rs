// Cancel Vault Instruction
//
// Maker reclaims an open vault at any time.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{accounting, constants::*, errors::*, events::VaultCancelled, state::*};

#[derive(Accounts)]
pub struct CancelVault<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint,
        associated_token::authority = maker,
    )]
    pub maker_ata: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        close = maker,
        has_one = maker @ CustodyError::Unauthorized,
        has_one = mint @ CustodyError::InvalidMint,
        seeds = [
            VAULT_STATE_SEED,
            vault_state.seed.to_le_bytes().as_ref(),
            vault_state.maker.as_ref(),
            vault_state.taker.as_ref(),
        ],
        bump = vault_state.bump,
    )]
    pub vault_state: Box<Account<'info, VaultState>>,

    /// CHECK: PDA signer for the vault tokens
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, vault_state.key().as_ref()],
        bump = vault_state.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = vault_authority,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> CancelVault<'info> {
    pub fn cancel_vault(&mut self) -> Result<()> {
        self.vault_state.cancel()?;

        let refunded = self.vault.amount;
        let proof = self.vault_state.authority(self.vault_state.key());

        accounting::drain_and_close(
            &self.token_program.to_account_info(),
            &self.vault.to_account_info(),
            refunded,
            &self.maker_ata.to_account_info(),
            &self.maker.to_account_info(),
            &self.vault_authority.to_account_info(),
            &proof,
        )?;

        emit!(VaultCancelled {
            vault_state: self.vault_state.key(),
            maker: self.maker.key(),
            refunded,
        });
        msg!("Vault {} cancelled, refunded {}", self.vault_state.seed, refunded);

        Ok(())
    }
}
