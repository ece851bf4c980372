// Claim Vault Instruction
//
// Taker collects the vault once it has unlocked. Before that the instruction
// fails with NotYetUnlocked and nothing changes, so it can simply be retried.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{accounting, constants::*, errors::*, events::VaultClaimed, state::*};

#[derive(Accounts)]
pub struct ClaimVault<'info> {
    #[account(mut)]
    pub taker: Signer<'info>,

    // Receives the record and vault rent
    #[account(mut)]
    pub maker: SystemAccount<'info>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint,
        associated_token::authority = taker,
    )]
    pub taker_ata: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        close = maker,
        has_one = taker @ CustodyError::Unauthorized,
        has_one = maker,
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

impl<'info> ClaimVault<'info> {
    pub fn claim_vault(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.vault_state.claim(now)?;

        let amount = self.vault.amount;
        accounting::assert_tracked_balance(amount, self.vault_state.amount)?;

        let proof = self.vault_state.authority(self.vault_state.key());
        accounting::drain_and_close(
            &self.token_program.to_account_info(),
            &self.vault.to_account_info(),
            amount,
            &self.taker_ata.to_account_info(),
            &self.maker.to_account_info(),
            &self.vault_authority.to_account_info(),
            &proof,
        )?;

        emit!(VaultClaimed {
            vault_state: self.vault_state.key(),
            taker: self.taker.key(),
            amount,
            timestamp: now,
        });
        msg!("Vault {} claimed: {}", self.vault_state.seed, amount);

        Ok(())
    }
}
