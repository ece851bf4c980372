// Deposit Vault Instruction
//
// Maker locks tokens for a taker until `unlock_at`.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{accounting, constants::*, errors::*, events::VaultDeposited, state::*};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct DepositVault<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,

    /// CHECK: only recorded as the party allowed to claim
    pub taker: UncheckedAccount<'info>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = maker,
    )]
    pub maker_ata: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = maker,
        space = ANCHOR_DISCRIMINATOR + VaultState::INIT_SPACE,
        seeds = [
            VAULT_STATE_SEED,
            seed.to_le_bytes().as_ref(),
            maker.key().as_ref(),
            taker.key().as_ref(),
        ],
        bump
    )]
    pub vault_state: Box<Account<'info, VaultState>>,

    /// CHECK: PDA signer for the vault tokens
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, vault_state.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint,
        associated_token::authority = vault_authority,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> DepositVault<'info> {
    pub fn deposit_vault(
        &mut self,
        seed: u64,
        amount: u64,
        unlock_at: i64,
        bumps: &DepositVaultBumps,
    ) -> Result<()> {
        require!(amount > 0, CustodyError::ZeroAmount);
        VaultState::validate_unlock_at(unlock_at)?;
        accounting::assert_sufficient(self.maker_ata.amount, amount)?;

        let created_at = Clock::get()?.unix_timestamp;

        self.vault_state.set_inner(VaultState {
            maker: self.maker.key(),
            taker: self.taker.key(),
            mint: self.mint.key(),
            seed,
            amount,
            unlock_at,
            created_at,
            status: VaultStatus::Open,
            bump: bumps.vault_state,
            authority_bump: bumps.vault_authority,
        });

        accounting::deposit(
            amount,
            &self.token_program.to_account_info(),
            &self.maker_ata.to_account_info(),
            &self.vault.to_account_info(),
            &self.maker.to_account_info(),
        )?;

        emit!(VaultDeposited {
            vault_state: self.vault_state.key(),
            maker: self.maker.key(),
            taker: self.taker.key(),
            mint: self.mint.key(),
            amount,
            unlock_at,
        });
        msg!("Vault {} locked {} until {}", seed, amount, unlock_at);

        Ok(())
    }
}
