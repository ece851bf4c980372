// Donate Instruction
//
// Anyone can donate, any number of times. Donations keep being accepted
// after the target is reached.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{accounting, constants::*, errors::*, events::DonationReceived, state::*};

#[derive(Accounts)]
pub struct Donate<'info> {
    #[account(mut)]
    pub donor: Signer<'info>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = donor,
    )]
    pub donor_ata: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        has_one = mint @ CustodyError::InvalidMint,
        seeds = [CAMPAIGN_SEED, campaign.maker.as_ref(), campaign.mint.as_ref()],
        bump = campaign.bump,
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    /// CHECK: PDA signer for donated tokens
    #[account(
        seeds = [CAMPAIGN_AUTHORITY_SEED, campaign.key().as_ref()],
        bump = campaign.authority_bump,
    )]
    pub campaign_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = campaign_authority,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Donate<'info> {
    pub fn donate(&mut self, amount: u64) -> Result<()> {
        accounting::assert_sufficient(self.donor_ata.amount, amount)?;
        self.campaign.record_donation(amount)?;

        accounting::deposit(
            amount,
            &self.token_program.to_account_info(),
            &self.donor_ata.to_account_info(),
            &self.vault.to_account_info(),
            &self.donor.to_account_info(),
        )?;

        emit!(DonationReceived {
            campaign: self.campaign.key(),
            donor: self.donor.key(),
            amount,
            collected: self.campaign.collected,
        });
        msg!(
            "Donation of {}: {} / {} collected",
            amount,
            self.campaign.collected,
            self.campaign.target_amount
        );

        Ok(())
    }
}
