// Withdraw Campaign Instruction
//
// All-or-nothing payout to the maker once the target is reached.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{accounting, constants::*, errors::*, events::CampaignWithdrawn, state::*};

#[derive(Accounts)]
pub struct WithdrawCampaign<'info> {
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

impl<'info> WithdrawCampaign<'info> {
    pub fn withdraw_campaign(&mut self) -> Result<()> {
        self.campaign.assert_withdrawable()?;

        let amount = self.vault.amount;
        accounting::assert_tracked_balance(amount, self.campaign.collected)?;

        let proof = self.campaign.authority(self.campaign.key());
        accounting::drain_and_close(
            &self.token_program.to_account_info(),
            &self.vault.to_account_info(),
            amount,
            &self.maker_ata.to_account_info(),
            &self.maker.to_account_info(),
            &self.campaign_authority.to_account_info(),
            &proof,
        )?;

        emit!(CampaignWithdrawn {
            campaign: self.campaign.key(),
            maker: self.maker.key(),
            amount,
        });
        msg!("Campaign withdrawn: {}", amount);

        Ok(())
    }
}
