// Make Campaign Instruction

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::CampaignCreated, state::*};

#[derive(Accounts)]
pub struct MakeCampaign<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = maker,
        space = ANCHOR_DISCRIMINATOR + Campaign::INIT_SPACE,
        seeds = [CAMPAIGN_SEED, maker.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    /// CHECK: PDA signer for donated tokens
    #[account(
        seeds = [CAMPAIGN_AUTHORITY_SEED, campaign.key().as_ref()],
        bump
    )]
    pub campaign_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint,
        associated_token::authority = campaign_authority,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> MakeCampaign<'info> {
    pub fn make_campaign(&mut self, target_amount: u64, bumps: &MakeCampaignBumps) -> Result<()> {
        require!(target_amount > 0, CustodyError::ZeroAmount);

        self.campaign.set_inner(Campaign {
            maker: self.maker.key(),
            mint: self.mint.key(),
            target_amount,
            collected: 0,
            bump: bumps.campaign,
            authority_bump: bumps.campaign_authority,
        });

        emit!(CampaignCreated {
            campaign: self.campaign.key(),
            maker: self.maker.key(),
            mint: self.mint.key(),
            target_amount,
        });
        msg!("Campaign opened with target {}", target_amount);

        Ok(())
    }
}
