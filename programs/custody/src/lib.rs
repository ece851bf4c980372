// Custody Program
//
// Program-controlled custody for fungible tokens, shared by four protocols:
//
// - swap: make_swap / cancel_swap / take_swap (two-party atomic exchange)
// - vault: deposit_vault / cancel_vault / claim_vault (time-gated transfer)
// - campaign: make_campaign / donate / withdraw_campaign (threshold crowdfunding)
// - pool: initialize_pool / deposit_liquidity / withdraw_liquidity /
//   swap_tokens / lock_pool / unlock_pool (constant product AMM)
//
// All balance movements go through `accounting`; every outbound transfer is
// signed by a derived authority checked with `derivation::DerivedAuthority`.

use anchor_lang::prelude::*;

pub mod accounting;
pub mod constants;
pub mod curve;
pub mod derivation;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("ENsuQ1ZPiXuNYwM7g2bgqkxwq21gfSEdWHcdjL5JJhWD");

#[program]
pub mod custody {
    use super::*;

    // ── Swap ──

    pub fn make_swap(
        ctx: Context<MakeSwap>,
        seed: u64,
        amount_offered: u64,
        amount_wanted: u64,
    ) -> Result<()> {
        ctx.accounts
            .make_swap(seed, amount_offered, amount_wanted, &ctx.bumps)
    }

    pub fn cancel_swap(ctx: Context<CancelSwap>) -> Result<()> {
        ctx.accounts.cancel_swap()
    }

    pub fn take_swap(ctx: Context<TakeSwap>) -> Result<()> {
        ctx.accounts.take_swap()
    }

    // ── Vault ──

    pub fn deposit_vault(
        ctx: Context<DepositVault>,
        seed: u64,
        amount: u64,
        unlock_at: i64,
    ) -> Result<()> {
        ctx.accounts.deposit_vault(seed, amount, unlock_at, &ctx.bumps)
    }

    pub fn cancel_vault(ctx: Context<CancelVault>) -> Result<()> {
        ctx.accounts.cancel_vault()
    }

    pub fn claim_vault(ctx: Context<ClaimVault>) -> Result<()> {
        ctx.accounts.claim_vault()
    }

    // ── Campaign ──

    pub fn make_campaign(ctx: Context<MakeCampaign>, target_amount: u64) -> Result<()> {
        ctx.accounts.make_campaign(target_amount, &ctx.bumps)
    }

    pub fn donate(ctx: Context<Donate>, amount: u64) -> Result<()> {
        ctx.accounts.donate(amount)
    }

    pub fn withdraw_campaign(ctx: Context<WithdrawCampaign>) -> Result<()> {
        ctx.accounts.withdraw_campaign()
    }

    // ── Pool ──

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        seed: u64,
        fee_bps: u16,
        authority: Option<Pubkey>,
    ) -> Result<()> {
        ctx.accounts
            .initialize_pool(seed, fee_bps, authority, &ctx.bumps)
    }

    pub fn deposit_liquidity(
        ctx: Context<DepositLiquidity>,
        amount_x: u64,
        amount_y: u64,
        expiration: i64,
    ) -> Result<()> {
        ctx.accounts.deposit_liquidity(amount_x, amount_y, expiration)
    }

    pub fn withdraw_liquidity(
        ctx: Context<WithdrawLiquidity>,
        lp_amount: u64,
        min_amount_x: u64,
        min_amount_y: u64,
        expiration: i64,
    ) -> Result<()> {
        ctx.accounts
            .withdraw_liquidity(lp_amount, min_amount_x, min_amount_y, expiration)
    }

    pub fn swap_tokens(
        ctx: Context<SwapTokens>,
        mint_in: Pubkey,
        amount_in: u64,
        min_amount_out: u64,
        expiration: i64,
    ) -> Result<()> {
        ctx.accounts
            .swap_tokens(mint_in, amount_in, min_amount_out, expiration)
    }

    pub fn lock_pool(ctx: Context<LockPool>) -> Result<()> {
        ctx.accounts.lock_pool()
    }

    pub fn unlock_pool(ctx: Context<UnlockPool>) -> Result<()> {
        ctx.accounts.unlock_pool()
    }
}
