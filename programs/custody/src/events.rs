use anchor_lang::prelude::*;

// ── Swap ──

#[event]
pub struct SwapMade {
    pub swap: Pubkey,
    pub maker: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub amount_offered: u64,
    pub amount_wanted: u64,
}

#[event]
pub struct SwapCancelled {
    pub swap: Pubkey,
    pub maker: Pubkey,
    pub refunded: u64,
}

#[event]
pub struct SwapTaken {
    pub swap: Pubkey,
    pub maker: Pubkey,
    pub taker: Pubkey,
    pub amount_paid: u64,
    pub amount_received: u64,
}

// ── Vault ──

#[event]
pub struct VaultDeposited {
    pub vault_state: Pubkey,
    pub maker: Pubkey,
    pub taker: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub unlock_at: i64,
}

#[event]
pub struct VaultCancelled {
    pub vault_state: Pubkey,
    pub maker: Pubkey,
    pub refunded: u64,
}

#[event]
pub struct VaultClaimed {
    pub vault_state: Pubkey,
    pub taker: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

// ── Campaign ──

#[event]
pub struct CampaignCreated {
    pub campaign: Pubkey,
    pub maker: Pubkey,
    pub mint: Pubkey,
    pub target_amount: u64,
}

#[event]
pub struct DonationReceived {
    pub campaign: Pubkey,
    pub donor: Pubkey,
    pub amount: u64,
    pub collected: u64,
}

#[event]
pub struct CampaignWithdrawn {
    pub campaign: Pubkey,
    pub maker: Pubkey,
    pub amount: u64,
}

// ── Pool ──

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub seed: u64,
    pub authority: Option<Pubkey>,
    pub mint_x: Pubkey,
    pub mint_y: Pubkey,
    pub fee_bps: u16,
}

#[event]
pub struct LiquidityDeposited {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub amount_x: u64,
    pub amount_y: u64,
    pub lp_minted: u64,
}

#[event]
pub struct LiquidityWithdrawn {
    pub pool: Pubkey,
    pub withdrawer: Pubkey,
    pub amount_x: u64,
    pub amount_y: u64,
    pub lp_burned: u64,
}

#[event]
pub struct TokensSwapped {
    pub pool: Pubkey,
    pub swapper: Pubkey,
    pub mint_in: Pubkey,
    pub amount_in: u64,
    pub fee: u64,
    pub amount_out: u64,
}

#[event]
pub struct PoolLockChanged {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub locked: bool,
}
