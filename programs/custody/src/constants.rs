// Custody Program Constants

// Record seeds
pub const SWAP_SEED: &[u8] = b"swap";
pub const VAULT_STATE_SEED: &[u8] = b"vault_state";
pub const CAMPAIGN_SEED: &[u8] = b"campaign";
pub const POOL_SEED: &[u8] = b"pool";
pub const LP_MINT_SEED: &[u8] = b"lp_mint";

// Derived signer domains, always followed by the record address
pub const SWAP_AUTHORITY_SEED: &[u8] = b"swap_authority";
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault";
pub const CAMPAIGN_AUTHORITY_SEED: &[u8] = b"campaign_authority";
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Vault unlock sentinels
pub const UNLOCK_IMMEDIATE: i64 = 0;
pub const UNLOCK_NEVER: i64 = i64::MAX;

// Pool limits
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const MAX_FEE_BASIS_POINTS: u16 = 10_000; // 100%
pub const MINIMUM_LIQUIDITY: u64 = 1_000;
pub const RATIO_TOLERANCE_BPS: u64 = 10; // 0.10%
pub const LP_DECIMALS: u8 = 6;
pub const MAX_EXPIRATION_SECONDS: i64 = 31_536_000; // 1 year
