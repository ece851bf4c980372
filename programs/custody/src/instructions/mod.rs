// Instructions module
// - swap: make_swap, cancel_swap, take_swap
// - vault: deposit_vault, cancel_vault, claim_vault
// - campaign: make_campaign, donate, withdraw_campaign
// - pool: initialize_pool, deposit_liquidity, withdraw_liquidity, swap_tokens,
//   lock_pool / unlock_pool (pool authority only)

pub mod cancel_swap;
pub mod cancel_vault;
pub mod claim_vault;
pub mod deposit_liquidity;
pub mod deposit_vault;
pub mod donate;
pub mod initialize_pool;
pub mod lock_pool;
pub mod make_campaign;
pub mod make_swap;
pub mod swap_tokens;
pub mod take_swap;
pub mod unlock_pool;
pub mod withdraw_campaign;
pub mod withdraw_liquidity;

pub use cancel_swap::*;
pub use cancel_vault::*;
pub use claim_vault::*;
pub use deposit_liquidity::*;
pub use deposit_vault::*;
pub use donate::*;
pub use initialize_pool::*;
pub use lock_pool::*;
pub use make_campaign::*;
pub use make_swap::*;
pub use swap_tokens::*;
pub use take_swap::*;
pub use unlock_pool::*;
pub use withdraw_campaign::*;
pub use withdraw_liquidity::*;
