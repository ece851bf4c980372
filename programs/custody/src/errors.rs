use anchor_lang::prelude::*;

#[error_code]
pub enum CustodyError {
    // Derivation
    #[msg("Seed is too long or too many seeds were supplied")]
    InvalidSeed,

    #[msg("No bump produced an off-curve address for these seeds")]
    SeedSpaceExhausted,

    // Roles
    #[msg("Signer is not allowed to perform this action")]
    Unauthorized,

    // Balances
    #[msg("Source account does not hold enough tokens")]
    InsufficientFunds,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Custody vault holds less than its tracked balance")]
    BalanceMismatch,

    #[msg("Token mints must be different")]
    IdenticalMints,

    #[msg("Mint does not belong to this instance")]
    InvalidMint,

    // State machine
    #[msg("Instruction is not valid in the current state")]
    InvalidState,

    #[msg("Vault is not unlocked yet")]
    NotYetUnlocked,

    #[msg("Unlock time must be zero, a unix timestamp, or the never sentinel")]
    InvalidUnlockTime,

    #[msg("Campaign target has not been reached")]
    TargetNotReached,

    // Pool
    #[msg("Fee basis points cannot exceed 10000")]
    FeeTooHigh,

    #[msg("Output or ratio is outside the accepted slippage")]
    SlippageExceeded,

    #[msg("Not enough liquidity for this operation")]
    InsufficientLiquidity,

    #[msg("Pool is locked")]
    PoolLocked,

    #[msg("Pool is already locked")]
    PoolAlreadyLocked,

    #[msg("Pool is already unlocked")]
    PoolAlreadyUnlocked,

    #[msg("Transaction deadline has expired")]
    TransactionExpired,

    #[msg("Expiration timestamp is too far in the future")]
    ExpirationTooFar,

    // Arithmetic
    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Division by zero")]
    DivisionByZero,
}
