// Constant Product Curve
//
// Pure integer math for the liquidity pool. Every intermediate is u128 and
// every rounding step favors the pool: shares and payouts round down, tokens
// pulled from depositors and the post-swap output reserve round up.

use crate::{constants::*, errors::CustodyError};

type CurveResult<T> = core::result::Result<T, CustodyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositQuote {
    // Tokens pulled from the depositor
    pub amount_x: u64,
    pub amount_y: u64,
    // Shares minted to the depositor
    pub lp_minted: u64,
    // Growth of the pool's accounting supply (includes the locked minimum on first deposit)
    pub lp_supply_added: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    pub amount_in: u64,
    pub fee: u64,
    pub amount_out: u64,
}

pub fn invariant(reserve_x: u64, reserve_y: u64) -> u128 {
    reserve_x as u128 * reserve_y as u128
}

// First deposit: liquidity = floor(sqrt(x * y)). MINIMUM_LIQUIDITY of it is
// never minted to anyone and stays in the accounting supply forever, so the
// share price can't be inflated from a near-empty pool.
pub fn first_deposit(amount_x: u64, amount_y: u64) -> CurveResult<DepositQuote> {
    if amount_x == 0 || amount_y == 0 {
        return Err(CustodyError::ZeroAmount);
    }

    let liquidity = u64::try_from(isqrt(invariant(amount_x, amount_y)))
        .map_err(|_| CustodyError::Overflow)?;

    if liquidity <= MINIMUM_LIQUIDITY {
        return Err(CustodyError::InsufficientLiquidity);
    }

    Ok(DepositQuote {
        amount_x,
        amount_y,
        lp_minted: liquidity - MINIMUM_LIQUIDITY,
        lp_supply_added: liquidity,
    })
}

// Later deposits must match the reserve ratio within RATIO_TOLERANCE_BPS plus
// one unit of rounding. Shares follow the smaller relative contribution and
// only the tokens backing those shares are pulled.
pub fn proportional_deposit(
    amount_x: u64,
    amount_y: u64,
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
) -> CurveResult<DepositQuote> {
    if amount_x == 0 || amount_y == 0 {
        return Err(CustodyError::ZeroAmount);
    }
    if reserve_x == 0 || reserve_y == 0 || lp_supply == 0 {
        return Err(CustodyError::InsufficientLiquidity);
    }

    check_ratio(amount_x, amount_y, reserve_x, reserve_y)?;

    let lp_from_x = mul_div_floor(amount_x, lp_supply, reserve_x)?;
    let lp_from_y = mul_div_floor(amount_y, lp_supply, reserve_y)?;
    let lp_minted = lp_from_x.min(lp_from_y);

    if lp_minted == 0 {
        return Err(CustodyError::InsufficientLiquidity);
    }

    Ok(DepositQuote {
        amount_x: mul_div_ceil(lp_minted, reserve_x, lp_supply)?,
        amount_y: mul_div_ceil(lp_minted, reserve_y, lp_supply)?,
        lp_minted,
        lp_supply_added: lp_minted,
    })
}

pub fn withdrawal_amounts(
    lp_amount: u64,
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
) -> CurveResult<(u64, u64)> {
    if lp_amount == 0 {
        return Err(CustodyError::ZeroAmount);
    }
    if lp_supply == 0 || lp_amount > lp_supply {
        return Err(CustodyError::InsufficientLiquidity);
    }

    Ok((
        mul_div_floor(lp_amount, reserve_x, lp_supply)?,
        mul_div_floor(lp_amount, reserve_y, lp_supply)?,
    ))
}

// amount_out = reserve_out - ceil(reserve_in * reserve_out / (reserve_in + amount_in * (1 - fee)))
//
// The fee stays in the pool as part of the input leg, so the product of the
// reserves after the swap is never below the product before it.
pub fn quote_swap(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_bps: u16,
    min_amount_out: u64,
) -> CurveResult<SwapQuote> {
    if amount_in == 0 {
        return Err(CustodyError::ZeroAmount);
    }
    if fee_bps > MAX_FEE_BASIS_POINTS {
        return Err(CustodyError::FeeTooHigh);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(CustodyError::InsufficientLiquidity);
    }

    let in_after_fee = mul_div_floor(amount_in, BPS_DENOMINATOR - fee_bps as u64, BPS_DENOMINATOR)?;

    let k = invariant(reserve_in, reserve_out);
    let new_reserve_in = (reserve_in as u128)
        .checked_add(in_after_fee as u128)
        .ok_or(CustodyError::Overflow)?;
    let new_reserve_out = div_ceil(k, new_reserve_in)?;

    let amount_out = u64::try_from(
        (reserve_out as u128)
            .checked_sub(new_reserve_out)
            .ok_or(CustodyError::Overflow)?,
    )
    .map_err(|_| CustodyError::Overflow)?;

    if amount_out == 0 || amount_out < min_amount_out {
        return Err(CustodyError::SlippageExceeded);
    }

    Ok(SwapQuote {
        amount_in,
        fee: amount_in - in_after_fee,
        amount_out,
    })
}

fn check_ratio(amount_x: u64, amount_y: u64, reserve_x: u64, reserve_y: u64) -> CurveResult<()> {
    let lhs = invariant(amount_x, reserve_y);
    let rhs = invariant(amount_y, reserve_x);
    let larger = lhs.max(rhs);
    let diff = larger - lhs.min(rhs);

    // one unit of either token moves a cross product by the other reserve
    let rounding = reserve_x.max(reserve_y) as u128;
    let allowed = larger / BPS_DENOMINATOR as u128 * RATIO_TOLERANCE_BPS as u128 + rounding;

    if diff > allowed {
        return Err(CustodyError::SlippageExceeded);
    }
    Ok(())
}

fn mul_div_floor(a: u64, b: u64, denominator: u64) -> CurveResult<u64> {
    if denominator == 0 {
        return Err(CustodyError::DivisionByZero);
    }
    u64::try_from(invariant(a, b) / denominator as u128).map_err(|_| CustodyError::Overflow)
}

fn mul_div_ceil(a: u64, b: u64, denominator: u64) -> CurveResult<u64> {
    let quotient = div_ceil(invariant(a, b), denominator as u128)?;
    u64::try_from(quotient).map_err(|_| CustodyError::Overflow)
}

fn div_ceil(numerator: u128, denominator: u128) -> CurveResult<u128> {
    if denominator == 0 {
        return Err(CustodyError::DivisionByZero);
    }
    let quotient = numerator / denominator;
    if numerator % denominator == 0 {
        Ok(quotient)
    } else {
        quotient.checked_add(1).ok_or(CustodyError::Overflow)
    }
}

// Integer square root (Babylonian method)
fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x / 2 + 1;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
