// Constant Product Curve Math
//
// Pure integer functions over u64 amounts with u128 intermediates.
// No state, no accounts. Rounding policy: every truncation favors the
// pool - swap output and withdrawal amounts round down, deposit amounts
// charged for a given share count round up.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::*;

/// Amounts actually consumed by a deposit and the shares minted for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositAmounts {
    pub amount_x: u64,
    pub amount_y: u64,
    pub shares: u64,
}

/// Amounts returned for a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawAmounts {
    pub amount_x: u64,
    pub amount_y: u64,
}

// Integer square root via Newton's method.
// Converges for any u128 input; result fits u64 when n is a product
// of two u64 values.
pub fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

// Compute swap output for a given input amount.
// Formula: out = floor(reserve_out * net_in / (reserve_in + net_in))
// where net_in = floor(amount_in * (10000 - fee_bps) / 10000).
// The fee portion of the input stays in the pool.
pub fn quote_swap_output(
    reserve_in: u64,
    reserve_out: u64,
    amount_in: u64,
    fee_basis_points: u16,
) -> Result<u64> {
    require!(fee_basis_points < BPS_DENOMINATOR, AmmError::InvalidFee);

    let fee_complement = (BPS_DENOMINATOR - fee_basis_points) as u128;

    let net_in = (amount_in as u128)
        .checked_mul(fee_complement)
        .ok_or(AmmError::Overflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(AmmError::DivisionByZero)?;

    let numerator = (reserve_out as u128)
        .checked_mul(net_in)
        .ok_or(AmmError::Overflow)?;

    let denominator = (reserve_in as u128)
        .checked_add(net_in)
        .ok_or(AmmError::Overflow)?;

    let amount_out = numerator
        .checked_div(denominator)
        .ok_or(AmmError::DivisionByZero)?;

    // amount_out <= reserve_out <= u64::MAX, narrowing cannot truncate
    Ok(amount_out as u64)
}

// Compute the amounts consumed and shares minted for a deposit.
//
// Empty pool: both desired amounts are used as given and the initial
// share count is the integer geometric mean sqrt(x * y), which fixes
// the initial price.
//
// Funded pool: shares = min over both sides of floor(desired * supply
// / reserve), so the over-supplied side is capped to the current
// reserve ratio. The charged amounts are backed out from the share
// count rounding up, and never exceed the desired amounts.
pub fn quote_deposit(
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
    desired_x: u64,
    desired_y: u64,
) -> Result<DepositAmounts> {
    if lp_supply == 0 {
        let product = (desired_x as u128)
            .checked_mul(desired_y as u128)
            .ok_or(AmmError::Overflow)?;

        // sqrt of a product of two u64 values always fits u64
        let shares = isqrt(product) as u64;

        return Ok(DepositAmounts {
            amount_x: desired_x,
            amount_y: desired_y,
            shares,
        });
    }

    let shares_from_x = (desired_x as u128)
        .checked_mul(lp_supply as u128)
        .ok_or(AmmError::Overflow)?
        .checked_div(reserve_x as u128)
        .ok_or(AmmError::DivisionByZero)?;

    let shares_from_y = (desired_y as u128)
        .checked_mul(lp_supply as u128)
        .ok_or(AmmError::Overflow)?
        .checked_div(reserve_y as u128)
        .ok_or(AmmError::DivisionByZero)?;

    let shares = std::cmp::min(shares_from_x, shares_from_y);
    let minted = u64::try_from(shares).map_err(|_| AmmError::Overflow)?;

    // Back out the amounts owed for `shares`, rounding up. Because
    // shares <= floor(desired * supply / reserve) on both sides, the
    // rounded-up amounts stay within the desired amounts.
    let amount_x = shares
        .checked_mul(reserve_x as u128)
        .ok_or(AmmError::Overflow)?
        .div_ceil(lp_supply as u128);

    let amount_y = shares
        .checked_mul(reserve_y as u128)
        .ok_or(AmmError::Overflow)?
        .div_ceil(lp_supply as u128);

    Ok(DepositAmounts {
        amount_x: amount_x as u64,
        amount_y: amount_y as u64,
        shares: minted,
    })
}

// Compute the proportional share of both reserves for burning
// `shares_burned` out of `lp_supply`. Floor division only.
pub fn quote_withdraw(
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
    shares_burned: u64,
) -> Result<WithdrawAmounts> {
    let amount_x = (shares_burned as u128)
        .checked_mul(reserve_x as u128)
        .ok_or(AmmError::Overflow)?
        .checked_div(lp_supply as u128)
        .ok_or(AmmError::DivisionByZero)?;

    let amount_y = (shares_burned as u128)
        .checked_mul(reserve_y as u128)
        .ok_or(AmmError::Overflow)?
        .checked_div(lp_supply as u128)
        .ok_or(AmmError::DivisionByZero)?;

    Ok(WithdrawAmounts {
        amount_x: u64::try_from(amount_x).map_err(|_| AmmError::Overflow)?,
        amount_y: u64::try_from(amount_y).map_err(|_| AmmError::Overflow)?,
    })
}

// Assert that reserve_x * reserve_y did not decrease across a swap.
// Correct curve arithmetic can never trip this; it is kept as the
// final check before any swap commits.
pub fn check_invariant_non_decreasing(
    reserve_x_before: u64,
    reserve_y_before: u64,
    reserve_x_after: u64,
    reserve_y_after: u64,
) -> Result<()> {
    let product_before = (reserve_x_before as u128) * (reserve_y_before as u128);
    let product_after = (reserve_x_after as u128) * (reserve_y_after as u128);

    require!(product_after >= product_before, AmmError::InvariantViolation);

    Ok(())
}
