//! Constant-product swap with the fee charged on input, used to apply a
//! [`SwapResult`] to a pool and a set of holdings.
//! The whole input stays in the pool, fee included.

use super::error::Result;
use super::error_catalog::ZapErrorCode;
use super::guardrails::{
    checked_add, checked_mul_u256, checked_sub, ensure_fee, ensure_reserves, u256_to_u128_checked,
    u512_to_u256_checked, widen,
};
use super::types::{Amount, DepositAmounts, FeeSpec, PoolReserves, SwapResult, U256};

/// Output of swapping `amount_in` into a pool `(reserve_in, reserve_out)`:
/// `floor(in·net·r_out / (r_in·extension + in·net))`.
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: &FeeSpec,
) -> Result<Amount> {
    ensure_reserves(&PoolReserves::new(reserve_in, reserve_out))?;
    let net = ensure_fee(fee)?;
    if amount_in == 0 {
        crate::zap_bail!(ZapErrorCode::InvalidAmount, amount_in => 0);
    }

    let in_net = checked_mul_u256(U256::from(amount_in), U256::from(net), "swap output")?;
    let numerator = widen(in_net) * widen(U256::from(reserve_out));
    let denominator = widen(U256::from(reserve_in) * U256::from(fee.extension)) + widen(in_net);

    let out = u512_to_u256_checked(numerator / denominator, "swap output")?;
    u256_to_u128_checked(out, "swap output")
}

/// State after executing a [`SwapResult`] against the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapOutcome {
    pub amount_out: Amount,
    pub reserves_after: PoolReserves,
    pub holdings_after: DepositAmounts,
}

/// Applies `result` to `reserves` and the caller's `holdings`.
/// A zero swap leaves both untouched.
pub fn apply_swap(
    reserves: &PoolReserves,
    holdings: &DepositAmounts,
    result: &SwapResult,
    fee: &FeeSpec,
) -> Result<SwapOutcome> {
    if result.is_noop() {
        return Ok(SwapOutcome {
            amount_out: 0,
            reserves_after: *reserves,
            holdings_after: *holdings,
        });
    }

    // orient so that "a" is the side being sold
    let (r_in, r_out, h_in, h_out) = if result.reversed {
        (reserves.reserve_b, reserves.reserve_a, holdings.amount_b, holdings.amount_a)
    } else {
        (reserves.reserve_a, reserves.reserve_b, holdings.amount_a, holdings.amount_b)
    };

    let x = result.swap_amount;
    if x > h_in {
        crate::zap_bail!(ZapErrorCode::InvalidAmount, swap_amount => x, held => h_in);
    }
    let out = get_amount_out(x, r_in, r_out, fee)?;

    let r_in1 = checked_add(r_in, x, "reserve in")?;
    let r_out1 = checked_sub(r_out, out, "reserve out")?;
    let h_in1 = h_in - x;
    let h_out1 = checked_add(h_out, out, "holding out")?;

    let (reserves_after, holdings_after) = if result.reversed {
        (PoolReserves::new(r_out1, r_in1), DepositAmounts::new(h_out1, h_in1))
    } else {
        (PoolReserves::new(r_in1, r_out1), DepositAmounts::new(h_in1, h_out1))
    };

    Ok(SwapOutcome { amount_out: out, reserves_after, holdings_after })
}
