//! High-precision reference ("goldens") for the zap solver, built on
//! **BigInt/BigRational** and independent of the quadratic.
//!
//! The reference models the balance condition directly: after selling `x`
//! of the excess asset (continuous constant-product output, fee on input),
//! the caller's holdings and the pool must share one ratio. The mismatch
//!
//! ```text
//! excess(x) = (amount_a − x)·(reserve_b − y) − (amount_b + y)·(reserve_a + x)
//! y(x)      = x·net·reserve_b / (reserve_a·extension + x·net)
//! ```
//!
//! is strictly decreasing in `x`, so the largest integer with `excess ≥ 0`
//! (found by bisection) is the floor of the exact swap amount.
//!
//! Not used on the production path; tests and golden generation only.

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::error::Result;
use super::error_map::{from_zap_inputs, to_error};
use super::solver;
use super::types::{Amount, DepositAmounts, FeeSpec, PoolReserves, SwapResult};

#[inline]
fn q(v: Amount) -> BigRational {
    BigRational::from_integer(BigInt::from(v))
}

#[inline]
fn bu(v: Amount) -> BigUint {
    BigUint::from(v)
}

/// `true` when B is over-represented, compared on exact products.
fn b_heavy(amounts: &DepositAmounts, reserves: &PoolReserves) -> bool {
    amounts.amount_b != 0
        && bu(reserves.reserve_a) * bu(amounts.amount_b) > bu(reserves.reserve_b) * bu(amounts.amount_a)
}

/// Continuous swap output for selling `x` of A into the pool.
pub fn continuous_amount_out(x: Amount, reserves: &PoolReserves, fee: &FeeSpec) -> BigRational {
    let net = q(fee.extension) - q(fee.fee);
    let x_net = q(x) * &net;
    let den = q(reserves.reserve_a) * q(fee.extension) + &x_net;
    x_net * q(reserves.reserve_b) / den
}

/// Ratio mismatch after selling `x` of A: positive while A is still in excess.
pub fn ratio_excess(
    x: Amount,
    amounts: &DepositAmounts,
    reserves: &PoolReserves,
    fee: &FeeSpec,
) -> BigRational {
    let y = continuous_amount_out(x, reserves, fee);
    let held_a = q(amounts.amount_a) - q(x);
    let held_b = q(amounts.amount_b) + &y;
    let pool_a = q(reserves.reserve_a) + q(x);
    let pool_b = q(reserves.reserve_b) - y;
    held_a * pool_b - held_b * pool_a
}

/// Relative gap `|hA·RB − hB·RA| / (RA·RB)` between held and pool ratios.
pub fn relative_ratio_gap(holdings: &DepositAmounts, reserves: &PoolReserves) -> BigRational {
    let lhs = q(holdings.amount_a) * q(reserves.reserve_b);
    let rhs = q(holdings.amount_b) * q(reserves.reserve_a);
    (lhs - rhs).abs() / (q(reserves.reserve_a) * q(reserves.reserve_b))
}

/// Floor of the exact swap amount, by bisection on [`ratio_excess`].
pub fn reference_swap(
    reserves: &PoolReserves,
    amounts: &DepositAmounts,
    fee: &FeeSpec,
) -> Result<SwapResult> {
    if let Some(code) = from_zap_inputs(
        (amounts.amount_a, amounts.amount_b),
        (reserves.reserve_a, reserves.reserve_b),
        fee.fee,
        fee.extension,
    ) {
        return Err(to_error(code));
    }

    let reversed = b_heavy(amounts, reserves);
    let (amounts, reserves) = if reversed {
        (amounts.flipped(), reserves.flipped())
    } else {
        (*amounts, *reserves)
    };

    // excess(0) >= 0 by orientation, excess(amount_a) < 0
    let mut lo: Amount = 0;
    let mut hi: Amount = amounts.amount_a;
    if hi == 0 {
        return Ok(SwapResult { reversed, swap_amount: 0 });
    }
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if ratio_excess(mid, &amounts, &reserves, fee) >= BigRational::zero() {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(SwapResult { reversed, swap_amount: lo })
}

// -------------------------
// Golden bundles
// -------------------------
#[derive(Debug, Clone)]
pub struct GoldenZap {
    pub core: SwapResult,
    pub reference: SwapResult,
    /// Mismatch at the core amount (oriented so A is sold); `>= 0` means no over-swap.
    pub excess_at_core: BigRational,
    /// Mismatch one unit later; `< 0` means the core amount is not an under-swap by a full unit.
    pub excess_after_next: BigRational,
}

impl GoldenZap {
    pub fn abs_diff(&self) -> Amount {
        self.core.swap_amount.abs_diff(self.reference.swap_amount)
    }
}

/// Compares the integer core with the reference on the same inputs.
pub fn golden_zap(
    reserves: &PoolReserves,
    amounts: &DepositAmounts,
    fee: &FeeSpec,
) -> Result<GoldenZap> {
    let core = solver::solve(reserves, amounts, fee)?;
    let reference = reference_swap(reserves, amounts, fee)?;

    let (oa, or) = if core.reversed {
        (amounts.flipped(), reserves.flipped())
    } else {
        (*amounts, *reserves)
    };
    let excess_at_core = ratio_excess(core.swap_amount, &oa, &or, fee);
    let excess_after_next = ratio_excess(core.swap_amount.saturating_add(1), &oa, &or, fee);

    Ok(GoldenZap { core, reference, excess_at_core, excess_after_next })
}
