//! Optimal one-sided swap: normalize, build the quadratic, take its root.
//!
//! The discriminant `b² − 4·a·extension·(c1 − c2)` is evaluated in 512 bits
//! on whichever branch keeps every intermediate non-negative, and the positive
//! root `(floor_sqrt(D) − b) / (2a)` is truncated, so the result never
//! over-swaps.

use super::coefficients::{self, Coefficients};
use super::direction::normalize;
use super::error::Result;
use super::error_catalog::ZapErrorCode;
use super::guardrails::{
    checked_add_u512, checked_mul_u512, checked_sub_u256, checked_sub_u512, mul_u256_to_u512,
    u256_to_u128_checked, u512_to_u256_checked, validate_inputs, widen,
};
use super::sqrt::isqrt_u512;
use super::types::{Amount, DepositAmounts, FeeSpec, PoolReserves, SwapResult, U512};

/// Which asset to swap before depositing, and how much of it.
///
/// Fails with `InvalidParameter` when `extension <= fee` or a reserve is zero,
/// `InvalidAmount` when both amounts are zero, `ArithmeticOverflow` when an
/// intermediate leaves its working width and `DivisionByZero` when `a == 0`.
pub fn compute_optimal_swap(
    amount_a: Amount,
    amount_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    fee: Amount,
    extension: Amount,
) -> Result<SwapResult> {
    solve(
        &PoolReserves::new(reserve_a, reserve_b),
        &DepositAmounts::new(amount_a, amount_b),
        &FeeSpec::new(fee, extension),
    )
}

/// Typed entry point of [`compute_optimal_swap`].
pub fn solve(
    reserves: &PoolReserves,
    amounts: &DepositAmounts,
    fee: &FeeSpec,
) -> Result<SwapResult> {
    let span = tracing::debug_span!(
        "compute_optimal_swap",
        amount_a = %amounts.amount_a,
        amount_b = %amounts.amount_b,
        reserve_a = %reserves.reserve_a,
        reserve_b = %reserves.reserve_b,
        fee = %fee.fee,
        extension = %fee.extension,
    );
    let _guard = span.enter();

    let out = solve_oriented(reserves, amounts, fee);
    match &out {
        Ok(res) => tracing::debug!(reversed = res.reversed, swap_amount = %res.swap_amount, "zap solved"),
        Err(err) => tracing::debug!(code = %err.code, error = %err, "zap rejected"),
    }
    out
}

fn solve_oriented(
    reserves: &PoolReserves,
    amounts: &DepositAmounts,
    fee: &FeeSpec,
) -> Result<SwapResult> {
    validate_inputs(amounts, reserves, fee)?;

    let oriented = normalize(*amounts, *reserves);
    let coeff = coefficients::build(&oriented.amounts, &oriented.reserves, fee)?;
    let swap_amount = positive_root(&coeff)?;

    Ok(SwapResult { reversed: oriented.reversed, swap_amount })
}

/// `b² ∓ 4·a·extension·|c1 − c2|`, never forming a negative intermediate.
pub fn discriminant(coeff: &Coefficients) -> Result<U512> {
    let b_squared = mul_u256_to_u512(coeff.b, coeff.b);
    let four_a_ext = checked_mul_u512(
        widen(coeff.a) << 2,
        U512::from(coeff.extension),
        "discriminant",
    )?;

    if coeff.c_is_non_negative() {
        let term = checked_mul_u512(four_a_ext, coeff.c1 - coeff.c2, "discriminant")?;
        checked_sub_u512(b_squared, term, "discriminant")
    } else {
        let term = checked_mul_u512(four_a_ext, coeff.c2 - coeff.c1, "discriminant")?;
        checked_add_u512(b_squared, term, "discriminant")
    }
}

/// `floor((floor_sqrt(D) − b) / (2a))`.
pub fn positive_root(coeff: &Coefficients) -> Result<Amount> {
    if coeff.a.is_zero() {
        crate::zap_bail!(ZapErrorCode::DivisionByZero, stage => "root");
    }
    let disc = discriminant(coeff)?;
    // sqrt of a 512-bit value always fits in 256 bits
    let root = u512_to_u256_checked(isqrt_u512(disc), "square root")?;
    let numerator = checked_sub_u256(root, coeff.b, "root numerator")?;

    let quotient = widen(numerator) / (widen(coeff.a) << 1);
    let quotient = u512_to_u256_checked(quotient, "swap amount")?;
    u256_to_u128_checked(quotient, "swap amount")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zap::types::U256;

    const FEE: FeeSpec = FeeSpec::UNISWAP_V2;

    fn run(a: Amount, b: Amount, ra: Amount, rb: Amount) -> Result<SwapResult> {
        compute_optimal_swap(a, b, ra, rb, FEE.fee, FEE.extension)
    }

    #[test]
    fn one_sided_deposit_swaps_about_half() {
        let res = run(1_000_000, 0, 1_000_000_000, 1_000_000_000).unwrap();
        assert!(!res.reversed);
        // slightly more than half once the fee is paid
        assert!(res.swap_amount > 500_000 && res.swap_amount < 501_000, "{}", res.swap_amount);
    }

    #[test]
    fn one_sided_b_deposit_is_reversed() {
        let res = run(0, 1_000_000, 1_000_000_000, 1_000_000_000).unwrap();
        assert!(res.reversed);
        let mirrored = run(1_000_000, 0, 1_000_000_000, 1_000_000_000).unwrap();
        assert_eq!(res.swap_amount, mirrored.swap_amount);
    }

    #[test]
    fn balanced_boundary_is_zero() {
        for v in [1u128, 7, 1_000, 10u128.pow(18), 10u128.pow(30)] {
            let res = run(v, v, v, v).unwrap();
            assert_eq!(res, SwapResult { reversed: false, swap_amount: 0 }, "v={}", v);
        }
    }

    #[test]
    fn proportional_deposit_is_zero() {
        let res = run(2_000, 6_000, 1_000_000, 3_000_000).unwrap();
        assert_eq!(res.swap_amount, 0);
    }

    #[test]
    fn zero_fee_one_sided_matches_closed_form() {
        // fee 0: x = sqrt(r^2 + r*amount) - r
        let r = 1_000_000u128;
        let amt = 21_000u128;
        let res = compute_optimal_swap(amt, 0, r, r, 0, 1).unwrap();
        let exact = crate::zap::sqrt::isqrt_u256(U256::from(r * r + r * amt)).as_u128() - r;
        assert_eq!(res.swap_amount, exact);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let e = compute_optimal_swap(1, 1, 1, 1, 1_000, 1_000).unwrap_err();
        assert_eq!(e.code, ZapErrorCode::InvalidParameter);
        let e = run(1, 1, 0, 1).unwrap_err();
        assert_eq!(e.code, ZapErrorCode::InvalidParameter);
        let e = run(1, 1, 1, 0).unwrap_err();
        assert_eq!(e.code, ZapErrorCode::InvalidParameter);
        let e = run(0, 0, 1, 1).unwrap_err();
        assert_eq!(e.code, ZapErrorCode::InvalidAmount);
    }

    #[test]
    fn zero_a_coefficient_is_division_by_zero() {
        let coeff = Coefficients {
            net: 1,
            extension: 2,
            a: U256::zero(),
            b: U256::one(),
            c1: U512::zero(),
            c2: U512::one(),
        };
        assert_eq!(positive_root(&coeff).unwrap_err().code, ZapErrorCode::DivisionByZero);
    }

    #[test]
    fn negative_numerator_is_reported() {
        // c1 > c2: the root would be negative
        let coeff = Coefficients {
            net: 1,
            extension: 1,
            a: U256::one(),
            b: U256::from(10u8),
            c1: U512::from(5u8),
            c2: U512::zero(),
        };
        let err = positive_root(&coeff).unwrap_err();
        assert_eq!(err.code, ZapErrorCode::ArithmeticOverflow);
        assert_eq!(err.context.get("stage").map(String::as_str), Some("root numerator"));
    }

    #[test]
    fn discriminant_branches() {
        let mut coeff = Coefficients {
            net: 1,
            extension: 3,
            a: U256::from(2u8),
            b: U256::from(10u8),
            c1: U512::from(4u8),
            c2: U512::from(1u8),
        };
        // 100 - 4*2*3*3
        assert_eq!(discriminant(&coeff).unwrap(), U512::from(28u8));
        coeff.c1 = U512::from(1u8);
        coeff.c2 = U512::from(4u8);
        assert_eq!(discriminant(&coeff).unwrap(), U512::from(172u8));
        coeff.c1 = U512::from(100u8);
        coeff.c2 = U512::zero();
        assert_eq!(discriminant(&coeff).unwrap_err().code, ZapErrorCode::ArithmeticOverflow);
    }

    #[test]
    fn huge_inputs_overflow_instead_of_wrapping() {
        let m = u128::MAX;
        let err = compute_optimal_swap(m, 0, m, m, 3, 1_000).unwrap_err();
        assert_eq!(err.code, ZapErrorCode::ArithmeticOverflow);
    }

    #[test]
    fn large_inputs_within_range() {
        let e30 = 10u128.pow(30);
        let res = run(3 * e30, e30, 5 * e30, 2 * e30).unwrap();
        assert!(!res.reversed);
        assert!(res.swap_amount > 0 && res.swap_amount < 3 * e30);
    }
}
