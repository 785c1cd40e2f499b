//! Coefficients of the zap quadratic.
//!
//! Swapping `x` of A (fee on input) and depositing the rest must leave the
//! holdings on the post-swap pool ratio. Clearing denominators gives
//!
//! ```text
//! a·x² + b·x + extension·(c1 − c2) = 0
//! a  = (amount_b + reserve_b)·net
//! b  = (extension + net)·(k + reserve_a·amount_b)
//! c1 = amount_b·reserve_a²
//! c2 = amount_a·k
//! ```
//!
//! with `k = reserve_a·reserve_b` and `net = extension − fee`. The constant
//! term is kept as two non-negative halves because its sign depends on input.

use super::error::Result;
use super::guardrails::{
    checked_add_u256, checked_mul_u256, checked_mul_u512, ensure_fee, mul_u128_to_u256, widen,
};
use super::types::{Amount, DepositAmounts, FeeSpec, PoolReserves, U256, U512};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coefficients {
    pub net: Amount,
    pub extension: Amount,
    pub a: U256,
    pub b: U256,
    pub c1: U512,
    pub c2: U512,
}

impl Coefficients {
    /// `true` when the true constant term `extension·(c1 − c2)` is non-negative.
    pub fn c_is_non_negative(&self) -> bool {
        self.c1 >= self.c2
    }
}

/// Builds the coefficients for an already oriented deposit (A in excess).
pub fn build(
    amounts: &DepositAmounts,
    reserves: &PoolReserves,
    fee: &FeeSpec,
) -> Result<Coefficients> {
    let net = ensure_fee(fee)?;
    let (amount_a, amount_b) = (amounts.amount_a, amounts.amount_b);
    let (reserve_a, reserve_b) = (reserves.reserve_a, reserves.reserve_b);

    let k = mul_u128_to_u256(reserve_a, reserve_b);

    let a = checked_mul_u256(
        U256::from(amount_b) + U256::from(reserve_b),
        U256::from(net),
        "coefficient a",
    )?;

    let k_plus = checked_add_u256(k, mul_u128_to_u256(reserve_a, amount_b), "coefficient b")?;
    let b = checked_mul_u256(
        U256::from(fee.extension) + U256::from(net),
        k_plus,
        "coefficient b",
    )?;

    let c1 = checked_mul_u512(
        widen(mul_u128_to_u256(amount_b, reserve_a)),
        U512::from(reserve_a),
        "coefficient c1",
    )?;
    let c2 = checked_mul_u512(widen(k), U512::from(amount_a), "coefficient c2")?;

    tracing::trace!(
        a_bits = a.bits(),
        b_bits = b.bits(),
        c1_bits = c1.bits(),
        c2_bits = c2.bits(),
        "zap coefficients"
    );

    Ok(Coefficients { net, extension: fee.extension, a, b, c1, c2 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zap::error_catalog::ZapErrorCode;

    #[test]
    fn hand_computed_small_case() {
        // aA=10, aB=0, rA=100, rB=100, fee 3/1000
        let c = build(
            &DepositAmounts::new(10, 0),
            &PoolReserves::new(100, 100),
            &FeeSpec::UNISWAP_V2,
        )
        .unwrap();
        assert_eq!(c.net, 997);
        assert_eq!(c.a, U256::from(100u32 * 997));
        assert_eq!(c.b, U256::from(1_997u32 * 10_000));
        assert_eq!(c.c1, U512::zero());
        assert_eq!(c.c2, U512::from(100_000u32));
        assert!(!c.c_is_non_negative());
    }

    #[test]
    fn two_sided_case() {
        // aA=50, aB=20, rA=1000, rB=2000, fee 0/1
        let c = build(
            &DepositAmounts::new(50, 20),
            &PoolReserves::new(1_000, 2_000),
            &FeeSpec::new(0, 1),
        )
        .unwrap();
        assert_eq!(c.net, 1);
        assert_eq!(c.a, U256::from(2_020u32));
        assert_eq!(c.b, U256::from(2u32 * (2_000_000 + 20_000)));
        assert_eq!(c.c1, U512::from(20u64 * 1_000 * 1_000));
        assert_eq!(c.c2, U512::from(50u64 * 2_000_000));
    }

    #[test]
    fn balanced_deposit_has_equal_halves() {
        let v = 10u128.pow(20);
        let c = build(
            &DepositAmounts::new(v, v),
            &PoolReserves::new(v, v),
            &FeeSpec::UNISWAP_V2,
        )
        .unwrap();
        assert_eq!(c.c1, c.c2);
        assert!(c.c_is_non_negative());
    }

    #[test]
    fn invalid_fee_rejected() {
        let err = build(
            &DepositAmounts::new(1, 1),
            &PoolReserves::new(1, 1),
            &FeeSpec::new(10, 10),
        )
        .unwrap_err();
        assert_eq!(err.code, ZapErrorCode::InvalidParameter);
    }

    #[test]
    fn oversized_b_reports_overflow() {
        let m = u128::MAX;
        let err = build(
            &DepositAmounts::new(m, m),
            &PoolReserves::new(m, m),
            &FeeSpec::new(1, m),
        )
        .unwrap_err();
        assert_eq!(err.code, ZapErrorCode::ArithmeticOverflow);
    }

    #[test]
    fn c_terms_use_full_width() {
        let m = u128::MAX;
        let c = build(
            &DepositAmounts::new(m, m),
            &PoolReserves::new(1, 1),
            &FeeSpec::new(0, 1),
        )
        .unwrap();
        assert_eq!(c.c1, U512::from(m));
        assert_eq!(c.c2, U512::from(m));
    }
}
