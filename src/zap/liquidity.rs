//! Two-sided deposit after the zap swap.
//! Policies:
//! - quote: **floor**
//! - the side that would need more than is held is capped, the other side is quoted
//! - leftovers stay with the caller

use super::error::Result;
use super::error_catalog::ZapErrorCode;
use super::guardrails::{ensure_reserves, mul_u128_to_u256, u256_to_u128_checked};
use super::solver::solve;
use super::swap::{apply_swap, SwapOutcome};
use super::types::{Amount, DepositAmounts, FeeSpec, PoolReserves, SwapResult, U256};
use crate::obs::wrap;

/// Amount of the other asset matching `amount` at the pool ratio:
/// `floor(amount · reserve_other / reserve_this)`.
pub fn quote(amount: Amount, reserve_this: Amount, reserve_other: Amount) -> Result<Amount> {
    ensure_reserves(&PoolReserves::new(reserve_this, reserve_other))?;
    let q = mul_u128_to_u256(amount, reserve_other) / U256::from(reserve_this);
    u256_to_u128_checked(q, "quote")
}

/// What goes into the pool and what stays with the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deposit {
    pub deposit: DepositAmounts,
    pub leftover: DepositAmounts,
}

/// Largest deposit of `holdings` that respects the pool ratio.
pub fn optimal_deposit(holdings: &DepositAmounts, reserves: &PoolReserves) -> Result<Deposit> {
    let (a, b) = (holdings.amount_a, holdings.amount_b);
    let b_opt = quote(a, reserves.reserve_a, reserves.reserve_b)?;
    let deposit = if b_opt <= b {
        DepositAmounts::new(a, b_opt)
    } else {
        let a_opt = quote(b, reserves.reserve_b, reserves.reserve_a)?;
        // b_opt > b implies a_opt <= a
        DepositAmounts::new(a_opt.min(a), b)
    };
    if deposit.amount_a == 0 || deposit.amount_b == 0 {
        crate::zap_bail!(
            ZapErrorCode::InvalidAmount,
            deposit_a => deposit.amount_a,
            deposit_b => deposit.amount_b,
        );
    }
    let leftover = DepositAmounts::new(a - deposit.amount_a, b - deposit.amount_b);
    Ok(Deposit { deposit, leftover })
}

/// Full zap: solve, swap, then deposit two-sided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZapPlan {
    pub result: SwapResult,
    pub swap: SwapOutcome,
    pub deposit: DepositAmounts,
    pub leftover: DepositAmounts,
}

pub fn plan_zap(
    reserves: &PoolReserves,
    holdings: &DepositAmounts,
    fee: &FeeSpec,
) -> Result<ZapPlan> {
    wrap::time("plan_zap", || {
        let result = solve(reserves, holdings, fee)?;
        let swap = apply_swap(reserves, holdings, &result, fee)?;
        let Deposit { deposit, leftover } = optimal_deposit(&swap.holdings_after, &swap.reserves_after)?;
        tracing::debug!(
            reversed = result.reversed,
            swap_amount = %result.swap_amount,
            leftover_a = %leftover.amount_a,
            leftover_b = %leftover.amount_b,
            "zap planned"
        );
        Ok(ZapPlan { result, swap, deposit, leftover })
    })
}

// -------------------------
// TESTS
// -------------------------
#[cfg(test)]
mod tests {
    use super::*;

    const FEE: FeeSpec = FeeSpec::UNISWAP_V2;

    #[test]
    fn t_quote_floor() {
        assert_eq!(quote(10, 3, 1).unwrap(), 3);
        assert_eq!(quote(1, 3, 2).unwrap(), 0);
        assert_eq!(quote(u128::MAX, u128::MAX, u128::MAX).unwrap(), u128::MAX);
        assert!(quote(1, 0, 1).is_err());
    }

    #[test]
    fn t_quote_overflow_is_reported() {
        let err = quote(u128::MAX, 1, 2).unwrap_err();
        assert_eq!(err.code, ZapErrorCode::ArithmeticOverflow);
    }

    #[test]
    fn t_optimal_deposit_caps_excess_side() {
        let reserves = PoolReserves::new(1_000, 2_000);
        let d = optimal_deposit(&DepositAmounts::new(100, 100), &reserves).unwrap();
        assert_eq!(d.deposit, DepositAmounts::new(50, 100));
        assert_eq!(d.leftover, DepositAmounts::new(50, 0));

        let d = optimal_deposit(&DepositAmounts::new(10, 100), &reserves).unwrap();
        assert_eq!(d.deposit, DepositAmounts::new(10, 20));
        assert_eq!(d.leftover, DepositAmounts::new(0, 80));
    }

    #[test]
    fn t_one_sided_holdings_cannot_deposit() {
        let err = optimal_deposit(&DepositAmounts::new(100, 0), &PoolReserves::new(1, 1)).unwrap_err();
        assert_eq!(err.code, ZapErrorCode::InvalidAmount);
    }

    #[test]
    fn t_plan_one_sided_leaves_dust_in_sold_asset() {
        let reserves = PoolReserves::new(10u128.pow(24), 4 * 10u128.pow(24));
        let holdings = DepositAmounts::new(10u128.pow(21), 0);
        let plan = plan_zap(&reserves, &holdings, &FEE).unwrap();
        assert!(!plan.result.reversed);
        assert_eq!(plan.leftover.amount_b, 0);
        assert!(plan.leftover.amount_a <= 4, "leftover_a={}", plan.leftover.amount_a);
        assert_eq!(
            plan.deposit.amount_a + plan.leftover.amount_a + plan.result.swap_amount,
            holdings.amount_a
        );
    }

    #[test]
    fn t_plan_reversed_leaves_dust_in_b() {
        let reserves = PoolReserves::new(3 * 10u128.pow(20), 10u128.pow(20));
        let holdings = DepositAmounts::new(10u128.pow(15), 10u128.pow(18));
        let plan = plan_zap(&reserves, &holdings, &FEE).unwrap();
        assert!(plan.result.reversed);
        assert_eq!(plan.leftover.amount_a, 0);
        assert!(plan.leftover.amount_b <= 4, "leftover_b={}", plan.leftover.amount_b);
    }

    #[test]
    fn t_plan_balanced_is_plain_deposit() {
        let reserves = PoolReserves::new(1_000, 3_000);
        let holdings = DepositAmounts::new(10, 30);
        let plan = plan_zap(&reserves, &holdings, &FEE).unwrap();
        assert!(plan.result.is_noop());
        assert_eq!(plan.deposit, holdings);
        assert_eq!(plan.leftover, DepositAmounts::new(0, 0));
    }
}
