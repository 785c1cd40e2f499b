//! Orientation of the deposit so that asset A is the one in excess.
//!
//! `amount_a / amount_b` is compared against `reserve_a / reserve_b` by
//! cross-multiplying in 256 bits. Integer division would truncate and could
//! flip the outcome.

use super::guardrails::mul_u128_to_u256;
use super::types::{DepositAmounts, PoolReserves};

/// Deposit and reserves with A as the excess side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Oriented {
    pub amounts: DepositAmounts,
    pub reserves: PoolReserves,
    pub reversed: bool,
}

/// `true` when B is over-represented relative to the pool,
/// i.e. `reserve_a * amount_b > reserve_b * amount_a`.
pub fn needs_reversal(amounts: &DepositAmounts, reserves: &PoolReserves) -> bool {
    if amounts.amount_b == 0 {
        return false;
    }
    mul_u128_to_u256(reserves.reserve_a, amounts.amount_b)
        > mul_u128_to_u256(reserves.reserve_b, amounts.amount_a)
}

pub fn normalize(amounts: DepositAmounts, reserves: PoolReserves) -> Oriented {
    if needs_reversal(&amounts, &reserves) {
        tracing::trace!(
            amount_a = %amounts.amount_a,
            amount_b = %amounts.amount_b,
            "deposit is B-heavy, swapping roles"
        );
        Oriented {
            amounts: amounts.flipped(),
            reserves: reserves.flipped(),
            reversed: true,
        }
    } else {
        Oriented { amounts, reserves, reversed: false }
    }
}
