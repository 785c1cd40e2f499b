//! Input validation and overflow-checked numeric helpers for the solver.
//! Every multiplication that can leave its width goes through here.

use super::error::{Result, ZapError};
use super::error_catalog::ZapErrorCode;
use super::error_map::{from_zap_inputs, to_error};
use super::types::{Amount, DepositAmounts, FeeSpec, PoolReserves, U256, U512};

#[inline]
fn overflow(stage: &'static str) -> ZapError {
    crate::zap_err!(ZapErrorCode::ArithmeticOverflow, stage => stage)
}

/// Validates fee, reserves and amounts together, in that order.
pub fn validate_inputs(
    amounts: &DepositAmounts,
    reserves: &PoolReserves,
    fee: &FeeSpec,
) -> Result<()> {
    match from_zap_inputs(
        (amounts.amount_a, amounts.amount_b),
        (reserves.reserve_a, reserves.reserve_b),
        fee.fee,
        fee.extension,
    ) {
        None => Ok(()),
        Some(code) => Err(to_error(code)
            .with_context("amount_a", amounts.amount_a)
            .with_context("amount_b", amounts.amount_b)
            .with_context("reserve_a", reserves.reserve_a)
            .with_context("reserve_b", reserves.reserve_b)
            .with_context("fee", fee.fee)
            .with_context("extension", fee.extension)),
    }
}

/// `extension > fee`; returns `net = extension - fee`.
#[inline]
pub fn ensure_fee(fee: &FeeSpec) -> Result<Amount> {
    fee.net().ok_or_else(|| {
        crate::zap_err!(ZapErrorCode::InvalidParameter, fee => fee.fee, extension => fee.extension)
    })
}

#[inline]
pub fn ensure_reserves(reserves: &PoolReserves) -> Result<()> {
    if reserves.reserve_a == 0 || reserves.reserve_b == 0 {
        return Err(crate::zap_err!(
            ZapErrorCode::InvalidParameter,
            reserve_a => reserves.reserve_a,
            reserve_b => reserves.reserve_b,
        ));
    }
    Ok(())
}

#[inline]
pub fn ensure_amounts(amounts: &DepositAmounts) -> Result<()> {
    if amounts.amount_a == 0 && amounts.amount_b == 0 {
        return Err(crate::zap_err!(ZapErrorCode::InvalidAmount));
    }
    Ok(())
}

#[inline]
pub fn checked_add(a: Amount, b: Amount, stage: &'static str) -> Result<Amount> {
    a.checked_add(b).ok_or_else(|| overflow(stage))
}

#[inline]
pub fn checked_sub(a: Amount, b: Amount, stage: &'static str) -> Result<Amount> {
    a.checked_sub(b).ok_or_else(|| overflow(stage))
}

/// `u128 * u128` never leaves 256 bits.
#[inline]
pub fn mul_u128_to_u256(a: Amount, b: Amount) -> U256 {
    U256::from(a) * U256::from(b)
}

#[inline]
pub fn widen(v: U256) -> U512 {
    let mut limbs = [0u64; 8];
    limbs[..4].copy_from_slice(&v.0);
    U512(limbs)
}

/// `U256 * U256` never leaves 512 bits.
#[inline]
pub fn mul_u256_to_u512(a: U256, b: U256) -> U512 {
    widen(a) * widen(b)
}

#[inline]
pub fn checked_mul_u256(a: U256, b: U256, stage: &'static str) -> Result<U256> {
    a.checked_mul(b).ok_or_else(|| overflow(stage))
}

#[inline]
pub fn checked_add_u256(a: U256, b: U256, stage: &'static str) -> Result<U256> {
    a.checked_add(b).ok_or_else(|| overflow(stage))
}

#[inline]
pub fn checked_sub_u256(a: U256, b: U256, stage: &'static str) -> Result<U256> {
    a.checked_sub(b).ok_or_else(|| overflow(stage))
}

#[inline]
pub fn checked_mul_u512(a: U512, b: U512, stage: &'static str) -> Result<U512> {
    a.checked_mul(b).ok_or_else(|| overflow(stage))
}

#[inline]
pub fn checked_add_u512(a: U512, b: U512, stage: &'static str) -> Result<U512> {
    a.checked_add(b).ok_or_else(|| overflow(stage))
}

#[inline]
pub fn checked_sub_u512(a: U512, b: U512, stage: &'static str) -> Result<U512> {
    a.checked_sub(b).ok_or_else(|| overflow(stage))
}

/// Narrows back to 256 bits only when the high limbs are clear.
#[inline]
pub fn u512_to_u256_checked(v: U512, stage: &'static str) -> Result<U256> {
    if v.0[4..].iter().any(|limb| *limb != 0) {
        return Err(overflow(stage));
    }
    let mut limbs = [0u64; 4];
    limbs.copy_from_slice(&v.0[..4]);
    Ok(U256(limbs))
}

#[inline]
pub fn u256_to_u128_checked(v: U256, stage: &'static str) -> Result<Amount> {
    if v > U256::from(u128::MAX) {
        Err(overflow(stage))
    } else {
        Ok(v.as_u128())
    }
}
