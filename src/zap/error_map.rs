//! Mapping from raw solver inputs to error codes.
use crate::zap::error::ZapError;
use crate::zap::error_catalog::ZapErrorCode;

/// First violated precondition for a solve, in validation order:
/// fee, reserves, then amounts.
pub fn from_zap_inputs(
    amounts: (u128, u128),
    reserves: (u128, u128),
    fee: u128,
    extension: u128,
) -> Option<ZapErrorCode> {
    if extension <= fee {
        return Some(ZapErrorCode::InvalidParameter);
    }
    if reserves.0 == 0 || reserves.1 == 0 {
        return Some(ZapErrorCode::InvalidParameter);
    }
    if amounts.0 == 0 && amounts.1 == 0 {
        return Some(ZapErrorCode::InvalidAmount);
    }
    None
}

/// Builds a [`ZapError`] straight from a code.
pub fn to_error(code: ZapErrorCode) -> ZapError {
    ZapError::new(code)
}
