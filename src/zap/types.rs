//! Value types for the zap solver plus the wide integers used for intermediates.
//! Inputs are `u128`; products of up to four inputs are carried in `U512`.

use uint::construct_uint;

construct_uint! {
    /// 256-bit integer for `k`, `a` and `b`.
    pub struct U256(4);
}

construct_uint! {
    /// 512-bit integer for `c1`, `c2` and the discriminant.
    pub struct U512(8);
}

pub type Amount = u128;

/// Upper bound on Newton steps in the integer square root.
pub const SQRT_MAX_ITERATIONS: usize = 512;

/// Basis-point extension used by [`FeeSpec::from_bps`].
pub const BPS_EXTENSION: u128 = 10_000;

/// Current pool balances. Both sides must be non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoolReserves {
    pub reserve_a: Amount,
    pub reserve_b: Amount,
}

impl PoolReserves {
    pub fn new(reserve_a: Amount, reserve_b: Amount) -> Self {
        Self { reserve_a, reserve_b }
    }

    pub fn flipped(self) -> Self {
        Self { reserve_a: self.reserve_b, reserve_b: self.reserve_a }
    }
}

/// What the caller holds and wants to deposit. Not both zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DepositAmounts {
    pub amount_a: Amount,
    pub amount_b: Amount,
}

impl DepositAmounts {
    pub fn new(amount_a: Amount, amount_b: Amount) -> Self {
        Self { amount_a, amount_b }
    }

    pub fn flipped(self) -> Self {
        Self { amount_a: self.amount_b, amount_b: self.amount_a }
    }
}

/// Fee fraction `fee / extension`, e.g. 3/1000 for 0.3%.
///
/// `extension` must be strictly greater than `fee`; see
/// [`crate::zap::guardrails::ensure_fee`]. A larger `extension` gives finer
/// resolution and larger intermediates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeeSpec {
    pub fee: Amount,
    pub extension: Amount,
}

impl FeeSpec {
    /// 0.3% expressed the way constant-product routers do.
    pub const UNISWAP_V2: FeeSpec = FeeSpec { fee: 3, extension: 1_000 };

    pub const fn new(fee: Amount, extension: Amount) -> Self {
        Self { fee, extension }
    }

    pub const fn from_bps(fee_bps: u32) -> Self {
        Self { fee: fee_bps as Amount, extension: BPS_EXTENSION }
    }

    /// Retained fraction numerator, `extension - fee`. `None` on an invalid pair.
    pub fn net(&self) -> Option<Amount> {
        if self.extension > self.fee {
            Some(self.extension - self.fee)
        } else {
            None
        }
    }
}

/// Solver output.
///
/// `reversed == false`: swap `swap_amount` of asset A into B.
/// `reversed == true`: swap `swap_amount` of asset B into A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SwapResult {
    pub reversed: bool,
    pub swap_amount: Amount,
}

impl SwapResult {
    pub fn is_noop(&self) -> bool {
        self.swap_amount == 0
    }
}
