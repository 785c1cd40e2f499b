//! Optimal one-sided swap ("zap") math for constant-product pools.
//!
//! Given pool reserves, two deposit amounts and a `fee/extension` pair,
//! [`compute_optimal_swap`] tells which asset to swap and how much so that the
//! remaining holdings land on the pool ratio before a two-sided deposit.

pub mod obs;
pub mod zap;

pub use zap::error::{Result, ZapError};
pub use zap::error_catalog::ZapErrorCode;
pub use zap::solver::{compute_optimal_swap, solve};
pub use zap::types::{DepositAmounts, FeeSpec, PoolReserves, SwapResult, U256, U512};
