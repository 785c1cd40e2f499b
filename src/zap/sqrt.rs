//! Exact floor square root over the wide integer types.
//!
//! Newton iteration started above the root (`2^ceil(bits/2)`), so the
//! sequence decreases monotonically and stops at `floor(sqrt(n))`.

use super::types::{SQRT_MAX_ITERATIONS, U256, U512};

macro_rules! impl_isqrt {
    ($name:ident, $ty:ty) => {
        /// Largest `r` with `r * r <= n`.
        pub fn $name(n: $ty) -> $ty {
            if n.is_zero() {
                return <$ty>::zero();
            }
            let mut x = <$ty>::one() << ((n.bits() + 1) / 2);
            for _ in 0..SQRT_MAX_ITERATIONS {
                let y = (x + n / x) >> 1;
                if y >= x {
                    return x;
                }
                x = y;
            }
            x
        }
    };
}

impl_isqrt!(isqrt_u256, U256);
impl_isqrt!(isqrt_u512, U512);
