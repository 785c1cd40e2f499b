pub mod types;
pub mod guardrails;
pub mod sqrt;

pub mod direction;     // cross-product normalizer
pub mod coefficients;  // a, b, c1, c2
pub mod solver;        // discriminant + root

pub mod swap;
pub mod liquidity;
pub mod ref_golden;

pub mod error_catalog;
pub mod error;
pub mod error_map;
