//! Rounding policies and denomination-aware rounding.
//!
//! This module decides how a real-valued minor-unit quantity becomes an
//! exact integer again:
//! - `policy` - The four supported rounding policies
//! - `denomination` - Rounding to a multiple of the smallest denomination

pub mod denomination;
pub mod policy;

#[cfg(test)]
mod props;

pub use denomination::round_to_denomination;
pub use policy::RoundingPolicy;
