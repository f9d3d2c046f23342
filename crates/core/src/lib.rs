//! Monetary value engine for Tender.
//!
//! This crate contains pure domain logic with ZERO web or database dependencies.
//! Amounts are exact integer minor-unit values tied to a currency resolved
//! through `tender-registry`; fractional intermediates use
//! `rust_decimal::Decimal` and are always rounded back to an exact integer
//! through the denomination-aware rounding engine.
//!
//! # Modules
//!
//! - `money` - The immutable monetary value type and its operations
//! - `rounding` - Rounding policies and denomination-aware rounding

pub mod money;
pub mod rounding;

pub use money::{FormatOptions, Money, MoneyError, MoneyOptions, MoneyRecord};
pub use rounding::{RoundingPolicy, round_to_denomination};
