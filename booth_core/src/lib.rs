//! # booth_core - Trade-Show Exhibit Cost Engine
//!
//! `booth_core` estimates what it costs to exhibit at a trade show: space
//! rental, booth construction, utilities, logistics, travel, staffing and
//! marketing, with category-selective GST and a contingency buffer. All
//! inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure function, input in, result out
//! - **Exact money**: `rust_decimal` throughout, rounded to the minor unit
//! - **Explicit rates**: default rate tables are values passed in, never globals
//! - **Rich Errors**: structured error types naming the offending field
//!
//! ## Quick Start
//!
//! ```rust
//! use booth_core::{calculate, CalculationInput, Pricing};
//! use booth_core::units::Area;
//! use rust_decimal_macros::dec;
//!
//! let input = CalculationInput::new(Area::sqm(dec!(18)))
//!     .with_space(Pricing::Flat(dec!(63000)))
//!     .with_construction(Pricing::Flat(dec!(270000)));
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.grand_total, dec!(333000));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Category formulas and the estimate engine
//! - [`categories`] - The seven cost categories, tax flags, per-category totals
//! - [`rates`] - Market rate cards and quantity-only requests
//! - [`quote`] - Presentation envelope around an estimate
//! - [`units`] - Area units and normalization
//! - [`money`] - Rounding and formatting helpers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod categories;
pub mod errors;
pub mod money;
pub mod quote;
pub mod rates;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CalculationInput, CalculationResult, ContingencyBase, Pricing};
pub use categories::{Category, TaxFlags};
pub use errors::{EstimateError, EstimateResult};
pub use quote::Quote;
pub use rates::{EstimateRequest, RateCard};
