//! # Cost Calculations
//!
//! Every category follows the same pattern:
//!
//! - a rate struct (`SpaceRates`, `TravelRates`, ...) implementing
//!   [`RatedCost`], which validates itself and itemizes its formula;
//! - wrapped in [`Pricing`], which is either a negotiated flat amount or the
//!   rate struct.
//!
//! [`estimate::calculate`] ties the seven categories together with tax and
//! contingency.
//!
//! ## Available Categories
//!
//! - [`booth`] - Space rental and booth construction (area-rated)
//! - [`services`] - Utilities and logistics
//! - [`people`] - Travel and staff/operations
//! - [`marketing`] - Print, giveaways, AV, other

pub mod booth;
pub mod estimate;
pub mod marketing;
pub mod people;
pub mod services;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::Category;
use crate::errors::{EstimateError, EstimateResult};
use crate::money::{round_minor, sum_checked};
use crate::units::NormalizedArea;

// Re-export commonly used types
pub use booth::{ConstructionRates, SpaceRates};
pub use estimate::{
    calculate, CalculationInput, CalculationResult, ContingencyBase, ContingencyPolicy, TaxPolicy,
};
pub use marketing::MarketingItems;
pub use people::{StaffOpsRates, TravelRates};
pub use services::{LogisticsRates, UtilitiesRates};

/// A rate-based formula for one category.
pub trait RatedCost {
    /// The category this formula prices
    const CATEGORY: Category;

    /// Reject negative rates, quantities and percentages.
    fn validate(&self) -> EstimateResult<()>;

    /// Unrounded sub-components of the formula, in display order.
    ///
    /// Fails with `AmountOverflow` when a product leaves the decimal range.
    fn components(&self, area: &NormalizedArea) -> EstimateResult<Vec<(&'static str, Decimal)>>;
}

/// Either a flat override or a rate-based formula for one category.
///
/// ```json
/// { "flat": 63000 }
/// { "rated": { "rate_per_sqm": 3500, "location_premium_pct": 10 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pricing<R> {
    /// Negotiated absolute amount; bypasses the formula
    Flat(Decimal),
    /// Priced from rates and quantities
    Rated(R),
}

impl<R: RatedCost> Pricing<R> {
    /// Build a pricing from loosely-populated parts.
    ///
    /// A flat amount takes precedence over rates when both are present.
    /// Returns `None` when neither is supplied.
    pub fn resolve(flat: Option<Decimal>, rated: Option<R>) -> Option<Self> {
        match (flat, rated) {
            (Some(amount), _) => Some(Pricing::Flat(amount)),
            (None, Some(rates)) => Some(Pricing::Rated(rates)),
            (None, None) => None,
        }
    }

    /// Reject a negative flat amount (reported as `<category>.flat`) or
    /// delegate to the rate struct's own checks.
    pub fn validate(&self) -> EstimateResult<()> {
        match self {
            Pricing::Flat(amount) => {
                non_negative(&format!("{}.flat", R::CATEGORY.key()), *amount)
            }
            Pricing::Rated(rates) => rates.validate(),
        }
    }

    /// Price this category.
    ///
    /// Each component is rounded to the minor unit and the total is the sum
    /// of the rounded components, so the itemization always adds up.
    /// Zero-valued components are omitted from the line items.
    pub fn cost(&self, area: &NormalizedArea) -> EstimateResult<CategoryCost> {
        let components = match self {
            Pricing::Flat(amount) => vec![("Flat amount", *amount)],
            Pricing::Rated(rates) => rates.components(area)?,
        };

        let items: Vec<LineItem> = components
            .into_iter()
            .map(|(label, amount)| LineItem::new(R::CATEGORY, label, round_minor(amount)))
            .filter(|item| !item.amount.is_zero())
            .collect();

        let total = sum_checked(
            &format!("{}.total", R::CATEGORY.key()),
            items.iter().map(|item| item.amount),
        )?;

        Ok(CategoryCost {
            category: R::CATEGORY,
            total,
            items,
        })
    }

    /// True for a negotiated flat amount
    pub fn is_flat(&self) -> bool {
        matches!(self, Pricing::Flat(_))
    }
}

/// One named sub-component of a category total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub category: Category,
    pub label: String,
    pub amount: Decimal,
}

impl LineItem {
    pub fn new(category: Category, label: impl Into<String>, amount: Decimal) -> Self {
        LineItem {
            category,
            label: label.into(),
            amount,
        }
    }
}

/// The priced result of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCost {
    pub category: Category,
    pub total: Decimal,
    pub items: Vec<LineItem>,
}

impl CategoryCost {
    /// Cost of a category with no pricing at all
    pub fn empty(category: Category) -> Self {
        CategoryCost {
            category,
            total: Decimal::ZERO,
            items: Vec::new(),
        }
    }
}

/// Fail with `InvalidRate` when `value` is negative.
pub(crate) fn non_negative(field: &str, value: Decimal) -> EstimateResult<()> {
    if value < Decimal::ZERO {
        return Err(EstimateError::invalid_rate(
            field,
            value.to_string(),
            "Value cannot be negative",
        ));
    }
    Ok(())
}

/// [`non_negative`] for optional fields; absent passes.
pub(crate) fn non_negative_opt(field: &str, value: Option<Decimal>) -> EstimateResult<()> {
    match value {
        Some(v) => non_negative(field, v),
        None => Ok(()),
    }
}
