//! # Space Rental and Booth Construction
//!
//! Both categories scale with floor area. Space rent is `area × rate`, with an
//! optional location premium (corner, island or hall-entrance plots) added as
//! a percentage. Construction is `area × rate × finish_factor`, where the
//! finish factor captures shell scheme (below 1.0) through premium custom
//! builds (above 1.0).
//!
//! ## Example
//!
//! ```rust
//! use booth_core::calculations::{Pricing, SpaceRates};
//! use booth_core::units::Area;
//! use rust_decimal_macros::dec;
//!
//! let area = Area::sqm(dec!(18)).normalize().unwrap();
//! let space = Pricing::Rated(SpaceRates::new(dec!(3500)).with_location_premium(dec!(10)));
//!
//! let cost = space.cost(&area).unwrap();
//! assert_eq!(cost.total, dec!(69300));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{non_negative, non_negative_opt, RatedCost};
use crate::categories::Category;
use crate::errors::EstimateResult;
use crate::money::{mul_checked, pct_to_rate};
use crate::units::NormalizedArea;

/// Rate card terms for booth space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceRates {
    /// Rent per square meter of booth floor
    pub rate_per_sqm: Decimal,

    /// Surcharge for a premium plot, in percent (10 = +10%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_premium_pct: Option<Decimal>,
}

impl SpaceRates {
    pub fn new(rate_per_sqm: Decimal) -> Self {
        SpaceRates {
            rate_per_sqm,
            location_premium_pct: None,
        }
    }

    pub fn with_location_premium(mut self, pct: Decimal) -> Self {
        self.location_premium_pct = Some(pct);
        self
    }
}

impl RatedCost for SpaceRates {
    const CATEGORY: Category = Category::Space;

    fn validate(&self) -> EstimateResult<()> {
        non_negative("space.rate_per_sqm", self.rate_per_sqm)?;
        non_negative_opt("space.location_premium_pct", self.location_premium_pct)
    }

    fn components(&self, area: &NormalizedArea) -> EstimateResult<Vec<(&'static str, Decimal)>> {
        let base = mul_checked("space.rate_per_sqm", area.sqm.value(), self.rate_per_sqm)?;
        let premium = mul_checked(
            "space.location_premium_pct",
            base,
            pct_to_rate(self.location_premium_pct),
        )?;
        Ok(vec![("Floor space rent", base), ("Location premium", premium)])
    }
}

/// Rate card terms for booth design and build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionRates {
    /// Build cost per square meter at standard finish
    pub rate_per_sqm: Decimal,

    /// Multiplier for finish quality; 1.0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_factor: Option<Decimal>,
}

impl ConstructionRates {
    pub fn new(rate_per_sqm: Decimal) -> Self {
        ConstructionRates {
            rate_per_sqm,
            finish_factor: None,
        }
    }

    pub fn with_finish_factor(mut self, factor: Decimal) -> Self {
        self.finish_factor = Some(factor);
        self
    }
}

impl RatedCost for ConstructionRates {
    const CATEGORY: Category = Category::Construction;

    fn validate(&self) -> EstimateResult<()> {
        non_negative("construction.rate_per_sqm", self.rate_per_sqm)?;
        non_negative_opt("construction.finish_factor", self.finish_factor)
    }

    fn components(&self, area: &NormalizedArea) -> EstimateResult<Vec<(&'static str, Decimal)>> {
        let factor = self.finish_factor.unwrap_or(Decimal::ONE);
        let standard = mul_checked("construction.rate_per_sqm", area.sqm.value(), self.rate_per_sqm)?;
        let build = mul_checked("construction.finish_factor", standard, factor)?;
        Ok(vec![("Design & build", build)])
    }
}
