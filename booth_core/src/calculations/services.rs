//! Utilities and logistics.
//!
//! Every term is optional and contributes nothing when absent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{non_negative_opt, RatedCost};
use crate::categories::Category;
use crate::errors::EstimateResult;
use crate::money::mul_checked;
use crate::units::NormalizedArea;

/// Power, internet and furniture hire for the booth.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilitiesRates {
    /// Connected load in kW
    pub power_kw: Option<Decimal>,
    /// Charge per kW of connected load
    pub power_rate_per_kw: Option<Decimal>,
    /// Flat internet package
    pub internet: Option<Decimal>,
    /// Flat furniture hire
    pub furniture: Option<Decimal>,
}

impl RatedCost for UtilitiesRates {
    const CATEGORY: Category = Category::Utilities;

    fn validate(&self) -> EstimateResult<()> {
        non_negative_opt("utilities.power_kw", self.power_kw)?;
        non_negative_opt("utilities.power_rate_per_kw", self.power_rate_per_kw)?;
        non_negative_opt("utilities.internet", self.internet)?;
        non_negative_opt("utilities.furniture", self.furniture)
    }

    fn components(&self, _area: &NormalizedArea) -> EstimateResult<Vec<(&'static str, Decimal)>> {
        let power = mul_checked(
            "utilities.power_rate_per_kw",
            self.power_kw.unwrap_or_default(),
            self.power_rate_per_kw.unwrap_or_default(),
        )?;
        Ok(vec![
            ("Power", power),
            ("Internet", self.internet.unwrap_or_default()),
            ("Furniture hire", self.furniture.unwrap_or_default()),
        ])
    }
}

/// Freight of booth material and product samples.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticsRates {
    pub weight_kg: Option<Decimal>,
    pub rate_per_kg: Option<Decimal>,
}

impl RatedCost for LogisticsRates {
    const CATEGORY: Category = Category::Logistics;

    fn validate(&self) -> EstimateResult<()> {
        non_negative_opt("logistics.weight_kg", self.weight_kg)?;
        non_negative_opt("logistics.rate_per_kg", self.rate_per_kg)
    }

    fn components(&self, _area: &NormalizedArea) -> EstimateResult<Vec<(&'static str, Decimal)>> {
        let freight = mul_checked(
            "logistics.rate_per_kg",
            self.weight_kg.unwrap_or_default(),
            self.rate_per_kg.unwrap_or_default(),
        )?;
        Ok(vec![("Freight", freight)])
    }
}
