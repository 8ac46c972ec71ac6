//! # Travel and Staff/Operations
//!
//! Travel is per person: every team member gets a return airfare, and one
//! hotel room-night, one day of local transport and one day of meals for
//! each night of the trip:
//!
//! ```text
//! travel = team × (airfare + nights × hotel_adr + nights × transport + nights × meals)
//! ```
//!
//! Staff/operations covers locally hired promoters plus flat uniform and
//! miscellaneous operating costs:
//!
//! ```text
//! staff_ops = promoters × promoter_days × rate_per_day + uniforms + ops_misc
//! ```
//!
//! Headcounts and day counts are unsigned, so they cannot go negative.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{non_negative_opt, RatedCost};
use crate::categories::Category;
use crate::errors::EstimateResult;
use crate::money::mul_checked;
use crate::units::NormalizedArea;

/// Team travel for the show.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelRates {
    pub team_count: u32,
    pub nights: u32,
    /// Return airfare per person
    pub airfare_per_person: Option<Decimal>,
    /// Average daily rate of one hotel room
    pub hotel_adr: Option<Decimal>,
    pub local_transport_per_day: Option<Decimal>,
    pub meals_per_person_per_day: Option<Decimal>,
}

impl RatedCost for TravelRates {
    const CATEGORY: Category = Category::Travel;

    fn validate(&self) -> EstimateResult<()> {
        non_negative_opt("travel.airfare_per_person", self.airfare_per_person)?;
        non_negative_opt("travel.hotel_adr", self.hotel_adr)?;
        non_negative_opt("travel.local_transport_per_day", self.local_transport_per_day)?;
        non_negative_opt("travel.meals_per_person_per_day", self.meals_per_person_per_day)
    }

    fn components(&self, _area: &NormalizedArea) -> EstimateResult<Vec<(&'static str, Decimal)>> {
        let team = Decimal::from(self.team_count);
        // u32 × u32 always fits
        let person_nights = Decimal::from(u64::from(self.team_count) * u64::from(self.nights));

        Ok(vec![
            (
                "Airfare",
                mul_checked("travel.airfare_per_person", team, self.airfare_per_person.unwrap_or_default())?,
            ),
            (
                "Hotel",
                mul_checked("travel.hotel_adr", person_nights, self.hotel_adr.unwrap_or_default())?,
            ),
            (
                "Local transport",
                mul_checked(
                    "travel.local_transport_per_day",
                    person_nights,
                    self.local_transport_per_day.unwrap_or_default(),
                )?,
            ),
            (
                "Meals",
                mul_checked(
                    "travel.meals_per_person_per_day",
                    person_nights,
                    self.meals_per_person_per_day.unwrap_or_default(),
                )?,
            ),
        ])
    }
}

/// Promoters and on-site operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffOpsRates {
    pub promoters: u32,
    pub promoter_days: u32,
    pub promoter_rate_per_day: Option<Decimal>,
    /// Flat uniform cost for the whole crew
    pub uniforms: Option<Decimal>,
    /// Flat miscellaneous operations (cleaning, badges, storage)
    pub ops_misc: Option<Decimal>,
}

impl RatedCost for StaffOpsRates {
    const CATEGORY: Category = Category::StaffOps;

    fn validate(&self) -> EstimateResult<()> {
        non_negative_opt("staff_ops.promoter_rate_per_day", self.promoter_rate_per_day)?;
        non_negative_opt("staff_ops.uniforms", self.uniforms)?;
        non_negative_opt("staff_ops.ops_misc", self.ops_misc)
    }

    fn components(&self, _area: &NormalizedArea) -> EstimateResult<Vec<(&'static str, Decimal)>> {
        let promoter_days = Decimal::from(u64::from(self.promoters) * u64::from(self.promoter_days));
        let promoters = mul_checked(
            "staff_ops.promoter_rate_per_day",
            promoter_days,
            self.promoter_rate_per_day.unwrap_or_default(),
        )?;
        Ok(vec![
            ("Promoters", promoters),
            ("Uniforms", self.uniforms.unwrap_or_default()),
            ("Miscellaneous operations", self.ops_misc.unwrap_or_default()),
        ])
    }
}
