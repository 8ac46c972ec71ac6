//! # Rate Cards
//!
//! A [`RateCard`] is the default rate table for one market. It is plain data
//! passed into each call, never global state, so the same engine prices an
//! Indian show in rupees and a US show in dollars side by side.
//!
//! An [`EstimateRequest`] carries only quantities (booth size, team size,
//! trip length, ...). [`RateCard::build_input`] combines the two into a
//! [`CalculationInput`] for the engine. Flat overrides on the request
//! take precedence over the card's rates.
//!
//! Rate cards are stored as JSON. Every rate must be present: a card for
//! one currency never borrows another market's figures. Only the location
//! premium, finish factor and tax flags may be left out. `boothcost rates`
//! prints a complete card to start from.
//!
//! ```json
//! {
//!   "market": "India (domestic)",
//!   "currency": "INR",
//!   "space_rate_per_sqm": 3500,
//!   "construction_rate_per_sqm": 15000,
//!   "power_rate_per_kw": 2500,
//!   "internet_flat": 6000,
//!   "furniture_flat": 8000,
//!   "logistics_rate_per_kg": 45,
//!   "airfare_per_person": 18000,
//!   "hotel_adr": 8000,
//!   "local_transport_per_day": 1000,
//!   "meals_per_person_per_day": 800,
//!   "promoter_rate_per_day": 3500,
//!   "uniforms_per_promoter": 1500,
//!   "gst_pct": 18,
//!   "contingency_pct": 5,
//!   "contingency_base": "post_tax"
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use booth_core::calculations::calculate;
//! use booth_core::rates::{EstimateRequest, RateCard};
//! use booth_core::units::Area;
//! use rust_decimal_macros::dec;
//!
//! let card = RateCard::indian_market();
//! let request = EstimateRequest::new(Area::sqm(dec!(18))).with_team(4, 3);
//!
//! let input = card.build_input(&request).unwrap();
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.categories.space, dec!(63000));
//! assert_eq!(result.categories.construction, dec!(270000));
//! ```

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{
    non_negative, non_negative_opt, CalculationInput, ConstructionRates, ContingencyBase,
    ContingencyPolicy, LogisticsRates, MarketingItems, Pricing, SpaceRates, StaffOpsRates,
    TaxPolicy, TravelRates, UtilitiesRates,
};
use crate::categories::TaxFlags;
use crate::errors::{EstimateError, EstimateResult};
use crate::money::mul_checked;
use crate::units::Area;

/// Default rates for one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    /// Market name for display (e.g., "India (domestic)")
    pub market: String,

    /// ISO 4217 code the amounts are in. Informational only.
    pub currency: String,

    // === Booth ===
    pub space_rate_per_sqm: Decimal,
    #[serde(default)]
    pub location_premium_pct: Option<Decimal>,
    pub construction_rate_per_sqm: Decimal,
    #[serde(default)]
    pub finish_factor: Option<Decimal>,

    // === Utilities & Logistics ===
    pub power_rate_per_kw: Decimal,
    pub internet_flat: Decimal,
    pub furniture_flat: Decimal,
    pub logistics_rate_per_kg: Decimal,

    // === Travel ===
    pub airfare_per_person: Decimal,
    pub hotel_adr: Decimal,
    pub local_transport_per_day: Decimal,
    pub meals_per_person_per_day: Decimal,

    // === Staff ===
    pub promoter_rate_per_day: Decimal,
    pub uniforms_per_promoter: Decimal,

    // === Tax & Contingency ===
    pub gst_pct: Decimal,
    #[serde(default)]
    pub taxed: TaxFlags,
    pub contingency_pct: Decimal,
    pub contingency_base: ContingencyBase,
}

impl RateCard {
    /// Validated rates for the Indian domestic trade-show market.
    ///
    /// Space, construction, airfare, hotel, GST and contingency are the
    /// validated figures; transport and meals match the reference travel
    /// scenario; the utility, freight and promoter rates are typical
    /// metro-venue quotes.
    pub fn indian_market() -> Self {
        RateCard {
            market: "India (domestic)".to_string(),
            currency: "INR".to_string(),
            space_rate_per_sqm: dec!(3500),
            location_premium_pct: None,
            construction_rate_per_sqm: dec!(15000),
            finish_factor: None,
            power_rate_per_kw: dec!(2500),
            internet_flat: dec!(6000),
            furniture_flat: dec!(8000),
            logistics_rate_per_kg: dec!(45),
            airfare_per_person: dec!(18000),
            hotel_adr: dec!(8000),
            local_transport_per_day: dec!(1000),
            meals_per_person_per_day: dec!(800),
            promoter_rate_per_day: dec!(3500),
            uniforms_per_promoter: dec!(1500),
            gst_pct: dec!(18),
            taxed: TaxFlags::default(),
            contingency_pct: dec!(5),
            contingency_base: ContingencyBase::PostTax,
        }
    }

    /// Parse and validate a rate card document.
    ///
    /// A missing rate is a `SerializationError` naming the field.
    pub fn from_json(json: &str) -> EstimateResult<Self> {
        let card: RateCard = serde_json::from_str(json)?;
        card.validate()?;
        Ok(card)
    }

    /// Load and validate a rate card from a JSON file.
    pub fn load(path: &Path) -> EstimateResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            EstimateError::file_error("read", path.display().to_string(), e.to_string())
        })?;
        let card = RateCard::from_json(&json)?;
        debug!(path = %path.display(), market = %card.market, "loaded rate card");
        Ok(card)
    }

    pub fn to_json_pretty(&self) -> EstimateResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject negative rates and percentages.
    pub fn validate(&self) -> EstimateResult<()> {
        non_negative("rates.space_rate_per_sqm", self.space_rate_per_sqm)?;
        non_negative_opt("rates.location_premium_pct", self.location_premium_pct)?;
        non_negative("rates.construction_rate_per_sqm", self.construction_rate_per_sqm)?;
        non_negative_opt("rates.finish_factor", self.finish_factor)?;
        non_negative("rates.power_rate_per_kw", self.power_rate_per_kw)?;
        non_negative("rates.internet_flat", self.internet_flat)?;
        non_negative("rates.furniture_flat", self.furniture_flat)?;
        non_negative("rates.logistics_rate_per_kg", self.logistics_rate_per_kg)?;
        non_negative("rates.airfare_per_person", self.airfare_per_person)?;
        non_negative("rates.hotel_adr", self.hotel_adr)?;
        non_negative("rates.local_transport_per_day", self.local_transport_per_day)?;
        non_negative("rates.meals_per_person_per_day", self.meals_per_person_per_day)?;
        non_negative("rates.promoter_rate_per_day", self.promoter_rate_per_day)?;
        non_negative("rates.uniforms_per_promoter", self.uniforms_per_promoter)?;
        non_negative("rates.gst_pct", self.gst_pct)?;
        non_negative("rates.contingency_pct", self.contingency_pct)
    }

    /// Price a request with this card's rates.
    ///
    /// Categories the request has no quantities for are left empty:
    /// logistics without a weight, travel without a team, staff without
    /// promoters and marketing without items. Space and construction are
    /// always priced from the area.
    pub fn build_input(&self, request: &EstimateRequest) -> EstimateResult<CalculationInput> {
        self.validate()?;
        let overrides = &request.overrides;
        let uniforms = mul_checked(
            "rates.uniforms_per_promoter",
            self.uniforms_per_promoter,
            Decimal::from(request.promoters),
        )?;

        let space = Pricing::resolve(
            overrides.space,
            Some(SpaceRates {
                rate_per_sqm: self.space_rate_per_sqm,
                location_premium_pct: request.location_premium_pct.or(self.location_premium_pct),
            }),
        );

        let construction = Pricing::resolve(
            overrides.construction,
            Some(ConstructionRates {
                rate_per_sqm: self.construction_rate_per_sqm,
                finish_factor: request.finish_factor.or(self.finish_factor),
            }),
        );

        let wants_utilities =
            request.power_kw.is_some() || request.include_internet || request.include_furniture;
        let utilities = Pricing::resolve(
            overrides.utilities,
            wants_utilities.then(|| UtilitiesRates {
                power_kw: request.power_kw,
                power_rate_per_kw: Some(self.power_rate_per_kw),
                internet: request.include_internet.then_some(self.internet_flat),
                furniture: request.include_furniture.then_some(self.furniture_flat),
            }),
        );

        let logistics = Pricing::resolve(
            overrides.logistics,
            request.weight_kg.map(|weight_kg| LogisticsRates {
                weight_kg: Some(weight_kg),
                rate_per_kg: Some(self.logistics_rate_per_kg),
            }),
        );

        let travel = Pricing::resolve(
            overrides.travel,
            (request.team_count > 0).then(|| TravelRates {
                team_count: request.team_count,
                nights: request.nights,
                airfare_per_person: Some(self.airfare_per_person),
                hotel_adr: Some(self.hotel_adr),
                local_transport_per_day: Some(self.local_transport_per_day),
                meals_per_person_per_day: Some(self.meals_per_person_per_day),
            }),
        );

        let staff_ops = Pricing::resolve(
            overrides.staff_ops,
            (request.promoters > 0 || request.ops_misc.is_some()).then(|| StaffOpsRates {
                promoters: request.promoters,
                promoter_days: request.promoter_days,
                promoter_rate_per_day: Some(self.promoter_rate_per_day),
                uniforms: Some(uniforms),
                ops_misc: request.ops_misc,
            }),
        );

        let marketing = Pricing::resolve(
            overrides.marketing,
            (request.marketing != MarketingItems::default()).then(|| request.marketing.clone()),
        );

        Ok(CalculationInput {
            label: request.label.clone(),
            area: request.area,
            space,
            construction,
            utilities,
            logistics,
            travel,
            staff_ops,
            marketing,
            tax: TaxPolicy {
                gst_pct: Some(self.gst_pct),
                flags: self.taxed,
            },
            contingency: ContingencyPolicy {
                pct: Some(self.contingency_pct),
                base: request.contingency_base.unwrap_or(self.contingency_base),
            },
        })
    }
}

/// Flat amounts that replace a category's rate-based price.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatOverrides {
    pub space: Option<Decimal>,
    pub construction: Option<Decimal>,
    pub utilities: Option<Decimal>,
    pub logistics: Option<Decimal>,
    pub travel: Option<Decimal>,
    pub staff_ops: Option<Decimal>,
    pub marketing: Option<Decimal>,
}

/// Quantities for one exhibit, to be priced with a [`RateCard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    #[serde(default)]
    pub label: String,
    pub area: Area,

    #[serde(default)]
    pub location_premium_pct: Option<Decimal>,
    #[serde(default)]
    pub finish_factor: Option<Decimal>,

    #[serde(default)]
    pub power_kw: Option<Decimal>,
    #[serde(default)]
    pub include_internet: bool,
    #[serde(default)]
    pub include_furniture: bool,
    #[serde(default)]
    pub weight_kg: Option<Decimal>,

    #[serde(default)]
    pub team_count: u32,
    #[serde(default)]
    pub nights: u32,

    #[serde(default)]
    pub promoters: u32,
    #[serde(default)]
    pub promoter_days: u32,
    #[serde(default)]
    pub ops_misc: Option<Decimal>,

    #[serde(default)]
    pub marketing: MarketingItems,

    #[serde(default)]
    pub overrides: FlatOverrides,

    /// Overrides the card's contingency base when set
    #[serde(default)]
    pub contingency_base: Option<ContingencyBase>,
}

impl EstimateRequest {
    pub fn new(area: Area) -> Self {
        EstimateRequest {
            label: String::new(),
            area,
            location_premium_pct: None,
            finish_factor: None,
            power_kw: None,
            include_internet: false,
            include_furniture: false,
            weight_kg: None,
            team_count: 0,
            nights: 0,
            promoters: 0,
            promoter_days: 0,
            ops_misc: None,
            marketing: MarketingItems::default(),
            overrides: FlatOverrides::default(),
            contingency_base: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Travelling team size and number of hotel nights
    pub fn with_team(mut self, team_count: u32, nights: u32) -> Self {
        self.team_count = team_count;
        self.nights = nights;
        self
    }

    pub fn with_promoters(mut self, promoters: u32, promoter_days: u32) -> Self {
        self.promoters = promoters;
        self.promoter_days = promoter_days;
        self
    }

    pub fn with_power(mut self, power_kw: Decimal) -> Self {
        self.power_kw = Some(power_kw);
        self
    }

    pub fn with_freight(mut self, weight_kg: Decimal) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    pub fn with_marketing(mut self, marketing: MarketingItems) -> Self {
        self.marketing = marketing;
        self
    }

    pub fn with_overrides(mut self, overrides: FlatOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}
