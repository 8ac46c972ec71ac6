//! # Exhibit Cost Estimate
//!
//! The engine: turns a [`CalculationInput`] into a fully itemized, taxed and
//! contingency-adjusted [`CalculationResult`].
//!
//! Order of evaluation:
//!
//! 1. validate every field (first violation is returned)
//! 2. normalize the area to both m² and ft²
//! 3. price the seven categories (independent of each other)
//! 4. subtotal, then GST on the flagged categories only
//! 5. contingency on the pre-tax or post-tax amount
//! 6. grand total and per-area metrics
//!
//! ## Example
//!
//! ```rust
//! use booth_core::calculations::{calculate, CalculationInput, Pricing, SpaceRates};
//! use booth_core::units::Area;
//! use rust_decimal_macros::dec;
//!
//! let input = CalculationInput::new(Area::sqm(dec!(18)))
//!     .with_space(Pricing::Rated(SpaceRates::new(dec!(3500))))
//!     .with_construction(Pricing::Flat(dec!(270000)))
//!     .with_gst(dec!(18))
//!     .with_contingency(dec!(5), booth_core::calculations::ContingencyBase::PostTax);
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.subtotal, dec!(333000));
//! assert_eq!(result.tax, dec!(59940));
//! assert_eq!(result.contingency, dec!(19647));
//! assert_eq!(result.grand_total, dec!(412587));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    non_negative_opt, CategoryCost, ConstructionRates, LineItem, LogisticsRates, MarketingItems,
    Pricing, RatedCost, SpaceRates, StaffOpsRates, TravelRates, UtilitiesRates,
};
use crate::categories::{Category, CategoryTotals, TaxFlags};
use crate::errors::{EstimateError, EstimateResult};
use crate::money::{add_checked, div_checked, percent_of, round_minor};
use crate::units::{Area, AreaUnit, NormalizedArea};

/// Amount the contingency percentage is applied to.
///
/// Deserialized through [`FromStr`], so JSON accepts the same spellings as
/// the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ContingencyBase {
    /// Subtotal before tax
    PreTax,
    /// Subtotal plus tax
    #[default]
    PostTax,
}

impl ContingencyBase {
    pub fn code(&self) -> &'static str {
        match self {
            ContingencyBase::PreTax => "pre_tax",
            ContingencyBase::PostTax => "post_tax",
        }
    }
}

impl fmt::Display for ContingencyBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ContingencyBase {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre_tax" | "pre-tax" | "pretax" => Ok(ContingencyBase::PreTax),
            "post_tax" | "post-tax" | "posttax" => Ok(ContingencyBase::PostTax),
            _ => Err(EstimateError::invalid_contingency_base(s)),
        }
    }
}

impl TryFrom<String> for ContingencyBase {
    type Error = EstimateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// GST rate and which categories it applies to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxPolicy {
    /// GST in percent (18 = 18%). Absent means no tax.
    pub gst_pct: Option<Decimal>,
    pub flags: TaxFlags,
}

/// Contingency buffer percentage and its base.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContingencyPolicy {
    /// Buffer in percent (5 = 5%). Absent means no contingency.
    pub pct: Option<Decimal>,
    pub base: ContingencyBase,
}

/// Everything needed to price one exhibit.
///
/// Categories left as `None` cost nothing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Auto Expo 2026",
///   "area": { "value": 18, "unit": "sqm" },
///   "space": { "flat": 63000 },
///   "construction": { "rated": { "rate_per_sqm": 15000, "finish_factor": 1.2 } },
///   "travel": {
///     "rated": {
///       "team_count": 4, "nights": 3,
///       "airfare_per_person": 18000, "hotel_adr": 8000,
///       "local_transport_per_day": 1000, "meals_per_person_per_day": 800
///     }
///   },
///   "tax": { "gst_pct": 18, "flags": { "travel": false } },
///   "contingency": { "pct": 5, "base": "post_tax" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Free-form label (show name, quote reference)
    #[serde(default)]
    pub label: String,

    pub area: Area,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<Pricing<SpaceRates>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction: Option<Pricing<ConstructionRates>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilities: Option<Pricing<UtilitiesRates>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logistics: Option<Pricing<LogisticsRates>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel: Option<Pricing<TravelRates>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_ops: Option<Pricing<StaffOpsRates>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing: Option<Pricing<MarketingItems>>,

    #[serde(default)]
    pub tax: TaxPolicy,
    #[serde(default)]
    pub contingency: ContingencyPolicy,
}

impl CalculationInput {
    /// An input with only an area: no categories, no tax, no contingency.
    pub fn new(area: Area) -> Self {
        CalculationInput {
            label: String::new(),
            area,
            space: None,
            construction: None,
            utilities: None,
            logistics: None,
            travel: None,
            staff_ops: None,
            marketing: None,
            tax: TaxPolicy::default(),
            contingency: ContingencyPolicy::default(),
        }
    }

    /// Parse an input document.
    ///
    /// An unknown area unit or contingency base is reported as
    /// `InvalidArea` / `InvalidContingencyBase`, the same as from text.
    /// Other malformed documents give `SerializationError`.
    pub fn from_json(json: &str) -> EstimateResult<Self> {
        let document: serde_json::Value = serde_json::from_str(json)?;
        if let Some(unit) = document.pointer("/area/unit").and_then(|v| v.as_str()) {
            unit.parse::<AreaUnit>()?;
        }
        if let Some(base) = document.pointer("/contingency/base").and_then(|v| v.as_str()) {
            base.parse::<ContingencyBase>()?;
        }
        Ok(serde_json::from_value(document)?)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_space(mut self, pricing: Pricing<SpaceRates>) -> Self {
        self.space = Some(pricing);
        self
    }

    pub fn with_construction(mut self, pricing: Pricing<ConstructionRates>) -> Self {
        self.construction = Some(pricing);
        self
    }

    pub fn with_utilities(mut self, pricing: Pricing<UtilitiesRates>) -> Self {
        self.utilities = Some(pricing);
        self
    }

    pub fn with_logistics(mut self, pricing: Pricing<LogisticsRates>) -> Self {
        self.logistics = Some(pricing);
        self
    }

    pub fn with_travel(mut self, pricing: Pricing<TravelRates>) -> Self {
        self.travel = Some(pricing);
        self
    }

    pub fn with_staff_ops(mut self, pricing: Pricing<StaffOpsRates>) -> Self {
        self.staff_ops = Some(pricing);
        self
    }

    pub fn with_marketing(mut self, pricing: Pricing<MarketingItems>) -> Self {
        self.marketing = Some(pricing);
        self
    }

    /// Set the GST percentage, keeping the current flags.
    pub fn with_gst(mut self, gst_pct: Decimal) -> Self {
        self.tax.gst_pct = Some(gst_pct);
        self
    }

    pub fn with_tax_flags(mut self, flags: TaxFlags) -> Self {
        self.tax.flags = flags;
        self
    }

    pub fn with_contingency(mut self, pct: Decimal, base: ContingencyBase) -> Self {
        self.contingency = ContingencyPolicy { pct: Some(pct), base };
        self
    }

    /// Validate input parameters.
    ///
    /// Checks the area first, then each category in reporting order, then
    /// the tax and contingency percentages. The GST percentage has no upper
    /// bound.
    pub fn validate(&self) -> EstimateResult<()> {
        self.area.normalize()?;

        validate_category(&self.space)?;
        validate_category(&self.construction)?;
        validate_category(&self.utilities)?;
        validate_category(&self.logistics)?;
        validate_category(&self.travel)?;
        validate_category(&self.staff_ops)?;
        validate_category(&self.marketing)?;

        non_negative_opt("tax.gst_pct", self.tax.gst_pct)?;
        non_negative_opt("contingency.pct", self.contingency.pct)?;
        Ok(())
    }
}

fn validate_category<R: RatedCost>(pricing: &Option<Pricing<R>>) -> EstimateResult<()> {
    match pricing {
        Some(pricing) => pricing.validate(),
        None => Ok(()),
    }
}

fn price_category<R: RatedCost>(
    pricing: &Option<Pricing<R>>,
    area: &NormalizedArea,
) -> EstimateResult<CategoryCost> {
    match pricing {
        Some(pricing) => pricing.cost(area),
        None => Ok(CategoryCost::empty(R::CATEGORY)),
    }
}

/// Result of an exhibit cost estimate.
///
/// All money values are rounded to the currency minor unit.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "categories": { "space": "63000", "construction": "270000", "...": "..." },
///   "subtotal": "502000",
///   "taxable_amount": "0",
///   "tax": "0",
///   "contingency_base": "post_tax",
///   "contingency_base_amount": "502000",
///   "contingency": "0",
///   "grand_total": "502000",
///   "per_sqm": "27888.89",
///   "per_sqft": "2590.97",
///   "breakdown": { "space": "3500", "construction": "15000", "...": "..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Area used for all per-area metrics
    pub area: NormalizedArea,

    /// Total per category
    pub categories: CategoryTotals,

    /// Itemized components of every category, in reporting order
    pub line_items: Vec<LineItem>,

    /// Sum of the seven category totals
    pub subtotal: Decimal,

    /// Sum of the categories GST applies to
    pub taxable_amount: Decimal,

    /// GST percentage applied (0 when none)
    pub gst_pct: Decimal,

    /// GST on the taxable amount
    pub tax: Decimal,

    /// Whether contingency was applied before or after tax
    pub contingency_base: ContingencyBase,

    /// Amount the contingency percentage was applied to
    pub contingency_base_amount: Decimal,

    /// Contingency buffer on the base amount
    pub contingency: Decimal,

    /// subtotal + tax + contingency
    pub grand_total: Decimal,

    /// Grand total per square meter
    pub per_sqm: Decimal,

    /// Grand total per square foot
    pub per_sqft: Decimal,

    /// Each category's total per square meter
    pub breakdown: BTreeMap<Category, Decimal>,
}

impl CalculationResult {
    pub fn category_total(&self, category: Category) -> Decimal {
        self.categories.get(category)
    }

    /// Line items belonging to one category
    pub fn items_for(&self, category: Category) -> impl Iterator<Item = &LineItem> + '_ {
        self.line_items.iter().filter(move |item| item.category == category)
    }

    /// Share of the subtotal taken by one category, in percent.
    ///
    /// Zero when the subtotal is zero.
    pub fn share_pct(&self, category: Category) -> Decimal {
        if self.subtotal.is_zero() {
            return Decimal::ZERO;
        }
        // Totals are non-negative, so the ratio is at most 1 and cannot overflow
        round_minor(self.category_total(category) / self.subtotal * dec!(100))
    }

    /// The category with the largest total, if any category is non-zero
    pub fn largest_category(&self) -> Option<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| !self.category_total(*c).is_zero())
            .max_by_key(|c| self.category_total(*c))
    }
}

/// Compute a complete exhibit cost estimate.
///
/// Pure and synchronous: borrows the input, returns a new result.
///
/// # Returns
///
/// * `Ok(CalculationResult)` - itemized totals, tax, contingency, metrics
/// * `Err(EstimateError)` - the first invalid field found, or
///   `AmountOverflow` when a figure exceeds the decimal range. No partial
///   result is ever returned.
pub fn calculate(input: &CalculationInput) -> EstimateResult<CalculationResult> {
    input.validate()?;
    let area = input.area.normalize()?;
    debug!(
        label = %input.label,
        sqm = %area.sqm.value(),
        sqft = %area.sqft.value(),
        "normalized booth area"
    );

    // === Categories ===
    let costs = [
        price_category(&input.space, &area)?,
        price_category(&input.construction, &area)?,
        price_category(&input.utilities, &area)?,
        price_category(&input.logistics, &area)?,
        price_category(&input.travel, &area)?,
        price_category(&input.staff_ops, &area)?,
        price_category(&input.marketing, &area)?,
    ];

    let mut categories = CategoryTotals::default();
    let mut line_items = Vec::new();
    for cost in costs {
        debug!(category = %cost.category, total = %cost.total, "priced category");
        categories.set(cost.category, cost.total);
        line_items.extend(cost.items);
    }

    let subtotal = categories.sum()?;

    // === Tax ===
    let gst_pct = input.tax.gst_pct.unwrap_or(Decimal::ZERO);
    if gst_pct > dec!(100) {
        warn!(%gst_pct, "GST above 100% accepted as given");
    }
    let taxable_amount = categories.taxable_sum(&input.tax.flags)?;
    let tax = if gst_pct.is_zero() {
        Decimal::ZERO
    } else {
        percent_of("tax", taxable_amount, Some(gst_pct))?
    };
    debug!(%subtotal, %taxable_amount, %tax, "applied GST");

    // === Contingency ===
    let contingency_base = input.contingency.base;
    let contingency_base_amount = match contingency_base {
        ContingencyBase::PreTax => subtotal,
        ContingencyBase::PostTax => add_checked("contingency_base_amount", subtotal, tax)?,
    };
    let contingency = percent_of("contingency", contingency_base_amount, input.contingency.pct)?;
    debug!(base = %contingency_base, %contingency_base_amount, %contingency, "applied contingency");

    // === Totals & Metrics ===
    let grand_total = add_checked("grand_total", subtotal, tax)?;
    let grand_total = add_checked("grand_total", grand_total, contingency)?;

    // Area was validated positive above; a tiny area can still overflow
    let sqm = area.sqm.value();
    let sqft = area.sqft.value();
    let per_sqm = round_minor(div_checked("per_sqm", grand_total, sqm)?);
    let per_sqft = round_minor(div_checked("per_sqft", grand_total, sqft)?);

    let breakdown = Category::ALL
        .into_iter()
        .map(|c| {
            let field = format!("breakdown.{}", c.key());
            Ok((c, round_minor(div_checked(&field, categories.get(c), sqm)?)))
        })
        .collect::<EstimateResult<BTreeMap<_, _>>>()?;

    Ok(CalculationResult {
        area,
        categories,
        line_items,
        subtotal,
        taxable_amount,
        gst_pct,
        tax,
        contingency_base,
        contingency_base_amount,
        contingency,
        grand_total,
        per_sqm,
        per_sqft,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The validated 18 m² booth: flat prices for every category in use.
    fn reference_input() -> CalculationInput {
        CalculationInput::new(Area::sqm(dec!(18)))
            .with_label("Reference booth")
            .with_space(Pricing::Flat(dec!(63000)))
            .with_construction(Pricing::Flat(dec!(270000)))
            .with_travel(Pricing::Flat(dec!(114000)))
            .with_staff_ops(Pricing::Flat(dec!(30000)))
            .with_marketing(Pricing::Flat(dec!(25000)))
    }

    #[test]
    fn test_reference_grand_total() {
        let result = calculate(&reference_input()).unwrap();
        assert_eq!(result.subtotal, dec!(502000));
        assert_eq!(result.tax, Decimal::ZERO);
        assert_eq!(result.contingency, Decimal::ZERO);
        assert_eq!(result.grand_total, dec!(502000));
    }

    #[test]
    fn test_reference_breakdown() {
        let result = calculate(&reference_input()).unwrap();
        assert_eq!(result.breakdown[&Category::Space], dec!(3500));
        assert_eq!(result.breakdown[&Category::Construction], dec!(15000));
        assert_eq!(result.breakdown[&Category::Utilities], Decimal::ZERO);
        assert_eq!(result.breakdown.len(), 7);
    }

    #[test]
    fn test_per_area_metrics() {
        let result = calculate(&reference_input()).unwrap();
        // 502,000 / 18 = 27,888.888...
        assert_eq!(result.per_sqm, dec!(27888.89));
        // 502,000 / 193.7502 = 2,590.96...
        assert_eq!(result.per_sqft, dec!(2590.97));
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let result = calculate(&CalculationInput::new(Area::sqft(dec!(100)))).unwrap();
        assert_eq!(result.grand_total, Decimal::ZERO);
        assert_eq!(result.per_sqm, Decimal::ZERO);
        assert_eq!(result.per_sqft, Decimal::ZERO);
        assert!(result.breakdown.values().all(|v| v.is_zero()));
        assert!(result.line_items.is_empty());
        assert_eq!(result.largest_category(), None);
    }

    #[test]
    fn test_gst_skips_unflagged_categories() {
        // Default flags exempt travel
        let input = reference_input().with_gst(dec!(18));
        let result = calculate(&input).unwrap();
        assert_eq!(result.taxable_amount, dec!(388000));
        assert_eq!(result.tax, dec!(69840));
    }

    #[test]
    fn test_zero_gst_fast_path() {
        let input = reference_input()
            .with_gst(Decimal::ZERO)
            .with_tax_flags(TaxFlags::all());
        let result = calculate(&input).unwrap();
        assert_eq!(result.tax, Decimal::ZERO);
        assert_eq!(result.taxable_amount, dec!(502000));
    }

    #[test]
    fn test_gst_above_100_is_accepted() {
        let input = CalculationInput::new(Area::sqm(dec!(10)))
            .with_marketing(Pricing::Flat(dec!(1000)))
            .with_gst(dec!(250));
        let result = calculate(&input).unwrap();
        assert_eq!(result.tax, dec!(2500));
    }

    #[test]
    fn test_contingency_pre_tax() {
        let input = reference_input()
            .with_gst(dec!(18))
            .with_contingency(dec!(5), ContingencyBase::PreTax);
        let result = calculate(&input).unwrap();
        assert_eq!(result.contingency_base_amount, dec!(502000));
        assert_eq!(result.contingency, dec!(25100));
        assert_eq!(result.grand_total, dec!(502000) + dec!(69840) + dec!(25100));
    }

    #[test]
    fn test_contingency_post_tax() {
        let input = reference_input()
            .with_gst(dec!(18))
            .with_contingency(dec!(5), ContingencyBase::PostTax);
        let result = calculate(&input).unwrap();
        assert_eq!(result.contingency_base_amount, dec!(571840));
        assert_eq!(result.contingency, dec!(28592));
    }

    #[test]
    fn test_line_items_sum_to_categories() {
        let input = reference_input().with_travel(Pricing::Rated(TravelRates {
            team_count: 4,
            nights: 3,
            airfare_per_person: Some(dec!(18000)),
            hotel_adr: Some(dec!(8000)),
            local_transport_per_day: Some(dec!(1000)),
            meals_per_person_per_day: Some(dec!(800)),
        }));
        let result = calculate(&input).unwrap();
        for category in Category::ALL {
            let sum: Decimal = result.items_for(category).map(|i| i.amount).sum();
            assert_eq!(sum, result.category_total(category), "{category}");
        }
        assert_eq!(result.category_total(Category::Travel), dec!(189600));
    }

    #[test]
    fn test_share_and_largest() {
        let result = calculate(&reference_input()).unwrap();
        assert_eq!(result.largest_category(), Some(Category::Construction));
        // 270,000 / 502,000
        assert_eq!(result.share_pct(Category::Construction), dec!(53.78));
    }

    #[test]
    fn test_invalid_area_checked_first() {
        let mut input = reference_input();
        input.area = Area::sqm(dec!(-18));
        input.space = Some(Pricing::Flat(dec!(-1)));
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_AREA");
    }

    #[test]
    fn test_first_invalid_category_reported() {
        let input = reference_input()
            .with_construction(Pricing::Rated(ConstructionRates::new(dec!(-15000))))
            .with_marketing(Pricing::Flat(dec!(-1)));
        let err = calculate(&input).unwrap_err();
        assert!(matches!(
            err,
            EstimateError::InvalidRate { ref field, .. } if field == "construction.rate_per_sqm"
        ));
    }

    #[test]
    fn test_negative_gst_rejected() {
        let err = calculate(&reference_input().with_gst(dec!(-18))).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidRate { ref field, .. } if field == "tax.gst_pct"));
    }

    #[test]
    fn test_negative_contingency_rejected() {
        let input = reference_input().with_contingency(dec!(-5), ContingencyBase::PreTax);
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_contingency_base_parsing() {
        assert_eq!("PRE-TAX".parse::<ContingencyBase>().unwrap(), ContingencyBase::PreTax);
        assert_eq!("post_tax".parse::<ContingencyBase>().unwrap(), ContingencyBase::PostTax);
        let err = "sideways".parse::<ContingencyBase>().unwrap_err();
        assert_eq!(err, EstimateError::invalid_contingency_base("sideways"));
    }

    #[test]
    fn test_input_from_json() {
        let json = r#"{
            "label": "Auto Expo",
            "area": { "value": 18, "unit": "sqm" },
            "space": { "flat": 63000 },
            "construction": { "rated": { "rate_per_sqm": 15000 } },
            "tax": { "gst_pct": 18 },
            "contingency": { "pct": 5, "base": "pre-tax" }
        }"#;
        let input = CalculationInput::from_json(json).unwrap();
        assert_eq!(input.contingency.base, ContingencyBase::PreTax);
        let result = calculate(&input).unwrap();
        assert_eq!(result.subtotal, dec!(333000));
    }

    #[test]
    fn test_unknown_contingency_base_in_json() {
        let json = r#"{ "area": { "value": 18 }, "contingency": { "base": "mid_tax" } }"#;
        let err = CalculationInput::from_json(json).unwrap_err();
        assert_eq!(err, EstimateError::invalid_contingency_base("mid_tax"));
        assert_eq!(err.error_code(), "INVALID_CONTINGENCY_BASE");
    }

    #[test]
    fn test_unknown_unit_in_json() {
        let json = r#"{ "area": { "value": 18, "unit": "acres" } }"#;
        let err = CalculationInput::from_json(json).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidArea { ref unit, .. } if unit == "acres"));
    }

    #[test]
    fn test_json_selectors_accept_text_spellings() {
        let json = r#"{
            "area": { "value": 18, "unit": "square-meters" },
            "contingency": { "pct": 5, "base": "Post-Tax" }
        }"#;
        let input = CalculationInput::from_json(json).unwrap();
        assert_eq!(input.area, Area::sqm(dec!(18)));
        assert_eq!(input.contingency.base, ContingencyBase::PostTax);
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = CalculationInput::from_json(r#"{ "area": { "value": "many" } }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let err = CalculationInput::from_json("{").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_tiny_area_overflows_per_area_metrics() {
        let input = CalculationInput::new(Area::sqm(Decimal::new(1, 28)))
            .with_space(Pricing::Flat(dec!(1000)));
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, EstimateError::amount_overflow("per_sqm"));
    }

    #[test]
    fn test_huge_gst_overflows_tax() {
        let gst = Decimal::from_i128_with_scale(10_i128.pow(27), 0);
        let err = calculate(&reference_input().with_gst(gst)).unwrap_err();
        assert_eq!(err, EstimateError::amount_overflow("tax"));
    }

    #[test]
    fn test_huge_rate_overflows_category() {
        let huge = Decimal::from(1_000_000_000_000_000_i64);
        let input = CalculationInput::new(Area::sqm(huge))
            .with_space(Pricing::Rated(SpaceRates::new(huge)));
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, EstimateError::amount_overflow("space.rate_per_sqm"));
    }

    #[test]
    fn test_subtotal_overflow_reported() {
        // Each flat fits, their sum does not
        let half = Decimal::from_i128_with_scale(40_000_000_000_000_000_000_000_000_000, 0);
        let input = CalculationInput::new(Area::sqm(dec!(1)))
            .with_space(Pricing::Flat(half))
            .with_construction(Pricing::Flat(half));
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, EstimateError::amount_overflow("subtotal"));
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&reference_input()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("grand_total"));
        assert!(json.contains("\"staff_ops\""));

        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, result);
    }
}
