//! Validated booth scenarios with exact expected figures.

use booth_core::calculations::{
    calculate, CalculationInput, ContingencyBase, MarketingItems, Pricing, StaffOpsRates,
    TravelRates,
};
use booth_core::categories::{Category, TaxFlags};
use booth_core::rates::{EstimateRequest, FlatOverrides, RateCard};
use booth_core::units::Area;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 18 m² booth at the validated Indian rates, priced with flat amounts.
fn reference_booth() -> CalculationInput {
    CalculationInput::new(Area::sqm(dec!(18)))
        .with_label("18 sqm reference booth")
        .with_space(Pricing::Flat(dec!(63000)))
        .with_construction(Pricing::Flat(dec!(270000)))
        .with_travel(Pricing::Flat(dec!(114000)))
        .with_staff_ops(Pricing::Flat(dec!(30000)))
        .with_marketing(Pricing::Flat(dec!(25000)))
}

#[test]
fn reference_booth_totals_exactly_502000() {
    let result = calculate(&reference_booth()).unwrap();

    assert_eq!(result.categories.space, dec!(63000));
    assert_eq!(result.categories.construction, dec!(270000));
    assert_eq!(result.categories.utilities, Decimal::ZERO);
    assert_eq!(result.categories.logistics, Decimal::ZERO);
    assert_eq!(result.categories.travel + result.categories.staff_ops, dec!(144000));
    assert_eq!(result.categories.marketing, dec!(25000));
    assert_eq!(result.grand_total, dec!(502000));
}

#[test]
fn reference_booth_per_area_rates() {
    let result = calculate(&reference_booth()).unwrap();
    assert_eq!(result.breakdown[&Category::Space], dec!(3500));
    assert_eq!(result.breakdown[&Category::Construction], dec!(15000));
}

#[test]
fn reference_booth_matches_rate_card() {
    // The flat space and construction prices are what the Indian card's
    // per-m² rates give for 18 m².
    let card = RateCard::indian_market();
    let request = EstimateRequest::new(Area::sqm(dec!(18))).with_overrides(FlatOverrides {
        travel: Some(dec!(114000)),
        staff_ops: Some(dec!(30000)),
        marketing: Some(dec!(25000)),
        ..Default::default()
    });

    let mut input = card.build_input(&request).unwrap();
    input.tax.gst_pct = None;
    input.contingency.pct = None;

    let result = calculate(&input).unwrap();
    assert_eq!(result.grand_total, dec!(502000));
}

#[test]
fn rate_based_travel_components() {
    let travel = TravelRates {
        team_count: 4,
        nights: 3,
        airfare_per_person: Some(dec!(18000)),
        hotel_adr: Some(dec!(8000)),
        local_transport_per_day: Some(dec!(1000)),
        meals_per_person_per_day: Some(dec!(800)),
    };
    let input = CalculationInput::new(Area::sqm(dec!(18))).with_travel(Pricing::Rated(travel));
    let result = calculate(&input).unwrap();

    let by_label = |label: &str| {
        result
            .items_for(Category::Travel)
            .find(|item| item.label == label)
            .map(|item| item.amount)
    };
    assert_eq!(by_label("Airfare"), Some(dec!(72000)));
    assert_eq!(by_label("Hotel"), Some(dec!(96000)));
    assert_eq!(by_label("Local transport"), Some(dec!(12000)));
    assert_eq!(by_label("Meals"), Some(dec!(9600)));

    // The components are authoritative; they do not sum to 114,000
    assert_eq!(result.categories.travel, dec!(189600));
    assert_ne!(result.categories.travel, dec!(114000));
}

#[test]
fn full_indian_quote_with_gst_and_post_tax_contingency() {
    let input = CalculationInput::new(Area::sqm(dec!(18)))
        .with_space(Pricing::Flat(dec!(63000)))
        .with_construction(Pricing::Flat(dec!(270000)))
        .with_travel(Pricing::Flat(dec!(114000)))
        .with_staff_ops(Pricing::Rated(StaffOpsRates {
            promoters: 2,
            promoter_days: 3,
            promoter_rate_per_day: Some(dec!(3500)),
            uniforms: Some(dec!(4000)),
            ops_misc: Some(dec!(5000)),
        }))
        .with_marketing(Pricing::Rated(MarketingItems {
            print: Some(dec!(10000)),
            giveaways: Some(dec!(15000)),
            ..Default::default()
        }))
        .with_gst(dec!(18))
        .with_tax_flags(TaxFlags::default())
        .with_contingency(dec!(5), ContingencyBase::PostTax);

    let result = calculate(&input).unwrap();
    assert_eq!(result.subtotal, dec!(502000));
    // Travel exempt: 18% of 388,000
    assert_eq!(result.tax, dec!(69840));
    // 5% of 571,840
    assert_eq!(result.contingency, dec!(28592));
    assert_eq!(result.grand_total, dec!(600432));
}

#[test]
fn square_feet_booth_reports_both_units() {
    let input = CalculationInput::new(Area::sqft(dec!(193.7502)))
        .with_space(Pricing::Flat(dec!(63000)));
    let result = calculate(&input).unwrap();

    assert_eq!(result.area.sqm.value(), dec!(18));
    assert_eq!(result.per_sqm, dec!(3500));
    // 63,000 / 193.7502 = 325.16...
    assert_eq!(result.per_sqft, dec!(325.16));
}
