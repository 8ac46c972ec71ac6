//! Marketing collateral. All items are flat amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{non_negative_opt, RatedCost};
use crate::categories::Category;
use crate::errors::EstimateResult;
use crate::units::NormalizedArea;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingItems {
    /// Brochures, catalogues, standees
    pub print: Option<Decimal>,
    pub giveaways: Option<Decimal>,
    /// Screens, sound, lighting rigs
    pub av: Option<Decimal>,
    pub other: Option<Decimal>,
}

impl RatedCost for MarketingItems {
    const CATEGORY: Category = Category::Marketing;

    fn validate(&self) -> EstimateResult<()> {
        non_negative_opt("marketing.print", self.print)?;
        non_negative_opt("marketing.giveaways", self.giveaways)?;
        non_negative_opt("marketing.av", self.av)?;
        non_negative_opt("marketing.other", self.other)
    }

    fn components(&self, _area: &NormalizedArea) -> EstimateResult<Vec<(&'static str, Decimal)>> {
        Ok(vec![
            ("Print", self.print.unwrap_or_default()),
            ("Giveaways", self.giveaways.unwrap_or_default()),
            ("Audio-visual", self.av.unwrap_or_default()),
            ("Other", self.other.unwrap_or_default()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::Pricing;
    use crate::units::Area;
    use rust_decimal_macros::dec;

    #[test]
    fn test_marketing_sum() {
        let area = Area::sqm(dec!(18)).normalize().unwrap();
        let items = MarketingItems {
            print: Some(dec!(8000)),
            giveaways: Some(dec!(7000)),
            av: Some(dec!(6000)),
            other: Some(dec!(4000)),
        };
        let cost = Pricing::Rated(items).cost(&area).unwrap();
        assert_eq!(cost.total, dec!(25000));
        assert_eq!(cost.items.len(), 4);
    }

    #[test]
    fn test_negative_giveaways_rejected() {
        let items = MarketingItems {
            giveaways: Some(dec!(-0.01)),
            ..Default::default()
        };
        assert!(items.validate().is_err());
    }
}
