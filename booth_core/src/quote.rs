//! # Quotes
//!
//! A [`Quote`] is the presentation envelope around one estimate: who it is
//! for, when it was prepared, and the input and result side by side. The
//! library never writes quotes anywhere; callers serialize them as they
//! see fit.
//!
//! ## Structure
//!
//! ```text
//! Quote
//! ├── meta: QuoteMetadata (id, event, exhibitor, currency, timestamp)
//! ├── input: CalculationInput
//! └── result: CalculationResult
//! ```
//!
//! ## Example
//!
//! ```rust
//! use booth_core::calculations::{CalculationInput, Pricing};
//! use booth_core::quote::Quote;
//! use booth_core::units::Area;
//! use rust_decimal_macros::dec;
//!
//! let input = CalculationInput::new(Area::sqm(dec!(18)))
//!     .with_space(Pricing::Flat(dec!(63000)));
//!
//! let quote = Quote::prepare("Auto Expo 2026", "Acme Motors", "INR", input).unwrap();
//! assert_eq!(quote.result.grand_total, dec!(63000));
//!
//! let json = serde_json::to_string_pretty(&quote).unwrap();
//! assert!(json.contains("Acme Motors"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{calculate, CalculationInput, CalculationResult};
use crate::categories::Category;
use crate::errors::EstimateResult;
use crate::money::format_amount;

/// Current schema version for serialized quotes
pub const SCHEMA_VERSION: &str = "0.1.0";

/// An estimate packaged for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub meta: QuoteMetadata,
    pub input: CalculationInput,
    pub result: CalculationResult,
}

/// Who and what a quote is for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub id: Uuid,

    /// Trade show name
    pub event_name: String,

    /// Exhibiting company
    pub exhibitor: String,

    /// ISO 4217 code the amounts are in
    pub currency: String,

    /// When the estimate was computed
    pub created: DateTime<Utc>,
}

impl Quote {
    /// Run the estimate and wrap it with fresh metadata.
    ///
    /// Fails with the engine's error if the input is invalid.
    pub fn prepare(
        event_name: impl Into<String>,
        exhibitor: impl Into<String>,
        currency: impl Into<String>,
        input: CalculationInput,
    ) -> EstimateResult<Self> {
        let result = calculate(&input)?;
        Ok(Quote {
            meta: QuoteMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                event_name: event_name.into(),
                exhibitor: exhibitor.into(),
                currency: currency.into(),
                created: Utc::now(),
            },
            input,
            result,
        })
    }

    /// Plain-text summary table, one line per row.
    pub fn summary_lines(&self) -> Vec<String> {
        let r = &self.result;
        let cur = &self.meta.currency;
        let mut lines = Vec::new();

        lines.push(format!("{} - {}", self.meta.event_name, self.meta.exhibitor));
        lines.push(format!(
            "Booth: {} sqm ({} sqft)",
            r.area.sqm.value().round_dp(2),
            r.area.sqft.value().round_dp(2)
        ));
        lines.push(String::new());

        for category in Category::ALL {
            let total = r.category_total(category);
            if total.is_zero() {
                continue;
            }
            lines.push(format!(
                "{:<22} {} {:>16}",
                category.display_name(),
                cur,
                format_amount(total)
            ));
            for item in r.items_for(category) {
                lines.push(format!("  {:<20} {} {:>16}", item.label, cur, format_amount(item.amount)));
            }
        }

        lines.push(String::new());
        lines.push(format!("{:<22} {} {:>16}", "Subtotal", cur, format_amount(r.subtotal)));
        lines.push(format!(
            "{:<22} {} {:>16}",
            format!("GST @ {}%", r.gst_pct.normalize()),
            cur,
            format_amount(r.tax)
        ));
        lines.push(format!(
            "{:<22} {} {:>16}",
            format!("Contingency ({})", r.contingency_base),
            cur,
            format_amount(r.contingency)
        ));
        lines.push(format!("{:<22} {} {:>16}", "GRAND TOTAL", cur, format_amount(r.grand_total)));
        lines.push(format!("{:<22} {} {:>16}", "Per sqm", cur, format_amount(r.per_sqm)));
        lines.push(format!("{:<22} {} {:>16}", "Per sqft", cur, format_amount(r.per_sqft)));
        lines
    }
}
