//! # Unit Types
//!
//! Type-safe wrappers for floor area. Booth space is quoted in square meters
//! in most markets and in square feet in others; the engine always carries
//! both so per-area metrics never have to re-derive a conversion.
//!
//! Both directions use the single constant [`SQFT_PER_SQM`] (multiply one
//! way, divide the other), so converting there and back reproduces the
//! original value.
//!
//! ## Example
//!
//! ```rust
//! use booth_core::units::{Area, AreaUnit, SqFt, SqM};
//! use rust_decimal_macros::dec;
//!
//! let booth = SqM(dec!(18));
//! let in_feet: SqFt = booth.into();
//! assert_eq!(in_feet.0, dec!(193.7502));
//!
//! let normalized = Area::new(dec!(18), AreaUnit::SquareMeters).normalize().unwrap();
//! assert_eq!(normalized.sqm, booth);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

/// Square feet in one square meter
pub const SQFT_PER_SQM: Decimal = dec!(10.7639);

// ============================================================================
// Area Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub Decimal);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub Decimal);

impl From<SqM> for SqFt {
    fn from(sqm: SqM) -> Self {
        SqFt(sqm.0 * SQFT_PER_SQM)
    }
}

impl From<SqFt> for SqM {
    fn from(sqft: SqFt) -> Self {
        SqM(sqft.0 / SQFT_PER_SQM)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<Decimal> for $type {
            type Output = Self;
            fn mul(self, rhs: Decimal) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<Decimal> for $type {
            type Output = Self;
            fn div(self, rhs: Decimal) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw decimal value
            pub fn value(self) -> Decimal {
                self.0
            }

            /// Create from raw decimal value
            pub fn new(value: Decimal) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(SqM);
impl_arithmetic!(SqFt);

// ============================================================================
// Tagged Area Input
// ============================================================================

/// Unit tag accompanying a caller-supplied area.
///
/// Accepts the short (`sqm`, `sqft`), long (`square_meters`,
/// `square-feet`) and superscript-free (`m2`, `ft2`) spellings, in any case.
/// JSON goes through the same parser as text, so both accept the same tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum AreaUnit {
    #[default]
    #[serde(rename = "sqm")]
    SquareMeters,
    #[serde(rename = "sqft")]
    SquareFeet,
}

impl AreaUnit {
    /// Short tag used in output (`sqm` / `sqft`)
    pub fn code(&self) -> &'static str {
        match self {
            AreaUnit::SquareMeters => "sqm",
            AreaUnit::SquareFeet => "sqft",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for AreaUnit {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqm" | "m2" | "square_meters" | "square-meters" => Ok(AreaUnit::SquareMeters),
            "sqft" | "ft2" | "square_feet" | "square-feet" => Ok(AreaUnit::SquareFeet),
            other => Err(EstimateError::invalid_area(
                "-",
                other,
                "Unit must be one of sqm or sqft",
            )),
        }
    }
}

impl TryFrom<String> for AreaUnit {
    type Error = EstimateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// An area value as the caller supplied it.
///
/// ```json
/// { "value": 18, "unit": "sqm" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub value: Decimal,
    #[serde(default)]
    pub unit: AreaUnit,
}

impl Area {
    pub fn new(value: Decimal, unit: AreaUnit) -> Self {
        Area { value, unit }
    }

    pub fn sqm(value: Decimal) -> Self {
        Area::new(value, AreaUnit::SquareMeters)
    }

    pub fn sqft(value: Decimal) -> Self {
        Area::new(value, AreaUnit::SquareFeet)
    }

    /// Express this area in both square meters and square feet.
    ///
    /// Fails with `InvalidArea` when the value is zero or negative, since
    /// every per-area metric divides by it, and when the converted value
    /// falls outside the decimal range (too large, or so small it rounds
    /// to zero).
    pub fn normalize(&self) -> EstimateResult<NormalizedArea> {
        if self.value <= Decimal::ZERO {
            return Err(self.invalid("Area must be positive"));
        }

        let converted = match self.unit {
            AreaUnit::SquareMeters => self.value.checked_mul(SQFT_PER_SQM),
            AreaUnit::SquareFeet => self.value.checked_div(SQFT_PER_SQM),
        };
        let converted = match converted {
            Some(v) if !v.is_zero() => v,
            Some(_) => return Err(self.invalid("Area is too small to convert")),
            None => return Err(self.invalid("Area is too large to convert")),
        };

        let (sqm, sqft) = match self.unit {
            AreaUnit::SquareMeters => (SqM(self.value), SqFt(converted)),
            AreaUnit::SquareFeet => (SqM(converted), SqFt(self.value)),
        };

        Ok(NormalizedArea { sqm, sqft })
    }

    fn invalid(&self, reason: &str) -> EstimateError {
        EstimateError::invalid_area(self.value.to_string(), self.unit.code(), reason)
    }
}

/// Area expressed in both canonical units. Only obtainable through
/// [`Area::normalize`], so both values are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedArea {
    pub sqm: SqM,
    pub sqft: SqFt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqm_to_sqft() {
        let sqft: SqFt = SqM(dec!(10)).into();
        assert_eq!(sqft.0, dec!(107.639));
    }

    #[test]
    fn test_sqft_to_sqm() {
        let sqm: SqM = SqFt(dec!(107.639)).into();
        assert_eq!(sqm.0, dec!(10));
    }

    #[test]
    fn test_arithmetic() {
        let a = SqM(dec!(10));
        let b = SqM(dec!(4));
        assert_eq!((a + b).0, dec!(14));
        assert_eq!((a - b).0, dec!(6));
        assert_eq!((a * dec!(2)).0, dec!(20));
        assert_eq!((a / dec!(2)).0, dec!(5));
    }

    #[test]
    fn test_normalize_square_feet() {
        let area = Area::sqft(dec!(200)).normalize().unwrap();
        assert_eq!(area.sqft.0, dec!(200));
        let back: SqFt = area.sqm.into();
        assert!((back.0 - dec!(200)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_zero_area_rejected() {
        let err = Area::sqm(Decimal::ZERO).normalize().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_AREA");
    }

    #[test]
    fn test_negative_area_rejected() {
        let err = Area::sqft(dec!(-12.5)).normalize().unwrap_err();
        assert!(matches!(err, EstimateError::InvalidArea { .. }));
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("SQM".parse::<AreaUnit>().unwrap(), AreaUnit::SquareMeters);
        assert_eq!("square-feet".parse::<AreaUnit>().unwrap(), AreaUnit::SquareFeet);
        assert_eq!("ft2".parse::<AreaUnit>().unwrap(), AreaUnit::SquareFeet);

        let err = "acres".parse::<AreaUnit>().unwrap_err();
        assert!(matches!(err, EstimateError::InvalidArea { ref unit, .. } if unit == "acres"));
    }

    #[test]
    fn test_serialization() {
        let area = Area::sqm(dec!(18));
        let json = serde_json::to_string(&area).unwrap();
        assert_eq!(json, r#"{"value":"18","unit":"sqm"}"#);

        let parsed: Area = serde_json::from_str(r#"{"value": 200, "unit": "square_feet"}"#).unwrap();
        assert_eq!(parsed, Area::sqft(dec!(200)));
    }

    #[test]
    fn test_normalize_matches_from_conversions() {
        let area = Area::sqm(dec!(18)).normalize().unwrap();
        assert_eq!(area.sqft, SqFt::from(SqM(dec!(18))));
        let area = Area::sqft(dec!(107.639)).normalize().unwrap();
        assert_eq!(area.sqm, SqM::from(SqFt(dec!(107.639))));
    }

    #[test]
    fn test_huge_area_rejected() {
        let err = Area::sqm(Decimal::MAX).normalize().unwrap_err();
        assert!(matches!(err, EstimateError::InvalidArea { ref reason, .. } if reason.contains("too large")));
    }

    #[test]
    fn test_vanishing_area_rejected() {
        // 1e-28 sqft is below the smallest representable sqm
        let err = Area::sqft(Decimal::new(1, 28)).normalize().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_AREA");
    }

    #[test]
    fn test_json_accepts_parser_spellings() {
        for tag in ["sqm", "SQM", "m2", "square_meters", "square-meters"] {
            let json = format!(r#"{{"value": 18, "unit": "{tag}"}}"#);
            let parsed: Area = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.unit, AreaUnit::SquareMeters, "{tag}");
        }
        let parsed: Area = serde_json::from_str(r#"{"value": 18, "unit": "square-feet"}"#).unwrap();
        assert_eq!(parsed.unit, AreaUnit::SquareFeet);
    }

    #[test]
    fn test_unknown_unit_fails_deserialization() {
        let err = serde_json::from_str::<Area>(r#"{"value": 20, "unit": "hectare"}"#).unwrap_err();
        assert!(err.to_string().contains("hectare"));
    }
}
