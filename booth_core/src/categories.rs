//! The closed set of cost categories and per-category containers.
//!
//! Categories are fixed at compile time, so per-category data (tax flags,
//! totals) lives in plain structs with one field per category rather than
//! in maps keyed by strings.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::EstimateResult;
use crate::money::sum_checked;

/// One of the seven cost buckets of an exhibit budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Space,
    Construction,
    Utilities,
    Logistics,
    Travel,
    StaffOps,
    Marketing,
}

impl Category {
    /// All categories in reporting order
    pub const ALL: [Category; 7] = [
        Category::Space,
        Category::Construction,
        Category::Utilities,
        Category::Logistics,
        Category::Travel,
        Category::StaffOps,
        Category::Marketing,
    ];

    /// Snake-case key, matching the serialized form
    pub fn key(&self) -> &'static str {
        match self {
            Category::Space => "space",
            Category::Construction => "construction",
            Category::Utilities => "utilities",
            Category::Logistics => "logistics",
            Category::Travel => "travel",
            Category::StaffOps => "staff_ops",
            Category::Marketing => "marketing",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Space => "Space Rental",
            Category::Construction => "Booth Construction",
            Category::Utilities => "Utilities",
            Category::Logistics => "Logistics",
            Category::Travel => "Travel",
            Category::StaffOps => "Staff & Operations",
            Category::Marketing => "Marketing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Which categories GST applies to.
///
/// Defaults to all categories taxed except travel, which is commonly
/// exempt or taxed under a separate regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxFlags {
    pub space: bool,
    pub construction: bool,
    pub utilities: bool,
    pub logistics: bool,
    pub travel: bool,
    pub staff_ops: bool,
    pub marketing: bool,
}

impl Default for TaxFlags {
    fn default() -> Self {
        TaxFlags {
            space: true,
            construction: true,
            utilities: true,
            logistics: true,
            travel: false,
            staff_ops: true,
            marketing: true,
        }
    }
}

impl TaxFlags {
    /// No category taxed
    pub fn none() -> Self {
        TaxFlags::from_fn(|_| false)
    }

    /// Every category taxed
    pub fn all() -> Self {
        TaxFlags::from_fn(|_| true)
    }

    /// Build flags by evaluating `f` for each category
    pub fn from_fn(mut f: impl FnMut(Category) -> bool) -> Self {
        TaxFlags {
            space: f(Category::Space),
            construction: f(Category::Construction),
            utilities: f(Category::Utilities),
            logistics: f(Category::Logistics),
            travel: f(Category::Travel),
            staff_ops: f(Category::StaffOps),
            marketing: f(Category::Marketing),
        }
    }

    pub fn is_taxed(&self, category: Category) -> bool {
        match category {
            Category::Space => self.space,
            Category::Construction => self.construction,
            Category::Utilities => self.utilities,
            Category::Logistics => self.logistics,
            Category::Travel => self.travel,
            Category::StaffOps => self.staff_ops,
            Category::Marketing => self.marketing,
        }
    }

    pub fn set(&mut self, category: Category, taxed: bool) {
        let slot = match category {
            Category::Space => &mut self.space,
            Category::Construction => &mut self.construction,
            Category::Utilities => &mut self.utilities,
            Category::Logistics => &mut self.logistics,
            Category::Travel => &mut self.travel,
            Category::StaffOps => &mut self.staff_ops,
            Category::Marketing => &mut self.marketing,
        };
        *slot = taxed;
    }

    /// Builder-style variant of [`TaxFlags::set`]
    pub fn with(mut self, category: Category, taxed: bool) -> Self {
        self.set(category, taxed);
        self
    }

    /// Categories whose flag is set, in reporting order
    pub fn taxed_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(move |c| self.is_taxed(*c))
    }
}

/// One total per category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub space: Decimal,
    pub construction: Decimal,
    pub utilities: Decimal,
    pub logistics: Decimal,
    pub travel: Decimal,
    pub staff_ops: Decimal,
    pub marketing: Decimal,
}

impl CategoryTotals {
    pub fn get(&self, category: Category) -> Decimal {
        match category {
            Category::Space => self.space,
            Category::Construction => self.construction,
            Category::Utilities => self.utilities,
            Category::Logistics => self.logistics,
            Category::Travel => self.travel,
            Category::StaffOps => self.staff_ops,
            Category::Marketing => self.marketing,
        }
    }

    pub fn set(&mut self, category: Category, amount: Decimal) {
        let slot = match category {
            Category::Space => &mut self.space,
            Category::Construction => &mut self.construction,
            Category::Utilities => &mut self.utilities,
            Category::Logistics => &mut self.logistics,
            Category::Travel => &mut self.travel,
            Category::StaffOps => &mut self.staff_ops,
            Category::Marketing => &mut self.marketing,
        };
        *slot = amount;
    }

    /// Sum of all seven totals; `AmountOverflow` on `subtotal` past the
    /// decimal range
    pub fn sum(&self) -> EstimateResult<Decimal> {
        sum_checked("subtotal", Category::ALL.iter().map(|c| self.get(*c)))
    }

    /// Sum of the totals whose tax flag is set
    pub fn taxable_sum(&self, flags: &TaxFlags) -> EstimateResult<Decimal> {
        sum_checked("taxable_amount", flags.taxed_categories().map(|c| self.get(c)))
    }
}
