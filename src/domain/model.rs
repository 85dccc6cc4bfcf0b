use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One purchasable material: immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub unit_cost: Decimal,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_cost: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_cost,
        }
    }
}

/// A material row. `total_cost` is always `unit_cost * quantity`; the only
/// way to change the inputs is through `EstimateStore::update_material`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialLine {
    pub(crate) catalog_id: String,
    pub(crate) name: String,
    pub(crate) quantity: u32,
    pub(crate) unit_cost: Decimal,
    pub(crate) total_cost: Decimal,
}

impl MaterialLine {
    pub fn catalog_id(&self) -> &str {
        &self.catalog_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_cost(&self) -> Decimal {
        self.unit_cost
    }

    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }
}

/// A labor row. `total_cost` is always `hours * rate_per_hour`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaborLine {
    pub(crate) description: String,
    pub(crate) hours: Decimal,
    pub(crate) rate_per_hour: Decimal,
    pub(crate) total_cost: Decimal,
}

impl LaborLine {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn hours(&self) -> Decimal {
        self.hours
    }

    pub fn rate_per_hour(&self) -> Decimal {
        self.rate_per_hour
    }

    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }
}

/// Edits accepted by `EstimateStore::update_material`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialEdit {
    SetCatalogId(String),
    SetQuantity(u32),
}

/// Edits accepted by `EstimateStore::update_labor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaborEdit {
    SetDescription(String),
    SetHours(Decimal),
    SetRate(Decimal),
}

/// Result of an edit that passed the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// The catalog id was not found; the line was left as it was.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Material,
    Labor,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Material => f.write_str("material"),
            LineKind::Labor => f.write_str("labor"),
        }
    }
}

/// Derived totals for the current lines and rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostSummary {
    pub material_cost: Decimal,
    pub labor_cost: Decimal,
    pub subtotal: Decimal,
    pub overhead_cost: Decimal,
    pub total_cost: Decimal,
    pub profit: Decimal,
    pub final_price: Decimal,
}
