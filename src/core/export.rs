use crate::core::store::EstimateStore;
use crate::domain::model::{LaborLine, MaterialLine};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const DEFAULT_FILE_STEM: &str = "product";
const EXPORT_EXTENSION: &str = "json";

/// Snapshot of an estimate: inputs plus every derived total. Numbers are
/// written as plain JSON numbers at full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateDocument {
    pub product_name: String,
    pub materials: Vec<MaterialEntry>,
    pub labor: Vec<LaborEntry>,
    #[serde(with = "rust_decimal::serde::float")]
    pub overhead_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit_margin: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub material_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub labor_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub overhead_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialEntry {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost_per_unit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborEntry {
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub hours: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate_per_hour: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_cost: Decimal,
}

impl From<&MaterialLine> for MaterialEntry {
    fn from(line: &MaterialLine) -> Self {
        Self {
            id: line.catalog_id().to_string(),
            name: line.name().to_string(),
            quantity: line.quantity(),
            cost_per_unit: line.unit_cost(),
            total_cost: line.total_cost(),
        }
    }
}

impl From<&LaborLine> for LaborEntry {
    fn from(line: &LaborLine) -> Self {
        Self {
            description: line.description().to_string(),
            hours: line.hours(),
            rate_per_hour: line.rate_per_hour(),
            total_cost: line.total_cost(),
        }
    }
}

impl EstimateDocument {
    pub fn from_store(store: &EstimateStore) -> Self {
        let summary = store.summary();
        Self {
            product_name: store.product_name().to_string(),
            materials: store.materials().iter().map(MaterialEntry::from).collect(),
            labor: store.labor().iter().map(LaborEntry::from).collect(),
            overhead_rate: store.overhead_rate(),
            profit_margin: store.profit_margin(),
            material_cost: summary.material_cost,
            labor_cost: summary.labor_cost,
            subtotal: summary.subtotal,
            overhead_cost: summary.overhead_cost,
            total_cost: summary.total_cost,
            profit: summary.profit,
            final_price: summary.final_price,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `<product name>-estimate.json`, with "product" standing in for a blank name.
pub fn suggested_filename(product_name: &str) -> String {
    let stem = if product_name.is_empty() {
        DEFAULT_FILE_STEM
    } else {
        product_name
    };
    format!("{}-estimate.{}", stem, EXPORT_EXTENSION)
}

/// Hands estimate snapshots to a save mechanism.
pub struct Exporter<S: Storage> {
    storage: S,
}

impl<S: Storage> Exporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Serializes the current state and saves it under the suggested file
    /// name. Returns the location reported by the storage.
    pub async fn export(&self, store: &EstimateStore) -> Result<String> {
        let document = EstimateDocument::from_store(store);
        let payload = document.to_json_pretty()?;
        let filename = suggested_filename(store.product_name());

        tracing::debug!(
            "Exporting estimate '{}' ({} bytes)",
            filename,
            payload.len()
        );
        let location = self.storage.write_file(&filename, payload.as_bytes()).await?;
        tracing::info!("Estimate exported to {}", location);

        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;

    #[test]
    fn test_suggested_filename() {
        assert_eq!(suggested_filename(""), "product-estimate.json");
        assert_eq!(suggested_filename("Desk Lamp"), "Desk Lamp-estimate.json");
    }

    #[test]
    fn test_document_uses_camel_case_keys() {
        let mut store = EstimateStore::new(Catalog::reference());
        store.add_material();

        let json: serde_json::Value =
            serde_json::from_str(&EstimateDocument::from_store(&store).to_json_pretty().unwrap())
                .unwrap();

        for key in [
            "productName",
            "materials",
            "labor",
            "overheadRate",
            "profitMargin",
            "materialCost",
            "laborCost",
            "subtotal",
            "overheadCost",
            "totalCost",
            "profit",
            "finalPrice",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(json["materials"][0]["costPerUnit"].as_f64(), Some(5.75));
        assert_eq!(json["labor"][0]["ratePerHour"].as_f64(), Some(25.0));
    }
}
