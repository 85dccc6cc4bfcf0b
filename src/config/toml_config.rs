use crate::core::catalog::Catalog;
use crate::core::store::EstimateStore;
use crate::domain::model::{CatalogEntry, LaborEdit, MaterialEdit};
use crate::utils::error::{EstimateError, Result};
use crate::utils::validation::{self, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Estimate inputs written as a TOML sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateSheet {
    pub product: ProductConfig,
    pub catalog: Option<Vec<CatalogEntryConfig>>,
    #[serde(default)]
    pub materials: Vec<MaterialConfig>,
    #[serde(default)]
    pub labor: Vec<LaborConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    #[serde(default)]
    pub name: String,
    pub overhead_rate: Option<Decimal>,
    pub profit_margin: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntryConfig {
    pub id: String,
    pub name: String,
    pub unit_cost: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialConfig {
    pub id: String,
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaborConfig {
    pub description: Option<String>,
    pub hours: Option<Decimal>,
    pub rate_per_hour: Option<Decimal>,
}

impl EstimateSheet {
    /// 從 TOML 檔案載入估價單
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EstimateError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析估價單
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EstimateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// The sheet's own catalog, or the reference one when it has none.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(entries) => Catalog::new(
                entries
                    .iter()
                    .map(|e| CatalogEntry::new(e.id.clone(), e.name.clone(), e.unit_cost))
                    .collect(),
            ),
            None => Ok(Catalog::reference()),
        }
    }

    pub fn validate_sheet(&self) -> Result<()> {
        let catalog = self.catalog()?;

        if let Some(rate) = self.product.overhead_rate {
            validation::validate_magnitude("product.overhead_rate", rate)?;
        }
        if let Some(rate) = self.product.profit_margin {
            validation::validate_magnitude("product.profit_margin", rate)?;
        }

        for entry in catalog.entries() {
            validation::validate_non_empty_string("catalog.id", &entry.id)?;
            validation::validate_magnitude(
                &format!("catalog.{}.unit_cost", entry.id),
                entry.unit_cost,
            )?;
        }

        for (i, material) in self.materials.iter().enumerate() {
            if catalog.lookup(&material.id).is_none() {
                return Err(EstimateError::InvalidConfigValueError {
                    field: format!("materials[{}].id", i),
                    value: material.id.clone(),
                    reason: "Unknown material id".to_string(),
                });
            }
            if let Some(quantity) = material.quantity {
                validation::validate_min_quantity(
                    &format!("materials[{}].quantity", i),
                    quantity,
                    1,
                )?;
            }
        }

        for (i, labor) in self.labor.iter().enumerate() {
            if let Some(hours) = labor.hours {
                validation::validate_magnitude(&format!("labor[{}].hours", i), hours)?;
            }
            if let Some(rate) = labor.rate_per_hour {
                validation::validate_magnitude(&format!("labor[{}].rate_per_hour", i), rate)?;
            }
        }

        Ok(())
    }

    /// Replays the sheet through the store operations: every line is added
    /// with its defaults and then edited field by field.
    pub fn build_store(&self) -> Result<EstimateStore> {
        let mut store = EstimateStore::empty(self.catalog()?);

        store.set_product_name(self.product.name.clone());
        if let Some(rate) = self.product.overhead_rate {
            store.set_overhead_rate(rate);
        }
        if let Some(rate) = self.product.profit_margin {
            store.set_profit_margin(rate);
        }

        for material in &self.materials {
            let index = store.add_material();
            store.update_material(index, MaterialEdit::SetCatalogId(material.id.clone()))?;
            if let Some(quantity) = material.quantity {
                store.update_material(index, MaterialEdit::SetQuantity(quantity))?;
            }
        }

        for labor in &self.labor {
            let index = store.add_labor();
            if let Some(description) = &labor.description {
                store.update_labor(index, LaborEdit::SetDescription(description.clone()))?;
            }
            if let Some(hours) = labor.hours {
                store.update_labor(index, LaborEdit::SetHours(hours))?;
            }
            if let Some(rate) = labor.rate_per_hour {
                store.update_labor(index, LaborEdit::SetRate(rate))?;
            }
        }

        tracing::debug!(
            "Built estimate with {} material and {} labor lines",
            store.materials().len(),
            store.labor().len()
        );
        Ok(store)
    }
}

impl Validate for EstimateSheet {
    fn validate(&self) -> Result<()> {
        self.validate_sheet()
    }
}
