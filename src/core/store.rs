use crate::core::catalog::Catalog;
use crate::core::pricing;
use crate::domain::model::{
    CatalogEntry, CostSummary, EditOutcome, LaborEdit, LaborLine, LineKind, MaterialEdit,
    MaterialLine,
};
use crate::utils::error::{EstimateError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const DEFAULT_LABOR_DESCRIPTION: &str = "Labor";
const DEFAULT_LABOR_HOURS: Decimal = dec!(1);
const DEFAULT_LABOR_RATE: Decimal = dec!(25);

/// Mutable estimate state. Every mutation goes through a method here so the
/// per-line totals never drift from their inputs; the summary is computed
/// from scratch on each read.
#[derive(Debug, Clone)]
pub struct EstimateStore {
    catalog: Catalog,
    product_name: String,
    materials: Vec<MaterialLine>,
    labor: Vec<LaborLine>,
    overhead_rate: Decimal,
    profit_margin: Decimal,
}

impl EstimateStore {
    /// Starting state of the calculator form: one "Assembly" line of two
    /// hours at 25/h, 15% overhead, 25% margin.
    pub fn new(catalog: Catalog) -> Self {
        let mut store = Self::empty(catalog);
        store.labor.push(labor_line("Assembly", dec!(2), dec!(25)));
        store.overhead_rate = dec!(15);
        store.profit_margin = dec!(25);
        store
    }

    /// No lines and zero rates.
    pub fn empty(catalog: Catalog) -> Self {
        Self {
            catalog,
            product_name: String::new(),
            materials: Vec::new(),
            labor: Vec::new(),
            overhead_rate: Decimal::ZERO,
            profit_margin: Decimal::ZERO,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn materials(&self) -> &[MaterialLine] {
        &self.materials
    }

    pub fn labor(&self) -> &[LaborLine] {
        &self.labor
    }

    pub fn overhead_rate(&self) -> Decimal {
        self.overhead_rate
    }

    pub fn profit_margin(&self) -> Decimal {
        self.profit_margin
    }

    pub fn summary(&self) -> CostSummary {
        pricing::aggregate(
            &self.materials,
            &self.labor,
            self.overhead_rate,
            self.profit_margin,
        )
    }

    pub fn set_product_name(&mut self, name: impl Into<String>) {
        self.product_name = name.into();
        tracing::debug!("Product name set to '{}'", self.product_name);
    }

    pub fn set_overhead_rate(&mut self, rate: Decimal) {
        self.overhead_rate = rate;
        tracing::debug!("Overhead rate set to {}%", rate);
    }

    pub fn set_profit_margin(&mut self, rate: Decimal) {
        self.profit_margin = rate;
        tracing::debug!("Profit margin set to {}%", rate);
    }

    /// Appends a line for the first catalog entry with quantity 1.
    /// Returns the index of the new line.
    pub fn add_material(&mut self) -> usize {
        let entry = self.catalog.first();
        let line = material_line(entry, 1);
        tracing::debug!("Adding material line '{}' ({})", line.name, line.catalog_id);
        self.materials.push(line);
        self.materials.len() - 1
    }

    pub fn update_material(&mut self, index: usize, edit: MaterialEdit) -> Result<EditOutcome> {
        let len = self.materials.len();
        let line = self
            .materials
            .get_mut(index)
            .ok_or_else(|| out_of_bounds(LineKind::Material, index, len))?;

        match edit {
            MaterialEdit::SetCatalogId(id) => match self.catalog.lookup(&id) {
                Some(entry) => {
                    line.catalog_id = entry.id.clone();
                    line.name = entry.name.clone();
                    line.unit_cost = entry.unit_cost;
                    line.total_cost = pricing::material_line_total(line.unit_cost, line.quantity);
                    tracing::debug!("Material line {} now uses '{}'", index, line.name);
                }
                None => {
                    // Unknown ids leave the line untouched.
                    tracing::warn!(
                        "Ignoring unknown catalog id '{}' for material line {}",
                        id,
                        index
                    );
                    return Ok(EditOutcome::Ignored);
                }
            },
            MaterialEdit::SetQuantity(quantity) => {
                line.quantity = quantity;
                line.total_cost = pricing::material_line_total(line.unit_cost, quantity);
                tracing::debug!("Material line {} quantity set to {}", index, quantity);
            }
        }

        Ok(EditOutcome::Applied)
    }

    pub fn remove_material(&mut self, index: usize) -> Result<MaterialLine> {
        if index >= self.materials.len() {
            return Err(out_of_bounds(LineKind::Material, index, self.materials.len()));
        }
        let removed = self.materials.remove(index);
        tracing::debug!("Removed material line {} ('{}')", index, removed.name);
        Ok(removed)
    }

    /// Appends a "Labor" line of one hour at 25/h. Returns its index.
    pub fn add_labor(&mut self) -> usize {
        self.labor.push(labor_line(
            DEFAULT_LABOR_DESCRIPTION,
            DEFAULT_LABOR_HOURS,
            DEFAULT_LABOR_RATE,
        ));
        tracing::debug!("Adding labor line {}", self.labor.len() - 1);
        self.labor.len() - 1
    }

    pub fn update_labor(&mut self, index: usize, edit: LaborEdit) -> Result<EditOutcome> {
        let len = self.labor.len();
        let line = self
            .labor
            .get_mut(index)
            .ok_or_else(|| out_of_bounds(LineKind::Labor, index, len))?;

        match edit {
            LaborEdit::SetDescription(description) => {
                line.description = description;
            }
            LaborEdit::SetHours(hours) => {
                line.hours = hours;
                line.total_cost = pricing::labor_line_total(line.hours, line.rate_per_hour);
            }
            LaborEdit::SetRate(rate) => {
                line.rate_per_hour = rate;
                line.total_cost = pricing::labor_line_total(line.hours, line.rate_per_hour);
            }
        }
        tracing::debug!("Labor line {} updated, total {}", index, line.total_cost);

        Ok(EditOutcome::Applied)
    }

    pub fn remove_labor(&mut self, index: usize) -> Result<LaborLine> {
        if index >= self.labor.len() {
            return Err(out_of_bounds(LineKind::Labor, index, self.labor.len()));
        }
        let removed = self.labor.remove(index);
        tracing::debug!("Removed labor line {} ('{}')", index, removed.description);
        Ok(removed)
    }
}

fn material_line(entry: &CatalogEntry, quantity: u32) -> MaterialLine {
    MaterialLine {
        catalog_id: entry.id.clone(),
        name: entry.name.clone(),
        quantity,
        unit_cost: entry.unit_cost,
        total_cost: pricing::material_line_total(entry.unit_cost, quantity),
    }
}

fn labor_line(description: &str, hours: Decimal, rate_per_hour: Decimal) -> LaborLine {
    LaborLine {
        description: description.to_string(),
        hours,
        rate_per_hour,
        total_cost: pricing::labor_line_total(hours, rate_per_hour),
    }
}

fn out_of_bounds(kind: LineKind, index: usize, len: usize) -> EstimateError {
    tracing::warn!("Rejected {} line index {} (len {})", kind, index, len);
    EstimateError::IndexOutOfBounds { kind, index, len }
}
