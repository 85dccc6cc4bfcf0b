use crate::domain::model::CatalogEntry;
use crate::utils::error::{EstimateError, Result};
use rust_decimal_macros::dec;
use std::collections::HashSet;

/// Read-only list of materials a line can reference.
///
/// Never empty, ids are unique. Order is preserved; the first entry seeds new
/// material lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(EstimateError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(EstimateError::DuplicateCatalogId {
                    id: entry.id.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// The eight materials offered by the stock calculator.
    pub fn reference() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new("m1", "Aluminum", dec!(5.75)),
                CatalogEntry::new("m2", "Steel", dec!(3.25)),
                CatalogEntry::new("m3", "Plastic", dec!(1.5)),
                CatalogEntry::new("m4", "Wood", dec!(2.8)),
                CatalogEntry::new("m5", "Glass", dec!(4.5)),
                CatalogEntry::new("m6", "Fabric", dec!(6.25)),
                CatalogEntry::new("m7", "Copper", dec!(8.75)),
                CatalogEntry::new("m8", "Rubber", dec!(3.0)),
            ],
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn first(&self) -> &CatalogEntry {
        // non-empty by construction
        &self.entries[0]
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}
