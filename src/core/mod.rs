pub mod catalog;
pub mod display;
pub mod export;
pub mod pricing;
pub mod store;

pub use crate::domain::model::{
    CatalogEntry, CostSummary, EditOutcome, LaborEdit, LaborLine, LineKind, MaterialEdit,
    MaterialLine,
};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
