pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::EstimateSheet};
pub use core::{
    catalog::Catalog,
    export::{suggested_filename, EstimateDocument, Exporter},
    store::EstimateStore,
};
pub use domain::model::{
    CatalogEntry, CostSummary, EditOutcome, LaborEdit, LaborLine, LineKind, MaterialEdit,
    MaterialLine,
};
pub use utils::error::{EstimateError, Result};
