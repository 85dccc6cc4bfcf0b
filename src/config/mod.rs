pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use rust_decimal::Decimal;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "product-estimate")]
#[command(about = "Estimate product cost and price from materials and labor")]
pub struct CliConfig {
    /// TOML estimate sheet; the default form state is used when omitted
    #[arg(long)]
    pub sheet: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Override the product name from the sheet
    #[arg(long)]
    pub product_name: Option<String>,

    /// Override the overhead rate (%)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_overhead_rate)]
    pub overhead_rate: Option<Decimal>,

    /// Override the profit margin (%)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_profit_margin)]
    pub profit_margin: Option<Decimal>,

    /// Print the summary without writing the export file
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
fn parse_overhead_rate(raw: &str) -> Result<Decimal> {
    validation::parse_decimal_input("overhead_rate", raw)
}

#[cfg(feature = "cli")]
fn parse_profit_margin(raw: &str) -> Result<Decimal> {
    validation::parse_decimal_input("profit_margin", raw)
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        if let Some(sheet) = &self.sheet {
            validation::validate_path("sheet", sheet)?;
        }
        Ok(())
    }
}
