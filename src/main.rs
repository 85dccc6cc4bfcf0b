use clap::Parser;
use product_estimate::core::display;
use product_estimate::utils::error::ErrorCategory;
use product_estimate::utils::logger::{self, LogFormat};
use product_estimate::utils::validation::Validate;
use product_estimate::{
    Catalog, CliConfig, EstimateError, EstimateSheet, EstimateStore, Exporter, LocalStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    let log_format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, log_format);

    tracing::info!("Starting product-estimate");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let mut store = match load_store(&config) {
        Ok(store) => store,
        Err(e) => exit_with(&e),
    };

    // 套用命令列覆蓋設定
    if let Some(name) = &config.product_name {
        store.set_product_name(name.clone());
    }
    if let Some(rate) = config.overhead_rate {
        store.set_overhead_rate(rate);
    }
    if let Some(rate) = config.profit_margin {
        store.set_profit_margin(rate);
    }

    let title = if store.product_name().is_empty() {
        "Unnamed product"
    } else {
        store.product_name()
    };
    println!("{}", title);
    println!(
        "{} material line(s), {} labor line(s)",
        store.materials().len(),
        store.labor().len()
    );
    println!();
    print!(
        "{}",
        display::render_summary(
            &store.summary(),
            store.overhead_rate(),
            store.profit_margin()
        )
    );

    if config.dry_run {
        tracing::info!("Dry run, skipping export");
        return Ok(());
    }

    let exporter = Exporter::new(LocalStorage::new(config.output_path.clone()));
    match exporter.export(&store).await {
        Ok(location) => {
            println!();
            println!("Estimate saved to: {}", location);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn load_store(config: &CliConfig) -> product_estimate::Result<EstimateStore> {
    match &config.sheet {
        Some(path) => {
            tracing::info!("Loading estimate sheet from: {}", path);
            let sheet = EstimateSheet::from_file(path)?;
            sheet.validate()?;
            sheet.build_store()
        }
        None => Ok(EstimateStore::new(Catalog::reference())),
    }
}

fn exit_with(e: &EstimateError) -> ! {
    tracing::error!("{} (Category: {:?})", e, e.category());
    eprintln!("Error: {}", e.user_friendly_message());
    eprintln!("Hint: {}", e.recovery_suggestion());

    let exit_code = match e.category() {
        ErrorCategory::Contract | ErrorCategory::Input => 1,
        ErrorCategory::Output => 2,
    };
    std::process::exit(exit_code);
}
