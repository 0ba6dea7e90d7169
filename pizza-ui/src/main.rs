use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use pizza_core::{Catalog, OrderConfigurator};
use pizza_data::CatalogLoader;
use pizza_ui::{AppConfig, config::LogConfig, logging, run_session};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Pizza order screen.
///
/// Pick a pizza, a size and toppings, and watch the price update.
#[derive(Debug, Parser)]
struct Cli {
    /// Directory holding pizzas.csv, sizes.csv and toppings.csv.
    /// The built-in menu is used when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Log filter (e.g. `debug`, `pizza_core=trace`). `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Mirror log records to stderr.
    #[arg(long, default_value_t = false)]
    log_console: bool,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            catalog_dir: cli.catalog,
            logging: LogConfig {
                level: cli.log_level,
                console: cli.log_console,
                file: cli.log_file,
            },
        }
    }
}

fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    match &config.catalog_dir {
        Some(dir) => CatalogLoader::load_dir(dir)
            .with_context(|| format!("Failed to load catalog from: {}", dir.display())),
        None => {
            debug!("using built-in catalog");
            Ok(Catalog::builtin())
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = AppConfig::from(Cli::parse());

    logging::init_logging(&config.logging)?;
    debug!("startup configuration:\n{config}");

    let catalog = load_catalog(&config)?;
    info!(
        pizzas = catalog.pizzas().len(),
        sizes = catalog.sizes().len(),
        toppings = catalog.toppings().len(),
        "order screen ready"
    );

    let mut configurator = OrderConfigurator::new(catalog);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut configurator, stdin.lock(), &mut stdout)?;

    logging::disable_file_logging();
    Ok(())
}
