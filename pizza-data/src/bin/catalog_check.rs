use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pizza_data::CatalogLoader;
use tracing_subscriber::EnvFilter;

/// Validate a catalog directory before shipping it to the order screen.
///
/// The directory must contain `pizzas.csv`, `sizes.csv` and `toppings.csv`.
/// Structural problems (duplicate names, empty topping lists, bad prices)
/// fail the check; permitted toppings without a price are reported but
/// allowed, since they are priced at 0.
#[derive(Parser, Debug)]
#[command(name = "pizza-catalog-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the catalog CSV files
    #[arg(short, long)]
    dir: PathBuf,

    /// Exit with an error when any permitted topping is unpriced
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    println!("Checking catalog in: {}", args.dir.display());

    let catalog = CatalogLoader::load_dir(&args.dir)
        .with_context(|| format!("Failed to load catalog from: {}", args.dir.display()))?;

    println!(
        "{} pizzas, {} sizes, {} toppings",
        catalog.pizzas().len(),
        catalog.sizes().len(),
        catalog.toppings().len()
    );
    if let Some(size) = catalog.default_size() {
        println!("Default size: {}", size.name);
    }

    let unpriced = catalog.unpriced_toppings();
    for missing in &unpriced {
        println!(
            "Unpriced topping: '{}' on '{}'",
            missing.topping, missing.pizza
        );
    }

    if args.strict && !unpriced.is_empty() {
        anyhow::bail!("{} permitted topping(s) have no price", unpriced.len());
    }

    println!("Catalog OK.");

    Ok(())
}
