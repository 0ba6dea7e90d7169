//! CSV loader for order-screen catalogs.
//!
//! A catalog directory holds three CSV files. Headers are matched by name, so
//! column order does not matter; whitespace around values is trimmed.
//!
//! | File           | Columns                         | Notes                               |
//! |----------------|---------------------------------|-------------------------------------|
//! | `pizzas.csv`   | `name,price,image,toppings`     | `toppings` is `;`-separated         |
//! | `sizes.csv`    | `name,price`                    | first row is the default size       |
//! | `toppings.csv` | `name,price`                    |                                     |
//!
//! ### Example `pizzas.csv`
//!
//! ```csv
//! name,price,image,toppings
//! Pizza 1,8,assets/images/img1.jpg,Avocado;Broccoli;Onions
//! ```
use std::io::Read;
use std::path::{Path, PathBuf};

use pizza_core::{Catalog, CatalogError, PizzaOption, SizeOption, ToppingOption};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

pub const PIZZAS_FILE: &str = "pizzas.csv";
pub const SIZES_FILE: &str = "sizes.csv";
pub const TOPPINGS_FILE: &str = "toppings.csv";

/// Separator between topping names inside the `toppings` cell.
const TOPPING_SEPARATOR: char = ';';

/// Errors that can occur when loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

impl From<csv::Error> for CatalogLoaderError {
    fn from(err: csv::Error) -> Self {
        CatalogLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of `pizzas.csv`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PizzaRecord {
    pub name: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
    pub toppings: String,
}

impl PizzaRecord {
    /// Split the `toppings` cell, dropping empty entries.
    pub fn topping_names(&self) -> Vec<String> {
        self.toppings
            .split(TOPPING_SEPARATOR)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn into_option(self) -> PizzaOption {
        PizzaOption {
            toppings: self.topping_names(),
            name: self.name,
            price: self.price,
            image: self.image,
        }
    }
}

/// A row of `sizes.csv` or `toppings.csv`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PriceRecord {
    pub name: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub price: Decimal,
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.trim()
        .parse::<Decimal>()
        .map_err(serde::de::Error::custom)
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input)
}

fn open(path: &Path) -> Result<std::fs::File, CatalogLoaderError> {
    std::fs::File::open(path).map_err(|source| CatalogLoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loader for catalog data from CSV files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse `pizzas.csv` rows in file order.
    pub fn parse_pizzas<R: Read>(input: R) -> Result<Vec<PizzaRecord>, CatalogLoaderError> {
        let mut records = Vec::new();
        for result in reader(input).deserialize() {
            let record: PizzaRecord = result?;
            records.push(record);
        }
        Ok(records)
    }

    /// Parse a `name,price` table (sizes or toppings) in file order.
    pub fn parse_prices<R: Read>(input: R) -> Result<Vec<PriceRecord>, CatalogLoaderError> {
        let mut records = Vec::new();
        for result in reader(input).deserialize() {
            let record: PriceRecord = result?;
            records.push(record);
        }
        Ok(records)
    }

    /// Build a validated catalog from three CSV sources.
    pub fn from_readers<P: Read, S: Read, T: Read>(
        pizzas: P,
        sizes: S,
        toppings: T,
    ) -> Result<Catalog, CatalogLoaderError> {
        let pizzas: Vec<PizzaOption> = Self::parse_pizzas(pizzas)?
            .into_iter()
            .map(PizzaRecord::into_option)
            .collect();
        let sizes: Vec<SizeOption> = Self::parse_prices(sizes)?
            .into_iter()
            .map(|r| SizeOption::new(r.name, r.price))
            .collect();
        let toppings: Vec<ToppingOption> = Self::parse_prices(toppings)?
            .into_iter()
            .map(|r| ToppingOption::new(r.name, r.price))
            .collect();

        debug!(
            pizzas = pizzas.len(),
            sizes = sizes.len(),
            toppings = toppings.len(),
            "parsed catalog tables"
        );

        Ok(Catalog::new(pizzas, sizes, toppings)?)
    }

    /// Load `pizzas.csv`, `sizes.csv` and `toppings.csv` from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Catalog, CatalogLoaderError> {
        let catalog = Self::from_readers(
            open(&dir.join(PIZZAS_FILE))?,
            open(&dir.join(SIZES_FILE))?,
            open(&dir.join(TOPPINGS_FILE))?,
        )?;
        info!(dir = %dir.display(), "loaded catalog");
        Ok(catalog)
    }
}
