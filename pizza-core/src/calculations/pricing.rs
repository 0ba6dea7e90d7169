//! Order total for a selection.
//!
//! | Component | Source                         | When missing             |
//! |-----------|--------------------------------|--------------------------|
//! | pizza     | pizza price, exact name match  | whole total is 0         |
//! | size      | size price, any-case match     | contributes 1            |
//! | toppings  | sum of chosen topping prices   | unknown topping adds 0   |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pizza_core::{Catalog, Selection, compute_total};
//!
//! let catalog = Catalog::builtin();
//! let mut selection = Selection::new(&catalog);
//! selection.select_pizza(&catalog, "Pizza 1").unwrap();
//! selection.select_size(&catalog, "Medium").unwrap();
//! selection.toggle_topping("Avocado").unwrap();
//!
//! assert_eq!(compute_total(&selection, &catalog), dec!(10.5));
//! ```

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{Catalog, Selection};

/// Contribution assumed for a size the catalog does not know.
const FALLBACK_SIZE_PRICE: Decimal = Decimal::ONE;

/// The pieces that make up an order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PriceBreakdown {
    pub pizza: Decimal,
    pub size: Decimal,
    pub toppings: Decimal,
    pub total: Decimal,
}

impl PriceBreakdown {
    /// Price `selection` against `catalog`. All-zero when no pizza applies.
    pub fn calculate(
        selection: &Selection,
        catalog: &Catalog,
    ) -> Self {
        let Some(pizza) = selection.pizza().and_then(|name| catalog.pizza(name)) else {
            return Self::default();
        };

        let size = match catalog.size(selection.size()) {
            Some(size) => size.price,
            None => {
                debug!(size = %selection.size(), "size not in catalog, using fallback price");
                FALLBACK_SIZE_PRICE
            }
        };

        let toppings = selection
            .toppings()
            .map(|name| topping_price(catalog, name))
            .try_fold(Decimal::ZERO, Decimal::checked_add);
        let total = toppings
            .and_then(|toppings| pizza.price.checked_add(toppings))
            .and_then(|subtotal| subtotal.checked_add(size));

        let (toppings, total) = match (toppings, total) {
            (Some(toppings), Some(total)) => (toppings, total),
            (toppings, _) => {
                warn!(pizza = %pizza.name, "order total overflows, capping at the largest price");
                (toppings.unwrap_or(Decimal::MAX), Decimal::MAX)
            }
        };

        Self {
            pizza: pizza.price,
            size,
            toppings,
            total,
        }
    }
}

fn topping_price(
    catalog: &Catalog,
    name: &str,
) -> Decimal {
    match catalog.topping(name) {
        Some(topping) => topping.price,
        None => {
            debug!(topping = %name, "topping not in catalog, pricing at 0");
            Decimal::ZERO
        }
    }
}

/// Total price of the selection: pizza + size + chosen toppings.
pub fn compute_total(
    selection: &Selection,
    catalog: &Catalog,
) -> Decimal {
    PriceBreakdown::calculate(selection, catalog).total
}
