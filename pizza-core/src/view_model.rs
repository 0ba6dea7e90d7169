//! Flattened, render-ready snapshot of the order screen.
//!
//! The presentation layer reads an [`OrderView`] and nothing else: every
//! flag and price it needs to draw the screen is precomputed here.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::common::format_price;
use crate::{Catalog, Selection, compute_total};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PizzaView {
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeView {
    pub name: String,
    pub price: Decimal,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToppingView {
    pub name: String,
    /// Zero when the topping catalog does not price this topping.
    pub price: Decimal,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub pizzas: Vec<PizzaView>,
    pub sizes: Vec<SizeView>,
    /// True once a pizza has been chosen.
    pub show_toppings: bool,
    /// Available toppings in the pizza's permitted order.
    pub toppings: Vec<ToppingView>,
    /// Total with exactly two decimals, no currency symbol.
    pub total: String,
}

impl OrderView {
    pub fn build(
        selection: &Selection,
        catalog: &Catalog,
    ) -> Self {
        let pizzas = catalog
            .pizzas()
            .iter()
            .map(|p| PizzaView {
                name: p.name.clone(),
                price: p.price,
                image: p.image.clone(),
                selected: selection.pizza() == Some(p.name.as_str()),
            })
            .collect();

        let sizes = catalog
            .sizes()
            .iter()
            .map(|s| SizeView {
                name: s.name.clone(),
                price: s.price,
                selected: s.matches(selection.size()),
            })
            .collect();

        let toppings = selection
            .available_toppings()
            .iter()
            .map(|name| ToppingView {
                name: name.clone(),
                price: catalog
                    .topping(name)
                    .map_or(Decimal::ZERO, |t| t.price),
                selected: selection.has_topping(name),
            })
            .collect();

        Self {
            pizzas,
            sizes,
            show_toppings: selection.is_pizza_selected(),
            toppings,
            total: format_price(compute_total(selection, catalog)),
        }
    }

    pub fn selected_pizza(&self) -> Option<&PizzaView> {
        self.pizzas.iter().find(|p| p.selected)
    }

    pub fn selected_size(&self) -> Option<&SizeView> {
        self.sizes.iter().find(|s| s.selected)
    }
}
