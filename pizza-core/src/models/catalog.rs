//! Immutable reference data for the order screen.
//!
//! A [`Catalog`] is built once and injected into the configurator; nothing
//! downstream mutates it. Lookups never fail loudly: callers get an `Option`
//! and pricing decides what a missing entry is worth.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use super::{PizzaOption, SizeOption, ToppingOption};

/// Structural problems found while validating catalog data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The size list is empty, so no default size exists.
    #[error("catalog has no sizes")]
    NoSizes,

    #[error("duplicate pizza '{0}'")]
    DuplicatePizza(String),

    /// Two sizes share a name when compared case-insensitively.
    #[error("duplicate size '{0}'")]
    DuplicateSize(String),

    #[error("duplicate topping '{0}'")]
    DuplicateTopping(String),

    #[error("pizza '{0}' permits no toppings")]
    EmptyToppingList(String),

    #[error("pizza '{pizza}' lists topping '{topping}' more than once")]
    DuplicatePermittedTopping { pizza: String, topping: String },

    #[error("{kind} '{name}' has negative price {price}")]
    NegativePrice {
        kind: &'static str,
        name: String,
        price: Decimal,
    },

    #[error("size '{name}' must have a positive price, got {price}")]
    NonPositiveSizePrice { name: String, price: Decimal },

    /// The dearest order of this pizza does not fit in a `Decimal`.
    #[error("pizza '{0}' with its largest size and every topping is too expensive to price")]
    PriceTooLarge(String),
}

/// A topping a pizza permits but the topping catalog does not price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnpricedTopping {
    pub pizza: String,
    pub topping: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pizzas: Vec<PizzaOption>,
    sizes: Vec<SizeOption>,
    toppings: Vec<ToppingOption>,
}

impl Catalog {
    /// Build a catalog from its three tables, validating their structure.
    ///
    /// Permitted toppings missing from `toppings` are accepted (they price at
    /// zero) but each one is reported with a warning.
    pub fn new(
        pizzas: Vec<PizzaOption>,
        sizes: Vec<SizeOption>,
        toppings: Vec<ToppingOption>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            pizzas,
            sizes,
            toppings,
        };
        catalog.validate()?;

        for missing in catalog.unpriced_toppings() {
            warn!(
                pizza = %missing.pizza,
                topping = %missing.topping,
                "permitted topping has no catalog price; it will be priced at 0"
            );
        }

        Ok(catalog)
    }

    /// The menu shipped with the application.
    pub fn builtin() -> Self {
        let pizzas = vec![
            PizzaOption::new(
                "Pizza 1",
                Decimal::from(8),
                "assets/images/img1.jpg",
                &["Avocado", "Broccoli", "Onions", "Zucchini", "Tuna", "Ham"],
            ),
            PizzaOption::new(
                "Pizza 2",
                Decimal::from(10),
                "assets/images/img2.jpg",
                &[
                    "Broccoli", "Onions", "Zucchini", "Lobster", "Oyster", "Salmon", "Bacon",
                    "Ham",
                ],
            ),
            PizzaOption::new(
                "Pizza 3",
                Decimal::from(12),
                "assets/images/img3.jpg",
                &[
                    "Broccoli", "Onions", "Zucchini", "Tuna", "Bacon", "Duck", "Ham", "Sausage",
                ],
            ),
        ];

        let sizes = vec![
            SizeOption::new("Small", Decimal::from(1)),
            SizeOption::new("Medium", Decimal::new(15, 1)),
            SizeOption::new("Large", Decimal::from(2)),
        ];

        let toppings = [
            ("Avocado", 1),
            ("Broccoli", 1),
            ("Onions", 1),
            ("Zucchini", 1),
            ("Lobster", 2),
            ("Oyster", 2),
            ("Salmon", 2),
            ("Tuna", 2),
            ("Bacon", 3),
            ("Duck", 3),
            ("Ham", 3),
            ("Sausage", 3),
        ]
        .into_iter()
        .map(|(name, price)| ToppingOption::new(name, Decimal::from(price)))
        .collect();

        Self {
            pizzas,
            sizes,
            toppings,
        }
    }

    /// Check every structural rule. Unpriced toppings are not an error.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.sizes.is_empty() {
            return Err(CatalogError::NoSizes);
        }

        let mut seen = HashSet::new();
        for pizza in &self.pizzas {
            if !seen.insert(pizza.name.as_str()) {
                return Err(CatalogError::DuplicatePizza(pizza.name.clone()));
            }
            if pizza.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    kind: "pizza",
                    name: pizza.name.clone(),
                    price: pizza.price,
                });
            }
            if pizza.toppings.is_empty() {
                return Err(CatalogError::EmptyToppingList(pizza.name.clone()));
            }

            let mut permitted = HashSet::new();
            for topping in &pizza.toppings {
                if !permitted.insert(topping.as_str()) {
                    return Err(CatalogError::DuplicatePermittedTopping {
                        pizza: pizza.name.clone(),
                        topping: topping.clone(),
                    });
                }
            }
        }

        let mut seen = HashSet::new();
        for size in &self.sizes {
            if !seen.insert(size.name.to_lowercase()) {
                return Err(CatalogError::DuplicateSize(size.name.clone()));
            }
            if size.price <= Decimal::ZERO {
                return Err(CatalogError::NonPositiveSizePrice {
                    name: size.name.clone(),
                    price: size.price,
                });
            }
        }

        let mut seen = HashSet::new();
        for topping in &self.toppings {
            if !seen.insert(topping.name.as_str()) {
                return Err(CatalogError::DuplicateTopping(topping.name.clone()));
            }
            if topping.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    kind: "topping",
                    name: topping.name.clone(),
                    price: topping.price,
                });
            }
        }

        let largest_size = self
            .sizes
            .iter()
            .map(|size| size.price)
            .max()
            .unwrap_or(Decimal::ZERO);
        for pizza in &self.pizzas {
            if self.dearest_order(pizza, largest_size).is_none() {
                return Err(CatalogError::PriceTooLarge(pizza.name.clone()));
            }
        }

        Ok(())
    }

    /// Price of `pizza` at `size_price` with every permitted topping chosen,
    /// or `None` when the sum overflows.
    fn dearest_order(
        &self,
        pizza: &PizzaOption,
        size_price: Decimal,
    ) -> Option<Decimal> {
        pizza
            .toppings
            .iter()
            .filter_map(|name| self.topping(name))
            .map(|topping| topping.price)
            .try_fold(pizza.price.checked_add(size_price)?, Decimal::checked_add)
    }

    pub fn pizzas(&self) -> &[PizzaOption] {
        &self.pizzas
    }

    pub fn sizes(&self) -> &[SizeOption] {
        &self.sizes
    }

    pub fn toppings(&self) -> &[ToppingOption] {
        &self.toppings
    }

    pub fn pizza(
        &self,
        name: &str,
    ) -> Option<&PizzaOption> {
        self.pizzas.iter().find(|p| p.name == name)
    }

    /// Case-insensitive size lookup.
    pub fn size(
        &self,
        name: &str,
    ) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.matches(name))
    }

    pub fn topping(
        &self,
        name: &str,
    ) -> Option<&ToppingOption> {
        self.toppings.iter().find(|t| t.name == name)
    }

    /// The size a fresh selection starts with.
    ///
    /// Returns `None` only for a catalog that skipped validation.
    pub fn default_size(&self) -> Option<&SizeOption> {
        self.sizes.first()
    }

    /// Every (pizza, topping) pair where the pizza permits a topping the
    /// topping table does not price, in catalog order.
    pub fn unpriced_toppings(&self) -> Vec<UnpricedTopping> {
        self.pizzas
            .iter()
            .flat_map(|pizza| {
                pizza
                    .toppings
                    .iter()
                    .filter(|name| self.topping(name).is_none())
                    .map(|name| UnpricedTopping {
                        pizza: pizza.name.clone(),
                        topping: name.clone(),
                    })
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn sizes() -> Vec<SizeOption> {
        vec![SizeOption::new("Small", dec!(1))]
    }

    fn toppings() -> Vec<ToppingOption> {
        vec![ToppingOption::new("Ham", dec!(3))]
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.validate(), Ok(()));
        assert!(catalog.unpriced_toppings().is_empty());
    }

    #[test]
    fn builtin_catalog_contents() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.pizzas().len(), 3);
        assert_eq!(catalog.sizes().len(), 3);
        assert_eq!(catalog.toppings().len(), 12);
        assert_eq!(catalog.pizza("Pizza 2").map(|p| p.price), Some(dec!(10)));
        assert_eq!(catalog.size("Medium").map(|s| s.price), Some(dec!(1.5)));
        assert_eq!(catalog.topping("Sausage").map(|t| t.price), Some(dec!(3)));
    }

    #[test]
    fn default_is_builtin() {
        assert_eq!(Catalog::default(), Catalog::builtin());
    }

    #[test]
    fn default_size_is_first_size() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.default_size().map(|s| s.name.as_str()), Some("Small"));
    }

    #[test]
    fn size_lookup_ignores_case() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.size("LARGE").map(|s| s.name.as_str()), Some("Large"));
        assert_eq!(catalog.size("medium").map(|s| s.name.as_str()), Some("Medium"));
        assert!(catalog.size("Huge").is_none());
    }

    #[test]
    fn pizza_and_topping_lookups_are_exact() {
        let catalog = Catalog::builtin();

        assert!(catalog.pizza("pizza 1").is_none());
        assert!(catalog.topping("ham").is_none());
        assert!(catalog.pizza("Pizza 1").is_some());
    }

    #[test]
    fn new_rejects_empty_sizes() {
        let result = Catalog::new(vec![], vec![], toppings());

        assert_eq!(result, Err(CatalogError::NoSizes));
    }

    #[test]
    fn new_rejects_duplicate_pizza() {
        let pizza = PizzaOption::new("Plain", dec!(5), "", &["Ham"]);
        let result = Catalog::new(vec![pizza.clone(), pizza], sizes(), toppings());

        assert_eq!(result, Err(CatalogError::DuplicatePizza("Plain".to_string())));
    }

    #[test]
    fn new_rejects_sizes_differing_only_in_case() {
        let sizes = vec![
            SizeOption::new("Small", dec!(1)),
            SizeOption::new("SMALL", dec!(2)),
        ];
        let result = Catalog::new(vec![], sizes, toppings());

        assert_eq!(result, Err(CatalogError::DuplicateSize("SMALL".to_string())));
    }

    #[test]
    fn new_rejects_duplicate_topping() {
        let toppings = vec![
            ToppingOption::new("Ham", dec!(3)),
            ToppingOption::new("Ham", dec!(2)),
        ];
        let result = Catalog::new(vec![], sizes(), toppings);

        assert_eq!(result, Err(CatalogError::DuplicateTopping("Ham".to_string())));
    }

    #[test]
    fn new_rejects_empty_permitted_list() {
        let pizza = PizzaOption::new("Bare", dec!(5), "", &[]);
        let result = Catalog::new(vec![pizza], sizes(), toppings());

        assert_eq!(result, Err(CatalogError::EmptyToppingList("Bare".to_string())));
    }

    #[test]
    fn new_rejects_repeated_permitted_topping() {
        let pizza = PizzaOption::new("Double", dec!(5), "", &["Ham", "Ham"]);
        let result = Catalog::new(vec![pizza], sizes(), toppings());

        assert_eq!(
            result,
            Err(CatalogError::DuplicatePermittedTopping {
                pizza: "Double".to_string(),
                topping: "Ham".to_string(),
            })
        );
    }

    #[test]
    fn new_rejects_negative_prices() {
        let pizza = PizzaOption::new("Cheap", dec!(-1), "", &["Ham"]);
        let result = Catalog::new(vec![pizza], sizes(), toppings());
        assert!(matches!(
            result,
            Err(CatalogError::NegativePrice { kind: "pizza", .. })
        ));

        let toppings = vec![ToppingOption::new("Ham", dec!(-0.5))];
        let result = Catalog::new(vec![], sizes(), toppings);
        assert!(matches!(
            result,
            Err(CatalogError::NegativePrice { kind: "topping", .. })
        ));
    }

    #[test]
    fn new_rejects_zero_size_price() {
        let sizes = vec![SizeOption::new("Free", dec!(0))];
        let result = Catalog::new(vec![], sizes, toppings());

        assert_eq!(
            result,
            Err(CatalogError::NonPositiveSizePrice {
                name: "Free".to_string(),
                price: dec!(0),
            })
        );
    }

    #[test]
    fn new_accepts_zero_priced_pizza_and_topping() {
        let pizza = PizzaOption::new("Promo", dec!(0), "", &["Ham"]);
        let toppings = vec![ToppingOption::new("Ham", dec!(0))];

        assert!(Catalog::new(vec![pizza], sizes(), toppings).is_ok());
    }

    #[test]
    fn new_accepts_unpriced_toppings_and_reports_them() {
        let pizza = PizzaOption::new("Odd", dec!(5), "", &["Ham", "Truffle"]);
        let catalog = Catalog::new(vec![pizza], sizes(), toppings()).expect("valid catalog");

        assert_eq!(
            catalog.unpriced_toppings(),
            vec![UnpricedTopping {
                pizza: "Odd".to_string(),
                topping: "Truffle".to_string(),
            }]
        );
    }

    #[test]
    fn new_rejects_pizza_too_expensive_to_price() {
        let pizza = PizzaOption::new("Big", Decimal::MAX, "", &["Ham"]);
        let toppings = vec![ToppingOption::new("Ham", dec!(1))];

        assert_eq!(
            Catalog::new(vec![pizza], sizes(), toppings),
            Err(CatalogError::PriceTooLarge("Big".to_string()))
        );
    }

    #[test]
    fn new_rejects_toppings_that_overflow_together() {
        let half = Decimal::MAX / dec!(2);
        let pizza = PizzaOption::new("Gold", dec!(1), "", &["Leaf", "Flake"]);
        let toppings = vec![
            ToppingOption::new("Leaf", half),
            ToppingOption::new("Flake", half),
        ];

        assert_eq!(
            Catalog::new(vec![pizza], sizes(), toppings),
            Err(CatalogError::PriceTooLarge("Gold".to_string()))
        );
    }

    #[test]
    fn new_accepts_dear_pizza_that_still_fits() {
        let price = Decimal::MAX - dec!(10);
        let pizza = PizzaOption::new("Dear", price, "", &["Ham", "Truffle"]);
        let sizes = vec![
            SizeOption::new("Small", dec!(1)),
            SizeOption::new("Large", dec!(2)),
        ];

        assert!(Catalog::new(vec![pizza], sizes, toppings()).is_ok());
    }
}
