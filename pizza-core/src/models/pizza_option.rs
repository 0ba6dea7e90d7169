use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaOption {
    pub name: String,
    pub price: Decimal,

    /// Opaque reference handed to the presentation layer (e.g. an asset path).
    pub image: String,

    /// Topping names this pizza may carry, in display order.
    pub toppings: Vec<String>,
}

impl PizzaOption {
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
        toppings: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            price,
            image: image.into(),
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Returns `true` if `topping` is on this pizza's permitted list.
    pub fn permits(
        &self,
        topping: &str,
    ) -> bool {
        self.toppings.iter().any(|t| t == topping)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn permits_matches_exact_names_only() {
        let pizza = PizzaOption::new("Pizza 1", dec!(8), "", &["Avocado", "Ham"]);

        assert!(pizza.permits("Ham"));
        assert!(!pizza.permits("ham"));
        assert!(!pizza.permits("Bacon"));
    }
}
