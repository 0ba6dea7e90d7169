use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToppingOption {
    pub name: String,
    pub price: Decimal,
}

impl ToppingOption {
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
