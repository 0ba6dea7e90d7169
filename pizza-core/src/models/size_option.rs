use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    pub name: String,
    /// Added to the order total (must be positive).
    pub price: Decimal,
}

impl SizeOption {
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Size names compare case-insensitively.
    pub fn matches(
        &self,
        name: &str,
    ) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
