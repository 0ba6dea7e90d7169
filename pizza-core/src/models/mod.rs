mod catalog;
mod pizza_option;
mod size_option;
mod topping_option;

pub use catalog::{Catalog, CatalogError, UnpricedTopping};
pub use pizza_option::PizzaOption;
pub use size_option::SizeOption;
pub use topping_option::ToppingOption;
