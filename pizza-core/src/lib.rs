pub mod calculations;
pub mod configurator;
pub mod models;
pub mod selection;
pub mod view_model;

pub use calculations::{PriceBreakdown, compute_total};
pub use configurator::OrderConfigurator;
pub use models::*;
pub use selection::{PizzaState, Selection, SelectionError, ToppingToggle};
pub use view_model::{OrderView, PizzaView, SizeView, ToppingView};
