pub mod loader;

pub use loader::{
    CatalogLoader, CatalogLoaderError, PIZZAS_FILE, PizzaRecord, PriceRecord, SIZES_FILE,
    TOPPINGS_FILE,
};
