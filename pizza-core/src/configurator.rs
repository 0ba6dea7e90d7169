//! The order screen's single stateful component.
//!
//! [`OrderConfigurator`] owns the injected catalog and the user's selection.
//! Every action applies its transition and rebuilds the [`OrderView`] before
//! returning, so `view()` never shows a half-applied change.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{Catalog, OrderView, PriceBreakdown, Selection, SelectionError, ToppingToggle};

#[derive(Debug, Clone)]
pub struct OrderConfigurator {
    catalog: Catalog,
    selection: Selection,
    view: OrderView,
}

impl OrderConfigurator {
    pub fn new(catalog: Catalog) -> Self {
        let selection = Selection::new(&catalog);
        let view = OrderView::build(&selection, &catalog);
        Self {
            catalog,
            selection,
            view,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Snapshot reflecting the most recent applied action.
    pub fn view(&self) -> &OrderView {
        &self.view
    }

    pub fn total(&self) -> Decimal {
        self.breakdown().total
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        PriceBreakdown::calculate(&self.selection, &self.catalog)
    }

    pub fn select_pizza(
        &mut self,
        name: &str,
    ) -> Result<(), SelectionError> {
        let result = self.selection.select_pizza(&self.catalog, name);
        self.settle("select_pizza", name, result)
    }

    pub fn select_size(
        &mut self,
        name: &str,
    ) -> Result<(), SelectionError> {
        let result = self.selection.select_size(&self.catalog, name);
        self.settle("select_size", name, result)
    }

    pub fn toggle_topping(
        &mut self,
        name: &str,
    ) -> Result<ToppingToggle, SelectionError> {
        let result = self.selection.toggle_topping(name);
        self.settle("toggle_topping", name, result)
    }

    /// Rebuild the view after an applied action; log either way.
    fn settle<T: std::fmt::Debug>(
        &mut self,
        action: &'static str,
        name: &str,
        result: Result<T, SelectionError>,
    ) -> Result<T, SelectionError> {
        match &result {
            Ok(outcome) => {
                self.view = OrderView::build(&self.selection, &self.catalog);
                debug!(action, name, ?outcome, total = %self.view.total, "order updated");
            }
            Err(error) => {
                debug!(action, name, %error, "action ignored");
            }
        }
        result
    }
}

impl Default for OrderConfigurator {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
