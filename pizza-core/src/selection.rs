//! The user's in-progress choices and the three transitions that change them.
//!
//! Toppings only exist inside [`PizzaState::PizzaSelected`], so a selection
//! without a pizza cannot carry toppings. Every transition either applies
//! completely or returns a [`SelectionError`] with the selection untouched.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::Catalog;

/// Why a transition was ignored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown pizza '{0}'")]
    UnknownPizza(String),

    #[error("unknown size '{0}'")]
    UnknownSize(String),

    /// A topping was toggled before any pizza was chosen.
    #[error("cannot toggle '{0}' before a pizza is selected")]
    NoPizzaSelected(String),

    #[error("topping '{topping}' is not available on '{pizza}'")]
    ToppingNotAvailable { pizza: String, topping: String },
}

/// What a successful topping toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToppingToggle {
    Added,
    Removed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum PizzaState {
    #[default]
    NoPizzaSelected,
    PizzaSelected {
        pizza: String,
        /// Copied from the pizza's permitted list when it was selected.
        available_toppings: Vec<String>,
        toppings: BTreeSet<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    state: PizzaState,
    size: String,
}

impl Selection {
    /// A fresh selection: no pizza, the catalog's first size.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            state: PizzaState::NoPizzaSelected,
            size: catalog
                .default_size()
                .map(|s| s.name.clone())
                .unwrap_or_default(),
        }
    }

    pub fn state(&self) -> &PizzaState {
        &self.state
    }

    pub fn pizza(&self) -> Option<&str> {
        match &self.state {
            PizzaState::NoPizzaSelected => None,
            PizzaState::PizzaSelected { pizza, .. } => Some(pizza),
        }
    }

    pub fn is_pizza_selected(&self) -> bool {
        self.pizza().is_some()
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    /// Toppings offered for the current pizza; empty when none is selected.
    pub fn available_toppings(&self) -> &[String] {
        match &self.state {
            PizzaState::NoPizzaSelected => &[],
            PizzaState::PizzaSelected {
                available_toppings, ..
            } => available_toppings,
        }
    }

    /// Chosen toppings in name order.
    pub fn toppings(&self) -> impl Iterator<Item = &str> {
        let chosen = match &self.state {
            PizzaState::NoPizzaSelected => None,
            PizzaState::PizzaSelected { toppings, .. } => Some(toppings),
        };
        chosen.into_iter().flatten().map(String::as_str)
    }

    pub fn has_topping(
        &self,
        name: &str,
    ) -> bool {
        match &self.state {
            PizzaState::NoPizzaSelected => false,
            PizzaState::PizzaSelected { toppings, .. } => toppings.contains(name),
        }
    }

    /// Choose a pizza. Always resets the available toppings to the pizza's
    /// permitted list and clears chosen toppings, even when `name` is the
    /// pizza already selected.
    pub fn select_pizza(
        &mut self,
        catalog: &Catalog,
        name: &str,
    ) -> Result<(), SelectionError> {
        let pizza = catalog
            .pizza(name)
            .ok_or_else(|| SelectionError::UnknownPizza(name.to_string()))?;

        self.state = PizzaState::PizzaSelected {
            pizza: pizza.name.clone(),
            available_toppings: pizza.toppings.clone(),
            toppings: BTreeSet::new(),
        };
        Ok(())
    }

    /// Choose a size by case-insensitive name. The catalog spelling is stored.
    pub fn select_size(
        &mut self,
        catalog: &Catalog,
        name: &str,
    ) -> Result<(), SelectionError> {
        let size = catalog
            .size(name)
            .ok_or_else(|| SelectionError::UnknownSize(name.to_string()))?;

        self.size = size.name.clone();
        Ok(())
    }

    /// Add `name` if absent, remove it if present.
    pub fn toggle_topping(
        &mut self,
        name: &str,
    ) -> Result<ToppingToggle, SelectionError> {
        match &mut self.state {
            PizzaState::NoPizzaSelected => Err(SelectionError::NoPizzaSelected(name.to_string())),
            PizzaState::PizzaSelected {
                pizza,
                available_toppings,
                toppings,
            } => {
                if !available_toppings.iter().any(|t| t == name) {
                    return Err(SelectionError::ToppingNotAvailable {
                        pizza: pizza.clone(),
                        topping: name.to_string(),
                    });
                }

                if toppings.remove(name) {
                    Ok(ToppingToggle::Removed)
                } else {
                    toppings.insert(name.to_string());
                    Ok(ToppingToggle::Added)
                }
            }
        }
    }
}
