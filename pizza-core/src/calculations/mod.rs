//! Price calculation for an order selection.
//!
//! Pricing is a pure function of a [`Selection`](crate::Selection) and the
//! [`Catalog`](crate::Catalog) it was made against.

pub mod common;
pub mod pricing;

pub use pricing::{PriceBreakdown, compute_total};
