//! Property search over a fixed listing catalog.
//!
//! The core is [`search::filter`]: a pure, order-preserving conjunction of
//! field constraints. Everything else feeds it a catalog and a query, or
//! presents what it returns.

pub mod catalog;
pub mod display;
pub mod logging;
pub mod models;
pub mod search;
