//! # API Route Modules
//!
//! One module per entity, each exporting a `router()` merged in `lib.rs`:
//!
//! - `franchises` — franchise CRUD, the nested details view, and the
//!   per-branch max-stock projection.
//! - `branches` — branch CRUD and the branch/products details view.
//! - `products` — product CRUD plus the stock-only update.
//!
//! Handlers marshal arguments and map results; the queries live in
//! [`crate::db`] and the view assembly in `franq_core::aggregate`.

pub mod branches;
pub mod franchises;
pub mod products;
