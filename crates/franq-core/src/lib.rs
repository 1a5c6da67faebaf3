//! # franq-core — Franchise Network Domain Model
//!
//! Domain types and pure view-assembly logic for the franchise network:
//! franchises own branches, branches own products. The HTTP and persistence
//! layers live in `franq-api`; this crate holds what is meaningful without
//! them:
//!
//! - [`model`] — the three persisted entities, the two read-only composed
//!   views (`BranchAggregate`, `FranchiseAggregate`), and the per-branch
//!   max-stock projection row.
//! - [`aggregate`] — batch grouping of child rows under their parents.
//!   One fetch per level replaces per-parent fan-out; these functions do
//!   the in-memory join.
//!
//! ## Crate Policy
//!
//! - No I/O. Everything here is a plain function over owned data.
//! - Wire format (serde) stays camelCase to match the published API.

pub mod aggregate;
pub mod model;

pub use model::{
    Branch, BranchAggregate, Franchise, FranchiseAggregate, Product, ProductMaxStock,
};
