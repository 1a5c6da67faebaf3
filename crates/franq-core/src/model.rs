//! Domain entity and view types.
//!
//! The three persisted entities map 1:1 to the `franchise`, `branch`, and
//! `product` tables; `sqlx::FromRow` field names match the column names,
//! while serde renames to camelCase for the HTTP wire format. The aggregate
//! views and the max-stock projection are computed on read and never
//! persisted.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Top-level business entity owning branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Franchise {
    pub id: i64,
    pub name: String,
}

/// A location belonging to exactly one franchise, owning products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub franchise_id: i64,
}

/// A stocked item belonging to exactly one branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub stock: i64,
    pub sku: i64,
    pub branch_id: i64,
}

/// A branch paired with its full product list.
///
/// A branch with zero products carries an empty list, it is never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchAggregate {
    pub branch: Branch,
    pub products: Vec<Product>,
}

/// A franchise paired with the aggregates of its branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FranchiseAggregate {
    pub franchise: Franchise,
    pub branches: Vec<BranchAggregate>,
}

/// One row per branch of a franchise: the branch's highest-stock product.
///
/// Ties are broken toward the smallest product id, so the row set is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductMaxStock {
    pub branch_id: i64,
    pub branch_name: String,
    pub product_id: i64,
    pub product_name: String,
    pub stock: i64,
}
