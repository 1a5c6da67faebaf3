//! Batch assembly of composed views.
//!
//! The details endpoints fetch each level in one query (all franchises, all
//! branches, all products) and join here, in memory. Query count is bounded
//! by the number of levels, not the number of entities.
//!
//! Semantics preserved from the per-parent assembly this replaces:
//! - a parent with no children gets an empty list, never an omission;
//! - parent order follows the input slice, child list order is whatever the
//!   store returned (callers must not rely on it);
//! - children whose parent id matches no parent are dropped.

use std::collections::HashMap;

use crate::model::{Branch, BranchAggregate, Franchise, FranchiseAggregate, Product};

/// Pair every branch with its products.
pub fn branch_aggregates(branches: Vec<Branch>, products: Vec<Product>) -> Vec<BranchAggregate> {
    let mut by_branch = group_by(products, |p| p.branch_id);
    branches
        .into_iter()
        .map(|branch| {
            let products = by_branch.remove(&branch.id).unwrap_or_default();
            BranchAggregate { branch, products }
        })
        .collect()
}

/// Pair every franchise with the aggregates of its branches.
pub fn franchise_aggregates(
    franchises: Vec<Franchise>,
    branches: Vec<Branch>,
    products: Vec<Product>,
) -> Vec<FranchiseAggregate> {
    let assembled = branch_aggregates(branches, products);
    let mut by_franchise = group_by(assembled, |a| a.branch.franchise_id);
    franchises
        .into_iter()
        .map(|franchise| {
            let branches = by_franchise.remove(&franchise.id).unwrap_or_default();
            FranchiseAggregate {
                franchise,
                branches,
            }
        })
        .collect()
}

fn group_by<T>(items: Vec<T>, key: impl Fn(&T) -> i64) -> HashMap<i64, Vec<T>> {
    let mut groups: HashMap<i64, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}
