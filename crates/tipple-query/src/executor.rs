//! Query execution.
//!
//! The executor turns a criterion list into catalog lookups and aggregates
//! the answers. Facet lookups run sequentially, one criterion at a time:
//! result order must track criterion order, and that determinism is worth
//! the latency.

use tipple_catalog::Catalog;
use tipple_core::{QueryMode, ResultSet};

/// Execute a query against the catalog.
///
/// Name mode performs at most one lookup and yields a result set of length
/// 0 or 1. Facet modes perform one lookup per criterion, in collector
/// order, and concatenate whatever each returns: empties contribute
/// nothing, duplicates across criteria are kept.
pub async fn execute(catalog: &dyn Catalog, mode: QueryMode, criteria: &[String]) -> ResultSet {
    match mode.facet() {
        None => {
            let Some(name) = criteria.first() else {
                tracing::debug!("Name search with an empty field, nothing to look up");
                return ResultSet::new();
            };
            let results: ResultSet = catalog
                .recipe_by_name(name.clone())
                .await
                .into_iter()
                .collect();
            tracing::debug!("Name lookup for '{}' found {} recipe(s)", name, results.len());
            results
        }
        Some(facet) => {
            let mut results = ResultSet::new();
            for value in criteria {
                let fetched = catalog.lookup_facet(facet, value.clone()).await;
                tracing::debug!(
                    "Facet lookup {:?}='{}' returned {} recipe(s)",
                    facet,
                    value,
                    fetched.len()
                );
                results.extend(fetched);
            }
            results
        }
    }
}
