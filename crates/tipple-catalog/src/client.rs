//! The catalog data-access seam and its HTTP implementation.
//!
//! `Catalog` deliberately has no `Result` in its signatures: a failed round
//! trip is logged and resolves to an absent or empty result, so callers
//! treat "no data" and "error" identically. The internal error taxonomy
//! ([`CatalogError`]) exists only up to the absorb point.

use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tipple_core::{CatalogConfig, CatalogError, Facet, RecipeRecord, ResultSet};

use crate::paths;

// =============================================================================
// Catalog Trait
// =============================================================================

/// Read access to the cocktail catalog.
///
/// Methods return futures with owned arguments, allowing the caller to
/// spawn them however they want. This enables testing with mock catalogs.
/// Each call is a single network round trip: no retry, no cache.
pub trait Catalog: Send + Sync {
    /// Look up a single recipe by name.
    ///
    /// `None` covers both a genuine miss and a failed round trip.
    fn recipe_by_name(&self, name: String) -> BoxFuture<'static, Option<RecipeRecord>>;

    /// Resolve one facet value to the recipes matching it.
    ///
    /// An empty result set covers both no matches and a failed round trip.
    fn lookup_facet(&self, facet: Facet, value: String) -> BoxFuture<'static, ResultSet>;

    /// Fetch a facet's known values, used to populate selection lists.
    fn vocabulary(&self, facet: Facet) -> BoxFuture<'static, Vec<String>>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// Catalog implementation backed by the HTTP catalog service.
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Create a client for the configured catalog service.
    pub fn new(config: &CatalogConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// One GET round trip decoded as JSON.
    async fn get_json<T: DeserializeOwned>(
        client: reqwest::Client,
        url: String,
    ) -> Result<T, CatalogError> {
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

impl Catalog for HttpCatalog {
    fn recipe_by_name(&self, name: String) -> BoxFuture<'static, Option<RecipeRecord>> {
        let client = self.client.clone();
        let url = self.url_for(&paths::recipe_path(&name));

        Box::pin(async move {
            // A JSON `null` body is a miss, not an error.
            match Self::get_json::<Option<RecipeRecord>>(client, url.clone()).await {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Recipe lookup failed for {}: {}", url, e);
                    None
                }
            }
        })
    }

    fn lookup_facet(&self, facet: Facet, value: String) -> BoxFuture<'static, ResultSet> {
        let client = self.client.clone();
        let url = self.url_for(&paths::facet_lookup_path(facet, &value));

        Box::pin(async move {
            match Self::get_json::<ResultSet>(client, url.clone()).await {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("Facet lookup failed for {}: {}", url, e);
                    ResultSet::new()
                }
            }
        })
    }

    fn vocabulary(&self, facet: Facet) -> BoxFuture<'static, Vec<String>> {
        let client = self.client.clone();
        let url = self.url_for(&paths::facet_index_path(facet));

        Box::pin(async move {
            match Self::get_json::<Vec<String>>(client, url.clone()).await {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!("Vocabulary fetch failed for {}: {}", url, e);
                    Vec::new()
                }
            }
        })
    }
}
