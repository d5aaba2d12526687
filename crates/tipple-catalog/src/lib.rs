//! Catalog service access for the tipple client.
//!
//! This crate provides:
//! - Lookup path construction for the catalog wire contract
//! - The `Catalog` trait, the mockable data-access seam
//! - `HttpCatalog`, the reqwest-backed implementation

pub mod client;
pub mod paths;

pub use client::{Catalog, HttpCatalog};
pub use paths::{combined_lookup_path, facet_index_path, facet_lookup_path, recipe_path};
