//! Core types for the tipple cocktail catalog client.
//!
//! This crate contains shared data structures that are used across all
//! tipple crates:
//! - Recipe records and result sets
//! - Query modes and catalog facets
//! - Configuration types
//! - Error types

mod config;
mod error;
mod mode;
mod recipe;

pub use config::{config_file_path, AppConfig, CatalogConfig, DisplayConfig};
pub use error::{CatalogError, ConfigError};
pub use mode::{Facet, QueryMode};
pub use recipe::{Measure, RecipeIngredient, RecipeRecord, ResultSet, TO_TASTE};
