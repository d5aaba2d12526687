//! View models and terminal frontend for the tipple client.
//!
//! This crate turns engine state into renderable data:
//! - RecipeCard, the collapsible per-recipe display unit
//! - ResultsView, the card list or no-results placeholder
//! - FormView, the query-form projection of the active collector
//! - A plain-text adapter, the reference rendering surface
//!
//! The view models are rendering-technology agnostic; any frontend can
//! draw them. The `tipple` binary drives them from a terminal.

pub mod text;
pub mod views;

pub use views::{CardSection, FormView, RecipeCard, ResultsView};
