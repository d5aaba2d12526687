//! Query modes and catalog facets.

use serde::{Deserialize, Serialize};

/// How the user is querying the catalog.
///
/// The mode fixes the collector shape and the lookup the executor performs.
/// Chosen once per query session; switching modes rebuilds the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Free-text lookup of a single recipe by name.
    Name,
    /// Pick-list lookup by ingredient.
    Ingredients,
    /// Pick-list lookup by garnish.
    Garnish,
    /// Pick-list lookup by glassware.
    Drinkware,
    /// Pick-list lookup by serving method.
    Served,
}

impl QueryMode {
    /// Every mode, in menu order.
    pub const ALL: [QueryMode; 5] = [
        QueryMode::Name,
        QueryMode::Ingredients,
        QueryMode::Garnish,
        QueryMode::Drinkware,
        QueryMode::Served,
    ];

    /// Human-readable label for the query form.
    pub fn label(&self) -> &'static str {
        match self {
            QueryMode::Name => "Name",
            QueryMode::Ingredients => "Ingredient",
            QueryMode::Garnish => "Garnish",
            QueryMode::Drinkware => "Drinkware",
            QueryMode::Served => "Serving Method",
        }
    }

    /// The vocabulary-backed facet behind this mode.
    ///
    /// `None` for [`QueryMode::Name`], which is free text.
    pub fn facet(&self) -> Option<Facet> {
        match self {
            QueryMode::Name => None,
            QueryMode::Ingredients => Some(Facet::Ingredients),
            QueryMode::Garnish => Some(Facet::Garnish),
            QueryMode::Drinkware => Some(Facet::Drinkware),
            QueryMode::Served => Some(Facet::Served),
        }
    }
}

/// A vocabulary-backed catalog dimension.
///
/// Each facet has an index endpoint listing its known values and a lookup
/// endpoint resolving one value to recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Ingredients,
    Garnish,
    Drinkware,
    Served,
}

impl Facet {
    /// The path segment this facet uses on the wire.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Facet::Ingredients => "ingredients",
            Facet::Garnish => "garnish",
            Facet::Drinkware => "drinkware",
            Facet::Served => "served",
        }
    }
}
