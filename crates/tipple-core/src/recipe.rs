//! Recipe records and result sets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit sentinel for quantities the catalog leaves to the drinker.
///
/// An ingredient carrying this unit has no meaningful measure.
pub const TO_TASTE: &str = "to taste";

/// A recipe is the atomic unit of data returned by the catalog.
///
/// Records are read-only projection data: the catalog owns their content
/// and nothing downstream mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Recipe name, the card header.
    #[serde(default)]
    pub name: String,

    /// Ordered ingredient list.
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,

    /// Common garnishes.
    #[serde(default)]
    pub garnish: Vec<String>,

    /// Glassware the drink is typically served in.
    #[serde(default)]
    pub drinkware: Vec<String>,

    /// Serving methods (e.g. "on the rocks", "straight up").
    #[serde(default)]
    pub served: Vec<String>,

    /// Preparation instructions. Possibly empty.
    #[serde(default)]
    pub instructions: String,

    /// Free-form notes. Possibly empty.
    #[serde(default)]
    pub notes: String,
}

/// One entry in a recipe's ingredient list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name.
    #[serde(default)]
    pub ingredient: String,

    /// Quantity. Meaningless when `unit` is [`TO_TASTE`].
    #[serde(default)]
    pub measure: Measure,

    /// Unit of measure, or the [`TO_TASTE`] sentinel.
    #[serde(default)]
    pub unit: String,
}

impl RecipeIngredient {
    /// Check whether this ingredient's quantity is left to the drinker.
    pub fn is_to_taste(&self) -> bool {
        self.unit == TO_TASTE
    }
}

/// An ingredient quantity.
///
/// The catalog serves measures as either JSON numbers (`2`, `0.75`) or
/// strings (`"1 1/2"`), so both are accepted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl Default for Measure {
    fn default() -> Self {
        Measure::Text(String::new())
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers print without the trailing ".0".
            Measure::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{}", *n as i64),
            Measure::Number(n) => write!(f, "{}", n),
            Measure::Text(s) => f.write_str(s),
        }
    }
}

/// The recipes produced by one query execution.
///
/// Lifetime is one render cycle: discarded and rebuilt on the next search.
pub type ResultSet = Vec<RecipeRecord>;
