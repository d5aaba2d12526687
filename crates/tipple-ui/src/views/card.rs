//! The recipe card, one collapsible display unit per recipe.

use tipple_core::{RecipeIngredient, RecipeRecord};

/// One labeled sublist on a card.
#[derive(Debug, Clone)]
pub struct CardSection {
    /// Section heading, e.g. "Ingredients".
    pub heading: &'static str,

    /// Entries in record order.
    pub entries: Vec<String>,
}

/// The rendered form of one recipe.
///
/// Cards start collapsed; expansion state is local to the card, shared
/// with nothing.
#[derive(Debug, Clone)]
pub struct RecipeCard {
    /// Card header: the recipe name.
    pub title: String,

    /// The four labeled sublists, always present even when empty.
    pub sections: Vec<CardSection>,

    /// Preparation instructions; omitted when the record has none.
    pub instructions: Option<String>,

    /// Free-form notes; omitted when the record has none.
    pub notes: Option<String>,

    /// Whether the card body is visible.
    pub expanded: bool,
}

impl RecipeCard {
    /// Build a card from a recipe record. Pure transform.
    pub fn from_record(record: &RecipeRecord) -> Self {
        let sections = vec![
            CardSection {
                heading: "Ingredients",
                entries: record.ingredients.iter().map(ingredient_line).collect(),
            },
            CardSection {
                heading: "Common Garnishes",
                entries: record.garnish.clone(),
            },
            CardSection {
                heading: "Typically served in:",
                entries: record.drinkware.clone(),
            },
            CardSection {
                heading: "Typically served:",
                entries: record.served.clone(),
            },
        ];

        Self {
            title: record.name.clone(),
            sections,
            instructions: non_empty(&record.instructions),
            notes: non_empty(&record.notes),
            expanded: false,
        }
    }

    /// Flip the card between collapsed and expanded.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

/// One ingredient as display text.
///
/// A measured ingredient reads "Lime (2 oz)"; one left to the drinker's
/// judgment reads "Lime to taste".
pub fn ingredient_line(ingredient: &RecipeIngredient) -> String {
    if ingredient.is_to_taste() {
        format!("{} {}", ingredient.ingredient, ingredient.unit)
    } else {
        format!(
            "{} ({} {})",
            ingredient.ingredient, ingredient.measure, ingredient.unit
        )
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipple_core::Measure;

    fn ingredient(name: &str, measure: Measure, unit: &str) -> RecipeIngredient {
        RecipeIngredient {
            ingredient: name.to_string(),
            measure,
            unit: unit.to_string(),
        }
    }

    fn record() -> RecipeRecord {
        RecipeRecord {
            name: "Gimlet".to_string(),
            ingredients: vec![
                ingredient("Gin", Measure::Number(2.0), "oz"),
                ingredient("Lime", Measure::Text(String::new()), "to taste"),
            ],
            garnish: vec!["Lime wheel".to_string()],
            drinkware: vec!["Cocktail glass".to_string()],
            served: vec!["Straight up".to_string()],
            instructions: "Shake, strain.".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_measured_ingredient_line() {
        let line = ingredient_line(&ingredient("Lime", Measure::Number(2.0), "oz"));
        assert_eq!(line, "Lime (2 oz)");
    }

    #[test]
    fn test_to_taste_ingredient_line() {
        let line = ingredient_line(&ingredient("Lime", Measure::Text(String::new()), "to taste"));
        assert_eq!(line, "Lime to taste");
    }

    #[test]
    fn test_card_carries_all_four_sections() {
        let card = RecipeCard::from_record(&record());
        let headings: Vec<&str> = card.sections.iter().map(|s| s.heading).collect();
        assert_eq!(
            headings,
            [
                "Ingredients",
                "Common Garnishes",
                "Typically served in:",
                "Typically served:"
            ]
        );
        assert_eq!(card.sections[0].entries, ["Gin (2 oz)", "Lime to taste"]);
    }

    #[test]
    fn test_empty_text_blocks_are_omitted() {
        let card = RecipeCard::from_record(&record());
        assert_eq!(card.instructions.as_deref(), Some("Shake, strain."));
        assert!(card.notes.is_none());
    }

    #[test]
    fn test_cards_start_collapsed_and_toggle_independently() {
        let mut first = RecipeCard::from_record(&record());
        let second = RecipeCard::from_record(&record());
        assert!(!first.expanded);

        first.toggle();
        assert!(first.expanded);
        assert!(!second.expanded);

        first.toggle();
        assert!(!first.expanded);
    }
}
