//! The results view: recipe cards, or a no-results placeholder.

use tipple_core::ResultSet;

use crate::views::RecipeCard;

/// What the results surface shows after a search.
///
/// Rebuilt wholesale on every accepted search; card expansion state lives
/// only until the next rebuild.
#[derive(Debug)]
pub enum ResultsView {
    /// The search matched nothing.
    Empty,

    /// One card per recipe, in result-set order.
    Cards(Vec<RecipeCard>),
}

impl ResultsView {
    /// Build the view for a result set.
    pub fn build(results: &ResultSet) -> Self {
        if results.is_empty() {
            ResultsView::Empty
        } else {
            ResultsView::Cards(results.iter().map(RecipeCard::from_record).collect())
        }
    }

    /// Number of cards shown.
    pub fn card_count(&self) -> usize {
        match self {
            ResultsView::Empty => 0,
            ResultsView::Cards(cards) => cards.len(),
        }
    }

    /// Toggle one card's expansion. Out-of-range indices are ignored.
    ///
    /// Returns whether a card was toggled.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self {
            ResultsView::Empty => false,
            ResultsView::Cards(cards) => match cards.get_mut(index) {
                Some(card) => {
                    card.toggle();
                    true
                }
                None => false,
            },
        }
    }
}
