//! Plain-text rendering adapter.
//!
//! The reference rendering surface: flattens view models into terminal
//! lines. Any other frontend would consume the same view models and draw
//! them its own way.

use tipple_core::DisplayConfig;

use crate::views::{FormView, ResultsView};

/// Render the query form.
pub fn render_form(form: &FormView) -> Vec<String> {
    let mut lines = vec!["Cocktail Lookup".to_string()];

    match form {
        FormView::TextInput { label, value } => {
            lines.push(format!("{}: {}", label, value));
        }
        FormView::Selector {
            label,
            options,
            selection,
            rows,
        } => {
            lines.push(format!(
                "{}: {}",
                label,
                selection.as_deref().unwrap_or("Select...")
            ));
            for (index, option) in options.iter().enumerate() {
                lines.push(format!("  {}) {}", index + 1, option));
            }
            lines.push("Selected criteria:".to_string());
            if rows.is_empty() {
                lines.push("  (none)".to_string());
            } else {
                for row in rows {
                    lines.push(format!("  - {}", row));
                }
            }
        }
    }

    lines
}

/// Render the results surface.
pub fn render_results(view: &ResultsView, display: &DisplayConfig) -> Vec<String> {
    let cards = match view {
        ResultsView::Empty => return vec![display.placeholder.clone()],
        ResultsView::Cards(cards) => cards,
    };

    let mut lines = vec!["Results".to_string(), display.hint.clone()];

    for (index, card) in cards.iter().enumerate() {
        let marker = if card.expanded { "[-]" } else { "[+]" };
        lines.push(format!("{} {}) {}", marker, index + 1, card.title));

        if !card.expanded {
            continue;
        }

        for section in &card.sections {
            lines.push(format!("    {}", section.heading));
            for entry in &section.entries {
                lines.push(format!("      - {}", entry));
            }
        }
        if let Some(instructions) = &card.instructions {
            lines.push(format!("    Instructions: {}", instructions));
        }
        if let Some(notes) = &card.notes {
            lines.push(format!("    Notes: {}", notes));
        }
    }

    lines
}
