//! The query form view: a projection of the active collector.

use tipple_query::{Collector, ModeBinding};

/// What the query form shows for the active mode.
///
/// A projection only; the collector remains the single source of
/// criterion state.
#[derive(Debug)]
pub enum FormView {
    /// Free-text input (name queries).
    TextInput { label: String, value: String },

    /// Vocabulary dropdown plus the criteria table (facet queries).
    Selector {
        label: String,
        options: Vec<String>,
        selection: Option<String>,
        rows: Vec<String>,
    },
}

impl FormView {
    /// Project the active binding into form data.
    pub fn from_binding(binding: &ModeBinding) -> Self {
        let label = binding.mode().label().to_string();
        match binding.collector() {
            Collector::FreeText(text) => FormView::TextInput {
                label,
                value: text.value().to_string(),
            },
            Collector::PickList(list) => FormView::Selector {
                label,
                options: list.options().to_vec(),
                selection: list.selection().map(str::to_string),
                rows: list.rows().to_vec(),
            },
        }
    }
}
