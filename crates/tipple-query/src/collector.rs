//! Input collectors.
//!
//! A collector assembles the criteria for one query before execution. Its
//! shape is fixed by the query mode: free text for name lookups, a
//! pick-from-vocabulary table for everything else. Collector state belongs
//! to exactly one mode binding and is discarded on mode switch.

// =============================================================================
// Collector
// =============================================================================

/// The active input collector, one of two shapes.
#[derive(Debug)]
pub enum Collector {
    /// Single text field (name queries).
    FreeText(FreeTextCollector),

    /// Vocabulary dropdown plus an append-only row table (facet queries).
    PickList(PickListCollector),
}

impl Collector {
    /// Current criteria in input order.
    pub fn criteria(&self) -> Vec<String> {
        match self {
            Collector::FreeText(c) => c.criteria(),
            Collector::PickList(c) => c.criteria(),
        }
    }

    /// Discard all collected criteria.
    pub fn clear(&mut self) {
        match self {
            Collector::FreeText(c) => c.clear(),
            Collector::PickList(c) => c.clear(),
        }
    }

    /// Check whether anything has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.criteria().is_empty()
    }
}

// =============================================================================
// Free Text
// =============================================================================

/// Collector for a single free-text value.
#[derive(Debug, Default)]
pub struct FreeTextCollector {
    value: String,
}

impl FreeTextCollector {
    /// Create an empty text collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field contents.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the field contents.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Zero or one criterion, depending on whether the field holds text.
    pub fn criteria(&self) -> Vec<String> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        }
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

// =============================================================================
// Pick List
// =============================================================================

/// Collector pairing a vocabulary dropdown with a row table.
///
/// `selection` of `None` models the "Select..." sentinel option; adding
/// with the sentinel selected is a no-op. Rows keep insertion order and
/// duplicates are allowed.
#[derive(Debug)]
pub struct PickListCollector {
    options: Vec<String>,
    selection: Option<String>,
    rows: Vec<String>,
}

impl PickListCollector {
    /// Create a collector over a vocabulary.
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selection: None,
            rows: Vec::new(),
        }
    }

    /// The vocabulary the dropdown offers.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Rows added so far, in table order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// The currently selected option, if any.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Select a value in the dropdown.
    pub fn select(&mut self, value: impl Into<String>) {
        self.selection = Some(value.into());
    }

    /// Return the dropdown to the sentinel option.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Append the current selection as a new row.
    ///
    /// With the sentinel selected there is nothing to add; that is logged
    /// and ignored, not an error.
    pub fn add_selected(&mut self) {
        match &self.selection {
            Some(value) => {
                tracing::debug!("Adding '{}' to the criteria table", value);
                self.rows.push(value.clone());
            }
            None => {
                tracing::debug!("No value selected, skipping add");
            }
        }
    }

    /// Remove all rows. The selection and vocabulary are untouched.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Row values in table order.
    pub fn criteria(&self) -> Vec<String> {
        self.rows.clone()
    }
}
