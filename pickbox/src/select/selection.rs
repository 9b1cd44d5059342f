//! Selection state for the select widget.
//!
//! Selection is keyed by option value so it stays stable when the option
//! registry is replaced, including across async option loads.

use std::collections::HashSet;

/// Whether the widget picks one value or many.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectMode {
    /// At most one value selected; committing replaces and closes.
    #[default]
    Single,
    /// Any number of values; committing toggles and keeps the list open.
    Multiple,
}

/// Value-keyed selection set.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected values (sorted for deterministic ordering).
    pub fn values(&self) -> Vec<String> {
        let mut values: Vec<_> = self.selected.iter().cloned().collect();
        values.sort();
        values
    }

    /// Check if a value is selected.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.contains(value)
    }

    /// Get the number of selected values.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection. Returns true if anything was removed.
    pub fn clear(&mut self) -> bool {
        let had = !self.selected.is_empty();
        self.selected.clear();
        had
    }

    /// Select a single value, replacing any prior members.
    /// Returns true if the set changed.
    pub fn replace(&mut self, value: &str) -> bool {
        if self.selected.len() == 1 && self.selected.contains(value) {
            return false;
        }
        self.selected.clear();
        self.selected.insert(value.to_string());
        true
    }

    /// Toggle a value: remove it if present, add it otherwise.
    /// Returns true if the value is now selected.
    pub fn toggle(&mut self, value: &str) -> bool {
        if self.selected.remove(value) {
            false
        } else {
            self.selected.insert(value.to_string());
            true
        }
    }

    /// Remove a value. Returns true if it was selected.
    pub fn remove(&mut self, value: &str) -> bool {
        self.selected.remove(value)
    }

    /// Replace the whole set from a list of values.
    pub fn set_values<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = values.into_iter().map(Into::into).collect();
    }
}
