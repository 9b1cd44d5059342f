//! Option model for the select widget.

use serde::{Deserialize, Serialize};

/// One selectable entry: an opaque value, display label, and disabled flag.
///
/// Options are declared by the host and replaced wholesale via
/// `SearchSelect::set_options`; the widget keeps only a cached copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Opaque identifier, compared as a string.
    pub value: String,
    /// Display text.
    pub label: String,
    /// Disabled options render dimmed and cannot be committed.
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Create an enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark this option disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Trait for items that can be offered as select options.
///
/// # Example
///
/// ```ignore
/// struct Teacher {
///     id: u32,
///     name: String,
/// }
///
/// impl OptionItem for Teacher {
///     fn option_value(&self) -> String {
///         self.id.to_string()
///     }
///
///     fn option_label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait OptionItem {
    /// Unique identifier for this item. Items with an empty value are
    /// dropped from the registry.
    fn option_value(&self) -> String;

    /// Display text for this item.
    fn option_label(&self) -> String;

    /// Whether this item can be selected. Defaults to enabled.
    fn option_disabled(&self) -> bool {
        false
    }
}

impl OptionItem for SelectOption {
    fn option_value(&self) -> String {
        self.value.clone()
    }

    fn option_label(&self) -> String {
        self.label.clone()
    }

    fn option_disabled(&self) -> bool {
        self.disabled
    }
}

// Implement for String
impl OptionItem for String {
    fn option_value(&self) -> String {
        self.clone()
    }

    fn option_label(&self) -> String {
        self.clone()
    }
}

// Implement for &str
impl OptionItem for &str {
    fn option_value(&self) -> String {
        (*self).to_string()
    }

    fn option_label(&self) -> String {
        (*self).to_string()
    }
}

// Implement for (value, label) tuples
impl<S1, S2> OptionItem for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn option_value(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn option_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}
