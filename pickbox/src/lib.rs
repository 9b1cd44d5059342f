//! pickbox - a searchable select widget for terminal UIs.
//!
//! Provides [`SearchSelect`], a dropdown combobox with live substring
//! filtering, single and multi selection, keyboard navigation, and
//! mouse support, rendered with ratatui. Widget state is shared behind
//! cheap clones so the same instance can sit in the event loop and the
//! render path.

pub mod events;
pub mod select;
pub mod theme;

pub use events::{
    EventResult, Key, KeyCombo, Modifiers, ScrollDirection, SelectEvent, SelectEventKind,
};
pub use select::{
    DismissRouter, OptionItem, SearchSelect, SearchSelectId, SelectMode, SelectOption, Selection,
    ValueError, render,
};
pub use theme::Theme;
