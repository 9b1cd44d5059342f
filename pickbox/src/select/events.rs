//! Event handling for the SearchSelect widget.
//!
//! Keyboard events are dispatched against the open/closed state machine;
//! mouse events are hit-tested against the geometry recorded by the last
//! render. Outside clicks are routed through a single shared
//! [`DismissRouter`] rather than one listener per instance.

use log::{debug, trace};

use crate::events::{EventResult, Key, KeyCombo, ScrollDirection};

use super::SearchSelect;
use super::selection::SelectMode;

impl SearchSelect {
    /// Handle a key event while the trigger has keyboard focus.
    ///
    /// Closed: Enter, Space, or Down opens the dropdown. Open: arrows drive
    /// focus, printable characters edit the search term, Enter commits,
    /// Escape closes. Disabled widgets ignore everything.
    pub fn on_key(&self, key: &KeyCombo) -> EventResult {
        if key.modifiers.ctrl || key.modifiers.alt {
            return EventResult::Ignored;
        }
        if self.is_disabled() {
            return EventResult::Ignored;
        }

        if !self.is_open() {
            // Closed state - open on Enter, Space, or Down
            match key.key {
                Key::Enter | Key::Char(' ') | Key::Down => {
                    self.open();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            }
        } else {
            match key.key {
                Key::Up => {
                    self.focus_up();
                    EventResult::Consumed
                }
                Key::Down => {
                    self.focus_down();
                    EventResult::Consumed
                }
                Key::Enter => {
                    self.commit_focused();
                    EventResult::Consumed
                }
                Key::Escape => {
                    self.close();
                    EventResult::Consumed
                }
                Key::PageUp => {
                    self.focus_first();
                    EventResult::Consumed
                }
                Key::PageDown => {
                    self.focus_last();
                    EventResult::Consumed
                }
                // Search term editing
                Key::Char(c) => {
                    self.insert_char(c);
                    EventResult::Consumed
                }
                Key::Backspace => {
                    self.delete_char_before();
                    EventResult::Consumed
                }
                Key::Delete => {
                    self.delete_char_at();
                    EventResult::Consumed
                }
                Key::Left => {
                    self.search_cursor_left();
                    EventResult::Consumed
                }
                Key::Right => {
                    self.search_cursor_right();
                    EventResult::Consumed
                }
                Key::Home => {
                    self.search_cursor_home();
                    EventResult::Consumed
                }
                Key::End => {
                    self.search_cursor_end();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            }
        }
    }

    /// Handle a primary click at an absolute screen position.
    ///
    /// Clicks on the dropdown commit the row under the pointer (disabled
    /// rows and the "no results" row are consumed without effect). Clicks on
    /// a tag's remove control deselect that value, open or closed. Any other
    /// click on the trigger opens a closed widget. Clicks outside the
    /// widget's bounds are ignored so the host (or the [`DismissRouter`])
    /// can route them elsewhere.
    pub fn on_click(&self, x: u16, y: u16) -> EventResult {
        if !self.contains(x, y) {
            return EventResult::Ignored;
        }
        if self.is_disabled() {
            // Consumed so the click has no bubbling side effects.
            return EventResult::Consumed;
        }

        let on_overlay = self.is_open()
            && self
                .overlay_rect()
                .is_some_and(|rect| rect.contains(ratatui::layout::Position { x, y }));

        if on_overlay {
            let row = self
                .overlay_rect()
                .map(|rect| (y - rect.y) as usize + self.overlay_offset())
                .unwrap_or(0);
            match self.filtered_option(row) {
                Some(option) if option.disabled => {
                    trace!("{}: click on disabled option {:?}", self.id(), option.value);
                }
                Some(option) => {
                    self.commit_value(&option.value);
                }
                // "no results" row or the area past the last option
                None => {}
            }
            return EventResult::Consumed;
        }

        // Trigger region: tag remove controls first.
        if self.mode() == SelectMode::Multiple
            && let Some(region) = self
                .tag_regions()
                .into_iter()
                .find(|region| region.remove_x == x)
        {
            self.deselect(&region.value);
            return EventResult::Consumed;
        }

        if !self.is_open() {
            self.open();
        }
        EventResult::Consumed
    }

    /// Move keyboard focus to the dropdown row under the pointer.
    pub fn on_hover(&self, x: u16, y: u16) -> EventResult {
        if !self.is_open() {
            return EventResult::Ignored;
        }
        let Some(rect) = self.overlay_rect() else {
            return EventResult::Ignored;
        };
        if !rect.contains(ratatui::layout::Position { x, y }) {
            return EventResult::Ignored;
        }
        let row = (y - rect.y) as usize + self.overlay_offset();
        if row < self.filtered_count() {
            self.set_focus(row);
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Scroll wheel moves keyboard focus while the dropdown is open.
    pub fn on_scroll(&self, direction: ScrollDirection) -> EventResult {
        if !self.is_open() {
            return EventResult::Ignored;
        }
        match direction {
            ScrollDirection::Up => self.focus_up(),
            ScrollDirection::Down => self.focus_down(),
        }
        EventResult::Consumed
    }
}

/// Shared outside-click router.
///
/// Terminal backends deliver one click event per press with no notion of
/// bubbling, so instead of every widget scanning every click, hosts register
/// their selects here and feed clicks to [`DismissRouter::route_click`]:
/// the widget under the pointer handles the click, and every other open
/// widget is closed. Registered handles are cheap clones sharing state with
/// the originals.
#[derive(Debug, Default)]
pub struct DismissRouter {
    selects: Vec<SearchSelect>,
}

impl DismissRouter {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget with the router.
    pub fn register(&mut self, select: &SearchSelect) {
        self.selects.push(select.clone());
    }

    /// Route a primary click: dispatch to the widget under the pointer and
    /// dismiss every other open dropdown.
    pub fn route_click(&self, x: u16, y: u16) -> EventResult {
        let mut result = EventResult::Ignored;
        for select in &self.selects {
            if select.contains(x, y) {
                let handled = select.on_click(x, y);
                if handled.is_handled() {
                    result = handled;
                }
            } else if select.is_open() {
                debug!("{}: outside click, dismissing", select.id());
                select.close();
            }
        }
        result
    }
}
