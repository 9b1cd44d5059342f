//! SearchSelect widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use log::{debug, warn};
use ratatui::layout::Rect;
use thiserror::Error;

use crate::events::{SelectEvent, SelectEventKind};

use super::filter::substring_filter;
use super::option::{OptionItem, SelectOption};
use super::render::TagRegion;
use super::selection::{SelectMode, Selection};

/// Unique identifier for a SearchSelect widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchSelectId(usize);

impl SearchSelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SearchSelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__search_select_{}", self.0)
    }
}

/// Error raised when a serialized multi-select value cannot be parsed.
///
/// Never crosses the public boundary: `set_value` degrades to an empty
/// selection instead.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("multi-select value is not a JSON string array: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Internal state for a SearchSelect widget.
#[derive(Debug, Default)]
struct SearchSelectInner {
    /// Cached option registry, replaced wholesale by `set_options`
    options: Vec<SelectOption>,
    /// Selected option values
    selection: Selection,
    /// Single or multiple selection
    mode: SelectMode,
    /// Live search term
    search: String,
    /// Cursor position in the search term (byte offset)
    search_cursor: usize,
    /// Indices into `options` matching the search term, in registry order
    filtered: Vec<usize>,
    /// Keyboard focus within `filtered` (None = no focus)
    focus: Option<usize>,
    /// Placeholder shown when nothing is selected
    placeholder: String,
    /// Disabled widgets cannot be opened
    disabled: bool,
    /// Trigger rect from the last render (for hit testing)
    anchor_rect: Option<Rect>,
    /// Dropdown rect from the last render (for hit testing)
    overlay_rect: Option<Rect>,
    /// First visible filtered row in the dropdown (scroll window)
    overlay_offset: usize,
    /// Tag remove controls from the last render (multi mode)
    tag_regions: Vec<TagRegion>,
    /// Queued notifications, drained by the host
    events: Vec<SelectEvent>,
}

/// A searchable dropdown select widget with reactive state.
///
/// `SearchSelect` manages its own option registry, selection, search filter,
/// and open/closed interaction state. When open it shows a dropdown of
/// options narrowed by a live search term; committing an option replaces the
/// selection (single mode) or toggles membership (multi mode).
///
/// Clones share state, so the same widget can be held by the event handler
/// and the render loop.
///
/// # Example
///
/// ```ignore
/// let teacher = SearchSelect::with_placeholder("Assign a teacher");
/// teacher.set_options(&[("t1", "Alice"), ("t2", "Bob")]);
///
/// // in the event loop:
/// teacher.on_key(&KeyCombo::key(Key::Enter));
/// for event in teacher.take_events() {
///     if let SelectEventKind::Change { value } = event.kind {
///         save_assignment(&value);
///     }
/// }
/// ```
#[derive(Debug)]
pub struct SearchSelect {
    /// Unique identifier for this instance
    id: SearchSelectId,
    /// Internal state
    inner: Arc<RwLock<SearchSelectInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Whether the dropdown is open
    is_open: Arc<AtomicBool>,
}

impl SearchSelect {
    /// Create a new single-select widget with no options.
    pub fn new() -> Self {
        Self::with_mode(SelectMode::Single)
    }

    /// Create a multi-select widget.
    pub fn multiple() -> Self {
        Self::with_mode(SelectMode::Multiple)
    }

    /// Create a widget with an explicit selection mode.
    pub fn with_mode(mode: SelectMode) -> Self {
        Self {
            id: SearchSelectId::new(),
            inner: Arc::new(RwLock::new(SearchSelectInner {
                mode,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            is_open: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a single-select widget with a placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        let select = Self::new();
        if let Ok(mut guard) = select.inner.write() {
            guard.placeholder = placeholder.into();
        }
        select
    }

    /// Get the unique ID for this widget.
    pub fn id(&self) -> SearchSelectId {
        self.id
    }

    /// Get the ID as a string (for event correlation).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Option registry
    // -------------------------------------------------------------------------

    /// Replace the option registry.
    ///
    /// Items with an empty value are dropped: they cannot be selected or
    /// matched, so registering them would only produce dead rows. The
    /// selection is never touched here; values whose option disappeared stay
    /// selected and render as raw values until removed.
    pub fn set_options<I: OptionItem>(&self, items: &[I]) {
        if let Ok(mut guard) = self.inner.write() {
            let previous = Self::filtered_values_locked(&guard);
            guard.options = items
                .iter()
                .filter_map(|item| {
                    let value = item.option_value();
                    if value.is_empty() {
                        warn!("{}: dropping option with empty value", self.id);
                        return None;
                    }
                    Some(SelectOption {
                        value,
                        label: item.option_label(),
                        disabled: item.option_disabled(),
                    })
                })
                .collect();
            Self::refilter_from_locked(&mut guard, &previous);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Re-derive the filtered list from the current registry.
    ///
    /// Idempotent: with no intervening registry or search mutation this is a
    /// no-op, and it never alters the selection.
    pub fn refresh(&self) {
        if let Ok(mut guard) = self.inner.write() {
            Self::refilter_locked(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the full option registry.
    pub fn options(&self) -> Vec<SelectOption> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    /// Get the number of registered options.
    pub fn option_count(&self) -> usize {
        self.inner.read().map(|guard| guard.options.len()).unwrap_or(0)
    }

    /// Look up the label for a value, if the option is registered.
    pub fn label_for(&self, value: &str) -> Option<String> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .options
                .iter()
                .find(|opt| opt.value == value)
                .map(|opt| opt.label.clone())
        })
    }

    /// Label for a value, falling back to the raw value for stale entries.
    pub fn display_label(&self, value: &str) -> String {
        self.label_for(value).unwrap_or_else(|| value.to_string())
    }

    // -------------------------------------------------------------------------
    // Mode / placeholder / disabled
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn mode(&self) -> SelectMode {
        self.inner.read().map(|guard| guard.mode).unwrap_or_default()
    }

    /// Change the selection mode.
    ///
    /// Switching Multiple -> Single truncates the selection to the first
    /// selected value in registry order (stale values, having no registry
    /// position, come last). No change notification is emitted; this is a
    /// host reconfiguration, not a user edit.
    pub fn set_mode(&self, mode: SelectMode) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.mode == mode {
                return;
            }
            guard.mode = mode;
            if mode == SelectMode::Single && guard.selection.len() > 1 {
                let keep = guard
                    .options
                    .iter()
                    .find(|opt| guard.selection.is_selected(&opt.value))
                    .map(|opt| opt.value.clone())
                    .or_else(|| guard.selection.values().into_iter().next());
                match keep {
                    Some(value) => {
                        guard.selection.replace(&value);
                    }
                    None => {
                        guard.selection.clear();
                    }
                }
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the widget is disabled.
    pub fn is_disabled(&self) -> bool {
        self.inner.read().map(|guard| guard.disabled).unwrap_or(false)
    }

    /// Enable or disable the widget. Disabling an open widget closes it.
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.disabled == disabled {
                return;
            }
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
        if disabled {
            self.close();
        }
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Check if the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    /// Open the dropdown.
    ///
    /// No-op on disabled widgets. On entry the search term is cleared and
    /// keyboard focus resets, so the full registry is visible.
    pub fn open(&self) {
        if self.is_disabled() {
            debug!("{}: open suppressed, widget disabled", self.id);
            return;
        }
        if !self.is_open.swap(true, Ordering::SeqCst) {
            debug!("{}: open", self.id);
            if let Ok(mut guard) = self.inner.write() {
                Self::reset_transient_locked(&mut guard);
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Close the dropdown. Search term and focus reset on the way out.
    pub fn close(&self) {
        if self.is_open.swap(false, Ordering::SeqCst) {
            debug!("{}: close", self.id);
            if let Ok(mut guard) = self.inner.write() {
                Self::reset_transient_locked(&mut guard);
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Search term
    // -------------------------------------------------------------------------

    /// Get the live search term.
    pub fn search(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.search.clone())
            .unwrap_or_default()
    }

    /// Get the search cursor position (byte offset).
    pub fn search_cursor(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.search_cursor)
            .unwrap_or(0)
    }

    /// Replace the search term, placing the cursor at the end.
    pub fn set_search(&self, term: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.search = term.into();
            guard.search_cursor = guard.search.len();
            self.search_changed_locked(&mut guard);
        }
    }

    /// Insert a character at the search cursor.
    pub fn insert_char(&self, c: char) {
        if let Ok(mut guard) = self.inner.write() {
            let cursor = guard.search_cursor;
            guard.search.insert(cursor, c);
            guard.search_cursor += c.len_utf8();
            self.search_changed_locked(&mut guard);
        }
    }

    /// Delete the character before the search cursor (backspace).
    pub fn delete_char_before(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.search_cursor > 0
        {
            let prev = guard.search[..guard.search_cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            guard.search.remove(prev);
            guard.search_cursor = prev;
            self.search_changed_locked(&mut guard);
        }
    }

    /// Delete the character at the search cursor (delete key).
    pub fn delete_char_at(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let cursor = guard.search_cursor;
            if cursor < guard.search.len() {
                guard.search.remove(cursor);
                self.search_changed_locked(&mut guard);
            }
        }
    }

    /// Move the search cursor left one character.
    pub fn search_cursor_left(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.search_cursor > 0
        {
            guard.search_cursor = guard.search[..guard.search_cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move the search cursor right one character.
    pub fn search_cursor_right(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.search_cursor < guard.search.len()
        {
            guard.search_cursor = guard.search[guard.search_cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| guard.search_cursor + i)
                .unwrap_or(guard.search.len());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move the search cursor to the start.
    pub fn search_cursor_home(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.search_cursor != 0
        {
            guard.search_cursor = 0;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move the search cursor to the end.
    pub fn search_cursor_end(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let end = guard.search.len();
            if guard.search_cursor != end {
                guard.search_cursor = end;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Filtered view
    // -------------------------------------------------------------------------

    /// Indices into the registry matching the current search, in order.
    pub fn filtered_indices(&self) -> Vec<usize> {
        self.inner
            .read()
            .map(|guard| guard.filtered.clone())
            .unwrap_or_default()
    }

    /// Number of options matching the current search.
    pub fn filtered_count(&self) -> usize {
        self.inner.read().map(|guard| guard.filtered.len()).unwrap_or(0)
    }

    /// Get the option at a position in the filtered list.
    pub fn filtered_option(&self, filtered_index: usize) -> Option<SelectOption> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .filtered
                .get(filtered_index)
                .and_then(|&i| guard.options.get(i).cloned())
        })
    }

    // -------------------------------------------------------------------------
    // Keyboard focus
    // -------------------------------------------------------------------------

    /// Current focus within the filtered list (None = no focus).
    pub fn focus(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|guard| guard.focus)
    }

    /// Move focus down one row, clamped at the last filtered option.
    pub fn focus_down(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let last = match guard.filtered.len().checked_sub(1) {
                Some(last) => last,
                None => return,
            };
            let next = match guard.focus {
                Some(current) => (current + 1).min(last),
                None => 0,
            };
            if guard.focus != Some(next) {
                guard.focus = Some(next);
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Move focus up one row, clamped at the first filtered option.
    pub fn focus_up(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.filtered.is_empty() {
                return;
            }
            let next = match guard.focus {
                Some(current) => current.saturating_sub(1),
                None => 0,
            };
            if guard.focus != Some(next) {
                guard.focus = Some(next);
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Move focus to the first filtered option.
    pub fn focus_first(&self) {
        self.set_focus(0);
    }

    /// Move focus to the last filtered option.
    pub fn focus_last(&self) {
        let count = self.filtered_count();
        if count > 0 {
            self.set_focus(count - 1);
        }
    }

    /// Set focus to a position in the filtered list, clamped to bounds.
    pub fn set_focus(&self, filtered_index: usize) {
        if let Ok(mut guard) = self.inner.write() {
            let last = match guard.filtered.len().checked_sub(1) {
                Some(last) => last,
                None => return,
            };
            let next = Some(filtered_index.min(last));
            if guard.focus != next {
                guard.focus = next;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Get the option under keyboard focus.
    pub fn focused_option(&self) -> Option<SelectOption> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .focus
                .and_then(|f| guard.filtered.get(f))
                .and_then(|&i| guard.options.get(i).cloned())
        })
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get all selected values (sorted).
    pub fn selected_values(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.selection.values())
            .unwrap_or_default()
    }

    /// Check if a value is selected.
    pub fn is_selected(&self, value: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selection.is_selected(value))
            .unwrap_or(false)
    }

    /// Check if nothing is selected.
    pub fn selection_is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selection.is_empty())
            .unwrap_or(true)
    }

    /// Commit the option under keyboard focus (Enter).
    ///
    /// When nothing is focused, falls back to the first filtered option, so
    /// typing a narrowing search and pressing Enter commits the top match
    /// without an explicit ArrowDown. No-op when the filtered list is empty
    /// or the resolved option is disabled.
    pub fn commit_focused(&self) {
        let candidate = self.focused_option().or_else(|| self.filtered_option(0));
        if let Some(option) = candidate {
            if option.disabled {
                debug!("{}: commit suppressed, option {:?} disabled", self.id, option.value);
                return;
            }
            self.commit_value(&option.value);
        }
    }

    /// Commit a value through the single mutation path.
    ///
    /// Single mode replaces the selection and closes the dropdown; multi
    /// mode toggles membership and stays open. Every commit updates the
    /// selection, marks the widget dirty (trigger and list re-render), and
    /// queues a Change notification carrying the projected value.
    pub fn commit_value(&self, value: &str) {
        let mode = self.mode();
        if let Ok(mut guard) = self.inner.write() {
            match mode {
                SelectMode::Single => {
                    guard.selection.replace(value);
                }
                SelectMode::Multiple => {
                    guard.selection.toggle(value);
                }
            }
            debug!("{}: commit {:?}, selection now {:?}", self.id, value, guard.selection.values());
            self.push_change_locked(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
        if mode == SelectMode::Single {
            self.close();
        }
    }

    /// Remove a value from the selection (tag remove control).
    ///
    /// Works identically whether the dropdown is open or closed, and for
    /// stale values with no registered option.
    pub fn deselect(&self, value: &str) {
        if let Ok(mut guard) = self.inner.write()
            && guard.selection.remove(value)
        {
            debug!("{}: deselect {:?}", self.id, value);
            self.push_change_locked(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Value projection (two-way binding)
    // -------------------------------------------------------------------------

    /// The externally visible, serialized selection.
    ///
    /// Single mode: the bare value, or an empty string when nothing is
    /// selected. Multi mode: a JSON array of the sorted values.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| Self::projected_value_locked(&guard))
            .unwrap_or_default()
    }

    /// External entry point of the two-way binding: set the selection from
    /// its serialized form.
    ///
    /// Single mode takes the bare value (empty clears). Multi mode takes a
    /// JSON array of values; unparsable input degrades to an empty
    /// selection. No Change notification is emitted from this path, so a
    /// host echoing values back into the widget cannot loop.
    pub fn set_value(&self, raw: &str) {
        if let Ok(mut guard) = self.inner.write() {
            match guard.mode {
                SelectMode::Single => {
                    if raw.is_empty() {
                        guard.selection.clear();
                    } else {
                        guard.selection.set_values([raw]);
                    }
                }
                SelectMode::Multiple => match Self::parse_multi_value(raw) {
                    Ok(values) => guard.selection.set_values(values),
                    Err(err) => {
                        warn!("{}: {err}; clearing selection", self.id);
                        guard.selection.clear();
                    }
                },
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn parse_multi_value(raw: &str) -> Result<Vec<String>, ValueError> {
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str::<Vec<String>>(raw)?)
    }

    fn projected_value_locked(guard: &SearchSelectInner) -> String {
        match guard.mode {
            SelectMode::Single => guard.selection.values().into_iter().next().unwrap_or_default(),
            SelectMode::Multiple => {
                serde_json::to_string(&guard.selection.values()).unwrap_or_else(|_| "[]".into())
            }
        }
    }

    // -------------------------------------------------------------------------
    // Events out
    // -------------------------------------------------------------------------

    /// Drain all queued notifications.
    pub fn take_events(&self) -> Vec<SelectEvent> {
        self.inner
            .write()
            .map(|mut guard| std::mem::take(&mut guard.events))
            .unwrap_or_default()
    }

    fn push_change_locked(&self, guard: &mut RwLockWriteGuard<'_, SearchSelectInner>) {
        let value = Self::projected_value_locked(guard);
        let event = SelectEvent::new(SelectEventKind::Change { value }, self.id_string());
        guard.events.push(event);
    }

    // -------------------------------------------------------------------------
    // Hit-test rects (set by the renderer)
    // -------------------------------------------------------------------------

    /// Trigger rect from the last render.
    pub fn anchor_rect(&self) -> Option<Rect> {
        self.inner.read().ok().and_then(|guard| guard.anchor_rect)
    }

    pub(crate) fn set_anchor_rect(&self, rect: Rect) {
        if let Ok(mut guard) = self.inner.write() {
            guard.anchor_rect = Some(rect);
        }
    }

    /// Dropdown rect from the last render (only meaningful while open).
    pub fn overlay_rect(&self) -> Option<Rect> {
        self.inner.read().ok().and_then(|guard| guard.overlay_rect)
    }

    pub(crate) fn set_overlay_rect(&self, rect: Option<Rect>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.overlay_rect = rect;
        }
    }

    /// First visible filtered row in the dropdown's scroll window.
    pub(crate) fn overlay_offset(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.overlay_offset)
            .unwrap_or(0)
    }

    pub(crate) fn set_overlay_offset(&self, offset: usize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.overlay_offset = offset;
        }
    }

    /// Tag remove controls recorded by the last trigger render.
    pub(crate) fn tag_regions(&self) -> Vec<TagRegion> {
        self.inner
            .read()
            .map(|guard| guard.tag_regions.clone())
            .unwrap_or_default()
    }

    pub(crate) fn set_tag_regions(&self, regions: Vec<TagRegion>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.tag_regions = regions;
        }
    }

    /// Whether a screen point falls within this widget's bounds: the trigger
    /// region, or the dropdown while open. Used for outside-click dismissal.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        let point = ratatui::layout::Position { x, y };
        let anchor = self.anchor_rect().is_some_and(|rect| rect.contains(point));
        let overlay = self.is_open()
            && self.overlay_rect().is_some_and(|rect| rect.contains(point));
        anchor || overlay
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the widget state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// Values of the options currently in the filtered list.
    fn filtered_values_locked(guard: &SearchSelectInner) -> Vec<String> {
        guard
            .filtered
            .iter()
            .filter_map(|&i| guard.options.get(i).map(|opt| opt.value.clone()))
            .collect()
    }

    /// Re-run the filter; if the visible options changed, keyboard focus
    /// resets.
    fn refilter_locked(guard: &mut RwLockWriteGuard<'_, SearchSelectInner>) {
        let previous = Self::filtered_values_locked(guard);
        Self::refilter_from_locked(guard, &previous);
    }

    /// Refilter and reset focus unless the visible options are still
    /// `previous`. The comparison is by option value, not position: a
    /// registry swap that leaves the same indices visible still resets
    /// focus, while re-setting identical options keeps it.
    fn refilter_from_locked(
        guard: &mut RwLockWriteGuard<'_, SearchSelectInner>,
        previous: &[String],
    ) {
        guard.filtered = substring_filter(&guard.search, &guard.options);
        if Self::filtered_values_locked(guard) != previous {
            guard.focus = None;
        }
    }

    /// Common tail of every search edit: refilter, notify, mark dirty.
    fn search_changed_locked(&self, guard: &mut RwLockWriteGuard<'_, SearchSelectInner>) {
        Self::refilter_locked(guard);
        let event = SelectEvent::new(
            SelectEventKind::Search {
                term: guard.search.clone(),
            },
            self.id_string(),
        );
        guard.events.push(event);
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Reset transient UI state on open and close.
    fn reset_transient_locked(guard: &mut RwLockWriteGuard<'_, SearchSelectInner>) {
        guard.search.clear();
        guard.search_cursor = 0;
        guard.focus = None;
        Self::refilter_locked(guard);
    }
}

impl Clone for SearchSelect {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            is_open: Arc::clone(&self.is_open),
        }
    }
}

impl Default for SearchSelect {
    fn default() -> Self {
        Self::new()
    }
}
