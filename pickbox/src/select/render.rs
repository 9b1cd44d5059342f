//! Rendering for the SearchSelect widget.
//!
//! Rendering is a pure projection of (registry, selection, filter, focus,
//! open state) into the trigger line and, while open, a dropdown drawn below
//! the trigger. The renderer records the trigger, dropdown, and tag-remove
//! geometry on the widget so the event layer can hit-test clicks.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

use super::SearchSelect;
use super::selection::SelectMode;

/// Maximum dropdown rows shown at once; longer lists scroll to keep the
/// focused row visible.
pub const MAX_DROPDOWN_ROWS: u16 = 8;

/// Remove control of one rendered tag: clicking the `×` cell at `remove_x`
/// (absolute column) deselects `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRegion {
    pub value: String,
    pub remove_x: u16,
}

/// Render the widget: trigger line plus, while open, the dropdown.
///
/// `focused` marks the trigger as the host's keyboard focus target.
pub fn render(frame: &mut Frame, area: Rect, select: &SearchSelect, focused: bool, theme: &Theme) {
    select.set_anchor_rect(area);

    render_trigger(frame, area, select, focused, theme);

    if select.is_open() {
        let overlay = dropdown_rect(area, select.filtered_count(), frame.area());
        select.set_overlay_rect(Some(overlay));
        render_dropdown(frame, overlay, select, theme);
    } else {
        select.set_overlay_rect(None);
    }
}

/// Render the trigger line.
///
/// Closed: the selection display (placeholder, label, or tags) plus a `▼`
/// indicator. Open: multi-mode tags stay visible, followed by the live
/// search input with a block cursor, plus a `▲` indicator.
pub fn render_trigger(
    frame: &mut Frame,
    area: Rect,
    select: &SearchSelect,
    focused: bool,
    theme: &Theme,
) {
    let base = if focused {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };

    // Indicator occupies the last cell, preceded by a space.
    let inner_width = area.width.saturating_sub(2);

    let mut spans: Vec<Span> = Vec::new();
    let mut used: u16 = 0;
    let mut regions: Vec<TagRegion> = Vec::new();

    if select.mode() == SelectMode::Multiple {
        let (tag_spans, tag_regions, tag_width) =
            tag_spans(select, area.x, inner_width, theme);
        spans.extend(tag_spans);
        regions = tag_regions;
        used = tag_width;
    }

    if select.is_open() {
        // Live search input with a block cursor at the edit position.
        let term = select.search();
        let cursor = select.search_cursor();
        let before = &term[..cursor];
        let at: Option<char> = term[cursor..].chars().next();
        let after: &str = at.map(|c| &term[cursor + c.len_utf8()..]).unwrap_or("");

        let cursor_style = base.add_modifier(Modifier::REVERSED);
        spans.push(Span::styled(before.to_string(), base));
        match at {
            Some(c) => {
                spans.push(Span::styled(c.to_string(), cursor_style));
                spans.push(Span::styled(after.to_string(), base));
            }
            None => spans.push(Span::styled(" ", cursor_style)),
        }
    } else if select.selection_is_empty() {
        spans.push(Span::styled(
            truncate(&select.placeholder(), inner_width.saturating_sub(used) as usize),
            base.add_modifier(Modifier::DIM),
        ));
    } else if select.mode() == SelectMode::Single {
        // Label of the selected option, or the raw value for stale entries.
        let value = select.selected_values().into_iter().next().unwrap_or_default();
        spans.push(Span::styled(
            truncate(&select.display_label(&value), inner_width as usize),
            base,
        ));
    }

    // Pad out to the indicator column.
    let content_width: u16 = spans.iter().map(|s| s.content.width() as u16).sum();
    if content_width < inner_width {
        spans.push(Span::styled(
            " ".repeat((inner_width - content_width) as usize),
            base,
        ));
    }

    let indicator = if select.is_open() { "▲" } else { "▼" };
    spans.push(Span::styled(" ", base));
    spans.push(Span::styled(
        indicator,
        Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    select.set_tag_regions(regions);
}

/// Build the tag spans for a multi-select trigger.
///
/// Returns the spans, the remove-control regions (absolute columns), and the
/// total width consumed. Tags that do not fit are collapsed into a `+N`
/// marker with no remove control.
fn tag_spans(
    select: &SearchSelect,
    origin_x: u16,
    max_width: u16,
    theme: &Theme,
) -> (Vec<Span<'static>>, Vec<TagRegion>, u16) {
    let values = select.selected_values();
    let tag_style = Style::default().fg(theme.text).bg(theme.tag_bg);
    let remove_style = Style::default().fg(theme.muted).bg(theme.tag_bg);

    let mut spans = Vec::new();
    let mut regions = Vec::new();
    let mut used: u16 = 0;

    for (i, value) in values.iter().enumerate() {
        let label = select.display_label(value);
        // "label ×" plus a separating space after the tag
        let label_width = label.width() as u16;
        let tag_width = label_width + 2;
        let remaining = values.len() - i;

        if used + tag_width + 1 > max_width {
            let marker = format!("+{remaining}");
            let marker_width = marker.width() as u16;
            if used + marker_width <= max_width {
                spans.push(Span::styled(marker, Style::default().fg(theme.muted)));
                used += marker_width;
            }
            break;
        }

        spans.push(Span::styled(format!("{label} "), tag_style));
        spans.push(Span::styled("×", remove_style));
        spans.push(Span::raw(" "));
        regions.push(TagRegion {
            value: value.clone(),
            remove_x: origin_x + used + label_width + 1,
        });
        used += tag_width + 1;
    }

    (spans, regions, used)
}

/// Compute where the dropdown goes: below the trigger when there is room,
/// above it otherwise, never wider than the trigger.
fn dropdown_rect(anchor: Rect, filtered_count: usize, frame_area: Rect) -> Rect {
    // At least one row for the "no results" line.
    let wanted = (filtered_count.max(1) as u16).min(MAX_DROPDOWN_ROWS);

    let below_y = anchor.y.saturating_add(anchor.height);
    let space_below = frame_area.bottom().saturating_sub(below_y);
    let space_above = anchor.y.saturating_sub(frame_area.y);

    if space_below >= wanted || space_below >= space_above {
        Rect {
            x: anchor.x,
            y: below_y,
            width: anchor.width,
            height: wanted.min(space_below),
        }
    } else {
        let height = wanted.min(space_above);
        Rect {
            x: anchor.x,
            y: anchor.y.saturating_sub(height),
            width: anchor.width,
            height,
        }
    }
}

/// Render the dropdown rows.
fn render_dropdown(frame: &mut Frame, area: Rect, select: &SearchSelect, theme: &Theme) {
    if area.height == 0 || area.width == 0 {
        select.set_overlay_offset(0);
        return;
    }

    let surface = Style::default().bg(theme.surface);
    let filtered = select.filtered_indices();

    if filtered.is_empty() {
        // Single non-interactive row; never focusable, never clickable.
        select.set_overlay_offset(0);
        let row = Paragraph::new(Line::from(Span::styled(
            " no results",
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
        )))
        .style(surface);
        frame.render_widget(row, area);
        return;
    }

    // Scroll window keeping the focused row visible.
    let height = area.height as usize;
    let offset = match select.focus() {
        Some(focus) if focus + 1 > height => focus + 1 - height,
        _ => 0,
    };
    select.set_overlay_offset(offset);

    let multi = select.mode() == SelectMode::Multiple;
    for (row, filtered_index) in (offset..filtered.len()).enumerate().take(height) {
        let Some(option) = select.filtered_option(filtered_index) else {
            break;
        };
        let is_focus = select.focus() == Some(filtered_index);
        let is_selected = select.is_selected(&option.value);

        let style = if is_focus {
            Style::default().fg(theme.focus_fg).bg(theme.focus_bg)
        } else if is_selected {
            Style::default().fg(theme.text).bg(theme.selected_bg)
        } else if option.disabled {
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM).bg(theme.surface)
        } else {
            Style::default().fg(theme.text).bg(theme.surface)
        };

        let mark = if multi {
            if is_selected { "✓ " } else { "  " }
        } else {
            " "
        };
        let text = truncate(
            &format!("{mark}{}", option.label),
            area.width as usize,
        );

        let row_area = Rect {
            x: area.x,
            y: area.y + row as u16,
            width: area.width,
            height: 1,
        };
        let padded = format!("{text:width$}", width = area.width as usize);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(padded, style))), row_area);
    }
}

/// Truncate a string to a display width, appending `…` when cut.
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w >= max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
