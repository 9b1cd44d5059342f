//! Substring filtering over the option registry.

use super::option::SelectOption;

/// Filter options by a case-insensitive substring query.
///
/// Returns indices into `options`, in registry order. An option matches if
/// the query is a substring of either its label or its value. Empty query
/// returns all indices. No fuzzy matching, no ranking.
///
/// Disabled options are kept: they stay visible in the dropdown, just not
/// committable.
pub fn substring_filter(query: &str, options: &[SelectOption]) -> Vec<usize> {
    // Empty query returns all options
    if query.is_empty() {
        return (0..options.len()).collect();
    }

    let needle = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, opt)| {
            opt.label.to_lowercase().contains(&needle)
                || opt.value.to_lowercase().contains(&needle)
        })
        .map(|(index, _)| index)
        .collect()
}
