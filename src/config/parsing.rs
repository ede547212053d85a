// src/config/parsing.rs

use std::collections::HashSet;

/// Normalizes a comma-separated extension list into a set of dot-prefixed,
/// lowercase extensions. Whitespace around entries is trimmed and empty
/// entries are discarded, so `"py,  , Java  "` becomes `{".py", ".java"}`.
pub(super) fn parse_extension_list(list: &str) -> HashSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let lowered = entry.to_lowercase();
            if lowered.starts_with('.') {
                lowered
            } else {
                format!(".{}", lowered)
            }
        })
        .collect()
}
