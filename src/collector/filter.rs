// src/collector/filter.rs

use crate::collector::CollectOptions;

/// Extracts the extension used for filtering: the substring from the last
/// `.` in the file name to the end, lower-cased. A name without a dot has
/// the empty extension, so `archive.tar.gz` yields `.gz` and `Makefile`
/// yields `""`.
pub fn file_extension(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) => file_name[idx..].to_lowercase(),
        None => String::new(),
    }
}

/// Checks if a file name passes the include/exclude extension filters.
///
/// The filtering logic follows these rules in order:
///
/// 1. **Exclusion precedence:** if the extension is in
///    `exclude_extensions`, the file is rejected. This check is
///    unconditional and overrides both all-files mode and a matching
///    allow-list entry.
/// 2. **Allow-list requirement:** when `all_files` is off, the extension
///    must be a member of `include_extensions`.
/// 3. **Default pass:** anything else is accepted.
///
/// The comparison is always case-insensitive; both sets hold lowercase
/// dot-prefixed entries and the extracted extension is lowered to match.
///
/// # Examples
///
/// ```
/// use collect_code::collector::{filter::passes_extension_filters, CollectOptions};
///
/// let mut options = CollectOptions {
///     include_extensions: [".py".to_string()].into_iter().collect(),
///     ..Default::default()
/// };
/// assert!(passes_extension_filters("main.py", &options));
/// assert!(passes_extension_filters("Main.PY", &options));
/// assert!(!passes_extension_filters("notes.txt", &options));
///
/// options.all_files = true;
/// options.exclude_extensions.insert(".log".to_string());
/// assert!(passes_extension_filters("notes.txt", &options));
/// assert!(!passes_extension_filters("trace.log", &options)); // Deny-list still wins
/// ```
pub fn passes_extension_filters(file_name: &str, options: &CollectOptions) -> bool {
    let extension = file_extension(file_name);

    // 1. The deny-list is evaluated regardless of mode and always wins.
    if options.exclude_extensions.contains(&extension) {
        return false;
    }

    // 2. Outside all-files mode, the allow-list is required.
    if !options.all_files && !options.include_extensions.contains(&extension) {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(entries: &[&str]) -> HashSet<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    fn options(
        all_files: bool,
        include: &[&str],
        exclude: &[&str],
    ) -> CollectOptions {
        CollectOptions {
            all_files,
            include_extensions: set(include),
            exclude_extensions: set(exclude),
            ..Default::default()
        }
    }

    #[test]
    fn test_extension_extraction() {
        assert_eq!(file_extension("main.py"), ".py");
        assert_eq!(file_extension("Main.PY"), ".py");
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
        assert_eq!(file_extension("Makefile"), "");
        assert_eq!(file_extension(".env"), ".env");
    }

    #[test]
    fn test_default_mode_requires_allow_list() {
        let opts = options(false, &[".py", ".java"], &[]);
        assert!(passes_extension_filters("a.py", &opts));
        assert!(passes_extension_filters("B.Java", &opts)); // Case insensitive
        assert!(!passes_extension_filters("c.txt", &opts));
        assert!(!passes_extension_filters("Makefile", &opts)); // Empty extension fails allow-list
    }

    #[test]
    fn test_all_files_mode_accepts_everything_not_denied() {
        let opts = options(true, &[".py"], &[".log"]);
        assert!(passes_extension_filters("c.txt", &opts));
        assert!(passes_extension_filters("Makefile", &opts));
        assert!(!passes_extension_filters("trace.log", &opts));
        assert!(!passes_extension_filters("TRACE.LOG", &opts)); // Case insensitive
    }

    #[test]
    fn test_deny_list_overrides_allow_list() {
        let opts = options(false, &[".py", ".md"], &[".md"]);
        assert!(passes_extension_filters("a.py", &opts));
        assert!(!passes_extension_filters("readme.md", &opts));
    }

    #[test]
    fn test_empty_extension_only_matches_explicit_entry() {
        let opts = options(false, &[""], &[]);
        assert!(passes_extension_filters("Makefile", &opts));
        assert!(!passes_extension_filters("main.py", &opts));

        let deny_empty = options(true, &[], &[""]);
        assert!(!passes_extension_filters("Makefile", &deny_empty));
        assert!(passes_extension_filters("main.py", &deny_empty));
    }
}
