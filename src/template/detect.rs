//! Placeholder detection.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Matches `{{name}}` where `name` is one or more non-`}` characters.
pub(super) static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("Invalid placeholder regex"));

/// Detect the distinct placeholder names in `content`.
///
/// Names are returned in order of first appearance with duplicates
/// collapsed. Unbalanced delimiters are skipped rather than reported, so
/// this never fails.
///
/// ```text
/// detect("{{b}} {{a}} {{b}}") == ["b", "a"]
/// ```
pub fn detect(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for caps in PLACEHOLDER_REGEX.captures_iter(content) {
        let Some(m) = caps.get(1) else {
            continue;
        };
        let name = m.as_str();
        if seen.insert(name) {
            names.push(name.to_string());
        }
    }

    names
}

/// Returns true if `content` contains at least one placeholder.
pub fn has_placeholders(content: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(content)
}
