//! Placeholder substitution and completion tracking.

use super::bindings::Bindings;
use super::detect::PLACEHOLDER_REGEX;
use regex::Captures;
use std::collections::HashSet;

/// Outcome of rendering prompt content against its bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderResult {
    /// Every placeholder was filled; holds the substituted text.
    Complete(String),
    /// At least one placeholder is empty or whitespace-only.
    Incomplete {
        /// Content with filled placeholders substituted and unfilled ones
        /// left as their literal `{{name}}` token.
        preview: String,
        /// Unfilled names, in detection order.
        missing: Vec<String>,
    },
    /// The content has no placeholders and passes through unchanged.
    Verbatim(String),
}

impl RenderResult {
    /// Returns true if the result may be copied as final text.
    pub fn is_ready(&self) -> bool {
        !matches!(self, RenderResult::Incomplete { .. })
    }

    /// Final text, or `None` while placeholders remain unfilled.
    pub fn final_text(&self) -> Option<&str> {
        match self {
            RenderResult::Complete(text) | RenderResult::Verbatim(text) => Some(text),
            RenderResult::Incomplete { .. } => None,
        }
    }

    /// Text to show the user: the final text, or the partial preview.
    pub fn display_text(&self) -> &str {
        match self {
            RenderResult::Complete(text) | RenderResult::Verbatim(text) => text,
            RenderResult::Incomplete { preview, .. } => preview,
        }
    }

    /// Unfilled placeholder names (empty unless incomplete).
    pub fn missing(&self) -> &[String] {
        match self {
            RenderResult::Incomplete { missing, .. } => missing,
            _ => &[],
        }
    }
}

/// Render `content` by substituting the bound value of each name in `names`.
///
/// All occurrences are replaced in a single left-to-right pass over the
/// placeholder spans, so replacement order across names does not matter
/// and substituted values are never re-scanned. Names are compared as
/// literal text. A placeholder whose name is not in `names` is left as is.
///
/// ```text
/// content:  "Hello {{name}}, your order {{id}} is ready."
/// bindings: name = "Ada", id = "42"
/// result:   Complete("Hello Ada, your order 42 is ready.")
/// ```
pub fn render<S: AsRef<str>>(content: &str, names: &[S], bindings: &Bindings) -> RenderResult {
    if names.is_empty() {
        return RenderResult::Verbatim(content.to_string());
    }

    let wanted: HashSet<&str> = names.iter().map(AsRef::as_ref).collect();
    let text = PLACEHOLDER_REGEX
        .replace_all(content, |caps: &Captures| {
            let name = &caps[1];
            if wanted.contains(name) && bindings.is_filled(name) {
                bindings.get(name).unwrap_or_default().to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned();

    let missing = bindings.missing(names);
    if missing.is_empty() {
        RenderResult::Complete(text)
    } else {
        RenderResult::Incomplete {
            preview: text,
            missing,
        }
    }
}
