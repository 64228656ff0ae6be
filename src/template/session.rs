//! One use/edit session over a single prompt's content.

use super::bindings::Bindings;
use super::detect::detect;
use super::render::{RenderResult, render};

/// Content, its detected placeholders, and the session's bindings.
///
/// Detection is re-run on every content change; bindings are reset only
/// when the set of placeholder names actually changes.
#[derive(Debug, Clone)]
pub struct TemplateSession {
    content: String,
    names: Vec<String>,
    bindings: Bindings,
}

impl TemplateSession {
    /// Open a session with every detected placeholder bound to `""`.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let names = detect(&content);
        let bindings = Bindings::initialize(&names);
        Self {
            content,
            names,
            bindings,
        }
    }

    /// Replace the content, re-detecting placeholders.
    ///
    /// Returns true if the bindings were reset.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        self.content = content.into();
        self.names = detect(&self.content);
        self.bindings.sync(&self.names)
    }

    /// Bind a value to a placeholder.
    ///
    /// Returns false (and records nothing) if `name` is not a placeholder
    /// of the current content.
    pub fn bind(&mut self, name: &str, value: impl Into<String>) -> bool {
        if !self.names.iter().any(|n| n == name) {
            return false;
        }
        self.bindings.set(name, value);
        true
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Detected placeholder names, in first-occurrence order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Names still waiting for a non-blank value.
    pub fn missing(&self) -> Vec<String> {
        self.bindings.missing(&self.names)
    }

    /// Render the current content against the current bindings.
    pub fn render(&self) -> RenderResult {
        render(&self.content, &self.names, &self.bindings)
    }
}
