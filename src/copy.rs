//! Copy action: the one operation that writes rendered text to the clipboard.
//!
//! Copying is refused while any placeholder is unfilled. The clipboard
//! itself sits behind the [`Clipboard`] trait so the gate can be exercised
//! without touching the OS clipboard.

use crate::template::RenderResult;
use thiserror::Error;
use tracing::debug;

/// Errors from the copy action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// Copy was requested while placeholders were still unfilled.
    #[error(
        "please fill in all variables before copying the prompt (missing: {})",
        missing.join(", ")
    )]
    Rejected {
        /// The unfilled placeholder names.
        missing: Vec<String>,
    },

    /// The clipboard backend failed.
    #[error("Clipboard write failed: {0}")]
    Backend(String),
}

/// A destination for copied text.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), CopyError>;
}

/// Copy a render result to `clipboard`.
///
/// `Incomplete` results are rejected without writing anything; `Complete`
/// and `Verbatim` results are written as-is.
pub fn copy(result: &RenderResult, clipboard: &mut dyn Clipboard) -> Result<(), CopyError> {
    let Some(text) = result.final_text() else {
        return Err(CopyError::Rejected {
            missing: result.missing().to_vec(),
        });
    };

    clipboard.write_text(text)?;
    debug!(bytes = text.len(), "copied prompt to clipboard");
    Ok(())
}

/// The system clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    #[cfg(feature = "clipboard")]
    fn write_text(&mut self, text: &str) -> Result<(), CopyError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| CopyError::Backend(format!("failed to access clipboard: {}", e)))?;

        clipboard
            .set_text(text)
            .map_err(|e| CopyError::Backend(format!("failed to copy to clipboard: {}", e)))
    }

    #[cfg(not(feature = "clipboard"))]
    fn write_text(&mut self, _text: &str) -> Result<(), CopyError> {
        Err(CopyError::Backend(
            "clipboard support was not compiled in (enable the `clipboard` feature)".to_string(),
        ))
    }
}

/// An in-memory clipboard that records every write.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Vec<String>,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent write, if any.
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    /// Every write, oldest first.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CopyError> {
        self.writes.push(text.to_string());
        Ok(())
    }
}
