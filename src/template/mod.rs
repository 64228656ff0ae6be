//! Placeholder template engine for prompt content.
//!
//! This module provides:
//!
//! - **Detection**: find the distinct `{{name}}` placeholders in content
//! - **Bindings**: the per-session value for each placeholder
//! - **Rendering**: substitute bound values and report whether every
//!   placeholder has been filled
//! - **Session**: content, detected names and bindings kept in sync
//!
//! # Syntax
//!
//! ```text
//! Write a cover letter for the {{job_title}} position at {{company}}.
//! ```
//!
//! A placeholder is `{{`, one or more characters other than `}`, then `}}`.
//! The name is taken verbatim: `{{ name }}` is the placeholder ` name `.
//! There is no escaping, nesting, or conditional syntax.
//!
//! Every function here is pure. Callers re-run `detect` after the content
//! changes and `render` after any binding changes.

mod bindings;
mod detect;
mod render;
mod session;

pub use bindings::Bindings;
pub use detect::{detect, has_placeholders};
pub use render::{RenderResult, render};
pub use session::TemplateSession;
