//! Filesystem utilities for the prompt wallet.
//!
//! The prompt collection is rewritten as a whole on every change, so every
//! write goes through [`atomic_write_file`] to avoid leaving a truncated
//! `prompts.json` behind after a crash.

pub mod atomic;

pub use atomic::atomic_write_file;
