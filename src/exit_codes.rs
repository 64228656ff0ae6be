//! Exit code constants for the pwallet CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid input)
//! - 2: Prompt not found
//! - 3: Storage failure (prompt file, config, I/O)
//! - 4: Copy rejected (placeholders left unfilled)
//! - 5: Clipboard failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or input that fails validation.
pub const USER_ERROR: i32 = 1;

/// No prompt with the requested id exists.
pub const NOT_FOUND: i32 = 2;

/// Reading or writing the prompt file, config, or another data file failed.
pub const STORAGE_FAILURE: i32 = 3;

/// Copy was requested while at least one placeholder is still unfilled.
pub const COPY_REJECTED: i32 = 4;

/// The system clipboard could not be written.
pub const CLIPBOARD_FAILURE: i32 = 5;
