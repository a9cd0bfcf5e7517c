// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod terminal_adapter;
pub mod terminal_query_error;
#[cfg(unix)]
pub mod tty_terminal;

// Re-export.
pub use terminal_adapter::*;
pub use terminal_query_error::*;
#[cfg(unix)]
pub use tty_terminal::*;
