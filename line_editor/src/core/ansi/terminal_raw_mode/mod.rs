// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Non-canonical terminal mode for the line editor.
//!
//! ## Cooked Mode vs Non-canonical Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - The kernel handles backspace, `Ctrl+U`, `Ctrl+W` itself
//! - Echoing is enabled (typed characters appear on screen)
//!
//! **Non-canonical Mode** (what [`RawModeGuard`] sets up):
//! - `ICANON` off: bytes are available immediately, one `read` per keystroke
//! - `ECHO` off: the editor paints every character itself
//! - `VMIN=1, VTIME=0`: a read blocks until at least one byte arrives
//!
//! Everything else is left alone. `ISIG` stays on, so `Ctrl+C` still interrupts the
//! process, and `ICRNL` stays on, so the Enter key arrives as `\n`. This is gentler
//! than `cfmakeraw` and is all a line editor needs.
//!
//! ## Save and Restore
//!
//! The settings in effect before the switch are owned by the [`RawModeGuard`] that
//! made it. They are written back when the guard is consumed with
//! [`RawModeGuard::restore()`], or when it is dropped on an early return or a panic.
//! No process wide copy of the settings exists, so two guards never fight over one
//! global slot.
//!
//! ## `stty` equivalent
//!
//! ```bash
//! old_stty=$(stty -g)
//! stty -icanon -echo min 1 time 0
//! # ... edit ...
//! stty "$old_stty"
//! ```
//!
//! ## Platform Support
//!
//! - **Unix/Linux/macOS**: Uses rustix's safe termios API
//! - **Other**: [`RawModeGuard::new()`] returns an error
//!
//! ## Usage Example
//!
//! ```no_run
//! use agenda_line_editor::RawModeGuard;
//!
//! let guard = RawModeGuard::new()?;
//! // ... read bytes one at a time ...
//! guard.restore()?;
//! # Ok::<(), miette::Report>(())
//! ```

// Private modules (hide internal structure).
mod raw_mode_core;

#[cfg(unix)]
mod raw_mode_unix;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;
#[cfg(unix)]
pub use raw_mode_unix::{TerminalFd, get_terminal_fd};
