// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # agenda line editor
//!
//! The interactive input facility of the `agenda` event/todo CLI. It reads raw bytes
//! from the terminal with canonical mode and echo disabled, decodes them into editing
//! commands, applies them to an owned byte buffer, and repaints the edited line after
//! every keystroke.
//!
//! ```text
//! raw bytes ──▶ EscapeDecoder ──▶ EditCommand ──▶ EditBuffer (content, index)
//!                                                        │
//!            terminal ◀── repaint ◀── position_model ◀───╯
//! ```
//!
//! The only entry point the rest of the CLI needs is [`edit_line()`]. Everything that
//! touches the real terminal sits behind the [`TerminalAdapter`] trait, so the editor
//! can be driven from tests with a scripted byte stream and a simulated screen.
//!
//! ```no_run
//! use agenda_line_editor::{edit_line, EditOutcome};
//!
//! match edit_line(Some("dentist".into())) {
//!     Ok(EditOutcome::Line(line)) => println!("got: {line}"),
//!     Ok(EditOutcome::Eof(partial)) => println!("input closed: {partial}"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod agenda_cli;
pub mod core;
pub mod line_editor;

// Re-export.
#[allow(ambiguous_glob_reexports)]
pub use agenda_cli::*;
#[allow(ambiguous_glob_reexports)]
pub use core::*;
#[allow(ambiguous_glob_reexports)]
pub use line_editor::*;
