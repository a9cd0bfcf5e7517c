// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{TermPos, TermSize, TerminalQueryError};
use std::{io::{self, Write},
          time::Duration};

/// Everything the line editor needs from a terminal.
///
/// [`crate::TtyTerminal`] talks to the real controlling terminal. Tests use a mock that
/// replays scripted input bytes into a simulated screen.
pub trait TerminalAdapter {
    /// Switch to non-canonical, no-echo input.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal settings can't be changed.
    fn enter_raw_mode(&mut self) -> miette::Result<()>;

    /// Undo [`TerminalAdapter::enter_raw_mode()`]. A no-op if the mode was never
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the saved settings can't be written back.
    fn restore_mode(&mut self) -> miette::Result<()>;

    /// Block until the next input byte is available. `Ok(None)` means the input
    /// stream has ended.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Where the terminal cursor is right now (1-based).
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal doesn't answer.
    fn query_cursor_position(&mut self) -> Result<TermPos, TerminalQueryError>;

    /// Current viewport dimensions in cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the size can't be determined.
    fn query_viewport_size(&mut self) -> Result<TermSize, TerminalQueryError>;

    /// Sink for ANSI output. Callers flush it after each repaint.
    fn output(&mut self) -> &mut dyn Write;
}

/// How patiently a terminal query waits for the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPolicy {
    /// Number of times the request is sent before giving up. At least 1.
    pub attempts: u8,
    /// How long each attempt waits for the answer.
    pub timeout: Duration,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            timeout: Duration::from_millis(250),
        }
    }
}
