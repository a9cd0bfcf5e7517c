// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TerminalAdapter;
use std::{fmt::{Debug, Formatter},
          ops::{Deref, DerefMut}};
use tracing::{debug, error};

/// Keeps a [`TerminalAdapter`] in non-canonical mode for as long as it is alive.
///
/// Call [`RawModeSession::restore()`] on the happy path to see restore errors. On every
/// other exit (an `?` on an I/O error, a panic unwinding through the editor) [`Drop`]
/// restores the mode and logs any failure, since there is no caller left to return it
/// to.
pub struct RawModeSession<'a, T: TerminalAdapter + ?Sized> {
    terminal: &'a mut T,
    is_active: bool,
}

impl<'a, T: TerminalAdapter + ?Sized> RawModeSession<'a, T> {
    /// # Errors
    ///
    /// Returns an error if the terminal can't be switched.
    pub fn enter(terminal: &'a mut T) -> miette::Result<Self> {
        terminal.enter_raw_mode()?;
        debug!(message = "raw mode session started");
        Ok(Self {
            terminal,
            is_active: true,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the saved terminal settings can't be written back.
    pub fn restore(mut self) -> miette::Result<()> {
        self.is_active = false;
        self.terminal.restore_mode()
    }
}

impl<T: TerminalAdapter + ?Sized> Deref for RawModeSession<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target { self.terminal }
}

impl<T: TerminalAdapter + ?Sized> DerefMut for RawModeSession<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target { self.terminal }
}

impl<T: TerminalAdapter + ?Sized> Drop for RawModeSession<'_, T> {
    fn drop(&mut self) {
        if self.is_active {
            self.is_active = false;
            if let Err(err) = self.terminal.restore_mode() {
                error!(message = "failed to restore terminal mode", ?err);
            }
        }
    }
}

impl<T: TerminalAdapter + ?Sized> Debug for RawModeSession<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawModeSession")
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}
