// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Platform dispatch and the [`RawModeGuard`] RAII wrapper.

#[cfg(unix)]
use super::raw_mode_unix;
use crate::ok;
use std::fmt::{Debug, Formatter};

/// Terminal settings captured before switching modes.
#[cfg(unix)]
pub type SavedTerminalMode = rustix::termios::Termios;

/// Terminal settings captured before switching modes.
#[cfg(not(unix))]
pub type SavedTerminalMode = ();

/// Switch the controlling terminal to non-canonical mode. Prefer [`RawModeGuard`],
/// which can't forget to switch back.
///
/// See [module documentation] for which flags change.
///
/// # Errors
///
/// Returns miette diagnostic errors if:
/// - No controlling terminal can be found
/// - Terminal attributes cannot be retrieved or set
/// - Platform is not supported
///
/// [module documentation]: mod@crate::core::ansi::terminal_raw_mode
pub fn enter_non_canonical_mode() -> miette::Result<SavedTerminalMode> {
    #[cfg(unix)]
    {
        raw_mode_unix::enter_non_canonical_mode()
    }

    #[cfg(not(unix))]
    {
        Err(miette::miette!("Platform not supported"))
    }
}

/// Put back settings returned by [`enter_non_canonical_mode()`].
///
/// # Errors
///
/// Returns miette diagnostic errors if:
/// - No controlling terminal can be found
/// - Terminal attributes cannot be set
/// - Platform is not supported
pub fn restore_terminal_mode(saved: &SavedTerminalMode) -> miette::Result<()> {
    #[cfg(unix)]
    {
        raw_mode_unix::restore_terminal_mode(saved)
    }

    #[cfg(not(unix))]
    {
        let _ = saved;
        Err(miette::miette!("Platform not supported"))
    }
}

/// RAII guard that owns the terminal settings saved when it was created, and writes
/// them back when it is [restored](RawModeGuard::restore) or dropped.
///
/// See [module documentation] for usage examples.
///
/// [module documentation]: mod@crate::core::ansi::terminal_raw_mode
pub struct RawModeGuard {
    saved: Option<SavedTerminalMode>,
}

impl RawModeGuard {
    /// Create a new guard and enter non-canonical mode.
    ///
    /// # Errors
    ///
    /// See [`enter_non_canonical_mode()`] for error conditions.
    pub fn new() -> miette::Result<Self> {
        let saved = enter_non_canonical_mode()?;
        ok!(Self { saved: Some(saved) })
    }

    /// Restore the saved settings now and report whether that worked. Dropping the
    /// guard does the same thing but has to swallow the error.
    ///
    /// # Errors
    ///
    /// See [`restore_terminal_mode()`] for error conditions.
    pub fn restore(mut self) -> miette::Result<()> {
        match self.saved.take() {
            Some(saved) => restore_terminal_mode(&saved),
            None => ok!(),
        }
    }
}

impl Debug for RawModeGuard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawModeGuard")
            .field("is_active", &self.saved.is_some())
            .finish()
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            drop(restore_terminal_mode(&saved));
        }
    }
}
