// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS implementation of non-canonical mode using rustix's safe termios
//! API.

use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, LocalModes, OptionalActions, SpecialCodeIndex, Termios}};
use std::{fs::File, io};

/// Represents either stdin or `/dev/tty` for terminal operations.
///
/// This enum allows us to handle both cases where stdin is a tty (normal terminal usage)
/// and where stdin is redirected (e.g., piped input), requiring us to use `/dev/tty`.
#[derive(Debug)]
pub enum TerminalFd {
    /// Using standard input (when it's a terminal)
    Stdin(io::Stdin),
    /// Using `/dev/tty` (when stdin is redirected)
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

/// Gets a file descriptor for the controlling terminal.
///
/// Checks if stdin is a tty and uses it if so; otherwise opens `/dev/tty`. This
/// handles cases where stdin is redirected.
///
/// # Errors
///
/// Returns an error if stdin is not a tty and `/dev/tty` cannot be opened.
pub fn get_terminal_fd() -> io::Result<TerminalFd> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        Ok(TerminalFd::Stdin(stdin))
    } else {
        let file = File::options().read(true).write(true).open("/dev/tty")?;
        Ok(TerminalFd::DevTty(file))
    }
}

/// Switch the controlling terminal to non-canonical, no-echo input and return the
/// settings that were in effect before.
pub(super) fn enter_non_canonical_mode() -> miette::Result<Termios> {
    let fd = get_terminal_fd()
        .map_err(|e| miette::miette!("failed to get terminal file descriptor: {e}"))?;

    let original = termios::tcgetattr(&fd)
        .map_err(|e| miette::miette!("failed to retrieve terminal attributes: {e}"))?;

    // Only line buffering and echo go away. Signals and CR to NL translation stay.
    let mut termios = original.clone();
    termios
        .local_modes
        .remove(LocalModes::ICANON | LocalModes::ECHO);
    termios.special_codes[SpecialCodeIndex::VMIN] = 1;
    termios.special_codes[SpecialCodeIndex::VTIME] = 0;

    termios::tcsetattr(&fd, OptionalActions::Now, &termios)
        .map_err(|e| miette::miette!("failed to set terminal attributes: {e}"))?;

    Ok(original)
}

/// Write `saved` back to the controlling terminal.
pub(super) fn restore_terminal_mode(saved: &Termios) -> miette::Result<()> {
    let fd = get_terminal_fd()
        .map_err(|e| miette::miette!("failed to get terminal file descriptor: {e}"))?;

    termios::tcsetattr(&fd, OptionalActions::Now, saved)
        .map_err(|e| miette::miette!("failed to restore terminal attributes: {e}"))?;

    Ok(())
}
