// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;
use std::io;
use strum_macros::Display;
use thiserror::Error;

/// The terminal queries the line editor relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TerminalQuery {
    #[strum(serialize = "cursor position")]
    CursorPosition,
    #[strum(serialize = "viewport size")]
    ViewportSize,
}

#[derive(Debug, Error, Diagnostic)]
pub enum TerminalQueryError {
    #[error("no answer to the {query} query after {attempts} attempt(s)")]
    #[diagnostic(
        code(agenda::terminal::no_response),
        help("the terminal does not seem to support `ESC [ 6 n` cursor position reports")
    )]
    NoResponse { query: TerminalQuery, attempts: u8 },

    #[error("input closed while waiting for the {query} answer")]
    #[diagnostic(code(agenda::terminal::input_closed))]
    InputClosed { query: TerminalQuery },

    #[error(transparent)]
    #[diagnostic(code(agenda::terminal::io))]
    Io(#[from] io::Error),
}
