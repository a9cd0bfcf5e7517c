// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Ways an editing session can fail. Running out of input is not one of them, that is
/// reported as [`crate::EditOutcome::Eof`].
#[derive(Debug, Error, Diagnostic)]
pub enum LineEditorError {
    #[error("terminal I/O failed")]
    #[diagnostic(code(agenda::line_editor::io))]
    Io(#[from] io::Error),

    #[error("could not change the terminal mode: {message}")]
    #[diagnostic(
        code(agenda::line_editor::terminal_mode),
        help("the terminal may have been left in non-canonical mode, run `stty sane`")
    )]
    TerminalMode { message: String },

    #[error("no terminal to edit on")]
    #[diagnostic(
        code(agenda::line_editor::not_a_terminal),
        help("run agenda from an interactive shell, not a pipe or a cron job")
    )]
    NotATerminal(#[source] io::Error),
}

impl From<miette::Report> for LineEditorError {
    fn from(report: miette::Report) -> Self {
        LineEditorError::TerminalMode {
            message: format!("{report}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_becomes_terminal_mode_error() {
        let report = miette::miette!("tcsetattr failed");
        let err = LineEditorError::from(report);
        assert_eq!(
            err.to_string(),
            "could not change the terminal mode: tcsetattr failed"
        );
    }

    #[test]
    fn test_io_error_is_source() {
        let err = LineEditorError::from(io::Error::other("boom"));
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("boom"));
    }
}
