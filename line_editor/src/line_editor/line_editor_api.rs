// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Public entry points of the line editor.
//!
//! | Function                   | Terminal        | Use                              |
//! | :------------------------- | :-------------- | :------------------------------- |
//! | [`edit_line()`]            | controlling tty | the CLI, one line                |
//! | [`edit_line_with()`]       | any adapter     | tests, custom terminals          |
//! | [`prompt_fields()`]        | any adapter     | several labelled lines in one go |
//! | [`prompt_fields_on_tty()`] | controlling tty | the CLI, `agenda event`          |

use crate::{LineEditor, LineEditorError, QueryPolicy, RawModeSession, TermSize,
            TerminalAdapter};
use tracing::debug;

/// How an editing session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The user pressed Enter. The newline is not included.
    Line(String),
    /// Input ended first (stream closed, or `Ctrl+D` on an empty line). Carries
    /// whatever was typed so far.
    Eof(String),
}

impl EditOutcome {
    #[must_use]
    pub fn is_eof(&self) -> bool { matches!(self, EditOutcome::Eof(_)) }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            EditOutcome::Line(it) | EditOutcome::Eof(it) => it,
        }
    }

    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            EditOutcome::Line(it) | EditOutcome::Eof(it) => it,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineEditorConfig {
    /// Retries and timeout for cursor position and viewport size queries.
    pub query_policy: QueryPolicy,
    /// Viewport assumed when the terminal can't be measured.
    pub fallback_viewport: TermSize,
}

/// Edit one line on the controlling terminal, starting from `initial`.
///
/// # Errors
///
/// Returns an error if there is no terminal, or if terminal I/O fails.
pub fn edit_line(initial: Option<String>) -> Result<EditOutcome, LineEditorError> {
    edit_line_with_config(initial, &LineEditorConfig::default())
}

/// [`edit_line()`] with explicit settings.
///
/// # Errors
///
/// Returns an error if there is no terminal, or if terminal I/O fails.
#[cfg(unix)]
pub fn edit_line_with_config(
    initial: Option<String>,
    config: &LineEditorConfig,
) -> Result<EditOutcome, LineEditorError> {
    let mut terminal = crate::TtyTerminal::try_new(config.query_policy)
        .map_err(LineEditorError::NotATerminal)?;
    edit_line_with(&mut terminal, initial.as_deref(), config)
}

/// # Errors
///
/// Always, non-canonical mode is only implemented for Unix terminals.
#[cfg(not(unix))]
pub fn edit_line_with_config(
    _initial: Option<String>,
    _config: &LineEditorConfig,
) -> Result<EditOutcome, LineEditorError> {
    Err(LineEditorError::TerminalMode {
        message: "line editing needs a Unix terminal".into(),
    })
}

/// Edit one line on `terminal`. Non-canonical mode is entered for the duration of the
/// call and restored on every exit path.
///
/// # Errors
///
/// Returns an error if the terminal mode can't be changed, or if terminal I/O fails.
pub fn edit_line_with<T: TerminalAdapter + ?Sized>(
    terminal: &mut T,
    initial: Option<&str>,
    config: &LineEditorConfig,
) -> Result<EditOutcome, LineEditorError> {
    let mut session = RawModeSession::enter(terminal)?;
    let outcome = LineEditor::new(&mut *session, initial, config)?.run()?;
    session.restore()?;
    Ok(outcome)
}

/// One labelled field of a [`prompt_fields()`] form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPrompt {
    pub label: String,
    pub initial: Option<String>,
}

impl FieldPrompt {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            initial: None,
        }
    }

    #[must_use]
    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = Some(initial.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormOutcome {
    /// `(label, value)` for every field that was answered, in order. If input ended
    /// part way, the last entry holds the partial value.
    pub values: Vec<(String, String)>,
    /// `false` if input ended before the last field was submitted.
    pub is_complete: bool,
}

impl FormOutcome {
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(it, _)| it == label)
            .map(|(_, value)| value.as_str())
    }
}

/// Ask for each field in turn, printing `"{label}: "` before editing it. Stops at the
/// first field whose input ends without Enter.
///
/// # Errors
///
/// Returns an error if the terminal mode can't be changed, or if terminal I/O fails.
pub fn prompt_fields<T: TerminalAdapter + ?Sized>(
    terminal: &mut T,
    fields: &[FieldPrompt],
    config: &LineEditorConfig,
) -> Result<FormOutcome, LineEditorError> {
    let mut session = RawModeSession::enter(terminal)?;
    let mut form = FormOutcome::default();

    for field in fields {
        let out = session.output();
        write!(out, "{}: ", field.label)?;
        out.flush()?;

        let outcome =
            LineEditor::new(&mut *session, field.initial.as_deref(), config)?.run()?;
        let is_eof = outcome.is_eof();
        form.values.push((field.label.clone(), outcome.into_string()));
        if is_eof {
            debug!(message = "form abandoned", field = %field.label);
            session.restore()?;
            return Ok(form);
        }
    }

    form.is_complete = true;
    session.restore()?;
    Ok(form)
}

/// [`prompt_fields()`] on the controlling terminal.
///
/// # Errors
///
/// Returns an error if there is no terminal, or if terminal I/O fails.
#[cfg(unix)]
pub fn prompt_fields_on_tty(
    fields: &[FieldPrompt],
    config: &LineEditorConfig,
) -> Result<FormOutcome, LineEditorError> {
    let mut terminal = crate::TtyTerminal::try_new(config.query_policy)
        .map_err(LineEditorError::NotATerminal)?;
    prompt_fields(&mut terminal, fields, config)
}

/// # Errors
///
/// Always, non-canonical mode is only implemented for Unix terminals.
#[cfg(not(unix))]
pub fn prompt_fields_on_tty(
    _fields: &[FieldPrompt],
    _config: &LineEditorConfig,
) -> Result<FormOutcome, LineEditorError> {
    Err(LineEditorError::TerminalMode {
        message: "line editing needs a Unix terminal".into(),
    })
}
