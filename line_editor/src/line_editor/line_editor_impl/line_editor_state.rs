// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{paint, plan_repaint};
use crate::{CsiSequence, EditBuffer, EditCommand, EditMode, EditOutcome, EscapeDecoder,
            LineEditorConfig, LineEditorError, TermPos, TermSize, TerminalAdapter,
            position_after};
use std::{io, ops::ControlFlow};
use tracing::{debug, trace, warn};

/// Why the read loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Enter.
    Submitted,
    /// `Ctrl+D` on an empty line.
    EndOfTransmission,
    /// The input stream ended.
    InputClosed,
}

/// One editing session: read a byte, decode it, apply it, repaint, until the line is
/// submitted or the input runs out.
///
/// The terminal must already be in non-canonical mode, see
/// [`super::RawModeSession`].
pub struct LineEditor<'a, T: TerminalAdapter + ?Sized> {
    terminal: &'a mut T,
    buffer: EditBuffer,
    decoder: EscapeDecoder,
    mode: EditMode,
    /// Where the first byte of the line is drawn. Moves up when the screen scrolls.
    start: TermPos,
    /// Last known viewport, kept when a size query fails.
    viewport: TermSize,
    /// Last row the previous paint reached.
    rendered_end_row: usize,
}

impl<'a, T: TerminalAdapter + ?Sized> LineEditor<'a, T> {
    /// Capture the viewport and the start position.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn new(
        terminal: &'a mut T,
        initial: Option<&str>,
        config: &LineEditorConfig,
    ) -> Result<Self, LineEditorError> {
        let viewport = match terminal.query_viewport_size() {
            Ok(size) => size,
            Err(err) => {
                warn!(message = "using fallback viewport", %err, fallback = %config.fallback_viewport);
                config.fallback_viewport
            }
        };

        let start = match terminal.query_cursor_position() {
            Ok(pos) => pos,
            Err(err) => {
                // Column 1 is the only place we can still put the cursor without
                // knowing where it is.
                warn!(message = "cursor position unknown, starting at bottom row", %err);
                terminal.output().write_all(b"\r")?;
                TermPos::from_one_based(1, viewport.row_height)
            }
        };

        debug!(message = "edit session started", %start, %viewport);

        Ok(Self {
            terminal,
            buffer: EditBuffer::from_seed(initial.unwrap_or_default()),
            decoder: EscapeDecoder::default(),
            mode: EditMode::default(),
            start,
            viewport,
            rendered_end_row: start.row,
        })
    }

    /// Drive the session to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from or writing to the terminal fails.
    pub fn run(mut self) -> Result<EditOutcome, LineEditorError> {
        self.repaint()?;
        let termination = loop {
            let Some(byte) = self.terminal.read_byte()? else {
                break Termination::InputClosed;
            };
            let Some(command) = self.decoder.feed(byte) else {
                continue;
            };
            if command == EditCommand::NoOp {
                continue;
            }
            trace!(message = "edit command", %command, index = self.buffer.index());
            if let ControlFlow::Break(termination) = self.apply(command) {
                break termination;
            }
            self.repaint()?;
        };
        self.finish(termination)
    }

    fn apply(&mut self, command: EditCommand) -> ControlFlow<Termination> {
        let width = self.viewport.col_width;
        let buffer = &mut self.buffer;
        match command {
            EditCommand::Literal(byte) => buffer.insert(byte, self.mode),
            EditCommand::MoveLeft => buffer.move_left(),
            EditCommand::MoveRight => buffer.move_right(),
            EditCommand::MoveUp => buffer.move_up(width),
            EditCommand::MoveDown => buffer.move_down(width),
            EditCommand::MoveWordLeft => buffer.move_word_left(),
            EditCommand::MoveWordRight => buffer.move_word_right(),
            EditCommand::Home => buffer.move_home(),
            EditCommand::End => buffer.move_end(),
            EditCommand::DeleteBackward => buffer.delete_backward(),
            EditCommand::DeleteForward => buffer.delete_forward(),
            EditCommand::DeleteWordBackward => buffer.delete_word_backward(),
            EditCommand::DeleteWordForward => buffer.delete_word_forward(),
            EditCommand::DeleteToStart => buffer.delete_to_start(),
            EditCommand::DeleteToEnd => buffer.delete_to_end(),
            EditCommand::ToggleOverwrite => {
                self.mode = self.mode.toggled();
                debug!(message = "edit mode toggled", mode = %self.mode);
            }
            EditCommand::EndOfTransmission if buffer.is_empty() => {
                return ControlFlow::Break(Termination::EndOfTransmission);
            }
            EditCommand::EndOfTransmission => buffer.delete_forward(),
            EditCommand::Submit => return ControlFlow::Break(Termination::Submitted),
            EditCommand::NoOp => {}
        }
        ControlFlow::Continue(())
    }

    fn refresh_viewport(&mut self) {
        match self.terminal.query_viewport_size() {
            Ok(size) => {
                if size != self.viewport {
                    debug!(message = "viewport resized", from = %self.viewport, to = %size);
                    self.viewport = size;
                }
            }
            Err(err) => warn!(message = "keeping last known viewport", %err),
        }
    }

    fn repaint(&mut self) -> io::Result<()> {
        self.refresh_viewport();
        let content = self.buffer.as_bytes();
        let plan = plan_repaint(
            self.start,
            self.viewport,
            content,
            self.buffer.index(),
            self.rendered_end_row,
        );
        if plan.scroll_by > 0 {
            debug!(message = "scrolled to fit", rows = plan.scroll_by);
        }
        paint(self.terminal.output(), &plan, self.viewport, content)?;
        self.start = plan.start;
        self.rendered_end_row = plan.end.row;
        Ok(())
    }

    /// Park the cursor on a fresh line below the content and hand the text over.
    fn finish(self, termination: Termination) -> Result<EditOutcome, LineEditorError> {
        let end = position_after(self.start, self.viewport.col_width, self.buffer.as_bytes());
        let out = self.terminal.output();
        write!(out, "{}", CsiSequence::move_to(end.clamp_to(self.viewport)))?;
        // Content that exactly filled its last row already left the cursor on a new
        // line, unless that line is below the bottom row. Then the line break from the
        // bottom row scrolls it into view.
        let on_fresh_line = end.col == 1
            && end.row > self.start.row
            && end.row <= self.viewport.row_height;
        if !on_fresh_line {
            out.write_all(b"\r\n")?;
        }
        out.flush()?;

        debug!(message = "edit session finished", ?termination, len = self.buffer.len());
        let text = self.buffer.into_string();
        Ok(match termination {
            Termination::Submitted => EditOutcome::Line(text),
            Termination::EndOfTransmission | Termination::InputClosed => {
                EditOutcome::Eof(text)
            }
        })
    }
}

impl<T: TerminalAdapter + ?Sized> std::fmt::Debug for LineEditor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineEditor")
            .field("buffer", &self.buffer)
            .field("mode", &self.mode)
            .field("start", &self.start)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}
