// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`TerminalAdapter`] backed by a [`vt100`] screen.
//!
//! Output is fed to a virtual terminal, and cursor position / viewport size queries
//! are answered from that terminal's state, the same way a real emulator answers
//! `ESC [ 6 n`. Tests can therefore assert on what the user would actually see.

use super::StdoutMock;
use crate::{TermPos, TermSize, TerminalAdapter, TerminalQuery, TerminalQueryError, ok};
use std::{collections::VecDeque,
          io::{self, Write}};

/// Writes go to the virtual screen and to a raw byte log.
#[allow(missing_debug_implementations)]
pub struct ScreenWriter {
    pub parser: vt100::Parser,
    pub log: StdoutMock,
}

impl Write for ScreenWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.parser.process(buf);
        self.log.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

/// A scheduled terminal resize, applied right before the `after_reads + 1`th byte is
/// handed out.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledResize {
    pub after_reads: usize,
    pub size: TermSize,
}

#[allow(missing_debug_implementations)]
pub struct TerminalAdapterMock {
    pub input: VecDeque<u8>,
    pub writer: ScreenWriter,
    pub raw_mode_active: bool,
    pub enter_raw_mode_count: usize,
    pub restore_mode_count: usize,
    pub reads: usize,
    pub resizes: VecDeque<ScheduledResize>,
    pub fail_cursor_queries: bool,
    pub fail_size_queries: bool,
}

impl TerminalAdapterMock {
    /// A `size` terminal with `input` waiting to be read.
    pub fn new(size: TermSize, input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            writer: ScreenWriter {
                parser: vt100::Parser::new(
                    u16::try_from(size.row_height).unwrap(),
                    u16::try_from(size.col_width).unwrap(),
                    0,
                ),
                log: StdoutMock::default(),
            },
            raw_mode_active: false,
            enter_raw_mode_count: 0,
            restore_mode_count: 0,
            reads: 0,
            resizes: VecDeque::new(),
            fail_cursor_queries: false,
            fail_size_queries: false,
        }
    }

    /// Put the cursor somewhere before the session starts, eg: after a prompt.
    #[must_use]
    pub fn with_cursor_at(mut self, pos: TermPos) -> Self {
        let seq = format!("\x1b[{};{}H", pos.row, pos.col);
        self.writer.parser.process(seq.as_bytes());
        self
    }

    #[must_use]
    pub fn with_resize(mut self, after_reads: usize, size: TermSize) -> Self {
        self.resizes.push_back(ScheduledResize { after_reads, size });
        self
    }

    pub fn screen(&self) -> &vt100::Screen { self.writer.parser.screen() }

    /// Visible text of one 1-based row, trailing blanks removed.
    pub fn row_text(&self, row: usize) -> String {
        let (_, cols) = self.screen().size();
        self.screen()
            .rows(0, cols)
            .nth(row - 1)
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }

    /// 1-based cursor position on the virtual screen.
    pub fn cursor(&self) -> TermPos {
        let (row, col) = self.screen().cursor_position();
        TermPos::from_one_based(usize::from(col) + 1, usize::from(row) + 1)
    }

    pub fn output_log(&self) -> String { self.writer.log.get_copy_of_buffer_as_string() }

    fn apply_due_resizes(&mut self) {
        while let Some(resize) = self.resizes.front().copied() {
            if resize.after_reads > self.reads {
                break;
            }
            self.resizes.pop_front();
            self.writer.parser.set_size(
                u16::try_from(resize.size.row_height).unwrap(),
                u16::try_from(resize.size.col_width).unwrap(),
            );
        }
    }
}

impl TerminalAdapter for TerminalAdapterMock {
    fn enter_raw_mode(&mut self) -> miette::Result<()> {
        self.raw_mode_active = true;
        self.enter_raw_mode_count += 1;
        ok!()
    }

    fn restore_mode(&mut self) -> miette::Result<()> {
        self.raw_mode_active = false;
        self.restore_mode_count += 1;
        ok!()
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        self.apply_due_resizes();
        let byte = self.input.pop_front();
        if byte.is_some() {
            self.reads += 1;
        }
        Ok(byte)
    }

    fn query_cursor_position(&mut self) -> Result<TermPos, TerminalQueryError> {
        if self.fail_cursor_queries {
            return Err(TerminalQueryError::NoResponse {
                query: TerminalQuery::CursorPosition,
                attempts: 1,
            });
        }
        Ok(self.cursor())
    }

    fn query_viewport_size(&mut self) -> Result<TermSize, TerminalQueryError> {
        if self.fail_size_queries {
            return Err(TerminalQueryError::NoResponse {
                query: TerminalQuery::ViewportSize,
                attempts: 1,
            });
        }
        let (rows, cols) = self.screen().size();
        Ok(TermSize::new(usize::from(cols), usize::from(rows)))
    }

    fn output(&mut self) -> &mut dyn Write { &mut self.writer }
}
