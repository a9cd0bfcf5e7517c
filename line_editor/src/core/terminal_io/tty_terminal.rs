// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`TerminalAdapter`] for the real controlling terminal.
//!
//! Input is read straight from the file descriptor with [`rustix::io::read`], one byte
//! per call. [`std::io::Stdin`] is not used for reading because its internal buffer
//! would hide bytes from [`rustix::event::poll`], which is what bounds the wait for a
//! cursor position report.
//!
//! Cursor position reports arrive on the same stream as keystrokes. Bytes that show up
//! while a query is waiting, and are not part of the report, are parked in
//! `pending_input` and handed out by [`TerminalAdapter::read_byte()`] before anything
//! new is read, so a fast typist never loses a key to a repaint.

use crate::{CUP_FAR_CORNER, CsiSequence, DSR_CURSOR_POSITION_REQUEST, DsrParseStep,
            DsrResponseParser, QueryPolicy, RawModeGuard, TermPos, TermSize,
            TerminalAdapter, TerminalFd, TerminalQuery, TerminalQueryError,
            get_terminal_fd, ok};
use rustix::{event::{PollFd, PollFlags, Timespec},
             io::retry_on_intr,
             termios};
use std::{collections::VecDeque,
          fs::File,
          io::{self, Write},
          time::{Duration, Instant}};
use tracing::{debug, warn};

/// Either stdout or `/dev/tty`, whichever is the terminal. Writing to `/dev/tty` when
/// stdout is redirected keeps the editor on screen while the result goes to the file.
#[derive(Debug)]
pub enum TerminalOutput {
    Stdout(io::Stdout),
    DevTty(File),
}

impl TerminalOutput {
    /// # Errors
    ///
    /// Returns an error if stdout is not a tty and `/dev/tty` cannot be opened.
    pub fn try_new() -> io::Result<Self> {
        let stdout = io::stdout();
        if termios::isatty(&stdout) {
            Ok(TerminalOutput::Stdout(stdout))
        } else {
            let file = File::options().write(true).open("/dev/tty")?;
            Ok(TerminalOutput::DevTty(file))
        }
    }
}

impl Write for TerminalOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            TerminalOutput::Stdout(it) => it.write(buf),
            TerminalOutput::DevTty(it) => it.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            TerminalOutput::Stdout(it) => it.flush(),
            TerminalOutput::DevTty(it) => it.flush(),
        }
    }
}

#[derive(Debug)]
pub struct TtyTerminal {
    input: TerminalFd,
    output: TerminalOutput,
    raw_mode: Option<RawModeGuard>,
    pending_input: VecDeque<u8>,
    query_policy: QueryPolicy,
}

impl TtyTerminal {
    /// Open the controlling terminal for input and output.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no terminal to talk to.
    pub fn try_new(query_policy: QueryPolicy) -> io::Result<Self> {
        ok!(Self {
            input: get_terminal_fd()?,
            output: TerminalOutput::try_new()?,
            raw_mode: None,
            pending_input: VecDeque::new(),
            query_policy,
        })
    }

    /// One unbuffered read from the terminal fd, retrying on `EINTR`.
    fn read_from_fd(&self) -> io::Result<Option<u8>> {
        let mut buf = [0_u8; 1];
        let count = retry_on_intr(|| rustix::io::read(&self.input, &mut buf[..]))?;
        Ok((count > 0).then_some(buf[0]))
    }

    /// Wait up to `timeout` for input. `true` if a byte is ready.
    fn wait_readable(&self, timeout: Duration) -> io::Result<bool> {
        let timeout = Timespec {
            tv_sec: timeout.as_secs().try_into().unwrap_or(0),
            tv_nsec: timeout.subsec_nanos().try_into().unwrap_or(0),
        };
        let mut fds = [PollFd::new(&self.input, PollFlags::IN)];
        let ready = retry_on_intr(|| rustix::event::poll(&mut fds, Some(&timeout)))?;
        Ok(ready > 0)
    }

    /// Send `request` up to `attempts` times, each time waiting for a cursor position
    /// report.
    fn query_position_report(
        &mut self,
        query: TerminalQuery,
        request: &str,
    ) -> Result<TermPos, TerminalQueryError> {
        let attempts = self.query_policy.attempts.max(1);
        for attempt in 1..=attempts {
            self.output.write_all(request.as_bytes())?;
            self.output.flush()?;
            if let Some(pos) = self.await_position_report(query)? {
                return Ok(pos);
            }
            warn!(message = "terminal query timed out", %query, attempt);
        }
        Err(TerminalQueryError::NoResponse { query, attempts })
    }

    fn await_position_report(
        &mut self,
        query: TerminalQuery,
    ) -> Result<Option<TermPos>, TerminalQueryError> {
        let deadline = Instant::now() + self.query_policy.timeout;
        let mut parser = DsrResponseParser::default();
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !self.wait_readable(remaining)? {
                self.pending_input.extend(parser.take_held());
                return Ok(None);
            }
            let Some(byte) = self.read_from_fd()? else {
                self.pending_input.extend(parser.take_held());
                return Err(TerminalQueryError::InputClosed { query });
            };
            match parser.advance(byte) {
                DsrParseStep::Pending => {}
                DsrParseStep::Complete(pos) => return Ok(Some(pos)),
                DsrParseStep::Passthrough(bytes) => {
                    debug!(message = "type-ahead during query", count = bytes.len());
                    self.pending_input.extend(bytes);
                }
            }
        }
    }
}

impl TerminalAdapter for TtyTerminal {
    fn enter_raw_mode(&mut self) -> miette::Result<()> {
        if self.raw_mode.is_none() {
            self.raw_mode = Some(RawModeGuard::new()?);
        }
        ok!()
    }

    fn restore_mode(&mut self) -> miette::Result<()> {
        match self.raw_mode.take() {
            Some(guard) => guard.restore(),
            None => ok!(),
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pending_input.pop_front() {
            return Ok(Some(byte));
        }
        self.read_from_fd()
    }

    fn query_cursor_position(&mut self) -> Result<TermPos, TerminalQueryError> {
        let request = CsiSequence::DeviceStatusReport(DSR_CURSOR_POSITION_REQUEST);
        self.query_position_report(TerminalQuery::CursorPosition, &request.to_string())
    }

    /// Ask the kernel first (`TIOCGWINSZ`). If that fails or reports zero cells, which
    /// happens on some serial consoles, measure the terminal by parking the cursor in
    /// the far corner and asking where it ended up.
    fn query_viewport_size(&mut self) -> Result<TermSize, TerminalQueryError> {
        match termios::tcgetwinsize(&self.input) {
            Ok(size) if size.ws_col > 0 && size.ws_row > 0 => {
                return Ok(TermSize::new(
                    usize::from(size.ws_col),
                    usize::from(size.ws_row),
                ));
            }
            Ok(_) => debug!(message = "kernel reported a zero sized window"),
            Err(err) => debug!(message = "TIOCGWINSZ failed", %err),
        }

        let far = usize::from(CUP_FAR_CORNER);
        let request = format!(
            "{}{}{}{}",
            CsiSequence::SaveCursor,
            CsiSequence::CursorPosition { row: far, col: far },
            CsiSequence::DeviceStatusReport(DSR_CURSOR_POSITION_REQUEST),
            CsiSequence::RestoreCursor,
        );
        let corner = self.query_position_report(TerminalQuery::ViewportSize, &request)?;
        Ok(TermSize::new(corner.col, corner.row))
    }

    fn output(&mut self) -> &mut dyn Write { &mut self.output }
}
