// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Incremental parser for the cursor position report `ESC [ row ; col R`, which a
//! terminal sends in answer to `ESC [ 6 n`.
//!
//! The answer shares the input stream with the user's keystrokes, so bytes typed ahead
//! of (or in the middle of) a query show up here too. The parser hands those back as
//! [`DsrParseStep::Passthrough`] so the caller can queue them as ordinary input instead
//! of dropping them.

use super::{ANSI_CSI_BRACKET, ANSI_ESC, ANSI_PARAM_SEPARATOR,
            DSR_CURSOR_POSITION_RESPONSE_END, DSR_MAX_DIGITS};
use crate::TermPos;
use smallvec::SmallVec;

/// Bytes held back while a response is being recognized. Big enough for
/// `ESC [ 65535 ; 65535 R`.
pub type DsrScratch = SmallVec<[u8; 16]>;

/// What happened after feeding one byte to [`DsrResponseParser::advance()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DsrParseStep {
    /// The byte is (so far) part of a response.
    Pending,
    /// A complete, well formed response.
    Complete(TermPos),
    /// These bytes turned out not to be a response. They are the user's input and
    /// must be delivered to the editor in this order.
    Passthrough(DsrScratch),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Stage {
    #[default]
    Idle,
    Escape,
    Row,
    Col,
}

/// Byte at a time recognizer for `ESC [ row ; col R`.
#[derive(Debug, Default)]
pub struct DsrResponseParser {
    stage: Stage,
    row: usize,
    col: usize,
    digits: usize,
    held: DsrScratch,
}

impl DsrResponseParser {
    /// Feed one byte.
    pub fn advance(&mut self, byte: u8) -> DsrParseStep {
        match (self.stage, byte) {
            (Stage::Idle, ANSI_ESC) => self.hold(Stage::Escape, byte),
            (Stage::Idle, _) => DsrParseStep::Passthrough(SmallVec::from_slice(&[byte])),
            (Stage::Escape, ANSI_CSI_BRACKET) => self.hold(Stage::Row, byte),
            // A bare Escape key press right before the response.
            (Stage::Escape, ANSI_ESC) => {
                let pressed = self.take_held();
                self.hold(Stage::Escape, byte);
                DsrParseStep::Passthrough(pressed)
            }
            (Stage::Row, b'0'..=b'9') => {
                self.row = self.push_digit(self.row, byte);
                self.check_digits()
            }
            (Stage::Row, ANSI_PARAM_SEPARATOR) if self.digits > 0 => {
                self.digits = 0;
                self.hold(Stage::Col, byte)
            }
            (Stage::Col, b'0'..=b'9') => {
                self.col = self.push_digit(self.col, byte);
                self.check_digits()
            }
            (Stage::Col, DSR_CURSOR_POSITION_RESPONSE_END) if self.digits > 0 => {
                let pos = TermPos::from_one_based(self.col, self.row);
                self.reset();
                DsrParseStep::Complete(pos)
            }
            _ => {
                self.held.push(byte);
                self.give_back()
            }
        }
    }

    fn hold(&mut self, next: Stage, byte: u8) -> DsrParseStep {
        self.stage = next;
        self.held.push(byte);
        DsrParseStep::Pending
    }

    fn push_digit(&mut self, acc: usize, byte: u8) -> usize {
        self.digits += 1;
        self.held.push(byte);
        acc.saturating_mul(10)
            .saturating_add(usize::from(byte - b'0'))
    }

    fn check_digits(&mut self) -> DsrParseStep {
        if self.digits > DSR_MAX_DIGITS {
            self.give_back()
        } else {
            DsrParseStep::Pending
        }
    }

    fn give_back(&mut self) -> DsrParseStep { DsrParseStep::Passthrough(self.take_held()) }

    /// Abandon a partially recognized response (eg: on timeout) and return the bytes
    /// held so far, so they can be delivered as input.
    pub fn take_held(&mut self) -> DsrScratch {
        let held = std::mem::take(&mut self.held);
        self.reset();
        held
    }

    fn reset(&mut self) {
        self.stage = Stage::Idle;
        self.row = 0;
        self.col = 0;
        self.digits = 0;
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn feed_all(parser: &mut DsrResponseParser, bytes: &[u8]) -> Vec<DsrParseStep> {
        bytes.iter().map(|it| parser.advance(*it)).collect()
    }

    #[test]
    fn test_complete_response() {
        let mut parser = DsrResponseParser::default();
        let steps = feed_all(&mut parser, b"\x1b[12;40R");
        assert_eq!(
            steps.last(),
            Some(&DsrParseStep::Complete(TermPos::from_one_based(40, 12)))
        );
        assert!(steps[..steps.len() - 1]
            .iter()
            .all(|it| *it == DsrParseStep::Pending));
    }

    #[test]
    fn test_typeahead_is_passed_through() {
        let mut parser = DsrResponseParser::default();
        assert_eq!(
            parser.advance(b'x'),
            DsrParseStep::Passthrough(SmallVec::from_slice(b"x"))
        );
    }

    #[test]
    fn test_arrow_key_is_given_back_whole() {
        // `ESC [ A` looks like a response until the final byte.
        let mut parser = DsrResponseParser::default();
        let steps = feed_all(&mut parser, b"\x1b[A");
        assert_eq!(
            steps,
            vec![
                DsrParseStep::Pending,
                DsrParseStep::Pending,
                DsrParseStep::Passthrough(SmallVec::from_slice(b"\x1b[A")),
            ]
        );

        // The parser is usable again afterwards.
        let steps = feed_all(&mut parser, b"\x1b[1;1R");
        assert_eq!(
            steps.last(),
            Some(&DsrParseStep::Complete(TermPos::from_one_based(1, 1)))
        );
    }

    #[test]
    fn test_modified_key_is_given_back_whole() {
        // Ctrl+Right `ESC [ 1 ; 5 C` only differs from a response in the final byte.
        let mut parser = DsrResponseParser::default();
        let steps = feed_all(&mut parser, b"\x1b[1;5C");
        assert_eq!(
            steps.last(),
            Some(&DsrParseStep::Passthrough(SmallVec::from_slice(b"\x1b[1;5C")))
        );
    }

    #[test]
    fn test_escape_key_before_response() {
        let mut parser = DsrResponseParser::default();
        let steps = feed_all(&mut parser, b"\x1b\x1b[7;3R");
        assert_eq!(steps[0], DsrParseStep::Pending);
        assert_eq!(steps[1], DsrParseStep::Passthrough(SmallVec::from_slice(b"\x1b")));
        assert_eq!(
            steps.last(),
            Some(&DsrParseStep::Complete(TermPos::from_one_based(3, 7)))
        );
    }

    #[test]
    fn test_take_held_on_timeout() {
        let mut parser = DsrResponseParser::default();
        feed_all(&mut parser, b"\x1b[4");
        assert_eq!(parser.take_held().as_slice(), b"\x1b[4");
        assert!(parser.take_held().is_empty());
    }

    #[test]
    fn test_too_many_digits_is_malformed() {
        let mut parser = DsrResponseParser::default();
        let steps = feed_all(&mut parser, b"\x1b[123456");
        assert_eq!(
            steps.last(),
            Some(&DsrParseStep::Passthrough(SmallVec::from_slice(b"\x1b[123456")))
        );
    }
}
