// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns the raw byte stream from the terminal into [`EditCommand`]s.
//!
//! The decoder is a pure function [`decode()`] of `(state, byte)`, wrapped by
//! [`EscapeDecoder`] which keeps the state between reads. Multi-byte keys are resolved
//! one byte at a time:
//!
//! ```text
//!            ESC           [              digits / ;        final byte
//! Start ─────────▶ SawEscape ────▶ SawBracket ──────────────▶ command
//!                      │ O
//!                      ╰──────▶ SawSs3 ──── A B C D H F ────▶ command
//! ```
//!
//! An unrecognized continuation resolves to [`EditCommand::NoOp`]. Bytes already
//! consumed are never pushed back, so a key the decoder doesn't know is silently
//! ignored instead of leaking its tail into the buffer as text. CSI sequences with
//! parameters the editor doesn't use (mouse reports, private modes) are consumed up to
//! their final byte for the same reason.

use crate::{ALT_B, ALT_D, ALT_F, ANSI_CSI_BRACKET, ANSI_ESC, ANSI_FUNCTION_KEY_TERMINATOR,
            ANSI_PARAM_SEPARATOR, ANSI_SS3_O, ARROW_DOWN_FINAL, ARROW_LEFT_FINAL,
            ARROW_RIGHT_FINAL, ARROW_UP_FINAL, CARRIAGE_RETURN, CTRL_A, CTRL_B, CTRL_D,
            CTRL_E, CTRL_F, CTRL_H, CTRL_K, CTRL_N, CTRL_P, CTRL_U, CTRL_W, DELETE,
            LINE_FEED, MODIFIER_PARAM_ALT, MODIFIER_PARAM_CTRL, PRINTABLE_FIRST,
            PRINTABLE_LAST, SPECIAL_DELETE_CODE, SPECIAL_END_ALT_CODE, SPECIAL_END_CODE,
            SPECIAL_END_FINAL, SPECIAL_HOME_ALT_CODE, SPECIAL_HOME_CODE,
            SPECIAL_HOME_FINAL, SPECIAL_INSERT_CODE, TAB};
use strum_macros::Display;

/// One logical editing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EditCommand {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveWordLeft,
    MoveWordRight,
    Home,
    End,
    DeleteBackward,
    DeleteForward,
    DeleteWordBackward,
    DeleteWordForward,
    DeleteToStart,
    DeleteToEnd,
    ToggleOverwrite,
    /// `Ctrl+D`.
    EndOfTransmission,
    /// Enter.
    Submit,
    Literal(u8),
    NoOp,
}

/// Parameters collected inside `ESC [ ... final`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CsiParams {
    /// Key code and modifier, eg: `3;5` in `ESC [ 3 ; 5 ~`.
    values: [u16; 2],
    /// Which of `values` digits currently go to.
    index: usize,
    /// Saw something this editor has no use for; resolve to `NoOp` at the final byte.
    unsupported: bool,
}

impl CsiParams {
    fn push_digit(mut self, byte: u8) -> Self {
        if !self.unsupported {
            let slot = &mut self.values[self.index];
            *slot = slot.saturating_mul(10).saturating_add(u16::from(byte - b'0'));
        }
        self
    }

    fn next_param(mut self) -> Self {
        if self.index + 1 < self.values.len() {
            self.index += 1;
        } else {
            self.unsupported = true;
        }
        self
    }

    fn mark_unsupported(mut self) -> Self {
        self.unsupported = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecoderState {
    #[default]
    Start,
    SawEscape,
    SawBracket(CsiParams),
    SawSs3,
}

/// Feed one byte. Returns the next state, and a command if the byte completed one.
/// `None` means the byte was consumed as part of a sequence that isn't finished yet.
#[must_use]
pub fn decode(state: DecoderState, byte: u8) -> (DecoderState, Option<EditCommand>) {
    match state {
        DecoderState::Start => decode_start(byte),
        DecoderState::SawEscape => decode_after_escape(byte),
        DecoderState::SawBracket(params) => decode_csi(params, byte),
        DecoderState::SawSs3 => (DecoderState::Start, Some(resolve_cursor_key(byte, 0))),
    }
}

fn decode_start(byte: u8) -> (DecoderState, Option<EditCommand>) {
    let command = match byte {
        ANSI_ESC => return (DecoderState::SawEscape, None),
        LINE_FEED | CARRIAGE_RETURN => EditCommand::Submit,
        DELETE => EditCommand::DeleteBackward,
        CTRL_A => EditCommand::Home,
        CTRL_B => EditCommand::MoveLeft,
        CTRL_D => EditCommand::EndOfTransmission,
        CTRL_E => EditCommand::End,
        CTRL_F => EditCommand::MoveRight,
        CTRL_H | CTRL_W => EditCommand::DeleteWordBackward,
        CTRL_K => EditCommand::DeleteToEnd,
        CTRL_N => EditCommand::MoveDown,
        CTRL_P => EditCommand::MoveUp,
        CTRL_U => EditCommand::DeleteToStart,
        TAB | PRINTABLE_FIRST..=PRINTABLE_LAST => EditCommand::Literal(byte),
        _ => EditCommand::NoOp,
    };
    (DecoderState::Start, Some(command))
}

fn decode_after_escape(byte: u8) -> (DecoderState, Option<EditCommand>) {
    let command = match byte {
        ANSI_CSI_BRACKET => {
            return (DecoderState::SawBracket(CsiParams::default()), None);
        }
        ANSI_SS3_O => return (DecoderState::SawSs3, None),
        // A second ESC cancels the first and starts over.
        ANSI_ESC => return (DecoderState::SawEscape, Some(EditCommand::NoOp)),
        ALT_B => EditCommand::MoveWordLeft,
        ALT_F => EditCommand::MoveWordRight,
        ALT_D => EditCommand::DeleteWordForward,
        DELETE | CTRL_H => EditCommand::DeleteWordBackward,
        _ => EditCommand::NoOp,
    };
    (DecoderState::Start, Some(command))
}

fn decode_csi(params: CsiParams, byte: u8) -> (DecoderState, Option<EditCommand>) {
    match byte {
        b'0'..=b'9' => (DecoderState::SawBracket(params.push_digit(byte)), None),
        ANSI_PARAM_SEPARATOR => (DecoderState::SawBracket(params.next_param()), None),
        // Private markers (`?`, `<`, ...), sub-parameters, and intermediates.
        0x20..=0x2F | b':' | 0x3C..=0x3F => (DecoderState::SawBracket(params.mark_unsupported()), None),
        // Final byte.
        0x40..=0x7E => (DecoderState::Start, Some(resolve_csi(params, byte))),
        // A control byte can't be part of a CSI sequence; give up on it.
        _ => (DecoderState::Start, Some(EditCommand::NoOp)),
    }
}

fn resolve_csi(params: CsiParams, final_byte: u8) -> EditCommand {
    if params.unsupported {
        return EditCommand::NoOp;
    }
    let [code, modifier] = params.values;
    match final_byte {
        ANSI_FUNCTION_KEY_TERMINATOR => resolve_special_key(code, modifier),
        _ => resolve_cursor_key(final_byte, modifier),
    }
}

/// `A B C D H F` after `ESC [` or `ESC O`.
fn resolve_cursor_key(final_byte: u8, modifier: u16) -> EditCommand {
    match final_byte {
        ARROW_UP_FINAL => EditCommand::MoveUp,
        ARROW_DOWN_FINAL => EditCommand::MoveDown,
        ARROW_RIGHT_FINAL if is_word_modifier(modifier) => EditCommand::MoveWordRight,
        ARROW_RIGHT_FINAL => EditCommand::MoveRight,
        ARROW_LEFT_FINAL if is_word_modifier(modifier) => EditCommand::MoveWordLeft,
        ARROW_LEFT_FINAL => EditCommand::MoveLeft,
        SPECIAL_HOME_FINAL => EditCommand::Home,
        SPECIAL_END_FINAL => EditCommand::End,
        _ => EditCommand::NoOp,
    }
}

/// `ESC [ code ~` and `ESC [ code ; modifier ~`.
fn resolve_special_key(code: u16, modifier: u16) -> EditCommand {
    match code {
        SPECIAL_HOME_CODE | SPECIAL_HOME_ALT_CODE => EditCommand::Home,
        SPECIAL_END_CODE | SPECIAL_END_ALT_CODE => EditCommand::End,
        SPECIAL_INSERT_CODE => EditCommand::ToggleOverwrite,
        SPECIAL_DELETE_CODE if is_word_modifier(modifier) => {
            EditCommand::DeleteWordForward
        }
        SPECIAL_DELETE_CODE => EditCommand::DeleteForward,
        _ => EditCommand::NoOp,
    }
}

/// Ctrl or Alt held, with or without Shift. The parameter is the modifier bitmask plus
/// one.
fn is_word_modifier(modifier: u16) -> bool {
    let mask = modifier.saturating_sub(1);
    let alt_bit = MODIFIER_PARAM_ALT - 1;
    let ctrl_bit = MODIFIER_PARAM_CTRL - 1;
    mask & (alt_bit | ctrl_bit) != 0
}

/// Stateful wrapper around [`decode()`].
#[derive(Debug, Default)]
pub struct EscapeDecoder {
    state: DecoderState,
}

impl EscapeDecoder {
    /// Feed one byte read from the terminal.
    pub fn feed(&mut self, byte: u8) -> Option<EditCommand> {
        let (next, command) = decode(self.state, byte);
        self.state = next;
        command
    }

    /// `true` when no sequence is half way through.
    #[must_use]
    pub fn is_idle(&self) -> bool { self.state == DecoderState::Start }
}
