// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bytes that make up keyboard escape sequences.
//!
//! # Keyboard Sequences
//!
//! ## Cursor keys (CSI or SS3)
//! - Up / Down / Right / Left: `ESC[A` / `ESC[B` / `ESC[C` / `ESC[D`
//! - Same keys in application cursor mode: `ESC O A` .. `ESC O D`
//! - Home / End: `ESC[H` / `ESC[F`, or `ESC O H` / `ESC O F`
//!
//! ## Special keys (CSI n~)
//! - Home: `CSI 1~` or `CSI 7~`
//! - Insert: `CSI 2~`
//! - Delete: `CSI 3~`
//! - End: `CSI 4~` or `CSI 8~`
//!
//! ## Modifiers (CSI 1; m `final_byte`)
//! The modifier parameter is a bitmask plus one:
//! - 2 = Shift
//! - 3 = Alt
//! - 5 = Ctrl
//! - 7 = Ctrl+Alt

// ==================== ANSI Sequence Components ====================

/// ESC byte (27 in decimal, 0x1B in hex)
pub const ANSI_ESC: u8 = 0x1B;

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex)
pub const ANSI_CSI_BRACKET: u8 = 0x5B;

/// SS3 'O' byte: Second byte of SS3 sequences (0x4F).
/// SS3 sequences format: ESC O `command_char` (used in application mode).
pub const ANSI_SS3_O: u8 = b'O';

/// Parameter separator byte: `;` (59 in decimal, 0x3B in hex)
pub const ANSI_PARAM_SEPARATOR: u8 = b';';

/// Terminator for the `CSI n~` family of special keys.
pub const ANSI_FUNCTION_KEY_TERMINATOR: u8 = b'~';

// ==================== Final Bytes ====================

pub const ARROW_UP_FINAL: u8 = b'A';
pub const ARROW_DOWN_FINAL: u8 = b'B';
pub const ARROW_RIGHT_FINAL: u8 = b'C';
pub const ARROW_LEFT_FINAL: u8 = b'D';
pub const SPECIAL_END_FINAL: u8 = b'F';
pub const SPECIAL_HOME_FINAL: u8 = b'H';

// ==================== Special Key Codes (CSI n~) ====================

pub const SPECIAL_HOME_CODE: u16 = 1;
pub const SPECIAL_INSERT_CODE: u16 = 2;
pub const SPECIAL_DELETE_CODE: u16 = 3;
pub const SPECIAL_END_CODE: u16 = 4;
/// rxvt flavored Home.
pub const SPECIAL_HOME_ALT_CODE: u16 = 7;
/// rxvt flavored End.
pub const SPECIAL_END_ALT_CODE: u16 = 8;

// ==================== Modifiers ====================

/// Modifier parameter for Alt (bitmask 2, plus one).
pub const MODIFIER_PARAM_ALT: u16 = 3;

/// Modifier parameter for Ctrl (bitmask 4, plus one).
pub const MODIFIER_PARAM_CTRL: u16 = 5;

// ==================== Alt Keys (ESC + byte) ====================

/// `Alt+b`: move one word left.
pub const ALT_B: u8 = b'b';

/// `Alt+d`: delete the word after the cursor.
pub const ALT_D: u8 = b'd';

/// `Alt+f`: move one word right.
pub const ALT_F: u8 = b'f';
