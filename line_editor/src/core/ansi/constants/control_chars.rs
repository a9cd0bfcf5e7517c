// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single byte control characters, as delivered by a terminal with canonical mode and
//! echo disabled. `Ctrl+<letter>` arrives as the letter's position in the alphabet, so
//! `Ctrl+A` is `0x01` and `Ctrl+Z` is `0x1A`.

/// `Ctrl+A`: move to the start of the line.
pub const CTRL_A: u8 = 0x01;

/// `Ctrl+B`: move one character left.
pub const CTRL_B: u8 = 0x02;

/// `Ctrl+D`: end of input on an empty line, otherwise delete under the cursor.
pub const CTRL_D: u8 = 0x04;

/// `Ctrl+E`: move to the end of the line.
pub const CTRL_E: u8 = 0x05;

/// `Ctrl+F`: move one character right.
pub const CTRL_F: u8 = 0x06;

/// `Ctrl+H` (backspace, 0x08). Most terminals send [`DELETE`] for the backspace key,
/// which leaves this byte free for deleting a whole word.
pub const CTRL_H: u8 = 0x08;

/// Horizontal tab (0x09).
pub const TAB: u8 = b'\t';

/// Line feed (0x0A). With `ICRNL` left on, the Enter key arrives as this byte.
pub const LINE_FEED: u8 = b'\n';

/// `Ctrl+K`: delete from the cursor to the end of the line.
pub const CTRL_K: u8 = 0x0B;

/// Carriage return (0x0D).
pub const CARRIAGE_RETURN: u8 = b'\r';

/// `Ctrl+N`: move one viewport row down.
pub const CTRL_N: u8 = 0x0E;

/// `Ctrl+P`: move one viewport row up.
pub const CTRL_P: u8 = 0x10;

/// `Ctrl+U`: delete from the start of the line to the cursor.
pub const CTRL_U: u8 = 0x15;

/// `Ctrl+W`: delete the word before the cursor.
pub const CTRL_W: u8 = 0x17;

/// DEL (0x7F), sent by the backspace key.
pub const DELETE: u8 = 0x7F;

/// First printable ASCII byte (space).
pub const PRINTABLE_FIRST: u8 = 0x20;

/// Last printable ASCII byte (`~`).
pub const PRINTABLE_LAST: u8 = 0x7E;
