// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Device Status Report (DSR) response sequence constants.

/// Cursor position response terminator: R
pub const DSR_CURSOR_POSITION_RESPONSE_END: u8 = b'R';

/// Longest row or column accepted in a cursor position report. Anything larger is
/// treated as a malformed response rather than a real terminal.
pub const DSR_MAX_DIGITS: usize = 5;
