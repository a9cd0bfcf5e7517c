// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Output side CSI building blocks, used by [`crate::CsiSequence`].

/// Control Sequence Introducer: ESC [
pub const CSI_START: &str = "\x1b[";

/// Parameter separator inside a CSI sequence.
pub const CSI_PARAM_SEPARATOR: char = ';';

/// Cursor Position (CUP): ESC [ row ; col H
pub const CUP_CURSOR_POSITION: char = 'H';

/// Erase in Line (EL): ESC [ n K
pub const EL_ERASE_LINE: char = 'K';

/// Save Cursor Position (SCP): ESC [ s
pub const SCP_SAVE_CURSOR: char = 's';

/// Restore Cursor Position (RCP): ESC [ u
pub const RCP_RESTORE_CURSOR: char = 'u';

/// Device Status Report (DSR): ESC [ n n
pub const DSR_DEVICE_STATUS: char = 'n';

/// `EL` parameter that erases from the cursor to the end of the line.
pub const EL_TO_END_OF_LINE: u16 = 0;

/// `DSR` parameter that asks for a cursor position report.
pub const DSR_CURSOR_POSITION_REQUEST: u16 = 6;

/// Row and column large enough that `CUP` clamps to the bottom right cell. Used to
/// measure the viewport with a cursor position report.
pub const CUP_FAR_CORNER: u16 = 999;
