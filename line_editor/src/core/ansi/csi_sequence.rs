// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Outgoing CSI sequences. The line editor only needs a handful: absolute cursor
//! moves, erase to end of line, cursor save / restore, and the cursor position
//! request used to probe the terminal.

use super::{CSI_PARAM_SEPARATOR, CSI_START, CUP_CURSOR_POSITION, DSR_DEVICE_STATUS,
            EL_ERASE_LINE, RCP_RESTORE_CURSOR, SCP_SAVE_CURSOR};
use crate::TermPos;
use std::fmt::{Display, Formatter, Result};

/// Builder for CSI (Control Sequence Introducer) sequences. Use the [`Display`] impl
/// to write one to a [`std::io::Write`] with `write!(out, "{seq}")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    /// Cursor Position (CUP) - ESC [ row ; col H
    CursorPosition { row: usize, col: usize },
    /// Erase in Line (EL) - ESC [ n K
    EraseLine(u16),
    /// Save Cursor Position (SCP) - ESC [ s
    SaveCursor,
    /// Restore Cursor Position (RCP) - ESC [ u
    RestoreCursor,
    /// Device Status Report (DSR) - ESC [ n n
    DeviceStatusReport(u16),
}

impl CsiSequence {
    #[must_use]
    pub fn move_to(pos: TermPos) -> Self {
        Self::CursorPosition {
            row: pos.row,
            col: pos.col,
        }
    }
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(CSI_START)?;
        match self {
            CsiSequence::CursorPosition { row, col } => {
                write!(f, "{row}{CSI_PARAM_SEPARATOR}{col}{CUP_CURSOR_POSITION}")
            }
            CsiSequence::EraseLine(n) => write!(f, "{n}{EL_ERASE_LINE}"),
            CsiSequence::SaveCursor => write!(f, "{SCP_SAVE_CURSOR}"),
            CsiSequence::RestoreCursor => write!(f, "{RCP_RESTORE_CURSOR}"),
            CsiSequence::DeviceStatusReport(n) => write!(f, "{n}{DSR_DEVICE_STATUS}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CUP_FAR_CORNER, DSR_CURSOR_POSITION_REQUEST, EL_TO_END_OF_LINE};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(CsiSequence::CursorPosition { row: 3, col: 14 }, "\x1b[3;14H" ; "cursor position")]
    #[test_case(CsiSequence::EraseLine(EL_TO_END_OF_LINE), "\x1b[0K" ; "erase to end of line")]
    #[test_case(CsiSequence::SaveCursor, "\x1b[s" ; "save cursor")]
    #[test_case(CsiSequence::RestoreCursor, "\x1b[u" ; "restore cursor")]
    #[test_case(CsiSequence::DeviceStatusReport(DSR_CURSOR_POSITION_REQUEST), "\x1b[6n" ; "cursor position request")]
    fn test_display(seq: CsiSequence, expected: &str) {
        assert_eq!(seq.to_string(), expected);
    }

    #[test]
    fn test_move_to_uses_row_then_col() {
        let far = usize::from(CUP_FAR_CORNER);
        assert_eq!(
            CsiSequence::move_to(TermPos::from_one_based(far, 2)).to_string(),
            "\x1b[2;999H"
        );
    }
}
