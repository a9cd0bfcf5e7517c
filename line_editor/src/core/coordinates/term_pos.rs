// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! 1-based terminal position combining column and row coordinates.

use super::TermSize;
use std::fmt::{Display, Formatter, Result};

/// 1-based terminal position combining column and row coordinates.
///
/// # Coordinate Order
///
/// Note the `(col, row)` field order, which matches VT-100 ANSI convention for cursor
/// positioning. The values are absolute, relative to the top left cell `(1, 1)` of the
/// viewport. A row may temporarily exceed the viewport height while the line editor
/// is computing where wrapped content ends; [`TermPos::clamp_to()`] brings it back
/// before anything is sent to the terminal.
///
/// # Construction
///
/// ```rust
/// use agenda_line_editor::TermPos;
///
/// let pos = TermPos::from_one_based(10, 5); // column 10, row 5
/// assert_eq!(pos.col, 10);
/// assert_eq!(pos.row, 5);
///
/// // Zero is not a VT-100 coordinate, it is lifted to 1.
/// assert_eq!(TermPos::from_one_based(0, 0), TermPos::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermPos {
    pub col: usize,
    pub row: usize,
}

impl TermPos {
    /// Construct a terminal position from raw 1-based coordinate values. A zero
    /// coordinate is lifted to 1.
    #[must_use]
    pub const fn from_one_based(col: usize, row: usize) -> Self {
        Self {
            col: if col == 0 { 1 } else { col },
            row: if row == 0 { 1 } else { row },
        }
    }

    /// Clamp both coordinates so the position addresses a cell inside `size`.
    #[must_use]
    pub fn clamp_to(self, size: TermSize) -> Self {
        Self::from_one_based(
            self.col.min(size.col_width),
            self.row.min(size.row_height),
        )
    }
}

impl Default for TermPos {
    fn default() -> Self { Self::from_one_based(1, 1) }
}

impl Display for TermPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(col: {}, row: {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_is_lifted_to_one() {
        let pos = TermPos::from_one_based(0, 7);
        assert_eq!(pos, TermPos { col: 1, row: 7 });
    }

    #[test]
    fn test_clamp_to_viewport() {
        let size = TermSize::new(80, 24);
        assert_eq!(
            TermPos::from_one_based(120, 30).clamp_to(size),
            TermPos::from_one_based(80, 24)
        );
        assert_eq!(
            TermPos::from_one_based(5, 3).clamp_to(size),
            TermPos::from_one_based(5, 3)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TermPos::from_one_based(3, 4).to_string(),
            "(col: 3, row: 4)"
        );
    }
}
