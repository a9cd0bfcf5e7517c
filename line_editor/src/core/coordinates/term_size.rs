// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Viewport dimensions in character cells. Both dimensions are at least 1, so the
/// wrap arithmetic in [`crate::line_editor::position_model`] never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermSize {
    pub col_width: usize,
    pub row_height: usize,
}

impl TermSize {
    /// Zero dimensions are lifted to 1.
    #[must_use]
    pub const fn new(col_width: usize, row_height: usize) -> Self {
        Self {
            col_width: if col_width == 0 { 1 } else { col_width },
            row_height: if row_height == 0 { 1 } else { row_height },
        }
    }
}

/// The classic 80x24 terminal.
impl Default for TermSize {
    fn default() -> Self { Self::new(80, 24) }
}

impl Display for TermSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}x{}", self.col_width, self.row_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_never_zero() {
        assert_eq!(TermSize::new(0, 0), TermSize { col_width: 1, row_height: 1 });
        assert_eq!(TermSize::default().to_string(), "80x24");
    }
}
