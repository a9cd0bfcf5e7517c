// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Repainting the edited line.
//!
//! Painting happens in two steps. [`plan_repaint()`] is pure: from the start position,
//! the viewport, the buffer, and how far down the previous paint reached, it works out
//! where everything goes. [`paint()`] turns a [`RepaintPlan`] into ANSI output.
//!
//! # Overflow policy
//!
//! Content that would end below the last row scrolls the screen up, just enough to
//! fit, but never further than the line's own first row (the start row never goes
//! above row 1). The start position moves up by the same amount so the position math
//! stays anchored to what is on screen. If the content is taller than the whole
//! viewport, the rows that don't fit are not drawn and the cursor is clamped to the
//! last row.

use crate::{CsiSequence, EL_TO_END_OF_LINE, TermPos, TermSize, advance_tab,
            position_after, wrap_advance};
use std::{io::{self, Write},
          ops::RangeInclusive};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepaintPlan {
    /// Where the line starts after normalization and scrolling.
    pub start: TermPos,
    /// One past the last cell of the content. `row` may exceed the viewport height if
    /// the content doesn't fit.
    pub end: TermPos,
    /// Where the terminal cursor is left, always inside the viewport.
    pub cursor: TermPos,
    /// Line feeds to emit at the bottom row before painting.
    pub scroll_by: usize,
    /// Rows the previous paint used that the new content no longer reaches.
    pub stale_rows: RangeInclusive<usize>,
}

/// Work out a repaint of `content` with the cursor in front of `content[index]`.
/// `prev_end_row` is [`RepaintPlan::end`]`.row` of the previous paint, or the start row
/// if nothing has been painted yet.
#[must_use]
pub fn plan_repaint(
    start: TermPos,
    viewport: TermSize,
    content: &[u8],
    index: usize,
    prev_end_row: usize,
) -> RepaintPlan {
    let width = viewport.col_width;
    let height = viewport.row_height;

    let mut start = wrap_advance(start, width, 0);
    let mut prev_end_row = prev_end_row;

    // The terminal got shorter and already pushed the line up.
    let shrunk_by = start.row.saturating_sub(height);
    start.row -= shrunk_by;
    prev_end_row = prev_end_row.saturating_sub(shrunk_by);

    let mut end = position_after(start, width, content);
    let scroll_by = end
        .row
        .saturating_sub(height)
        .min(start.row.saturating_sub(1));
    start.row -= scroll_by;
    end.row -= scroll_by;
    prev_end_row = prev_end_row.saturating_sub(scroll_by);

    let cursor =
        position_after(start, width, &content[..index.min(content.len())]).clamp_to(viewport);

    let stale_rows = (end.row + 1)..=prev_end_row.min(height);

    RepaintPlan {
        start,
        end,
        cursor,
        scroll_by,
        stale_rows,
    }
}

/// Emit `plan`. Tabs are written as the spaces they expand to, so the cells the
/// terminal fills agree with [`crate::line_editor::position_model`].
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn paint(
    out: &mut dyn Write,
    plan: &RepaintPlan,
    viewport: TermSize,
    content: &[u8],
) -> io::Result<()> {
    let width = viewport.col_width;
    let height = viewport.row_height;
    let erase = CsiSequence::EraseLine(EL_TO_END_OF_LINE);

    if plan.scroll_by > 0 {
        let bottom = TermPos::from_one_based(1, height);
        write!(out, "{}", CsiSequence::move_to(bottom))?;
        out.write_all(&b"\n".repeat(plan.scroll_by))?;
    }

    write!(out, "{}", CsiSequence::move_to(plan.start))?;
    let mut pos = plan.start;
    for &byte in content {
        if pos.row > height {
            break;
        }
        if byte == b'\t' {
            let (next, spaces) = advance_tab(pos, width);
            out.write_all(&b" ".repeat(spaces))?;
            pos = next;
        } else {
            out.write_all(&[byte])?;
            pos = wrap_advance(pos, width, 1);
        }
    }

    if plan.end.row <= height {
        write!(out, "{}{erase}", CsiSequence::move_to(plan.end))?;
    }
    for row in plan.stale_rows.clone() {
        write!(out, "{}{erase}", CsiSequence::move_to(TermPos::from_one_based(1, row)))?;
    }

    write!(out, "{}", CsiSequence::move_to(plan.cursor))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pos(col: usize, row: usize) -> TermPos { TermPos::from_one_based(col, row) }

    #[test]
    fn test_plan_fits_without_scrolling() {
        let plan = plan_repaint(pos(5, 2), TermSize::new(80, 24), b"hello", 2, 2);
        assert_eq!(plan.start, pos(5, 2));
        assert_eq!(plan.end, pos(10, 2));
        assert_eq!(plan.cursor, pos(7, 2));
        assert_eq!(plan.scroll_by, 0);
        assert!(plan.stale_rows.is_empty());
    }

    #[test]
    fn test_plan_wrap_scenario() {
        let plan = plan_repaint(pos(8, 4), TermSize::new(10, 24), b"abcde", 5, 4);
        assert_eq!(plan.end, pos(3, 5));
        assert_eq!(plan.cursor, pos(3, 5));
    }

    #[test]
    fn test_plan_scrolls_at_bottom() {
        // 12 cells from column 1 of the last row need a second row.
        let plan = plan_repaint(pos(1, 5), TermSize::new(10, 5), b"abcdefghijkl", 12, 5);
        assert_eq!(plan.scroll_by, 1);
        assert_eq!(plan.start, pos(1, 4));
        assert_eq!(plan.end, pos(3, 5));
        assert_eq!(plan.cursor, pos(3, 5));
    }

    #[test]
    fn test_plan_shrink_clears_wrapped_rows() {
        let plan = plan_repaint(pos(1, 2), TermSize::new(10, 24), b"abc", 3, 4);
        assert_eq!(plan.end, pos(4, 2));
        assert_eq!(plan.stale_rows, 3..=4);
    }

    #[test]
    fn test_plan_normalizes_start_after_narrowing() {
        let plan = plan_repaint(pos(45, 3), TermSize::new(20, 24), b"", 0, 3);
        assert_eq!(plan.start, pos(5, 5));
        assert_eq!(plan.cursor, pos(5, 5));
    }

    #[test]
    fn test_plan_content_taller_than_viewport() {
        let content = [b'x'; 35];
        let plan = plan_repaint(pos(1, 3), TermSize::new(10, 3), &content, 35, 3);
        assert_eq!(plan.scroll_by, 2);
        assert_eq!(plan.start, pos(1, 1));
        assert_eq!(plan.end, pos(6, 4));
        assert_eq!(plan.cursor, pos(6, 3));
    }

    #[test]
    fn test_plan_clamps_start_after_vertical_shrink() {
        let plan = plan_repaint(pos(1, 20), TermSize::new(80, 10), b"hi", 2, 20);
        assert_eq!(plan.start, pos(1, 10));
        assert_eq!(plan.scroll_by, 0);
        assert!(plan.stale_rows.is_empty());
    }

    #[test]
    fn test_paint_output() {
        let viewport = TermSize::new(80, 24);
        let plan = plan_repaint(pos(3, 1), viewport, b"a\tb", 1, 1);
        let mut out = Vec::new();
        paint(&mut out, &plan, viewport, b"a\tb").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[1;3Ha     b\x1b[1;10H\x1b[0K\x1b[1;4H"
        );
    }

    #[test]
    fn test_paint_clears_stale_rows() {
        let viewport = TermSize::new(10, 24);
        let plan = plan_repaint(pos(1, 2), viewport, b"ab", 2, 3);
        let mut out = Vec::new();
        paint(&mut out, &plan, viewport, b"ab").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[2;1Hab\x1b[2;3H\x1b[0K\x1b[3;1H\x1b[0K\x1b[2;3H"
        );
    }

    #[test]
    fn test_paint_scrolls_first() {
        let viewport = TermSize::new(4, 2);
        let plan = plan_repaint(pos(1, 2), viewport, b"abcde", 5, 2);
        let mut out = Vec::new();
        paint(&mut out, &plan, viewport, b"abcde").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[2;1H\n\x1b[1;1Habcde\x1b[2;2H\x1b[0K\x1b[2;2H"
        );
    }
}
