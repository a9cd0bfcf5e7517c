// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure arithmetic that maps a buffer offset to an absolute screen position.
//!
//! The terminal wraps text on its own, so the editor never stores where a character
//! was drawn. Instead it recomputes it from the start position, the viewport width and
//! the bytes in front of it. Two rules drive the math:
//!
//! 1. **Wrapping.** A plain byte occupies one cell. Columns run `1..=width`; the cell
//!    after the last column is column 1 of the next row.
//! 2. **Tabs.** A tab moves to the next multiple of [`TAB_WIDTH`] (columns 9, 17, 25,
//!    ...). A tab that does not fit in what is left of the row is never split across
//!    rows: it pads to the last column instead.
//!
//! ```text
//! width = 10, start = (8, 1), text = "abcde"
//!
//!          1 2 3 4 5 6 7 8 9 10
//! row 1:  │ │ │ │ │ │ │ │a│b│c │
//! row 2:  │d│e│▒│              ▒ = (3, 2)
//! ```
//!
//! The editor draws tabs as spaces computed by [`advance_tab()`], so what the terminal
//! shows always agrees with this model.

use crate::TermPos;

/// Distance between tab stops.
pub const TAB_WIDTH: usize = 8;

/// Advance `start` by `count` plain cells on a terminal `viewport_width` columns wide.
///
/// The result always has `1 <= col <= viewport_width`. Passing `count == 0` normalizes
/// a start column that lies beyond the viewport, eg: after the terminal got narrower.
#[must_use]
pub fn wrap_advance(start: TermPos, viewport_width: usize, count: usize) -> TermPos {
    let width = viewport_width.max(1);
    let linear = start.col.saturating_sub(1).saturating_add(count);
    TermPos {
        col: linear % width + 1,
        row: start.row.saturating_add(linear / width),
    }
}

/// First tab stop strictly after `col`.
#[must_use]
pub fn next_tab_stop(col: usize) -> usize {
    (col.saturating_sub(1) / TAB_WIDTH + 1) * TAB_WIDTH + 1
}

/// Where a tab typed at `pos` leaves the cursor, and how many blank cells it covers.
/// `pos` must already be normalized (column within the viewport).
#[must_use]
pub fn advance_tab(pos: TermPos, viewport_width: usize) -> (TermPos, usize) {
    let width = viewport_width.max(1);
    let needed = next_tab_stop(pos.col) - pos.col;
    let remaining = (width + 1).saturating_sub(pos.col);
    if needed <= remaining {
        (wrap_advance(pos, width, needed), needed)
    } else {
        // Pad to the edge.
        let pad = width.saturating_sub(pos.col);
        (TermPos { col: width, row: pos.row }, pad)
    }
}

/// Screen position right after `text` when it is drawn starting at `start`.
#[must_use]
pub fn position_after(start: TermPos, viewport_width: usize, text: &[u8]) -> TermPos {
    let mut pos = wrap_advance(start, viewport_width, 0);
    let mut plain_run = 0;
    for &byte in text {
        if byte == b'\t' {
            pos = wrap_advance(pos, viewport_width, plain_run);
            plain_run = 0;
            pos = advance_tab(pos, viewport_width).0;
        } else {
            plain_run += 1;
        }
    }
    wrap_advance(pos, viewport_width, plain_run)
}
