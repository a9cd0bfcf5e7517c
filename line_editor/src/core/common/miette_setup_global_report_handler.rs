// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Global [miette](https://docs.rs/miette/latest/miette/index.html) report hook for the
//! `agenda` binary.
//!
//! The hook is lazy: it only runs when a [`miette::Report`] is actually printed, which
//! is when `main() -> miette::Result<_>` returns an error. By then the line editor has
//! restored the terminal, so the terminal width can be measured right before output.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Fallback width used when the terminal can't report its size, eg: when stderr is
/// redirected to a file.
pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// Installs the graphical report handler. Calling it more than once is harmless; later
/// calls are ignored.
pub fn setup_default_miette_global_report_handler() {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = crossterm::terminal::size()
            .map_or(DEFAULT_REPORT_WIDTH, |(columns, _rows)| usize::from(columns));
        debug!(message = "miette::set_hook", terminal_width);
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .build(),
        )
    }))
    .ok();
}
