// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use agenda_line_editor::{CLIArg, run_command, setup_default_miette_global_report_handler,
                         try_initialize_logging_global};
use clap::Parser;

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler();

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    // Only ever to a file, the terminal belongs to the editor.
    let maybe_tracing_config = cli_arg.global_options.tracing_config();
    let enable_logging = maybe_tracing_config.is_some();
    if let Some(tracing_config) = maybe_tracing_config {
        try_initialize_logging_global(tracing_config)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let result = run_command(&cli_arg, &mut std::io::stdout().lock());

    if enable_logging {
        if let Err(error) = &result {
            tracing::error!(message = "Could not run agenda", error = ?error);
        }
        tracing::debug!(message = "Stop logging...");
    }

    result.map_err(miette::Report::new)
}
