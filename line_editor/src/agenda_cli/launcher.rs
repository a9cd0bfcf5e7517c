// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CLIArg, CLICommand, EventArgs, FieldPrompt, FormOutcome, LineEditorError,
            edit_line_with_config, prompt_fields_on_tty};
use std::io::{self, Write};
use tracing::info;

/// Labels of the `agenda event` form, in the order they are asked.
pub const EVENT_FIELD_LABELS: [&str; 5] = ["subject", "location", "date", "time", "details"];

/// Run the subcommand in `cli_arg`, writing results to `out`.
///
/// # Errors
///
/// Returns an error if there is no terminal to edit on, or if terminal I/O fails.
pub fn run_command(cli_arg: &CLIArg, out: &mut impl Write) -> Result<(), LineEditorError> {
    let config = cli_arg.global_options.line_editor_config();
    match &cli_arg.command {
        CLICommand::Edit { initial } => {
            let outcome = edit_line_with_config(initial.clone(), &config)?;
            if outcome.is_eof() {
                info!(message = "input ended before Enter");
            }
            writeln!(out, "{}", outcome.as_str())?;
        }
        CLICommand::Event(event_args) => {
            let form = prompt_fields_on_tty(&event_fields(event_args), &config)?;
            if !form.is_complete {
                info!(message = "event form abandoned", answered = form.values.len());
            }
            write_form(out, &form)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// One [`FieldPrompt`] per label in [`EVENT_FIELD_LABELS`], seeded from the command
/// line.
#[must_use]
pub fn event_fields(event_args: &EventArgs) -> Vec<FieldPrompt> {
    let initial_values = [
        &event_args.subject,
        &event_args.location,
        &event_args.date,
        &event_args.time,
        &event_args.details,
    ];
    EVENT_FIELD_LABELS
        .iter()
        .zip(initial_values)
        .map(|(label, initial)| FieldPrompt {
            label: (*label).to_string(),
            initial: initial.clone(),
        })
        .collect()
}

/// Print each answered field as `field=value`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_form(out: &mut impl Write, form: &FormOutcome) -> io::Result<()> {
    for (label, value) in &form.values {
        writeln!(out, "{label}={value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineEditorConfig, TermSize, core::test_fixtures::TerminalAdapterMock,
                prompt_fields};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_event_fields_are_seeded() {
        let event_args = EventArgs {
            date: Some("2025-03-14".into()),
            ..EventArgs::default()
        };
        let fields = event_fields(&event_args);

        let labels: Vec<_> = fields.iter().map(|it| it.label.as_str()).collect();
        assert_eq!(labels, EVENT_FIELD_LABELS);
        assert_eq!(fields[2].initial.as_deref(), Some("2025-03-14"));
        assert_eq!(fields[0].initial, None);
    }

    #[test]
    fn test_event_form_end_to_end() {
        let event_args = EventArgs {
            time: Some("09:30".into()),
            ..EventArgs::default()
        };
        let mut terminal = TerminalAdapterMock::new(
            TermSize::new(80, 24),
            b"dentist\nmain st\n2025-03-14\n\nbring x-rays\n",
        );
        let form = prompt_fields(
            &mut terminal,
            &event_fields(&event_args),
            &LineEditorConfig::default(),
        )
        .unwrap();

        let mut out = Vec::new();
        write_form(&mut out, &form).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "subject=dentist\nlocation=main st\ndate=2025-03-14\ntime=09:30\ndetails=bring x-rays\n"
        );
        assert_eq!(terminal.row_text(4), "time: 09:30");
    }

    #[test]
    fn test_partial_form_prints_what_was_answered() {
        let form = FormOutcome {
            values: vec![("subject".into(), "dent".into())],
            is_complete: false,
        };
        let mut out = Vec::new();
        write_form(&mut out, &form).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "subject=dent\n");
    }
}
