// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{LineEditorConfig, QueryPolicy, TracingConfig};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(bin_name = "agenda")]
#[command(about = "📅 Keep track of events and todos from your terminal")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  agenda [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `agenda_log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        requires = "enable_logging",
        help = "Log to this file instead of `agenda_log.txt`"
    )]
    pub log_file: Option<String>,

    #[arg(
        global = true,
        long,
        value_name = "MS",
        default_value_t = 250,
        help = "How long to wait for the terminal to answer a cursor position query"
    )]
    pub query_timeout_ms: u64,

    #[arg(
        global = true,
        long,
        value_name = "COUNT",
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(1..),
        help = "How many times to ask the terminal before falling back to defaults"
    )]
    pub query_attempts: u8,
}

impl GlobalOption {
    #[must_use]
    pub fn line_editor_config(&self) -> LineEditorConfig {
        LineEditorConfig {
            query_policy: QueryPolicy {
                attempts: self.query_attempts,
                timeout: Duration::from_millis(self.query_timeout_ms),
            },
            ..LineEditorConfig::default()
        }
    }

    /// `None` when logging is not enabled.
    #[must_use]
    pub fn tracing_config(&self) -> Option<TracingConfig> {
        self.enable_logging
            .then(|| TracingConfig::new_file(self.log_file.clone()))
    }
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "✏️ Edit a single line and print it\n💡 Eg: `agenda edit --initial \"buy milk\"`")]
    Edit {
        #[arg(long, short, help = "Text to start with, the cursor is placed after it")]
        initial: Option<String>,
    },

    #[clap(
        about = "🗓️ Enter the fields of a new event and print them as `field=value` lines\n💡 Eg: `agenda event --date 2025-03-14`"
    )]
    Event(EventArgs),
}

/// Initial values for the event form. Every field is edited either way.
#[derive(Debug, Clone, Default, Args)]
pub struct EventArgs {
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long, help = "Date, eg: 2025-03-14")]
    pub date: Option<String>,
    #[arg(long, help = "Time, eg: 09:30")]
    pub time: Option<String>,
    #[arg(long)]
    pub details: Option<String>,
}
