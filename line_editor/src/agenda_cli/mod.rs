// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The `agenda` command line: argument parsing and the code each subcommand runs.
//! Storage of events is out of scope, the CLI only collects input and prints it.

// Include.
pub mod clap_config;
pub mod launcher;

// Reexport.
pub use clap_config::*;
pub use launcher::*;
