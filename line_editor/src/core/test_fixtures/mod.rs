// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test doubles for terminal I/O.

// Attach sources.
pub mod stdout_mock;
pub mod temp_dir;
pub mod terminal_adapter_mock;

// Re-export.
pub use stdout_mock::*;
pub use temp_dir::*;
pub use terminal_adapter_mock::*;
