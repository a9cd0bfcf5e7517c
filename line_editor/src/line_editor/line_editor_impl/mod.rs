// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod line_editor_state;
pub mod raw_mode_session;
pub mod render;

#[cfg(test)]
mod integration_tests;

// Re-export.
pub use line_editor_state::*;
pub use raw_mode_session::*;
pub use render::*;
