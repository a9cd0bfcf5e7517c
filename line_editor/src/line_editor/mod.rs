// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The editor itself. Leaves first:
//!
//! - [`position_model`]: buffer offset to screen position.
//! - [`escape_decoder`]: raw bytes to [`EditCommand`]s.
//! - [`edit_buffer`]: applies commands to the text and insertion point.
//! - [`line_editor_impl`]: the read, decode, apply, repaint loop.
//! - [`line_editor_api`]: [`edit_line()`] and friends.

// Attach sources.
pub mod edit_buffer;
pub mod escape_decoder;
pub mod line_editor_api;
pub mod line_editor_error;
pub mod line_editor_impl;
pub mod position_model;

// Re-export.
pub use edit_buffer::*;
pub use escape_decoder::*;
pub use line_editor_api::*;
pub use line_editor_error::*;
pub use line_editor_impl::*;
pub use position_model::*;
