// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 plumbing shared by the line editor and the terminal adapter: byte
//! constants, the outgoing [`CsiSequence`] builder, the cursor position report parser,
//! and non-canonical terminal mode.

// Private modules (hide internal structure).
mod constants;

// Attach sources.
pub mod csi_sequence;
pub mod dsr_response_parser;
pub mod terminal_raw_mode;

// Re-export the public API (flat, ergonomic surface).
pub use constants::*;
pub use csi_sequence::*;
pub use dsr_response_parser::*;
pub use terminal_raw_mode::*;
