// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
mod control_chars;
mod csi;
mod dsr;
mod input_sequences;

// Re-export.
pub use control_chars::*;
pub use csi::*;
pub use dsr::*;
pub use input_sequences::*;
