// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod term_pos;
pub mod term_size;

// Re-export.
pub use term_pos::*;
pub use term_size::*;
