// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scripted end-to-end sessions.
//!
//! Each test feeds a byte script through [`TerminalAdapterMock`], which renders the
//! editor's output on a [`vt100`] screen and answers cursor position and viewport
//! size queries from that screen. Assertions are made on the returned outcome and on
//! what the user would see, not on the exact escape sequences emitted.
//!
//! Unit tests for the pieces live next to them: [`position_model`], [`edit_buffer`],
//! [`escape_decoder`], and [`render`].
//!
//! [`TerminalAdapterMock`]: crate::core::test_fixtures::TerminalAdapterMock
//! [`position_model`]: crate::line_editor::position_model
//! [`edit_buffer`]: crate::line_editor::edit_buffer
//! [`escape_decoder`]: crate::line_editor::escape_decoder
//! [`render`]: super::render
