// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Shorthand for `Ok(())` or `Ok(value)`. Use it to end functions that return a
/// [`Result`], so the happy path reads the same everywhere.
///
/// ```
/// use agenda_line_editor::ok;
///
/// fn nothing() -> std::io::Result<()> { ok!() }
/// fn answer() -> std::io::Result<u8> { ok!(42) }
///
/// assert!(nothing().is_ok());
/// assert_eq!(answer().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}
