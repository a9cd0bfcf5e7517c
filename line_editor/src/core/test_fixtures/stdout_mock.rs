// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Result, Write},
          sync::{Arc, Mutex}};
use strip_ansi_escapes::strip;

/// You can safely clone this struct, since it only contains an `Arc<Mutex<Vec<u8>>>`.
/// The inner `buffer` will not be cloned, just the [Arc] will be cloned.
#[derive(Clone, Default, Debug)]
pub struct StdoutMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl StdoutMock {
    pub fn new() -> Self { Self::default() }

    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.buffer.lock().unwrap().clone() }

    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.get_copy_of_buffer()).into_owned()
    }

    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        String::from_utf8_lossy(&strip(self.get_copy_of_buffer())).into_owned()
    }

    pub fn clear(&self) { self.buffer.lock().unwrap().clear(); }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stdout_mock_no_strip_ansi() {
        let mut stdout_mock = StdoutMock::default();
        let stdout_mock_clone = stdout_mock.clone(); // Points to the same inner value.

        stdout_mock.write_all(b"\x1b[1;1Hhello").unwrap();
        stdout_mock.flush().unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[1;1Hhello");
        assert_eq!(
            stdout_mock_clone.get_copy_of_buffer_as_string(),
            "\x1b[1;1Hhello"
        );
    }

    #[test]
    fn test_stdout_mock_strip_ansi() {
        let mut stdout_mock = StdoutMock::default();
        stdout_mock.write_all(b"\x1b[3;7Hhello\x1b[0K").unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "hello");

        stdout_mock.clear();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }
}
