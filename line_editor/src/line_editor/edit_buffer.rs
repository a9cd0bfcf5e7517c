// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The text being edited and the insertion point inside it.
//!
//! [`EditBuffer`] is a single-byte character model: every byte is one cell, no UTF-8
//! decoding happens here. All operations are infallible and never leave `index`
//! outside `0..=len`.
//!
//! # Capacity
//!
//! The buffer tracks a logical capacity that always satisfies `len < capacity`.
//!
//! - **Grow**: before an insert, the capacity doubles until there is room for the new
//!   byte plus one spare slot.
//! - **Shrink**: after a delete, the capacity halves once if less than a quarter of it
//!   is in use. Halving at a quarter (not at a half) leaves the shrunk buffer half
//!   empty, so typing one more character right after never triggers a regrow.
//!
//! [`EditBuffer::capacity()`] reports the logical value; the backing [`Vec`] is kept
//! in step with [`Vec::reserve_exact()`] and [`Vec::shrink_to()`].

use std::ops::Range;
use strum_macros::Display;

/// Smallest logical capacity a buffer is ever given.
pub const MIN_CAPACITY: usize = 8;

/// How a [`EditBuffer::insert()`] treats the byte under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum EditMode {
    #[default]
    Insert,
    Overwrite,
}

impl EditMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            EditMode::Insert => EditMode::Overwrite,
            EditMode::Overwrite => EditMode::Insert,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    content: Vec<u8>,
    capacity: usize,
    index: usize,
}

impl Default for EditBuffer {
    fn default() -> Self { Self::new() }
}

impl EditBuffer {
    #[must_use]
    pub fn new() -> Self { Self::from_seed("") }

    /// Start with `seed` already typed and the cursor after it.
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        let content = seed.as_bytes().to_vec();
        let capacity = content
            .len()
            .saturating_add(2)
            .next_power_of_two()
            .max(MIN_CAPACITY);
        let mut it = Self {
            index: content.len(),
            content,
            capacity,
        };
        it.sync_backing_storage();
        it
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.content }

    #[must_use]
    pub fn len(&self) -> usize { self.content.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.content.is_empty() }

    #[must_use]
    pub fn index(&self) -> usize { self.index }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Hand the text over to the caller. Bytes that aren't valid UTF-8 are replaced.
    #[must_use]
    pub fn into_string(self) -> String {
        match String::from_utf8(self.content) {
            Ok(it) => it,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }

    // ==================== Mutation ====================

    /// Put `byte` at the cursor and advance past it.
    ///
    /// In [`EditMode::Overwrite`] a byte under the cursor is replaced, so the length
    /// only changes when the cursor sits at the end.
    pub fn insert(&mut self, byte: u8, mode: EditMode) {
        match mode {
            EditMode::Overwrite if self.index < self.content.len() => {
                self.content[self.index] = byte;
            }
            _ => {
                self.reserve_for_one_more();
                self.content.insert(self.index, byte);
            }
        }
        self.index += 1;
    }

    /// Backspace.
    pub fn delete_backward(&mut self) {
        if self.index == 0 {
            return;
        }
        self.remove_range(self.index - 1..self.index);
        self.index -= 1;
    }

    /// Delete the byte under the cursor. The cursor stays put.
    pub fn delete_forward(&mut self) {
        if self.index == self.content.len() {
            return;
        }
        self.remove_range(self.index..self.index + 1);
    }

    pub fn delete_word_backward(&mut self) {
        let boundary = word_boundary_backward(&self.content, self.index);
        self.remove_range(boundary..self.index);
        self.index = boundary;
    }

    pub fn delete_word_forward(&mut self) {
        let boundary = word_boundary_forward(&self.content, self.index);
        self.remove_range(self.index..boundary);
    }

    pub fn delete_to_start(&mut self) {
        self.remove_range(0..self.index);
        self.index = 0;
    }

    pub fn delete_to_end(&mut self) { self.remove_range(self.index..self.content.len()); }

    // ==================== Navigation ====================

    pub fn move_left(&mut self) { self.index = self.index.saturating_sub(1); }

    pub fn move_right(&mut self) {
        if self.index < self.content.len() {
            self.index += 1;
        }
    }

    pub fn move_home(&mut self) { self.index = 0; }

    pub fn move_end(&mut self) { self.index = self.content.len(); }

    /// One wrapped row up. Stays put on the first row.
    pub fn move_up(&mut self, viewport_width: usize) {
        let width = viewport_width.max(1);
        if self.index >= width {
            self.index -= width;
        }
    }

    /// One wrapped row down. Lands at the end when there is no full row left below.
    pub fn move_down(&mut self, viewport_width: usize) {
        let width = viewport_width.max(1);
        match self.index.checked_add(width) {
            Some(next) if next <= self.content.len() => self.index = next,
            _ => self.index = self.content.len(),
        }
    }

    pub fn move_word_left(&mut self) {
        self.index = word_boundary_backward(&self.content, self.index);
    }

    pub fn move_word_right(&mut self) {
        self.index = word_boundary_forward(&self.content, self.index);
    }

    // ==================== Capacity ====================

    fn reserve_for_one_more(&mut self) {
        let mut grew = false;
        while self.content.len() + 2 > self.capacity {
            self.capacity = self.capacity.saturating_mul(2);
            grew = true;
        }
        if grew {
            self.sync_backing_storage();
        }
    }

    /// Remove `range` with a single shift of the tail, then apply shrink hysteresis.
    fn remove_range(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        self.content.drain(range);
        self.shrink_if_sparse();
    }

    fn shrink_if_sparse(&mut self) {
        if self.content.len() + 1 < self.capacity / 4 {
            self.capacity = (self.capacity / 2).max(MIN_CAPACITY);
            self.sync_backing_storage();
        }
    }

    fn sync_backing_storage(&mut self) {
        let len = self.content.len();
        if self.content.capacity() < self.capacity {
            self.content.reserve_exact(self.capacity - len);
        } else {
            self.content.shrink_to(self.capacity);
        }
    }

    #[cfg(test)]
    fn with_index(mut self, index: usize) -> Self {
        self.index = index.min(self.content.len());
        self
    }
}

/// Skip the run of non-word bytes at `index`, then the word after it.
#[must_use]
pub fn word_boundary_forward(text: &[u8], index: usize) -> usize {
    let mut it = index.min(text.len());
    while it < text.len() && !text[it].is_ascii_alphanumeric() {
        it += 1;
    }
    while it < text.len() && text[it].is_ascii_alphanumeric() {
        it += 1;
    }
    it
}

/// Mirror of [`word_boundary_forward()`]. The result is always the first byte of a
/// word, or 0.
#[must_use]
pub fn word_boundary_backward(text: &[u8], index: usize) -> usize {
    let mut it = index.min(text.len());
    while it > 0 && !text[it - 1].is_ascii_alphanumeric() {
        it -= 1;
    }
    while it > 0 && text[it - 1].is_ascii_alphanumeric() {
        it -= 1;
    }
    // Landed on a separator: step onto the word that follows it.
    if it > 0 && text.get(it).is_some_and(|byte| !byte.is_ascii_alphanumeric()) {
        it += 1;
    }
    it
}
