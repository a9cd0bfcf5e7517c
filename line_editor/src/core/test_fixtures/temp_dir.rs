// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::{ops::Deref,
          path::{Path, PathBuf},
          sync::atomic::{AtomicUsize, Ordering},
          time::{SystemTime, UNIX_EPOCH}};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A directory under [`std::env::temp_dir()`] that is deleted when dropped.
#[derive(Debug)]
pub struct TempDir {
    inner: PathBuf,
}

impl Deref for TempDir {
    type Target = Path;
    fn deref(&self) -> &Self::Target { &self.inner }
}

impl Drop for TempDir {
    fn drop(&mut self) { drop(std::fs::remove_dir_all(&self.inner)); }
}

/// Create a fresh, uniquely named temp dir.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |it| it.subsec_nanos());
    let name = format!(
        "agenda_line_editor_{}_{}_{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed),
        nanos
    );
    let new_temp_dir = std::env::temp_dir().join(name);
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}
