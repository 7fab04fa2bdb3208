//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application.

use anyhow::Context;
use derive_new::new;
use fake::rand;
use minus::Pager;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Wrapper that implements `Write` for the minus pager
///
/// `log` and `global-log` can print the whole history, so when stdout is a
/// terminal their output is pushed into a pager instead.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "===")?;
/// page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sibling path used to stage a write before it is renamed over `path`.
pub fn temp_path_for(path: &Path) -> anyhow::Result<PathBuf> {
    let dir = path
        .parent()
        .with_context(|| format!("Invalid target path {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(dir.join(format!(".tmp-{}-{}", name, rand::random::<u32>())))
}

/// Replace the contents of `path` in one step: write a temporary sibling, then
/// rename it into place. Readers see either the old or the new content.
pub fn write_atomically(path: &Path, content: &[u8]) -> anyhow::Result<()> {
    let temp_path = temp_path_for(path)?;

    let result = std::fs::write(&temp_path, content)
        .with_context(|| format!("Unable to write temporary file {}", temp_path.display()))
        .and_then(|_| {
            std::fs::rename(&temp_path, path)
                .with_context(|| format!("Unable to rename temporary file to {}", path.display()))
        });

    if result.is_err() {
        let _ = std::fs::remove_file(&temp_path);
    }

    result
}
