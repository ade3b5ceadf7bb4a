//! Size-rotated append-only line writer.
//!
//! Backups are numbered: `commentary-otlp.json.1` is the most recent,
//! `.json.3` the oldest. Rotation shifts every backup up one slot and drops
//! whatever falls off the end.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the live file is rotated (1 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 1024 * 1024;

/// Number of numbered backups kept.
pub const MAX_BACKUP_FILES: usize = 3;

/// Appends lines to a file, rotating it once it grows past a size limit.
///
/// The handle is opened lazily on first write and shared behind a `Mutex`,
/// since the span exporter may be driven from more than one thread.
pub struct RotatingWriter {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    /// Writer with the default limits.
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from rotation, opening or writing, and an error if
    /// the lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|m| m.len() >= self.max_bytes) {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file not open"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    /// Path of backup number `n` (1-based).
    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return remove_if_exists(&self.path);
        }

        remove_if_exists(&self.backup_path(self.backups))?;
        for n in (1..self.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("trace.json");
        let writer = RotatingWriter::new(path.clone());

        writer.write_line("first").expect("write");
        writer.write_line("second").expect("write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "first\nsecond\n");
    }

    #[test]
    fn rotates_into_numbered_backups() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("trace.json");
        let writer = RotatingWriter::with_limits(path.clone(), 4, 2);

        for line in ["aaaa", "bbbb", "cccc", "dddd"] {
            writer.write_line(line).expect("write");
        }

        let read = |p: &Path| fs::read_to_string(p).expect("read");
        assert_eq!(read(&path), "dddd\n");
        assert_eq!(read(&dir.path().join("trace.json.1")), "cccc\n");
        assert_eq!(read(&dir.path().join("trace.json.2")), "bbbb\n");
        assert!(!dir.path().join("trace.json.3").exists());
    }
}
