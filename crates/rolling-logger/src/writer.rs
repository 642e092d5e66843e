//! Size-rotated log file writer
//!
//! Writes go to `<path>`; once it would grow past the size limit it is
//! renamed to `<path>.1` (older backups shift up) and a fresh file is
//! started. The most recent complete lines are also kept in memory.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
pub struct RollingFileWriter {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    path: PathBuf,
    file: Option<File>,
    written: u64,
    max_file_bytes: u64,
    max_files: usize,
    recent: VecDeque<String>,
    recent_capacity: usize,
    partial: String,
}

impl RollingFileWriter {
    /// Open (appending) the log file at `path`
    pub fn open(path: PathBuf, max_file_bytes: u64, max_files: usize, recent_capacity: usize) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = open_append(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                path,
                file: Some(file),
                written,
                max_file_bytes,
                max_files: max_files.max(1),
                recent: VecDeque::with_capacity(recent_capacity),
                recent_capacity,
                partial: String::new(),
            })),
        })
    }

    /// Most recent complete lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.inner.lock() {
            Ok(inner) => inner.recent.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| io::Error::other("log writer lock poisoned"))
    }
}

impl Write for RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock()?.write_bytes(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.lock()?.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for RollingFileWriter {
    type Writer = RollingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl Inner {
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<usize> {
        let len = buf.len() as u64;
        if self.written > 0 && self.written + len > self.max_file_bytes {
            self.rotate()?;
        }

        if self.file.is_none() {
            self.file = Some(open_append(&self.path)?);
        }
        let file = self.file.as_mut().ok_or_else(|| io::Error::other("log file unavailable"))?;
        file.write_all(buf)?;
        self.written += len;

        self.remember(buf);
        Ok(buf.len())
    }

    fn remember(&mut self, buf: &[u8]) {
        if self.recent_capacity == 0 {
            return;
        }
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=pos).collect();
            if self.recent.len() == self.recent_capacity {
                self.recent.pop_front();
            }
            self.recent.push_back(line.trim_end().to_string());
        }
    }

    fn rotate(&mut self) -> io::Result<()> {
        // Close before renaming (required on Windows)
        self.file.take();

        let backups = self.max_files - 1;
        if backups == 0 {
            fs::remove_file(&self.path)?;
        } else {
            let oldest = rotated_path(&self.path, backups);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..backups).rev() {
                let from = rotated_path(&self.path, index);
                if from.exists() {
                    fs::rename(&from, rotated_path(&self.path, index + 1))?;
                }
            }
            fs::rename(&self.path, rotated_path(&self.path, 1))?;
        }

        self.file = Some(open_append(&self.path)?);
        self.written = 0;
        Ok(())
    }
}

/// `<path>.<index>`
pub fn rotated_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
