//! File backend
//!
//! Each event opens the file in append mode, writes the rendered entry in a
//! single call and closes the handle again. Other processes may keep the file
//! open for reading (and, on Windows, writing) while an entry is written.

use std::error::Error;
use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::render_entry;
use crate::{Level, LogError, LogRecord, Logger, Result};

/// Appends every event to a file. Always enabled.
#[derive(Debug, Clone)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    /// Create a file backend. The file and its directory are created lazily
    /// on the first write.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(LogError::InvalidArgument {
                name: "path",
                reason: "must not be empty or whitespace",
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, entry: &str) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let mut file = open_shared_append(&self.path)?;
        file.write_all(entry.as_bytes())
    }
}

#[cfg(windows)]
fn open_shared_append(path: &Path) -> io::Result<File> {
    use std::os::windows::fs::OpenOptionsExt;

    const FILE_SHARE_READ: u32 = 0x0000_0001;
    const FILE_SHARE_WRITE: u32 = 0x0000_0002;

    OpenOptions::new()
        .create(true)
        .append(true)
        .share_mode(FILE_SHARE_READ | FILE_SHARE_WRITE)
        .open(path)
}

#[cfg(not(windows))]
fn open_shared_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl Logger for FileLogger {
    fn is_enabled(&self, _level: Level) -> bool {
        true
    }

    fn log(
        &self,
        level: Level,
        error: Option<&(dyn Error + 'static)>,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        let entry = render_entry(&LogRecord::new(level, error, template, args))?;
        self.append(&entry).map_err(|source| LogError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
