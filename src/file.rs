//! Reading and writing buffer contents
//!
//! Files are read as raw bytes and split on `\n`; a trailing `\r` on each
//! line is dropped. Saving writes every line followed by `\n`.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Errors that can occur when opening a file
#[derive(Debug)]
pub enum FileOpenError {
    /// Permission denied to read file
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// File exceeds size limit
    TooLarge { size_mb: f64 },
    /// Other I/O error
    Io(io::Error),
}

impl std::fmt::Display for FileOpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::TooLarge { size_mb } => write!(
                f,
                "file too large ({:.1} MB, max {} MB)",
                size_mb,
                MAX_FILE_SIZE / (1024 * 1024)
            ),
            Self::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FileOpenError {}

impl From<io::Error> for FileOpenError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            ErrorKind::PermissionDenied => FileOpenError::PermissionDenied,
            _ => FileOpenError::Io(e),
        }
    }
}

/// Read a file into lines
///
/// A missing file is not an error: it returns `Ok(None)` and the caller
/// starts a new, empty buffer that will be created on first save.
pub fn load_lines(path: &Path) -> Result<Option<Vec<Vec<u8>>>, FileOpenError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if metadata.is_dir() {
        return Err(FileOpenError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(FileOpenError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    let bytes = fs::read(path)?;
    Ok(Some(split_lines(&bytes)))
}

/// Split file contents into lines without their terminators
///
/// A final `\n` ends the last line; it does not start a new one. Every
/// trailing `\r` is dropped from each line.
pub fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n')
        .map(|line| {
            let end = line.iter().rposition(|&b| b != b'\r').map_or(0, |i| i + 1);
            line[..end].to_vec()
        })
        .collect()
}

/// Write contents to disk, returning the number of bytes written
pub fn save(path: &Path, contents: &[u8]) -> io::Result<usize> {
    fs::write(path, contents)?;
    Ok(contents.len())
}
