//! Text input for the frequency counter.
//!
//! Files below [`MMAP_THRESHOLD`] are read directly; larger ones are
//! memory-mapped. Standard input is read to completion.

// Memory mapping requires unsafe; the mapping is read-only and dropped before return
#![allow(unsafe_code)]

use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Threshold for using memory mapping (1MB).
pub const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum file size to read into memory (1GB).
pub const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Label used in errors for standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// An opened text file, sized up front.
///
/// # Examples
///
/// ```no_run
/// use drills::io::FileReader;
///
/// let reader = FileReader::open("notes.txt").unwrap();
/// let text = reader.read_to_string().unwrap();
/// ```
pub struct FileReader {
    file: File,
    size: u64,
    path: String,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] if the path does not exist and
    /// [`IoError::ReadFailed`] if it cannot be opened or is too large.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        if !path_ref.exists() {
            return Err(IoError::FileNotFound { path: path_str }.into());
        }

        let file = File::open(path_ref).map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let size = file
            .metadata()
            .map_err(|e| IoError::ReadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            })?
            .len();

        if size > MAX_FILE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        Ok(Self {
            file,
            size,
            path: path_str,
        })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns true if [`Self::read_to_string`] will memory-map the file.
    #[must_use]
    pub const fn uses_mmap(&self) -> bool {
        self.size >= MMAP_THRESHOLD
    }

    /// Reads the whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content is not valid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        if self.uses_mmap() {
            self.read_mmap()
        } else {
            read_source(&self.file, &self.path)
        }
    }

    fn read_mmap(&self) -> Result<String> {
        // Safety: read-only mapping, copied out before the map is dropped
        let mmap = unsafe {
            Mmap::map(&self.file).map_err(|e| IoError::MmapFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?
        };

        std::str::from_utf8(&mmap)
            .map(str::to_string)
            .map_err(|e| invalid_utf8(&self.path, &e))
    }
}

/// Reads a file to string, choosing direct or mapped reads by size.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    FileReader::open(path)?.read_to_string()
}

/// Reads all of standard input as UTF-8 text.
///
/// # Errors
///
/// Returns [`IoError::ReadFailed`] labelled `<stdin>` on failure.
pub fn read_stdin() -> Result<String> {
    read_source(std::io::stdin().lock(), STDIN_LABEL)
}

/// Reads any source to completion, labelling errors with `label`.
///
/// # Errors
///
/// Returns [`IoError::ReadFailed`] if reading fails or the bytes are not
/// valid UTF-8.
pub fn read_source<R: Read>(mut source: R, label: &str) -> Result<String> {
    let mut bytes = Vec::new();
    source
        .read_to_end(&mut bytes)
        .map_err(|e| IoError::ReadFailed {
            path: label.to_string(),
            reason: e.to_string(),
        })?;
    String::from_utf8(bytes).map_err(|e| invalid_utf8(label, &e.utf8_error()))
}

fn invalid_utf8(path: &str, err: &std::str::Utf8Error) -> crate::Error {
    IoError::ReadFailed {
        path: path.to_string(),
        reason: format!("invalid UTF-8 at byte offset {}", err.valid_up_to()),
    }
    .into()
}
