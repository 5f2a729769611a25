//! Bounded text reads and in-place writes.

use std::fs;
use std::io::Read;
use std::path::Path;

use memchr::memchr;

use crate::error::IoError;

/// Default read limit for a single note (10 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Only the leading block is scanned for NULL bytes.
const BINARY_PROBE_LEN: usize = 8192;

/// Whether the buffer looks binary (a NULL byte in the first 8 KiB).
#[must_use]
pub fn looks_binary(buffer: &[u8]) -> bool {
    let probe = &buffer[..buffer.len().min(BINARY_PROBE_LEN)];
    memchr(0, probe).is_some()
}

/// Decode note bytes, replacing invalid UTF-8 sequences with U+FFFD.
///
/// # Errors
/// Returns `IoError::BinaryFile` when binary content is detected.
pub fn decode_text(buffer: Vec<u8>) -> Result<String, IoError> {
    if looks_binary(&buffer) {
        return Err(IoError::BinaryFile);
    }
    Ok(String::from_utf8(buffer)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()))
}

fn read_bounded(path: &Path, max_bytes: u64) -> Result<Vec<u8>, IoError> {
    let metadata =
        fs::metadata(path).map_err(|_| IoError::NotFound(path.display().to_string()))?;
    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = fs::File::open(path)?;
    let mut buffer = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or_default());
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Read a note for scanning. Invalid UTF-8 is replaced, never rejected.
///
/// # Example
///
/// ```rust,ignore
/// let content = notekeep_io::read_text("note.txt", notekeep_io::DEFAULT_MAX_BYTES)?;
/// ```
pub fn read_text<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    decode_text(read_bounded(path.as_ref(), max_bytes)?)
}

/// Read a note that is about to be rewritten.
///
/// Unlike [`read_text`], invalid UTF-8 is an error: writing back a lossy
/// decode would silently corrupt the file.
pub fn read_text_strict<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();
    let buffer = read_bounded(path, max_bytes)?;
    if looks_binary(&buffer) {
        return Err(IoError::BinaryFile);
    }
    String::from_utf8(buffer).map_err(|_| IoError::Encoding(path.display().to_string()))
}

/// Overwrite a note in place.
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<(), IoError> {
    fs::write(path.as_ref(), content)?;
    tracing::trace!(path = %path.as_ref().display(), bytes = content.len(), "note written");
    Ok(())
}
