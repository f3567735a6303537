use std::fs;
use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use thiserror::Error;

/// Errors that can occur while loading a phonebook file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input path does not exist or is not a regular file.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// No fixed or detected encoding produced a clean decode.
    #[error("could not decode {} with any supported encoding", .0.display())]
    Decode(PathBuf),
    /// Input file exists but could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fixed strict-decode attempt order. UTF-8 first, then the wide encodings
/// before the single-byte catch-all so UTF-16 phonebooks (common on Windows)
/// are not misread as windows-1252.
static ATTEMPT_ORDER: [&Encoding; 4] = [UTF_8, UTF_16LE, UTF_16BE, WINDOWS_1252];

/// Read a file of unknown text encoding into a `String`.
///
/// Each encoding in the fixed preference list is tried as a strict decode;
/// the first clean decode wins. If all fixed attempts fail, a statistical
/// detector proposes an encoding from the raw bytes. The file handle is
/// released as soon as the bytes are in memory.
pub fn read_to_string(path: &Path) -> Result<String, ParseError> {
    if !path.is_file() {
        return Err(ParseError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_bytes(&bytes).ok_or_else(|| ParseError::Decode(path.to_path_buf()))
}

/// Decode raw phonebook bytes; `None` when no encoding succeeds.
pub fn decode_bytes(bytes: &[u8]) -> Option<String> {
    for encoding in ATTEMPT_ORDER {
        if let Some(text) = strict_decode(encoding, bytes) {
            return Some(text);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    strict_decode(detector.guess(None, true), bytes)
}

fn strict_decode(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    let text = encoding.decode_without_bom_handling_and_without_replacement(bytes)?;
    // A BOM decoded as text would defeat the leading-'[' header check.
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => Some(stripped.to_owned()),
        None => Some(text.into_owned()),
    }
}
