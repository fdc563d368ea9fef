//! The file-loading boundary (requires the `std` feature).

use std::{fs, path::Path};

use crate::{error::LoadError, parser, value::Value};

/// Reads an entire file into memory and parses it as one document.
///
/// The whole input must be resident before parsing starts; there is no
/// incremental mode.
///
/// # Errors
///
/// An unreadable file is [`LoadError::Io`], with no further detail. A
/// well-read file with malformed content is [`LoadError::Parse`]; its
/// message is also logged here, at the boundary, so embedding callers that
/// only check success still get a diagnostic.
pub fn load_file(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    let path = path.as_ref();
    let Ok(text) = fs::read_to_string(path) else {
        return Err(LoadError::Io);
    };
    match parser::parse(&text) {
        Ok(root) => Ok(root),
        Err(err) => {
            log::error!("failed to parse {}: {err}", path.display());
            Err(LoadError::Parse(err))
        }
    }
}
