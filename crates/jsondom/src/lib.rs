//! An in-memory JSON document model paired with a streaming recursive-descent
//! parser and a matching serializer.
//!
//! A JSON text is loaded into a [`Value`] tree, navigated and mutated with
//! array/object semantics, and re-emitted as JSON text:
//!
//! ```rust
//! use jsondom::parse;
//!
//! let doc = parse(r#"{"a": 1, "b": [true, false, null]}"#).unwrap();
//! assert_eq!(doc["a"].as_natural(), 1);
//! assert_eq!(doc["b"].len(), 3);
//! assert!(doc["b"][0].as_bool());
//! ```
//!
//! The parser deliberately mirrors a small historical grammar: the document
//! root must be an object or an array, and string escape sequences are
//! rejected rather than decoded. See [`parse`] for the full contract.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod encoding;
mod error;
mod parser;
mod stream;
mod value;
mod writer;

#[cfg(feature = "std")]
mod loader;

#[cfg(test)]
mod tests;

pub use encoding::{Encoding, Utf8, Utf16, Utf32};
#[cfg(feature = "std")]
pub use error::LoadError;
pub use error::{ErrorKind, ParseError};
#[cfg(feature = "std")]
pub use loader::load_file;
pub use parser::{parse, parse_in_place, parse_stream};
pub use stream::{InplaceStream, Mark, SliceStream, Stream, VecStream};
pub use value::{Array, Key, Kind, Number, Object, Value};
pub use writer::Writer;
