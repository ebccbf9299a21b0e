//! jsonlw - a lightweight in-memory JSON value.
//!
//! This crate provides a JSON [`Value`] sum type, a hand-written
//! recursive-descent parser and a pretty-printing serializer.
//!
//! # Architecture
//!
//! - [`value`] - the `Value` / `Kind` types and conversions into them
//! - [`access`] - typed readers, strict and auto-vivifying key/index access
//! - [`cursor`] - byte cursor the parser productions share
//! - [`parser`] - recursive descent with depth and size [`Limits`]
//! - [`dump`] - pretty printer with configurable indentation
//! - [`error`] - structural and access errors
//!
//! # Example
//!
//! ```
//! use jsonlw::{load, Value};
//!
//! let mut doc = load(r#"{"name": "jsonlw", "tags": ["json"]}"#).unwrap();
//! doc["tags"][1] = Value::from("parser");
//! doc["version"] = Value::from(1);
//!
//! assert_eq!(doc.at("name").and_then(Value::try_str), Ok("jsonlw"));
//! assert_eq!(doc["tags"].length(), Some(2));
//! assert_eq!(
//!     doc.dump(),
//!     "{\n    \"name\" : \"jsonlw\",\n    \"tags\" : [\"json\", \"parser\"],\n    \"version\" : 1\n}"
//! );
//! ```

// Library code reports failures through JsonResult instead of panicking.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod access;
pub mod cursor;
pub mod dump;
pub mod error;
pub mod limits;
pub mod parser;
mod serde_impl;
pub mod value;

// Re-export commonly used items
pub use dump::{dump, escape, DumpOptions, DEFAULT_INDENT};
pub use error::{JsonError, JsonResult};
pub use limits::{Limits, UnicodeEscapes};
pub use parser::{load, load_with_limits, Parser};
pub use value::{Kind, Map, Value};
