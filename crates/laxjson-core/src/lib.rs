//! # laxjson-core
//!
//! A small, lenient JSON reader that turns text into an ordered,
//! dynamically-typed value tree with typed accessors.
//!
//! The accepted dialect is deliberately narrow: strings (with `\"` as the only
//! escape), arrays of strings, numbers or objects, unsigned numbers, nested
//! objects and `null`. Booleans, Unicode escapes and negative numbers are not
//! recognized. Numeric field values are kept as their literal text; numbers
//! inside arrays are decoded.
//!
//! ## Quick start
//!
//! ```rust
//! use laxjson_core::{parse, Number};
//!
//! let obj = parse(r#"{"id":42,"tags":["a","b"],"sizes":[1,2.5],"owner":{"name":"Ann"}}"#).unwrap();
//!
//! assert_eq!(obj.get_str("id").unwrap(), Some("42"));
//! assert_eq!(obj.get_strings("tags").unwrap().unwrap(), ["a", "b"]);
//! assert_eq!(obj.get_numbers("sizes").unwrap().unwrap(), [Number::Int(1), Number::Float(2.5)]);
//! assert_eq!(obj.get_object("owner").unwrap().unwrap().get_str("name").unwrap(), Some("Ann"));
//!
//! // A single-entry object renders as its value.
//! assert_eq!(obj.get_object("owner").unwrap().unwrap().to_string(), "Ann");
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: text → [`Object`] (`parse`, `parse_with`)
//! - [`value`]: the value tree, accessors and rendering
//! - [`cursor`]: character-level read primitives used by the parser
//! - [`options`]: lenient/strict recovery and tracing switches
//! - [`error`]: error type for strict parses and typed accessors

pub mod cursor;
pub mod error;
pub mod options;
pub mod parser;
pub mod value;

pub use error::{LaxError, Result};
pub use options::{ParseOptions, Recovery, DEFAULT_MAX_DEPTH};
pub use parser::{parse, parse_with};
pub use value::{Array, Number, Object, Value, ValueKind, INVALID_ARRAY, INVALID_NULL};
