//! Error types for strict parsing and typed value access.

use crate::value::ValueKind;
use thiserror::Error;

/// Errors reported by strict parsing and by the typed accessors on [`Object`].
///
/// Parse variants carry the byte offset into the input where the problem was
/// detected. In lenient mode the same conditions are logged instead of returned.
///
/// [`Object`]: crate::value::Object
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LaxError {
    /// The document did not start with `{`.
    #[error("expected '{{' to open the document at offset {offset}, found {found}")]
    ExpectedObject { offset: usize, found: String },

    /// A member did not start with a quoted key.
    #[error("expected '\"' to open a key at offset {offset}, found {found}")]
    ExpectedKey { offset: usize, found: String },

    /// A key was not followed by `:`.
    #[error("expected ':' after key '{key}' at offset {offset}, found {found}")]
    ExpectedColon {
        key: String,
        offset: usize,
        found: String,
    },

    /// The character after `:` does not start any supported value.
    #[error("unexpected value lead at offset {offset}: {found}")]
    UnexpectedValue { offset: usize, found: String },

    /// A member list or array ended with something other than its closing
    /// delimiter.
    #[error("expected ',' or '{expected}' at offset {offset}, found {found}")]
    UnexpectedCharacter {
        offset: usize,
        expected: char,
        found: String,
    },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// Input ended before the braces of a nested object balanced.
    #[error("unbalanced object starting at offset {offset}")]
    UnbalancedObject { offset: usize },

    /// The first element of an array is not a string, number or object.
    #[error("invalid array at offset {offset}: first element starts with {found}")]
    InvalidArray { offset: usize, found: String },

    /// A numeric literal could not be decoded.
    #[error("invalid number literal '{literal}' at offset {offset}")]
    InvalidNumber { offset: usize, literal: String },

    /// A value starting with `n` was not the `null` literal.
    #[error("invalid null literal at offset {offset}")]
    InvalidNull { offset: usize },

    /// A nested object sits deeper than `ParseOptions::max_depth`.
    #[error("object at offset {offset} exceeds the maximum nesting depth of {max_depth}")]
    DepthExceeded { offset: usize, max_depth: usize },

    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// Non-whitespace text followed the closing brace of the document.
    #[error("trailing characters after document at offset {offset}")]
    TrailingCharacters { offset: usize },

    /// A typed accessor found a different variant than the one requested.
    #[error("type mismatch for key '{key}': expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: ValueKind,
    },
}

/// Convenience alias used throughout laxjson-core.
pub type Result<T> = std::result::Result<T, LaxError>;

/// Describe an optional character for diagnostics.
pub(crate) fn describe(found: Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of input".to_string(),
    }
}
