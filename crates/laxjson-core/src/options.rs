//! Parse configuration threaded through every parser invocation.

/// Default limit on object nesting, counting the outermost object.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// What the parser does when the input is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recovery {
    /// Log a diagnostic and keep going. Malformed `null` literals and arrays
    /// become the [`INVALID_NULL`](crate::INVALID_NULL) and
    /// [`INVALID_ARRAY`](crate::INVALID_ARRAY) sentinel strings.
    #[default]
    Lenient,
    /// Abort the parse with the first [`LaxError`](crate::LaxError).
    Strict,
}

/// Options for [`parse_with`](crate::parse_with).
///
/// ```
/// use laxjson_core::{parse_with, ParseOptions};
///
/// let options = ParseOptions::strict().with_decoded_scalar_numbers(true);
/// let obj = parse_with(r#"{"n":42}"#, &options).unwrap().unwrap();
/// assert_eq!(obj.get("n").and_then(|v| v.as_number()).and_then(|n| n.as_i64()), Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub recovery: Recovery,
    /// Emit a `debug` event for every key and value read.
    pub trace: bool,
    /// Decode scalar numeric fields like array elements instead of keeping
    /// the literal text.
    pub decode_scalar_numbers: bool,
    /// Deepest object nesting that is parsed. The outermost object is level 1;
    /// an object below the limit is reported as
    /// [`DepthExceeded`](crate::LaxError::DepthExceeded).
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            recovery: Recovery::default(),
            trace: false,
            decode_scalar_numbers: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Lenient defaults: the behavior of [`parse`](crate::parse).
    pub fn lenient() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            recovery: Recovery::Strict,
            ..Self::default()
        }
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_decoded_scalar_numbers(mut self, decode: bool) -> Self {
        self.decode_scalar_numbers = decode;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.recovery == Recovery::Strict
    }
}
