//! Recursive-descent parser producing an [`Object`] tree.
//!
//! The parser walks the input with a [`Cursor`], deciding what to read next by
//! peeking at the next significant character and then handing off to a
//! dedicated routine for strings, arrays, numbers, `null` and nested objects.
//!
//! # Key design decisions
//!
//! - **Extract-then-reparse**: a nested object (bare or inside an array) is
//!   delimited with [`Cursor::extract_object`] and parsed from scratch by a
//!   fresh parser over the extracted span. Both paths share the same
//!   quote-aware extraction.
//! - **Array element kind is fixed by the first element**: the remainder is
//!   read with the same routine, with no per-element dispatch.
//! - **Scalar numbers stay text**: a numeric field value is kept as the
//!   literal string unless [`ParseOptions::decode_scalar_numbers`] is set.
//!   Array numbers are always decoded.
//! - **Recovery is configuration**: in [`Recovery::Lenient`] mode malformed
//!   input is logged and skipped (or replaced by a sentinel string); in
//!   [`Recovery::Strict`] mode the first problem is returned as a
//!   [`LaxError`].
//!
//! [`Recovery::Lenient`]: crate::Recovery::Lenient
//! [`Recovery::Strict`]: crate::Recovery::Strict

use crate::cursor::Cursor;
use crate::error::{describe, LaxError, Result};
use crate::options::ParseOptions;
use crate::value::{Array, Number, Object, Value, INVALID_ARRAY, INVALID_NULL};
use tracing::{debug, warn};

/// Parse `text` leniently.
///
/// Returns `None` for `{}` and for input that contains no object at all.
/// Malformed parts are logged at `warn` level and skipped; this never fails.
///
/// ```
/// use laxjson_core::parse;
///
/// let obj = parse(r#"{"name":"Alice","scores":[95,87]}"#).unwrap();
/// assert_eq!(obj.get_str("name").unwrap(), Some("Alice"));
/// assert_eq!(obj.to_string(), "{name=Alice, scores=[95, 87]}");
/// ```
pub fn parse(text: &str) -> Option<Object> {
    parse_with(text, &ParseOptions::lenient()).unwrap_or_default()
}

/// Parse `text` with explicit options.
///
/// Only [`Recovery::Strict`](crate::Recovery::Strict) parses return `Err`.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Option<Object>> {
    if options.trace {
        debug!(len = text.len(), strict = options.is_strict(), "parsing document");
    }
    Parser::new(text, *options, 0, 1).parse_document()
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParseOptions,
    /// Offset of `cursor`'s input within the outermost document, so that
    /// errors from reparsed nested objects report absolute positions.
    base: usize,
    /// Nesting level of the object this parser reads; the outermost is 1.
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, options: ParseOptions, base: usize, depth: usize) -> Self {
        Self {
            cursor: Cursor::new(text),
            options,
            base,
            depth,
        }
    }

    fn offset(&self) -> usize {
        self.base + self.cursor.offset()
    }

    /// `skip_and_consume`, also returning the absolute offset of the consumed
    /// character (or of the end of input).
    fn next_significant(&mut self) -> (Option<char>, usize) {
        let c = self.cursor.skip_and_consume();
        let end = self.offset();
        (c, c.map_or(end, |c| end - c.len_utf8()))
    }

    /// Fail in strict mode, log and carry on in lenient mode.
    fn recover(&self, err: LaxError) -> Result<()> {
        if self.options.is_strict() {
            return Err(err);
        }
        warn!(error = %err, "skipping malformed input");
        Ok(())
    }

    /// Fail in strict mode, substitute `marker` in lenient mode.
    fn sentinel(&self, err: LaxError, marker: &str) -> Result<Value> {
        self.recover(err)?;
        Ok(Value::String(marker.to_string()))
    }

    // ------------------------------------------------------------------------
    // Document and object body
    // ------------------------------------------------------------------------

    fn parse_document(&mut self) -> Result<Option<Object>> {
        if self.options.is_strict() {
            return self.parse_strict_document();
        }
        let mut object = Object::new();
        // Text outside braces is skipped; a second top-level object merges
        // into the same accumulator.
        while !self.cursor.is_exhausted() {
            if self.cursor.skip_and_consume() == Some('{') {
                if self.cursor.peek_significant() == Some('}') {
                    return Ok(None);
                }
                self.parse_members(&mut object)?;
            }
        }
        Ok((!object.is_empty()).then_some(object))
    }

    fn parse_strict_document(&mut self) -> Result<Option<Object>> {
        match self.next_significant() {
            (Some('{'), _) => {}
            (found, offset) => {
                return Err(LaxError::ExpectedObject {
                    offset,
                    found: describe(found),
                })
            }
        }
        let object = if self.cursor.peek_significant() == Some('}') {
            self.cursor.skip_and_consume();
            None
        } else {
            let mut object = Object::new();
            self.parse_members(&mut object)?;
            Some(object)
        };
        match self.next_significant() {
            (None, _) => Ok(object),
            (Some(_), offset) => Err(LaxError::TrailingCharacters { offset }),
        }
    }

    /// Read `"key": value` pairs after an opening `{`, up to and including the
    /// terminating character.
    fn parse_members(&mut self, object: &mut Object) -> Result<()> {
        loop {
            let key = match self.next_significant() {
                (Some('"'), offset) => self.parse_string(offset)?,
                (None, offset) => return self.recover(LaxError::UnexpectedEnd { offset }),
                (found, offset) => {
                    self.recover(LaxError::ExpectedKey {
                        offset,
                        found: describe(found),
                    })?;
                    String::new()
                }
            };

            let value = match self.next_significant() {
                (Some(':'), _) => self.parse_value()?,
                (found, offset) => {
                    self.recover(LaxError::ExpectedColon {
                        key: key.clone(),
                        offset,
                        found: describe(found),
                    })?;
                    None
                }
            };

            if self.options.trace {
                debug!(key = %key, value = ?value, "read field");
            }
            object.insert(key, value);

            match self.next_significant() {
                (Some(','), _) => continue,
                (found, offset) => return self.close(found, offset, '}'),
            }
        }
    }

    /// Check the character that ended a member list or array.
    ///
    /// Lenient mode accepts anything: the character has already been consumed
    /// and parsing simply stops there.
    fn close(&self, found: Option<char>, offset: usize, expected: char) -> Result<()> {
        if !self.options.is_strict() || found == Some(expected) {
            return Ok(());
        }
        Err(match found {
            None => LaxError::UnexpectedEnd { offset },
            Some(_) => LaxError::UnexpectedCharacter {
                offset,
                expected,
                found: describe(found),
            },
        })
    }

    // ------------------------------------------------------------------------
    // Value dispatch
    // ------------------------------------------------------------------------

    /// Dispatch on the next significant character. `None` means no value.
    fn parse_value(&mut self) -> Result<Option<Value>> {
        match self.cursor.peek_significant() {
            Some('"') => {
                let (_, offset) = self.next_significant();
                Ok(Some(Value::String(self.parse_string(offset)?)))
            }
            Some('[') => {
                self.cursor.skip_and_consume();
                self.parse_array()
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.parse_scalar_number().map(Some),
            Some('{') => self.parse_nested_object(),
            Some('n') => self.parse_null().map(Some),
            found => {
                self.recover(LaxError::UnexpectedValue {
                    offset: self.offset(),
                    found: describe(found),
                })?;
                Ok(None)
            }
        }
    }

    /// Read string content after its opening quote (at `open_offset`).
    ///
    /// `\"` is the only escape: a quote whose raw predecessor is a backslash
    /// is literal, and that backslash is dropped. Any other backslash is kept.
    fn parse_string(&mut self, open_offset: usize) -> Result<String> {
        let mut out = String::new();
        let mut prev = '"';
        loop {
            let Some(c) = self.cursor.advance() else {
                self.recover(LaxError::UnterminatedString {
                    offset: open_offset,
                })?;
                return Ok(out);
            };
            match c {
                '"' if prev == '\\' => out.push('"'),
                '"' => return Ok(out),
                '\\' if self.cursor.peek_char() == Some('"') => {}
                _ => out.push(c),
            }
            prev = c;
        }
    }

    /// Scalar numeric field value: everything up to the next significant `,`
    /// or `}`, whitespace dropped.
    fn parse_scalar_number(&mut self) -> Result<Value> {
        let offset = self.offset();
        let mut literal = String::new();
        loop {
            match self.cursor.peek_significant() {
                Some(',') | Some('}') => break,
                None => {
                    self.recover(LaxError::UnexpectedEnd {
                        offset: self.offset(),
                    })?;
                    break;
                }
                Some(_) => literal.extend(self.cursor.skip_and_consume()),
            }
        }

        if !self.options.decode_scalar_numbers && !self.options.is_strict() {
            return Ok(Value::String(literal));
        }
        match Number::from_literal(&literal) {
            Some(n) if self.options.decode_scalar_numbers => Ok(Value::Number(n)),
            Some(_) => Ok(Value::String(literal)),
            None => {
                self.recover(LaxError::InvalidNumber {
                    offset,
                    literal: literal.clone(),
                })?;
                Ok(Value::String(literal))
            }
        }
    }

    fn parse_null(&mut self) -> Result<Value> {
        let (_, offset) = self.next_significant();
        if self.cursor.consume_literal("ull") {
            return Ok(Value::Null);
        }
        self.sentinel(LaxError::InvalidNull { offset }, INVALID_NULL)
    }

    fn parse_nested_object(&mut self) -> Result<Option<Value>> {
        let start = self.offset();
        match self.cursor.extract_object() {
            Some(text) => Ok(self.reparse(text, start)?.map(Value::Object)),
            None => {
                self.recover(LaxError::UnbalancedObject { offset: start })?;
                Ok(None)
            }
        }
    }

    /// Parse an extracted object span with a fresh parser one level deeper.
    /// Past `max_depth` the span is dropped, so recursion stays bounded.
    fn reparse(&self, text: &str, start: usize) -> Result<Option<Object>> {
        if self.depth >= self.options.max_depth {
            self.recover(LaxError::DepthExceeded {
                offset: start,
                max_depth: self.options.max_depth,
            })?;
            return Ok(None);
        }
        Parser::new(text, self.options, start, self.depth + 1).parse_document()
    }

    // ------------------------------------------------------------------------
    // Arrays
    // ------------------------------------------------------------------------

    /// Read an array after its `[`. The first element's lead character fixes
    /// the element kind.
    fn parse_array(&mut self) -> Result<Option<Value>> {
        let array = match self.cursor.peek_significant() {
            Some(']') => {
                self.cursor.skip_and_consume();
                return Ok(None);
            }
            Some('"') => Array::Strings(self.parse_string_elements()?),
            Some('{') => Array::Objects(self.parse_object_elements()?),
            Some(c) if c.is_ascii_digit() => Array::Numbers(self.parse_number_elements()?),
            found => {
                let err = LaxError::InvalidArray {
                    offset: self.offset(),
                    found: describe(found),
                };
                return self.sentinel(err, INVALID_ARRAY).map(Some);
            }
        };
        Ok(Some(Value::Array(array)))
    }

    fn parse_string_elements(&mut self) -> Result<Vec<String>> {
        let mut items = Vec::new();
        loop {
            match self.next_significant() {
                (Some('"'), offset) => items.push(self.parse_string(offset)?),
                (None, offset) => {
                    self.recover(LaxError::UnexpectedEnd { offset })?;
                    return Ok(items);
                }
                // Lenient: the consumed character stands in for the opening quote.
                (found, offset) => {
                    self.recover(LaxError::UnexpectedValue {
                        offset,
                        found: describe(found),
                    })?;
                    items.push(self.parse_string(offset)?);
                }
            }
            match self.next_significant() {
                (Some(','), _) => continue,
                (found, offset) => {
                    self.close(found, offset, ']')?;
                    return Ok(items);
                }
            }
        }
    }

    /// Object elements are delimited one at a time and reparsed. If the input
    /// runs out mid-object, the elements read so far are kept.
    fn parse_object_elements(&mut self) -> Result<Vec<Object>> {
        let mut items = Vec::new();
        loop {
            let start = self.offset();
            let Some(text) = self.cursor.extract_object() else {
                self.recover(LaxError::UnbalancedObject { offset: start })?;
                return Ok(items);
            };
            // `{}` keeps its slot as an empty object.
            items.push(self.reparse(text, start)?.unwrap_or_default());
            match self.next_significant() {
                (Some(','), _) => continue,
                (found, offset) => {
                    self.close(found, offset, ']')?;
                    return Ok(items);
                }
            }
        }
    }

    /// Each literal accumulates significant characters while the next one is
    /// a digit or `.`. Undecodable literals are dropped in lenient mode.
    fn parse_number_elements(&mut self) -> Result<Vec<Number>> {
        let mut items = Vec::new();
        loop {
            let offset = self.offset();
            let mut literal = String::new();
            while let Some(c) = self.cursor.skip_and_consume() {
                literal.push(c);
                match self.cursor.peek_significant() {
                    Some(next) if next.is_ascii_digit() || next == '.' => {}
                    _ => break,
                }
            }
            if literal.is_empty() {
                self.recover(LaxError::UnexpectedEnd {
                    offset: self.offset(),
                })?;
                return Ok(items);
            }
            match Number::from_literal(&literal) {
                Some(n) => items.push(n),
                None => self.recover(LaxError::InvalidNumber { offset, literal })?,
            }
            match self.next_significant() {
                (Some(','), _) => continue,
                (found, offset) => {
                    self.close(found, offset, ']')?;
                    return Ok(items);
                }
            }
        }
    }
}
