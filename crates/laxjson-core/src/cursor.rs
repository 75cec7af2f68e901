//! Character cursor over the raw input text.
//!
//! The parser reads through three primitives with distinct semantics:
//!
//! - [`Cursor::advance`] consumes exactly one character, whitespace or not.
//! - [`Cursor::skip_and_consume`] skips whitespace, then consumes the first
//!   significant character.
//! - [`Cursor::peek_significant`] looks at the next significant character
//!   without moving at all.
//!
//! Dispatch decisions are made with `peek_significant`; the chosen sub-parser
//! then consumes with one of the other two. Mixing them up changes which
//! characters end up inside strings and literals.

/// Position-tracking reader over borrowed input.
///
/// The position is a byte offset that always sits on a `char` boundary.
#[derive(Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    exhausted: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            exhausted: false,
        }
    }

    /// Current byte offset into the input.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// True once `skip_and_consume` has run past the last significant character.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Consume one character unconditionally.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skip whitespace and consume the first non-whitespace character.
    ///
    /// Marks the cursor exhausted when only whitespace remains.
    pub fn skip_and_consume(&mut self) -> Option<char> {
        while let Some(c) = self.advance() {
            if !c.is_whitespace() {
                return Some(c);
            }
        }
        self.exhausted = true;
        None
    }

    /// Next raw character, whitespace included, without moving the cursor.
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Next non-whitespace character, without moving the cursor.
    pub fn peek_significant(&self) -> Option<char> {
        self.rest().chars().find(|c| !c.is_whitespace())
    }

    /// Consume `literal` if the remaining input starts with it.
    pub fn consume_literal(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Balanced-brace extraction.
    ///
    /// Scans raw characters from the current position until the brace depth
    /// returns to zero on a `}`, and returns the scanned span, closing brace
    /// included. A `"` toggles the in-string state unless the raw character
    /// before it is `\`; braces inside strings are not counted. Returns `None`
    /// if the input ends first, leaving the cursor at the end.
    pub fn extract_object(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let mut depth: i64 = 0;
        let mut in_string = false;
        let mut prev: Option<char> = None;

        while let Some(c) = self.advance() {
            match c {
                '"' if prev != Some('\\') => in_string = !in_string,
                '{' if !in_string => depth += 1,
                '}' if !in_string => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&self.text[start..self.pos]);
                    }
                }
                _ => {}
            }
            prev = Some(c);
        }
        None
    }
}
