//! Text cursor handed to inline scanners.
//!
//! Positions are byte offsets into the scanned `&str`, the same unit the
//! string is sliced in, so multi-byte characters never shift a position.

/// Saved cursor position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// Byte offset from the start of the scanned text.
    #[must_use]
    pub fn offset(self) -> usize {
        self.0
    }
}

/// Read position over a borrowed text.
///
/// The cursor never modifies the text. Saving and restoring a position are
/// plain copies of a [`Position`].
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Whole text the cursor reads from.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    #[must_use]
    pub fn position(&self) -> Position {
        Position(self.pos)
    }

    /// Current byte offset.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Byte at the cursor.
    #[must_use]
    pub fn peek_byte(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Byte `n` bytes after the cursor.
    #[must_use]
    pub fn peek_byte_at(&self, n: usize) -> Option<u8> {
        self.text.as_bytes().get(self.pos + n).copied()
    }

    /// Everything from the cursor to the end of the text.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Remainder of the current line, without the line terminator.
    #[must_use]
    pub fn peek_line(&self) -> &'a str {
        let rest = self.rest();
        let end = rest.find('\n').unwrap_or(rest.len());
        rest[..end].strip_suffix('\r').unwrap_or(&rest[..end])
    }

    /// Move forward by `n` bytes.
    ///
    /// Stops at the end of the text. A target inside a multi-byte character
    /// moves on to the next character boundary.
    pub fn advance(&mut self, n: usize) {
        let mut pos = self.pos.saturating_add(n).min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos += 1;
        }
        self.pos = pos;
    }

    #[must_use]
    pub fn save(&self) -> Position {
        self.position()
    }

    /// Restore a position obtained from [`save`](Self::save).
    pub fn reset(&mut self, position: Position) {
        debug_assert!(self.text.is_char_boundary(position.0));
        self.pos = position.0.min(self.text.len());
    }

    /// Text consumed since `position`.
    #[must_use]
    pub fn since(&self, position: Position) -> &'a str {
        &self.text[position.0.min(self.pos)..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_peek() {
        let mut cursor = Cursor::new("ab!c");
        assert_eq!(cursor.peek_byte(), Some(b'a'));
        cursor.advance(2);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.peek_byte(), Some(b'!'));
        assert_eq!(cursor.peek_byte_at(1), Some(b'c'));
        assert_eq!(cursor.rest(), "!c");
    }

    #[test]
    fn test_advance_clamps_to_end() {
        let mut cursor = Cursor::new("abc");
        cursor.advance(10);
        assert!(cursor.is_eof());
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.peek_byte(), None);
    }

    #[test]
    fn test_advance_never_splits_a_character() {
        // "é" is two bytes, "統" three.
        let mut cursor = Cursor::new("é統x");
        cursor.advance(1);
        assert_eq!(cursor.offset(), 2);
        cursor.advance(1);
        assert_eq!(cursor.offset(), 5);
        assert_eq!(cursor.rest(), "x");
    }

    #[test]
    fn test_save_and_reset() {
        let mut cursor = Cursor::new("統一碼!v");
        cursor.advance(9);
        let saved = cursor.save();
        cursor.advance(2);
        assert!(cursor.is_eof());
        assert_eq!(cursor.since(saved), "!v");

        cursor.reset(saved);
        assert_eq!(cursor.position(), saved);
        assert_eq!(saved.offset(), 9);
        assert_eq!(cursor.rest(), "!v");
    }

    #[test]
    fn test_peek_line_stops_at_newline() {
        let cursor = Cursor::new("first line\r\nsecond");
        assert_eq!(cursor.peek_line(), "first line");

        let mut cursor = Cursor::new("a\nb");
        cursor.advance(2);
        assert_eq!(cursor.peek_line(), "b");
    }
}
