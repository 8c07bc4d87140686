//! Scan cursor over an immutable `&str`.
//!
//! The cursor is the only mutable state a pass owns: a byte offset that
//! always sits on a UTF-8 character boundary. Bulk skips over literal
//! bodies use memchr so string and comment scanning does not walk byte by
//! byte; the generic recognizer loop advances one character at a time.

/// Decode the character starting at `pos`, if `pos` is in bounds and on a
/// character boundary.
#[inline]
pub fn char_at(text: &str, pos: usize) -> Option<char> {
    text.get(pos..).and_then(|rest| rest.chars().next())
}

/// Decode the character ending at `pos` (the one just consumed when the
/// scan position is `pos`).
#[inline]
pub fn char_before(text: &str, pos: usize) -> Option<char> {
    text.get(..pos).and_then(|head| head.chars().next_back())
}

/// The byte offset one character past `pos` (or `text.len()` at EOF).
#[inline]
pub fn next_pos(text: &str, pos: usize) -> usize {
    char_at(text, pos).map_or(text.len(), |c| pos + c.len_utf8())
}

/// Position cursor for one scanning pass.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// A cursor at byte 0 of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` once the cursor has consumed the whole input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// The character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        char_at(self.text, self.pos)
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        self.pos = next_pos(self.text, self.pos);
    }

    /// Jump to an absolute offset. The offset must lie on a character
    /// boundary at or after the current position.
    #[inline]
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor may only move forward");
        debug_assert!(self.text.is_char_boundary(pos.min(self.text.len())));
        self.pos = pos;
    }

    /// Byte offset of the first line terminator (`\n` or `\r`) at or after
    /// `from`, if any. `from` past the end of input finds nothing.
    pub fn find_line_break(&self, from: usize) -> Option<usize> {
        let from = from.min(self.text.len());
        memchr::memchr2(b'\n', b'\r', &self.text.as_bytes()[from..]).map(|off| from + off)
    }

    /// Byte offset of the first occurrence of `needle` at or after `from`,
    /// if any. `from` past the end of input finds nothing.
    pub fn find_str(&self, needle: &str, from: usize) -> Option<usize> {
        let from = from.min(self.text.len());
        memchr::memmem::find(&self.text.as_bytes()[from..], needle.as_bytes())
            .map(|off| from + off)
    }

    /// All byte offsets of `byte` at or after `from`, in order. `from` past
    /// the end of input yields nothing.
    ///
    /// `byte` must be ASCII so that matches are whole characters.
    pub fn byte_positions(&self, byte: u8, from: usize) -> impl Iterator<Item = usize> + 'a {
        debug_assert!(byte.is_ascii());
        let from = from.min(self.text.len());
        memchr::memchr_iter(byte, &self.text.as_bytes()[from..]).map(move |off| from + off)
    }

    #[cfg(test)]
    pub(crate) fn text(&self) -> &'a str {
        self.text
    }
}
