//! Character cursor over the input of a single parse.
//!
//! Positions are codepoint indices, so a multi-byte character counts as one position.
//! Reads past the end never fail: `current()` returns `None` and `peek`/`since` return
//! whatever is left, possibly nothing.

#[derive(Debug, Default)]
pub struct Cursor {
    input: String,
    chars: Vec<char>,
    index: usize,
}

impl Cursor {
    /// Points the cursor at the start of `input`.
    pub fn reset(&mut self, input: &str) {
        self.input = input.to_string();
        self.chars = input.chars().collect();
        self.index = 0;
    }

    /// Drops the input so nothing of it outlives the parse.
    pub fn clear(&mut self) {
        self.input = String::new();
        self.chars = Vec::new();
        self.index = 0;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    pub fn current(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    /// The next `n` characters, fewer near the end of input.
    pub fn peek(&self, n: usize) -> String {
        let start = self.index.min(self.chars.len());
        let end = self.index.saturating_add(n).min(self.chars.len());
        self.chars[start..end].iter().collect()
    }

    /// Everything from `mark` up to (excluding) the current position.
    pub fn since(&self, mark: usize) -> String {
        let end = self.index.min(self.chars.len());
        let start = mark.min(end);
        self.chars[start..end].iter().collect()
    }

    pub fn advance(&mut self, k: usize) {
        self.index += k;
    }

    /// Moves back to a position recorded earlier with [`Cursor::index`].
    pub fn rewind(&mut self, mark: usize) {
        self.index = mark;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_and_advance() {
        let mut cursor = Cursor::default();
        cursor.reset("ab");
        assert_eq!(cursor.current(), Some('a'));
        cursor.advance(1);
        assert_eq!(cursor.current(), Some('b'));
        cursor.advance(1);
        assert_eq!(cursor.current(), None);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_peek_is_codepoint_based() {
        let mut cursor = Cursor::default();
        cursor.reset("ä→b");
        assert_eq!(cursor.peek(2), "ä→");
        cursor.advance(2);
        assert_eq!(cursor.peek(5), "b");
        cursor.advance(3);
        assert_eq!(cursor.peek(1), "");
    }

    #[test]
    fn test_since_mark() {
        let mut cursor = Cursor::default();
        cursor.reset("foo.bar");
        cursor.advance(3);
        assert_eq!(cursor.since(0), "foo");
        cursor.advance(4);
        assert_eq!(cursor.since(4), "bar");
    }

    #[test]
    fn test_clear_drops_input() {
        let mut cursor = Cursor::default();
        cursor.reset("secret");
        cursor.advance(3);
        cursor.clear();
        assert_eq!(cursor.input(), "");
        assert_eq!(cursor.index(), 0);
        assert!(cursor.is_empty());
    }
}
