/// A forward-only reader over a slice with one item of lookahead.
///
/// The lexer runs a `Cursor<char>` over the source text and the parser a
/// `Cursor<Token>` over the lexer's output. Reading past the end reports
/// "done" (`None`) instead of failing.
///
/// # Example
/// ```
/// use numerate::interpreter::cursor::Cursor;
///
/// let items = ['a', 'b', 'c'];
/// let mut cursor = Cursor::new(&items);
///
/// assert_eq!(cursor.peek(), Some(&'a'));
/// assert_eq!(cursor.advance(1), Some(&'b'));
/// assert_eq!(cursor.position(), 2);
/// assert_eq!(cursor.advance(0), Some(&'c'));
/// assert_eq!(cursor.peek(), None);
///
/// cursor.retreat(1);
/// assert_eq!(cursor.peek(), Some(&'c'));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Creates a cursor positioned at the first item.
    #[must_use]
    pub const fn new(items: &'a [T]) -> Self {
        Self { items, index: 0 }
    }

    /// Returns the current item without moving, or `None` once done.
    #[must_use]
    pub fn peek(&self) -> Option<&'a T> {
        self.items.get(self.index)
    }

    /// Skips `skip` items, then consumes one more and returns it.
    ///
    /// Returns `None` when the consumed position lies past the end; the
    /// cursor still moves.
    pub fn advance(&mut self, skip: usize) -> Option<&'a T> {
        self.index = self.index.saturating_add(skip);
        let item = self.items.get(self.index);
        self.index = self.index.saturating_add(1);
        item
    }

    /// Moves back by `n` items, stopping at the start.
    pub const fn retreat(&mut self, n: usize) {
        self.index = self.index.saturating_sub(n);
    }

    /// Zero-based index of the current item.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index
    }
}
