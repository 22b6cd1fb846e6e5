use std::fmt;

/// Owned input text, materialized as Unicode code points
///
/// A `Source` owns the code points that every [`Cursor`] over it borrows.
/// Keep it alive for as long as any parse over it is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    chars: Vec<char>,
}

impl Source {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Cursor at the start of the input: position 0, line 1, column 1
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.chars)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::new(text)
    }
}

/// Immutable position over a sequence of code points
///
/// A cursor is a small `Copy` value. Advancing never mutates it; it returns a
/// new cursor, so any cursor can be kept around and handed to another parser
/// for backtracking.
///
/// Equality compares the identity of the viewed source together with
/// position, line and column. Combinators use it to decide whether a parser
/// consumed input.
#[derive(Debug, Copy, Clone)]
pub struct Cursor<'code> {
    source: &'code [char],
    /// Index of the current element (0-based)
    position: usize,
    /// 1-based line of the current element
    line: usize,
    /// 1-based column of the current element
    column: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(source: &'code [char]) -> Self {
        Cursor {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Element at the cursor, or `None` at end of input
    pub fn current(&self) -> Option<char> {
        self.source.get(self.position).copied()
    }

    /// Cursor one element further
    ///
    /// Passing a `'\n'` moves to column 1 of the next line. At end of input the
    /// cursor is returned unchanged.
    pub fn advance(self) -> Self {
        match self.current() {
            Some('\n') => Cursor {
                position: self.position + 1,
                line: self.line + 1,
                column: 1,
                ..self
            },
            Some(_) => Cursor {
                position: self.position + 1,
                column: self.column + 1,
                ..self
            },
            None => self,
        }
    }

    pub fn is_end(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// The full input, independent of position
    pub fn source(&self) -> &'code [char] {
        self.source
    }

    /// Text from the cursor to the end of input
    pub fn remaining_text(&self) -> String {
        self.source[self.position..].iter().collect()
    }

    /// Text between this cursor and a later cursor over the same source
    pub fn text_until(&self, later: &Cursor<'code>) -> String {
        let end = later.position.clamp(self.position, self.source.len());
        self.source[self.position..end].iter().collect()
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source, other.source)
            && self.position == other.position
            && self.line == other.line
            && self.column == other.column
    }
}

impl Eq for Cursor<'_> {}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
