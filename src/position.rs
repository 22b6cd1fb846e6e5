use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};
use std::fmt;

/// A location in the input, detached from the source it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// 0-based code point offset
    pub position: usize,
    pub line: usize,
    pub column: usize,
}

impl From<Cursor<'_>> for Position {
    fn from(cursor: Cursor<'_>) -> Self {
        Position {
            position: cursor.position(),
            line: cursor.line(),
            column: cursor.column(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A parsed value together with the span of input it was parsed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl<T> Spanned<T> {
    /// Number of code points covered by the span
    pub fn len(&self) -> usize {
        self.end.position - self.start.position
    }

    pub fn is_empty(&self) -> bool {
        self.start.position == self.end.position
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Spanned<U> {
        Spanned {
            value: f(self.value),
            start: self.start,
            end: self.end,
        }
    }
}

/// A parser combinator that captures the span of a successful parse
#[derive(Debug, Clone)]
pub struct Positioned<P> {
    parser: P,
}

impl<P> Positioned<P> {
    pub fn new(parser: P) -> Self {
        Positioned { parser }
    }
}

impl<P> Parser for Positioned<P>
where
    P: Parser,
{
    type Output = Spanned<P::Output>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, rest) = self.parser.parse(cursor)?;
        let spanned = Spanned {
            value,
            start: Position::from(cursor),
            end: Position::from(rest),
        };
        Ok((spanned, rest))
    }
}

/// Convenience function to create a Positioned combinator
pub fn positioned<P>(parser: P) -> Positioned<P>
where
    P: Parser,
{
    Positioned::new(parser)
}

/// Extension trait to add position tracking to any parser
pub trait PositionedExt: Parser + Sized {
    /// Wrap this parser to capture its span
    fn positioned(self) -> Positioned<Self> {
        Positioned::new(self)
    }
}

impl<P> PositionedExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{is_char, letter};
    use crate::cursor::Source;
    use crate::literal::literal;
    use crate::many::many;
    use crate::text::text;
    use crate::token::token;

    #[test]
    fn test_positioned_single_char() {
        let source = Source::new("hello");
        let (spanned, rest) = positioned(is_char('h')).parse(source.cursor()).unwrap();

        assert_eq!(spanned.value, 'h');
        assert_eq!(spanned.start.position, 0);
        assert_eq!(spanned.end.position, 1);
        assert_eq!(spanned.len(), 1);
        assert_eq!(rest.position(), 1);
    }

    #[test]
    fn test_positioned_tracks_lines() {
        let source = Source::new("a\nfoo bar");
        let cursor = source.cursor().advance().advance();
        let (spanned, _) = literal("foo").positioned().parse(cursor).unwrap();

        assert_eq!(
            spanned.start,
            Position {
                position: 2,
                line: 2,
                column: 1
            }
        );
        assert_eq!(
            spanned.end,
            Position {
                position: 5,
                line: 2,
                column: 4
            }
        );
        assert_eq!(spanned.start.to_string(), "2:1");
    }

    #[test]
    fn test_positioned_empty_match() {
        let source = Source::new("123");
        let (spanned, _) = text(many(letter())).positioned().parse(source.cursor()).unwrap();

        assert_eq!(spanned.value, "");
        assert!(spanned.is_empty());
    }

    #[test]
    fn test_positioned_token_includes_whitespace() {
        let source = Source::new("  x  y");
        let (spanned, _) = token(is_char('x')).positioned().parse(source.cursor()).unwrap();

        assert_eq!(spanned.start.position, 0);
        assert_eq!(spanned.end.position, 5);
        assert_eq!(spanned.map(|c| c.to_ascii_uppercase()).value, 'X');
    }

    #[test]
    fn test_positioned_error_propagation() {
        let source = Source::new("xyz");
        let failure = is_char('a').positioned().parse(source.cursor()).unwrap_err();
        assert!(failure.expectations().contains("a"));
    }
}
