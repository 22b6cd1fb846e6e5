use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that matches content between opening and closing delimiters
///
/// Returns only the content; the delimiters are consumed and discarded. A
/// failure of any of the three parsers is returned unchanged.
///
/// Example:
/// ```
/// use runecomb::between::between;
/// use runecomb::chars::is_char;
/// use runecomb::literal::number;
/// use runecomb::{Parser, Source};
///
/// let source = Source::new("(42)");
/// let (value, rest) = between(is_char('('), number(), is_char(')'))
///     .parse(source.cursor())
///     .unwrap();
/// assert_eq!(value, "42");
/// assert!(rest.is_end());
/// ```
#[derive(Debug, Clone)]
pub struct Between<O, P, C> {
    open: O,
    parser: P,
    close: C,
}

impl<O, P, C> Between<O, P, C> {
    pub fn new(open: O, parser: P, close: C) -> Self {
        Between {
            open,
            parser,
            close,
        }
    }
}

impl<O, P, C> Parser for Between<O, P, C>
where
    O: Parser,
    P: Parser,
    C: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (value, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a Between parser
pub fn between<O, P, C>(open: O, parser: P, close: C) -> Between<O, P, C>
where
    O: Parser,
    P: Parser,
    C: Parser,
{
    Between::new(open, parser, close)
}

/// Extension trait to add .between() method support for parsers
pub trait BetweenExt: Parser + Sized {
    fn between<O: Parser, C: Parser>(self, open: O, close: C) -> Between<O, Self, C> {
        Between::new(open, self, close)
    }
}

/// Implement BetweenExt for all parsers
impl<P> BetweenExt for P where P: Parser {}
