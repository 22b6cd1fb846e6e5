use crate::cursor::Cursor;
use crate::error::{Expectations, Failure};
use crate::parser::{Outcome, Parser};

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds, naming the input it matched.
/// That failure reads `unexpected "<matched text>"` and carries no
/// expectations, since a success has none to report.
/// Never consumes any input regardless of outcome.
#[derive(Debug, Clone)]
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<P> Parser for Not<P>
where
    P: Parser,
{
    type Output = ();

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((_, rest)) => Err(Failure::new(
                cursor,
                format!("unexpected {:?}", cursor.text_until(&rest)),
                Expectations::none(),
            )),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<P>(parser: P) -> Not<P>
where
    P: Parser,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt: Parser + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<P> NotExt for P where P: Parser {}
