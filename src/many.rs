use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. Repetition is a loop, so long runs do not grow the stack.
///
/// The repeated parser must consume input whenever it succeeds: a body that
/// can succeed without consuming (for example `many(succeed(x))`) loops
/// forever.
#[derive(Debug, Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, mut cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut results = Vec::new();

        // Many matches zero or more, so the terminating error is not propagated
        while let Ok((value, next_cursor)) = self.parser.parse(cursor) {
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}

/// Like [`Many`], but a final attempt that fails after consuming input is an
/// error rather than the end of the repetition
///
/// A partially matched element is reported, while an attempt that fails
/// without consuming anything ends the repetition successfully. The same
/// infinite-loop caveat as [`Many`] applies.
#[derive(Debug, Clone)]
pub struct XMany<P> {
    parser: P,
}

impl<P> XMany<P> {
    pub fn new(parser: P) -> Self {
        XMany { parser }
    }
}

impl<P> Parser for XMany<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, mut cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(failure) if failure.consumed_from(&cursor) => return Err(failure),
                Err(_) => return Ok((results, cursor)),
            }
        }
    }
}

/// Convenience function to create an XMany parser
pub fn x_many<P>(parser: P) -> XMany<P>
where
    P: Parser,
{
    XMany::new(parser)
}

/// Extension trait to add .many() and .x_many() method support for parsers
pub trait ManyExt: Parser + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    fn x_many(self) -> XMany<Self> {
        XMany::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<P> ManyExt for P where P: Parser {}
