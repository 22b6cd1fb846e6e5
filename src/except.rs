use crate::cursor::Cursor;
use crate::error::{Expectations, Failure};
use crate::many::Many;
use crate::parser::{Outcome, Parser};

pub const OTHER_THAN_EXCEPTED: &str = "other than the excepted input";

/// Parser combinator that runs a parser only where a guard parser does not match
///
/// If the guard succeeds at the cursor, fails there without running the
/// parser and without consuming input.
#[derive(Debug, Clone)]
pub struct Except<P, G> {
    parser: P,
    guard: G,
}

impl<P, G> Except<P, G> {
    pub fn new(parser: P, guard: G) -> Self {
        Except { parser, guard }
    }
}

impl<P, G> Parser for Except<P, G>
where
    P: Parser,
    G: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        if self.guard.parse(cursor).is_ok() {
            return Err(Failure::new(
                cursor,
                "excepted parser succeeded",
                Expectations::one(OTHER_THAN_EXCEPTED),
            ));
        }
        self.parser.parse(cursor)
    }
}

/// Convenience function to create an Except parser
pub fn except<P, G>(parser: P, guard: G) -> Except<P, G>
where
    P: Parser,
    G: Parser,
{
    Except::new(parser, guard)
}

/// Parser combinator that collects values until a terminator matches
///
/// The terminator is required and consumed, but its value is discarded.
#[derive(Debug, Clone)]
pub struct Until<P, T> {
    body: Many<Except<P, T>>,
    terminator: T,
}

impl<P, T: Clone> Until<P, T> {
    pub fn new(parser: P, terminator: T) -> Self {
        Until {
            body: Many::new(Except::new(parser, terminator.clone())),
            terminator,
        }
    }
}

impl<P, T> Parser for Until<P, T>
where
    P: Parser,
    T: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (values, cursor) = self.body.parse(cursor)?;
        let (_, cursor) = self.terminator.parse(cursor)?;
        Ok((values, cursor))
    }
}

/// Convenience function to create an Until parser
pub fn until<P, T>(parser: P, terminator: T) -> Until<P, T>
where
    P: Parser,
    T: Parser + Clone,
{
    Until::new(parser, terminator)
}

/// Extension trait to add .except() and .until() method support for parsers
pub trait ExceptExt: Parser + Sized {
    fn except<G: Parser>(self, guard: G) -> Except<Self, G> {
        Except::new(self, guard)
    }

    fn until<T: Parser + Clone>(self, terminator: T) -> Until<Self, T> {
        Until::new(self, terminator)
    }
}

/// Implement ExceptExt for all parsers
impl<P> ExceptExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{any_char, is_char, letter};
    use crate::cursor::Source;
    use crate::literal::literal;
    use crate::many::many;
    use crate::text::text;
    use crate::then::ThenExt;

    #[test]
    fn test_except_guard_blocks() {
        let source = Source::new("x");
        let cursor = source.cursor();
        let parser = except(letter(), is_char('x'));

        let failure = parser.parse(cursor).unwrap_err();
        assert_eq!(failure.message(), "excepted parser succeeded");
        assert_eq!(failure.expectations(), &Expectations::one(OTHER_THAN_EXCEPTED));
        assert_eq!(failure.remainder(), cursor);
    }

    #[test]
    fn test_except_runs_parser_when_guard_fails() {
        let source = Source::new("y");
        let (value, rest) = letter().except(is_char('x')).parse(source.cursor()).unwrap();
        assert_eq!(value, 'y');
        assert!(rest.is_end());
    }

    #[test]
    fn test_except_with_many_stops_at_guard() {
        let source = Source::new("abcxdef");
        let parser = text(many(letter().except(is_char('x'))));

        let (value, rest) = parser.parse(source.cursor()).unwrap();
        assert_eq!(value, "abc");
        assert_eq!(rest.current(), Some('x'));
    }

    #[test]
    fn test_until_consumes_terminator() {
        let source = Source::new("/* note */ rest");
        let comment = literal("/*").select_many(
            |_| text(until(any_char(), literal("*/"))),
            |_, body| body,
        );

        let (body, rest) = comment.parse(source.cursor()).unwrap();
        assert_eq!(body, " note ");
        assert_eq!(rest.remaining_text(), " rest");
    }

    #[test]
    fn test_until_requires_terminator() {
        let source = Source::new("abc");
        let failure = any_char().until(is_char(';')).parse(source.cursor()).unwrap_err();
        assert_eq!(failure.message(), "unexpected end of input");
        assert!(failure.expectations().contains(";"));
        assert_eq!(failure.remainder().position(), 3);
    }

    #[test]
    fn test_until_immediate_terminator() {
        let source = Source::new(";x");
        let (values, rest) = until(any_char(), is_char(';')).parse(source.cursor()).unwrap();
        assert!(values.is_empty());
        assert_eq!(rest.current(), Some('x'));
    }
}
