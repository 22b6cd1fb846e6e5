use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that feeds the value of one parser into a function
/// choosing the next parser
///
/// This is the monadic bind of the algebra: the second parser runs on the
/// remainder of the first, and a failure of either is returned unchanged.
#[derive(Debug, Clone)]
pub struct Then<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Then<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Then { parser, binder }
    }
}

impl<P, F, Q> Parser for Then<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser,
{
    type Output = Q::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value).parse(cursor)
    }
}

/// Convenience function to create a Then parser
pub fn then<P, F, Q>(parser: P, binder: F) -> Then<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser,
{
    Then::new(parser, binder)
}

/// Parser combinator that sequences a parser with a dependent parser and
/// combines both values
///
/// The binder sees the first value by reference so that it can still be
/// handed to `combine` afterwards.
#[derive(Debug, Clone)]
pub struct SelectMany<P, B, C> {
    parser: P,
    binder: B,
    combine: C,
}

impl<P, B, C> SelectMany<P, B, C> {
    pub fn new(parser: P, binder: B, combine: C) -> Self {
        SelectMany {
            parser,
            binder,
            combine,
        }
    }
}

impl<P, B, C, Q, U> Parser for SelectMany<P, B, C>
where
    P: Parser,
    B: Fn(&P::Output) -> Q,
    Q: Parser,
    C: Fn(P::Output, Q::Output) -> U,
{
    type Output = U;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (first, cursor) = self.parser.parse(cursor)?;
        let (second, cursor) = (self.binder)(&first).parse(cursor)?;
        Ok(((self.combine)(first, second), cursor))
    }
}

/// Convenience function to create a SelectMany parser
pub fn select_many<P, B, C, Q, U>(parser: P, binder: B, combine: C) -> SelectMany<P, B, C>
where
    P: Parser,
    B: Fn(&P::Output) -> Q,
    Q: Parser,
    C: Fn(P::Output, Q::Output) -> U,
{
    SelectMany::new(parser, binder, combine)
}

/// Extension trait to add .then() and .select_many() method support for parsers
pub trait ThenExt: Parser + Sized {
    fn then<F, Q>(self, binder: F) -> Then<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser,
    {
        Then::new(self, binder)
    }

    fn select_many<B, C, Q, U>(self, binder: B, combine: C) -> SelectMany<Self, B, C>
    where
        B: Fn(&Self::Output) -> Q,
        Q: Parser,
        C: Fn(Self::Output, Q::Output) -> U,
    {
        SelectMany::new(self, binder, combine)
    }
}

/// Implement ThenExt for all parsers
impl<P> ThenExt for P where P: Parser {}
