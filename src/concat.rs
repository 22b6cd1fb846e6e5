use crate::cursor::Cursor;
use crate::many::{Many, XMany};
use crate::parser::{Outcome, Parser};

/// Parser combinator that lifts a single value into a one-element vector
#[derive(Debug, Clone)]
pub struct Once<P> {
    parser: P,
}

impl<P> Once<P> {
    pub fn new(parser: P) -> Self {
        Once { parser }
    }
}

impl<P> Parser for Once<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok((vec![value], cursor))
    }
}

/// Convenience function to create a Once parser
pub fn once<P>(parser: P) -> Once<P>
where
    P: Parser,
{
    Once::new(parser)
}

/// Parser combinator that runs two sequence parsers in order and joins their values
#[derive(Debug, Clone)]
pub struct Concat<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Concat<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Concat { first, second }
    }
}

impl<P1, P2, T> Parser for Concat<P1, P2>
where
    P1: Parser<Output = Vec<T>>,
    P2: Parser<Output = Vec<T>>,
{
    type Output = Vec<T>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (mut values, cursor) = self.first.parse(cursor)?;
        let (rest, cursor) = self.second.parse(cursor)?;
        values.extend(rest);
        Ok((values, cursor))
    }
}

/// Convenience function to create a Concat parser
pub fn concat<P1, P2, T>(first: P1, second: P2) -> Concat<P1, P2>
where
    P1: Parser<Output = Vec<T>>,
    P2: Parser<Output = Vec<T>>,
{
    Concat::new(first, second)
}

/// One or more occurrences, see [`at_least_once`]
pub type AtLeastOnce<P> = Concat<Once<P>, Many<P>>;

/// One or more occurrences with the strict tail of [`XMany`]
pub type XAtLeastOnce<P> = Concat<Once<P>, XMany<P>>;

/// Parser that matches one or more occurrences, failing if the first attempt fails
pub fn at_least_once<P>(parser: P) -> AtLeastOnce<P>
where
    P: Parser + Clone,
{
    Concat::new(Once::new(parser.clone()), Many::new(parser))
}

/// Like [`at_least_once`], but a partially matched trailing element is an error
pub fn x_at_least_once<P>(parser: P) -> XAtLeastOnce<P>
where
    P: Parser + Clone,
{
    Concat::new(Once::new(parser.clone()), XMany::new(parser))
}

/// Extension trait to add sequence-building methods to parsers
pub trait ConcatExt: Parser + Sized {
    fn once(self) -> Once<Self> {
        Once::new(self)
    }

    fn concat<P, T>(self, other: P) -> Concat<Self, P>
    where
        Self: Parser<Output = Vec<T>>,
        P: Parser<Output = Vec<T>>,
    {
        Concat::new(self, other)
    }

    fn at_least_once(self) -> AtLeastOnce<Self>
    where
        Self: Clone,
    {
        at_least_once(self)
    }

    fn x_at_least_once(self) -> XAtLeastOnce<Self>
    where
        Self: Clone,
    {
        x_at_least_once(self)
    }
}

/// Implement ConcatExt for all parsers
impl<P> ConcatExt for P where P: Parser {}
