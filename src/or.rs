//! Alternation and the best-error policy
//!
//! Both alternatives always receive the same input cursor, so trying the
//! second alternative after the first is plain backtracking.
//!
//! When every alternative fails, the reported failure is the one that got
//! furthest into the input. Failures that stopped at the same position are
//! merged: the first message is kept and the expectations are unioned. Chained
//! alternations apply this pairwise, so a long chain reports the deepest
//! failure with the expectations of every alternative that reached that depth.

use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{Outcome, Parser};

/// Pick the more informative of two failures from alternatives tried on the same input
pub fn better_error<'code>(first: Failure<'code>, second: Failure<'code>) -> Failure<'code> {
    let first_position = first.remainder().position();
    let second_position = second.remainder().position();

    if second_position > first_position {
        second
    } else if second_position == first_position {
        let expectations = first.expectations().clone().union(second.expectations().clone());
        first.with_expectations(expectations)
    } else {
        first
    }
}

/// Shared tail of `or` and `xor` once the first alternative has been run
fn alternate<'code, P1, P2>(
    first: Outcome<'code, P1::Output>,
    second: &P2,
    cursor: Cursor<'code>,
) -> Outcome<'code, P1::Output>
where
    P1: Parser,
    P2: Parser<Output = P1::Output>,
{
    match first {
        Err(first_failure) => second
            .parse(cursor)
            .map_err(|second_failure| better_error(first_failure, second_failure)),
        // An empty match gives way to a later alternative that matches something
        Ok((value, rest)) if rest == cursor => match second.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => Ok((value, rest)),
        },
        Ok(result) => Ok(result),
    }
}

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser is also tried when the first succeeds without consuming
/// input; it wins if it succeeds. A first parser that succeeds and consumes
/// input is returned without ever running the second.
#[derive(Debug, Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Output = P1::Output>,
{
    type Output = P1::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        alternate::<P1, P2>(self.parser1.parse(cursor), &self.parser2, cursor)
    }
}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

/// Committing alternation
///
/// Like [`Or`], except that once the first parser has consumed input before
/// failing, its failure is returned as-is and the second parser is never
/// tried. This keeps a grammar from backtracking out of a branch whose prefix
/// already matched.
#[derive(Debug, Clone)]
pub struct XOr<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> XOr<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        XOr { parser1, parser2 }
    }
}

impl<P1, P2> Parser for XOr<P1, P2>
where
    P1: Parser,
    P2: Parser<Output = P1::Output>,
{
    type Output = P1::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            Err(failure) if failure.consumed_from(&cursor) => Err(failure),
            first => alternate::<P1, P2>(first, &self.parser2, cursor),
        }
    }
}

/// Convenience function to create an XOr parser
pub fn xor<P1, P2>(parser1: P1, parser2: P2) -> XOr<P1, P2>
where
    P1: Parser,
    P2: Parser<Output = P1::Output>,
{
    XOr::new(parser1, parser2)
}

/// Extension trait to add .or() and .xor() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Output = Self::Output>,
    {
        Or::new(self, other)
    }

    fn xor<P>(self, other: P) -> XOr<Self, P>
    where
        P: Parser<Output = Self::Output>,
    {
        XOr::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}
