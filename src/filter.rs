use crate::cursor::Cursor;
use crate::error::{Expectations, Failure};
use crate::parser::{Outcome, Parser};
use std::fmt;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value fails at the cursor the parser started from, as if
/// nothing had matched there, even when the inner parser consumed several
/// elements. Failures of the inner parser pass through unchanged.
#[derive(Debug, Clone)]
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<P, F> Parser for Filter<P, F>
where
    P: Parser,
    P::Output: fmt::Debug,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, rest) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, rest))
        } else {
            Err(Failure::new(
                cursor,
                format!("unexpected {:?}", value),
                Expectations::none(),
            ))
        }
    }
}

/// Convenience function to create a filtered parser
pub fn filter<P, F>(parser: P, predicate: F) -> Filter<P, F>
where
    P: Parser,
    P::Output: fmt::Debug,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(parser, predicate)
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Parser + Sized {
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self::Output: fmt::Debug,
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate)
    }
}

impl<P: Parser> FilterExt for P {}
