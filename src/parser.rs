use crate::cursor::Cursor;
use crate::error::Failure;
use std::rc::Rc;
use std::sync::Arc;

/// Result of running a parser: the value and the remainder on success, or a
/// [`Failure`] that still carries the cursor where parsing stopped
pub type Outcome<'code, T> = Result<(T, Cursor<'code>), Failure<'code>>;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to an [`Outcome`]: running the
/// same parser on the same cursor always produces the same outcome. Parsers
/// hold only their grammar definition (sub-parsers, predicates, labels) and
/// never per-invocation state, so one value can be reused for any number of
/// parses.
pub trait Parser {
    type Output;

    /// Attempt to parse from the given cursor position
    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Rc<P> {
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser, used to name the type of recursive grammars
pub type BoxedParser<'p, T> = Box<dyn Parser<Output = T> + 'p>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'p>: Parser + Sized + 'p {
    fn boxed(self) -> BoxedParser<'p, Self::Output> {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'p, P> BoxedExt<'p> for P where P: Parser + 'p {}
