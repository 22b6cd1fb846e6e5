use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that makes a parser optional
///
/// Returns `Some` with the value when the inner parser succeeds and `None`,
/// without consuming input, when it fails.
#[derive(Debug, Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<P> Parser for Optional<P>
where
    P: Parser,
{
    type Output = Option<P::Output>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, rest)) => Ok((Some(value), rest)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<P>(parser: P) -> Optional<P>
where
    P: Parser,
{
    Optional::new(parser)
}

/// Like [`Optional`], but an inner failure after consuming input is returned
/// instead of `None`
#[derive(Debug, Clone)]
pub struct XOptional<P> {
    parser: P,
}

impl<P> XOptional<P> {
    pub fn new(parser: P) -> Self {
        XOptional { parser }
    }
}

impl<P> Parser for XOptional<P>
where
    P: Parser,
{
    type Output = Option<P::Output>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, rest)) => Ok((Some(value), rest)),
            Err(failure) if failure.consumed_from(&cursor) => Err(failure),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an XOptional parser
pub fn x_optional<P>(parser: P) -> XOptional<P>
where
    P: Parser,
{
    XOptional::new(parser)
}

/// Extension trait to add .optional() and .x_optional() method support for parsers
pub trait OptionalExt: Parser + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    fn x_optional(self) -> XOptional<Self> {
        XOptional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<P> OptionalExt for P where P: Parser {}
