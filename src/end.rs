use crate::cursor::Cursor;
use crate::error::{Expectations, Failure};
use crate::parser::{Outcome, Parser};

pub const END_OF_INPUT: &str = "end of input";

/// Parser combinator that requires the inner parser to consume the whole input
///
/// When input is left over, the failure names the first unconsumed element
/// and is reported at the cursor the parser started from.
#[derive(Debug, Clone)]
pub struct End<P> {
    parser: P,
}

impl<P> End<P> {
    pub fn new(parser: P) -> Self {
        End { parser }
    }
}

impl<P> Parser for End<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, rest) = self.parser.parse(cursor)?;
        match rest.current() {
            None => Ok((value, rest)),
            Some(c) => Err(Failure::new(
                cursor,
                format!("unexpected {:?}", c),
                Expectations::one(END_OF_INPUT),
            )),
        }
    }
}

/// Convenience function to create an End parser
pub fn end<P>(parser: P) -> End<P>
where
    P: Parser,
{
    End::new(parser)
}

/// Extension trait to add .end() method support for parsers
pub trait EndExt: Parser + Sized {
    fn end(self) -> End<Self> {
        End::new(self)
    }
}

/// Implement EndExt for all parsers
impl<P> EndExt for P where P: Parser {}
