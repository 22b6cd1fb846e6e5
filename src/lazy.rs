use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};
use std::sync::OnceLock;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
///
/// The factory runs on the first parse and the built parser is reused after
/// that, even when several threads share one `Lazy`. A recursive grammar names itself through a function returning a
/// [`BoxedParser`](crate::parser::BoxedParser):
///
/// ```
/// use runecomb::between::between;
/// use runecomb::chars::is_char;
/// use runecomb::lazy::lazy;
/// use runecomb::map::MapExt;
/// use runecomb::or::OrExt;
/// use runecomb::parser::{BoxedExt, BoxedParser};
/// use runecomb::succeed::succeed;
///
/// fn depth() -> BoxedParser<'static, usize> {
///     between(is_char('('), lazy(depth), is_char(')'))
///         .map(|inner| inner + 1)
///         .or(succeed(0))
///         .boxed()
/// }
///
/// assert_eq!(runecomb::parse(depth(), "((()))").unwrap(), 3);
/// ```
pub struct Lazy<F, P> {
    factory: F,
    parser: OnceLock<P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceLock::new(),
        }
    }
}

impl<F, P> Parser for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        self.parser.get_or_init(&self.factory).parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}
