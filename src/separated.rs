use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items; the
/// separators are discarded.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
///
/// # Note
/// - Requires at least one element
/// - A trailing separator is left unconsumed; see [`x_separated_by`] to
///   reject it instead
/// - Does not handle whitespace automatically
#[derive(Debug, Clone)]
pub struct SeparatedBy<P, S> {
    parser: P,
    separator: S,
    strict: bool,
}

impl<P, S> SeparatedBy<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        SeparatedBy {
            parser,
            separator,
            strict: false,
        }
    }

    pub fn strict(parser: P, separator: S) -> Self {
        SeparatedBy {
            parser,
            separator,
            strict: true,
        }
    }
}

impl<P, S> Parser for SeparatedBy<P, S>
where
    P: Parser,
    S: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (first, mut cursor) = self.parser.parse(cursor)?;
        let mut items = vec![first];

        loop {
            let step = self
                .separator
                .parse(cursor)
                .and_then(|(_, after)| self.parser.parse(after));

            match step {
                Ok((item, next_cursor)) => {
                    items.push(item);
                    cursor = next_cursor;
                }
                Err(failure) if self.strict && failure.consumed_from(&cursor) => {
                    return Err(failure);
                }
                Err(_) => return Ok((items, cursor)),
            }
        }
    }
}

/// Convenience function to create a SeparatedBy parser
pub fn separated_by<P, S>(parser: P, separator: S) -> SeparatedBy<P, S>
where
    P: Parser,
    S: Parser,
{
    SeparatedBy::new(parser, separator)
}

/// Like [`separated_by`], but a separator not followed by an item is an error
pub fn x_separated_by<P, S>(parser: P, separator: S) -> SeparatedBy<P, S>
where
    P: Parser,
    S: Parser,
{
    SeparatedBy::strict(parser, separator)
}

/// Extension trait to add .separated_by() method support for parsers
pub trait SeparatedByExt: Parser + Sized {
    fn separated_by<S: Parser>(self, separator: S) -> SeparatedBy<Self, S> {
        SeparatedBy::new(self, separator)
    }

    fn x_separated_by<S: Parser>(self, separator: S) -> SeparatedBy<Self, S> {
        SeparatedBy::strict(self, separator)
    }
}

/// Implement SeparatedByExt for all parsers
impl<P> SeparatedByExt for P where P: Parser {}
