use crate::cursor::Cursor;
use crate::error::Expectations;
use crate::parser::{Outcome, Parser};
use std::borrow::Cow;

/// Parser combinator that gives a sub-grammar a single name in diagnostics
///
/// When the inner parser fails without consuming input, its expectations are
/// replaced by the label. Failures after consumption keep their own, more
/// precise expectations.
#[derive(Debug, Clone)]
pub struct Named<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Named<P> {
    pub fn new(parser: P, label: impl Into<Cow<'static, str>>) -> Self {
        Named {
            parser,
            label: label.into(),
        }
    }
}

impl<P> Parser for Named<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        self.parser.parse(cursor).map_err(|failure| {
            if failure.consumed_from(&cursor) {
                failure
            } else {
                failure.with_expectations(Expectations::one(self.label.clone()))
            }
        })
    }
}

/// Convenience function to create a Named parser
pub fn named<P>(parser: P, label: impl Into<Cow<'static, str>>) -> Named<P>
where
    P: Parser,
{
    Named::new(parser, label)
}

/// Parser combinator that reports any failure at the cursor it started from
///
/// Message and expectations are kept. To alternation the attempt looks as if
/// nothing was consumed, so `xor` and `x_many` may still move on to the next
/// alternative.
#[derive(Debug, Clone)]
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<P> Parser for Attempt<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        self.parser.parse(cursor).map_err(|failure| failure.at(cursor))
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<P>(parser: P) -> Attempt<P>
where
    P: Parser,
{
    Attempt::new(parser)
}

/// Extension trait to add .named() and .attempt() method support for parsers
pub trait NamedExt: Parser + Sized {
    fn named(self, label: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(self, label)
    }

    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

/// Implement NamedExt for all parsers
impl<P> NamedExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{digit, is_char, letter};
    use crate::concat::at_least_once;
    use crate::cursor::Source;
    use crate::or::OrExt;
    use crate::text::text;
    use crate::then::ThenExt;

    #[test]
    fn test_named_replaces_expectations_without_consumption() {
        let source = Source::new("!");
        let identifier = text(at_least_once(letter())).named("identifier");

        let failure = identifier.parse(source.cursor()).unwrap_err();
        assert_eq!(failure.expectations(), &Expectations::one("identifier"));
        assert_eq!(failure.message(), "unexpected '!'");
    }

    #[test]
    fn test_named_keeps_expectations_after_consumption() {
        let source = Source::new("ax");
        let pair = named(is_char('a').then(|_| is_char('b')), "pair");

        let failure = pair.parse(source.cursor()).unwrap_err();
        assert_eq!(failure.expectations(), &Expectations::one("b"));
    }

    #[test]
    fn test_named_alternatives_merge_labels() {
        let source = Source::new("?");
        let parser = digit().named("number").or(letter().named("name"));

        let failure = parser.parse(source.cursor()).unwrap_err();
        assert_eq!(
            failure.expectations(),
            &["number", "name"].into_iter().collect::<Expectations>()
        );
    }

    #[test]
    fn test_attempt_rewinds_failure() {
        let source = Source::new("ax");
        let cursor = source.cursor();
        let pair = is_char('a').then(|_| is_char('b'));

        let failure = attempt(pair).parse(cursor).unwrap_err();
        assert_eq!(failure.remainder(), cursor);
        assert_eq!(failure.message(), "unexpected 'x'");
        assert_eq!(failure.expectations(), &Expectations::one("b"));
    }

    #[test]
    fn test_attempt_passes_success_through() {
        let source = Source::new("ab");
        let (value, rest) = is_char('a').attempt().parse(source.cursor()).unwrap();
        assert_eq!(value, 'a');
        assert_eq!(rest.current(), Some('b'));
    }
}
