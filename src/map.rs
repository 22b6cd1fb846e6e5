use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// Only the value changes: the remainder is the inner parser's, and the inner
/// parser's failures pass through untouched.
#[derive(Debug, Clone)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    /// Replace the value with a fixed one
    fn to<U: Clone>(self, value: U) -> Map<Self, impl Fn(Self::Output) -> U + Clone> {
        Map::new(self, move |_| value.clone())
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{digit, is_char, letter};
    use crate::cursor::Source;
    use crate::or::OrExt;

    #[derive(Debug, Clone, PartialEq)]
    enum Token {
        Letter(char),
        Number(u32),
        Special(char),
    }

    #[test]
    fn test_map_char_to_digit() {
        let source = Source::new("7");
        let parser = digit().map(|c| c.to_digit(10));

        let (value, rest) = parser.parse(source.cursor()).unwrap();
        assert_eq!(value, Some(7));
        assert!(rest.is_end());
    }

    #[test]
    fn test_map_to_enum_with_or() {
        let source = Source::new("4");
        let parser = letter()
            .map(Token::Letter)
            .or(digit().map(|c| Token::Number(c.to_digit(10).unwrap_or(0))))
            .or(is_char('!').map(Token::Special));

        let (token, _) = parser.parse(source.cursor()).unwrap();
        assert_eq!(token, Token::Number(4));
    }

    #[test]
    fn test_map_chaining_fuses() {
        let source = Source::new("5");
        let chained = digit()
            .map(|c| c.to_digit(10).unwrap_or(0))
            .map(|d| format!("Digit: {}", d));
        let fused = digit().map(|c| format!("Digit: {}", c.to_digit(10).unwrap_or(0)));

        assert_eq!(
            chained.parse(source.cursor()),
            fused.parse(source.cursor())
        );
    }

    #[test]
    fn test_map_preserves_errors() {
        let source = Source::new("xyz");
        let direct = digit().parse(source.cursor()).unwrap_err();
        let mapped = map(digit(), |c| c as u32).parse(source.cursor()).unwrap_err();
        assert_eq!(mapped, direct);
    }

    #[test]
    fn test_to_replaces_value() {
        let source = Source::new("+");
        let parser = is_char('+').to(Token::Special('p'));

        let (token, _) = parser.parse(source.cursor()).unwrap();
        assert_eq!(token, Token::Special('p'));
    }
}
