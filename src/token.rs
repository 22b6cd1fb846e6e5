use crate::chars::whitespace;
use crate::cursor::Cursor;
use crate::many::many;
use crate::parser::{Outcome, Parser};

/// Parser combinator that skips whitespace around the inner parser
///
/// Whitespace on either side is optional and skipping it never fails; the
/// value is the inner parser's.
#[derive(Debug, Clone)]
pub struct Token<P> {
    parser: P,
}

impl<P> Token<P> {
    pub fn new(parser: P) -> Self {
        Token { parser }
    }
}

impl<P> Parser for Token<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let skip = many(whitespace());
        let (_, cursor) = skip.parse(cursor)?;
        let (value, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = skip.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a Token parser
pub fn token<P>(parser: P) -> Token<P>
where
    P: Parser,
{
    Token::new(parser)
}

/// Extension trait to add .token() method support for parsers
pub trait TokenExt: Parser + Sized {
    fn token(self) -> Token<Self> {
        Token::new(self)
    }
}

/// Implement TokenExt for all parsers
impl<P> TokenExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{is_char, letter};
    use crate::cursor::Source;
    use crate::text::text;
    use crate::concat::at_least_once;

    #[test]
    fn test_token_skips_surrounding_whitespace() {
        let source = Source::new("   a  ");
        let (value, rest) = token(is_char('a')).parse(source.cursor()).unwrap();
        assert_eq!(value, 'a');
        assert!(rest.is_end());
    }

    #[test]
    fn test_token_without_whitespace() {
        let source = Source::new("ab");
        let (value, rest) = is_char('a').token().parse(source.cursor()).unwrap();
        assert_eq!(value, 'a');
        assert_eq!(rest.current(), Some('b'));
    }

    #[test]
    fn test_token_across_lines() {
        let source = Source::new("\n\t word \n next");
        let word = text(at_least_once(letter())).token();

        let (first, rest) = word.parse(source.cursor()).unwrap();
        assert_eq!(first, "word");
        assert_eq!(rest.line(), 3);

        let (second, rest) = word.parse(rest).unwrap();
        assert_eq!(second, "next");
        assert!(rest.is_end());
    }

    #[test]
    fn test_token_reports_inner_failure_after_whitespace() {
        let source = Source::new("  x");
        let failure = token(is_char('a')).parse(source.cursor()).unwrap_err();
        assert_eq!(failure.remainder().position(), 2);
        assert!(failure.expectations().contains("a"));
    }
}
