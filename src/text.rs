use crate::map::Map;
use crate::parser::Parser;

/// Parser producing the characters of a sequence parser as a `String`
pub type Text<P> = Map<P, fn(Vec<char>) -> String>;

fn collect(chars: Vec<char>) -> String {
    chars.into_iter().collect()
}

/// Convenience function to create a Text parser
pub fn text<P>(parser: P) -> Text<P>
where
    P: Parser<Output = Vec<char>>,
{
    Map::new(parser, collect as fn(Vec<char>) -> String)
}

/// Extension trait to add .text() method support for character sequence parsers
pub trait TextExt: Parser<Output = Vec<char>> + Sized {
    fn text(self) -> Text<Self> {
        text(self)
    }
}

/// Implement TextExt for all character sequence parsers
impl<P> TextExt for P where P: Parser<Output = Vec<char>> {}
