use crate::chars::{CharClass, char_ignore_case, is_char, numeric};
use crate::concat::{AtLeastOnce, Concat, Once, at_least_once};
use crate::cursor::Cursor;
use crate::named::{Attempt, Named};
use crate::parser::{Outcome, Parser};
use crate::succeed::Succeed;
use crate::text::{Text, text};
use std::fmt;
use std::sync::Arc;

type CharSequence = Arc<dyn Parser<Output = Vec<char>> + Send + Sync>;

/// Parser that matches a fixed string
///
/// Built from one character parser per code point joined with [`Concat`].
/// Any failure is reported at the start of the literal and expects the
/// literal as a whole, so `literal("ab")` on `"ac"` fails at position 0
/// expecting `ab` rather than at position 1 expecting `b`.
#[derive(Clone)]
pub struct Literal {
    expected: String,
    parser: Named<Attempt<Text<CharSequence>>>,
}

impl Literal {
    fn from_chars<P, F>(expected: &str, char_parser: F) -> Self
    where
        F: Fn(char) -> P,
        P: Parser<Output = char> + Send + Sync + 'static,
    {
        let empty: CharSequence = Arc::new(Succeed::new(Vec::<char>::new()));
        let sequence = expected.chars().fold(empty, |acc, c| {
            Arc::new(Concat::new(acc, Once::new(char_parser(c)))) as CharSequence
        });

        Literal {
            expected: expected.to_string(),
            parser: Named::new(Attempt::new(text(sequence)), expected.to_string()),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Literal").field(&self.expected).finish()
    }
}

impl Parser for Literal {
    type Output = String;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        self.parser.parse(cursor)
    }
}

/// Parser that matches `expected` exactly and returns it
pub fn literal(expected: &str) -> Literal {
    Literal::from_chars(expected, is_char)
}

/// Parser that matches `expected` ignoring case and returns the input as written
pub fn literal_ignore_case(expected: &str) -> Literal {
    Literal::from_chars(expected, char_ignore_case)
}

/// Parser for a run of one or more numeric characters, returned as text
pub fn number() -> Text<AtLeastOnce<CharClass>> {
    text(at_least_once(numeric()))
}
