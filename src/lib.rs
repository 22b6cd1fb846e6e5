//! # runecomb - Character Parser Combinators
//!
//! A parser combinator engine over Unicode text. Grammars are built from
//! small parsers that match single characters and combinators that sequence,
//! choose, repeat, transform and label them.
//!
//! - **Immutable cursors**: a [`Cursor`] is a `Copy` view into the input that
//!   tracks position, line and column, so backtracking is passing the same
//!   cursor to the next alternative
//! - **Failures as data**: a failed parse returns a [`Failure`] holding where
//!   parsing stopped, a message and the set of things that were expected
//! - **Best-error reporting**: alternatives report the failure that got
//!   furthest into the input, merging expectations on a tie
//! - **Structs all the way down**: every combinator is a plain value owning
//!   its operands, reusable for any number of parses
//!
//! ```
//! use runecomb::prelude::*;
//!
//! let identifier = letter()
//!     .once()
//!     .concat(many(letter_or_digit()))
//!     .text()
//!     .token();
//! let assignment = identifier.select_many(
//!     |_| token(is_char('=')).then(|_| token(number())),
//!     |name, value| (name, value),
//! );
//!
//! let (name, value) = runecomb::parse(assignment, " answer = 42 ").unwrap();
//! assert_eq!(name, "answer");
//! assert_eq!(value, "42");
//!
//! let error = runecomb::parse(letter(), "1").unwrap_err();
//! assert_eq!(error.to_string(), "unexpected '1' at line 1, column 1; expected one of: letter");
//! ```
//!
//! Repetition combinators stop when their body fails. A body that can
//! succeed without consuming input, such as `many(succeed(x))`, never fails
//! and loops forever.

pub mod between;
pub mod chain;
pub mod chars;
pub mod concat;
pub mod cursor;
pub mod element;
pub mod end;
pub mod error;
pub mod except;
pub mod filter;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod named;
pub mod not;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod separated;
pub mod succeed;
pub mod text;
pub mod then;
pub mod token;

pub use cursor::{Cursor, Source};
pub use error::{Expectations, Failure, ParseError};
pub use parser::{BoxedParser, Outcome, Parser};
pub use position::{Position, Spanned};

/// Run `parser` over the whole of `text`
///
/// Trailing input that the parser does not consume is an error.
pub fn parse<P: Parser>(parser: P, text: &str) -> Result<P::Output, ParseError> {
    let source = Source::new(text);
    end::end(parser)
        .parse(source.cursor())
        .map(|(value, _)| value)
        .map_err(ParseError::from)
}

/// Everything needed to write a grammar: the parser trait, the extension
/// traits and the constructor functions
pub mod prelude {
    pub use crate::between::{BetweenExt, between};
    pub use crate::chain::{chain_left, x_chain_left};
    pub use crate::chars::{
        any_char, char_except, char_ignore_case, chars_in, chars_not_in, digit, is_char, letter,
        letter_or_digit, lower, numeric, upper, whitespace,
    };
    pub use crate::concat::{ConcatExt, at_least_once, concat, once, x_at_least_once};
    pub use crate::element::{element_except, element_matching};
    pub use crate::end::{EndExt, end};
    pub use crate::except::{ExceptExt, except, until};
    pub use crate::filter::{FilterExt, filter};
    pub use crate::lazy::lazy;
    pub use crate::literal::{literal, literal_ignore_case, number};
    pub use crate::many::{ManyExt, many, x_many};
    pub use crate::map::{MapExt, map};
    pub use crate::named::{NamedExt, attempt, named};
    pub use crate::not::{NotExt, not};
    pub use crate::optional::{OptionalExt, optional, x_optional};
    pub use crate::or::{OrExt, or, xor};
    pub use crate::parser::{BoxedExt, BoxedParser, Parser};
    pub use crate::position::{PositionedExt, positioned};
    pub use crate::separated::{SeparatedByExt, separated_by, x_separated_by};
    pub use crate::succeed::succeed;
    pub use crate::text::{TextExt, text};
    pub use crate::then::{ThenExt, select_many, then};
    pub use crate::token::{TokenExt, token};
}
