use crate::cursor::Cursor;
use crate::error::{Expectations, Failure};
use crate::parser::{Outcome, Parser};
use std::borrow::Cow;
use std::fmt;

/// Parser that consumes a single element accepted by a predicate
///
/// Every single-character parser in [`crate::chars`] is one of these, built
/// from a predicate and a human-readable description. The description is the
/// expectation reported on failure.
#[derive(Clone)]
pub struct ElementMatching<F> {
    predicate: F,
    description: Cow<'static, str>,
}

impl<F> ElementMatching<F>
where
    F: Fn(char) -> bool,
{
    pub fn new(predicate: F, description: impl Into<Cow<'static, str>>) -> Self {
        ElementMatching {
            predicate,
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<F> fmt::Debug for ElementMatching<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementMatching")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<F> Parser for ElementMatching<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.current() {
            Some(c) if (self.predicate)(c) => Ok((c, cursor.advance())),
            _ => Err(Failure::unexpected(
                cursor,
                Expectations::one(self.description.clone()),
            )),
        }
    }
}

/// Convenience function to create a parser for one element matching `predicate`
pub fn element_matching<F>(
    predicate: F,
    description: impl Into<Cow<'static, str>>,
) -> ElementMatching<F>
where
    F: Fn(char) -> bool,
{
    ElementMatching::new(predicate, description)
}

/// Parser for one element that does *not* match `predicate`
pub fn element_except<F>(
    predicate: F,
    description: impl fmt::Display,
) -> ElementMatching<impl Fn(char) -> bool + Clone>
where
    F: Fn(char) -> bool + Clone,
{
    ElementMatching::new(
        move |c| !predicate(c),
        format!("any character except {}", description),
    )
}
