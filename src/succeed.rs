use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser that always succeeds with a fixed value without consuming input
#[derive(Debug, Clone)]
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<T: Clone> Parser for Succeed<T> {
    type Output = T;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed::new(value)
}
