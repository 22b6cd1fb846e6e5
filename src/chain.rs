//! Left-associative operator chains
//!
//! `chain_left(operator, operand, apply)` parses `operand (operator operand)*`
//! and folds the results from the left, so `1-2-3` with subtraction yields
//! `(1-2)-3`. The repetition is a loop, so long chains do not grow the stack.

use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

#[derive(Debug, Clone)]
pub struct ChainLeft<O, P, F> {
    operator: O,
    operand: P,
    apply: F,
    strict: bool,
}

impl<O, P, F> ChainLeft<O, P, F> {
    pub fn new(operator: O, operand: P, apply: F) -> Self {
        ChainLeft {
            operator,
            operand,
            apply,
            strict: false,
        }
    }

    pub fn strict(operator: O, operand: P, apply: F) -> Self {
        ChainLeft {
            operator,
            operand,
            apply,
            strict: true,
        }
    }
}

impl<O, P, F> Parser for ChainLeft<O, P, F>
where
    O: Parser,
    P: Parser,
    F: Fn(O::Output, P::Output, P::Output) -> P::Output,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (mut acc, mut cursor) = self.operand.parse(cursor)?;

        loop {
            let step = self.operator.parse(cursor).and_then(|(op, after)| {
                self.operand
                    .parse(after)
                    .map(|(right, rest)| ((op, right), rest))
            });

            match step {
                Ok(((op, right), rest)) => {
                    acc = (self.apply)(op, acc, right);
                    cursor = rest;
                }
                Err(failure) if self.strict && failure.consumed_from(&cursor) => {
                    return Err(failure);
                }
                Err(_) => return Ok((acc, cursor)),
            }
        }
    }
}

/// Chain `operand`s joined by `operator`, folding left with `apply`
///
/// An operator that is not followed by an operand ends the chain and is left
/// unconsumed.
pub fn chain_left<O, P, F>(operator: O, operand: P, apply: F) -> ChainLeft<O, P, F>
where
    O: Parser,
    P: Parser,
    F: Fn(O::Output, P::Output, P::Output) -> P::Output,
{
    ChainLeft::new(operator, operand, apply)
}

/// Like [`chain_left`], but an operator that is not followed by an operand is
/// an error
pub fn x_chain_left<O, P, F>(operator: O, operand: P, apply: F) -> ChainLeft<O, P, F>
where
    O: Parser,
    P: Parser,
    F: Fn(O::Output, P::Output, P::Output) -> P::Output,
{
    ChainLeft::strict(operator, operand, apply)
}
