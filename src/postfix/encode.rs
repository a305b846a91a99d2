//! The shunting-yard encoder: infix pattern → postfix sequence

use super::syntax;
use crate::error::ErrorKind;

/// Translates an infix pattern into postfix, making every concatenation
/// explicit.
///
/// A single left-to-right pass. Literals and postfix operators stream
/// straight to the output (a postfix operator already sits to the right of
/// its operand); infix operators wait on a stack until something weaker
/// comes along; brackets bound the stack until closed.
///
/// Note that the encoder checks bracket pairing and nothing else: a dangling
/// operator like the trailing union in `"a|"` passes through and is caught
/// by whichever consumer evaluates the sequence.
pub(crate) fn encode(regex: &str) -> Result<String, ErrorKind> {
    let mut enc = Encoder {
        operators: Vec::new(),
        output: String::with_capacity(regex.len() * 2),
    };

    let mut chars = regex.chars().peekable();
    while let Some(ch) = chars.next() {
        if syntax::is_infix(ch) {
            enc.infix(ch);
        } else if syntax::is_open(ch) {
            enc.operators.push(ch);
        } else if syntax::is_close(ch) {
            enc.close()?;
            enc.join_next(chars.peek());
        } else {
            enc.output.push(ch);
            enc.join_next(chars.peek());
        }
    }

    enc.finish()
}

struct Encoder {
    /// Stacked infix operators and open brackets.
    operators: Vec<char>,
    output: String,
}

impl Encoder {
    /// Handles an infix operator: drain stacked operators that dominate it,
    /// then stack it. Concatenation is left-associative, so equal precedence
    /// dominates; union is treated as right-associative and only strictly
    /// higher precedence does. Brackets have zero precedence and stop the
    /// drain on their own.
    fn infix(&mut self, op: char) {
        while let Some(&top) = self.operators.last() {
            let dominates = if syntax::is_left_associative(op) {
                syntax::precedence(top) >= syntax::precedence(op)
            } else {
                syntax::precedence(top) > syntax::precedence(op)
            };
            if !dominates {
                break;
            }
            self.output.push(top);
            self.operators.pop();
        }
        self.operators.push(op);
    }

    /// Handles a close bracket: pop operators to the output until the
    /// matching open bracket, which is discarded.
    fn close(&mut self) -> Result<(), ErrorKind> {
        loop {
            match self.operators.pop() {
                Some(op) if syntax::is_open(op) => return Ok(()),
                Some(op) => self.output.push(op),
                None => return Err(ErrorKind::UnmatchedParenthesis),
            }
        }
    }

    /// Injects the implicit concatenation operator after a character that
    /// ended an operand, but only when another operand starts next — a
    /// literal or an open bracket. A postfix operator next must first bind
    /// to the operand just finished, and an infix operator or close bracket
    /// carries its own handling.
    fn join_next(&mut self, next: Option<&char>) {
        if let Some(&next) = next {
            if syntax::is_literal(next) || syntax::is_open(next) {
                self.infix(syntax::CONCAT);
            }
        }
    }

    /// Drains the remaining operators into the output. An open bracket still
    /// on the stack was never closed.
    fn finish(mut self) -> Result<String, ErrorKind> {
        while let Some(op) = self.operators.pop() {
            if syntax::is_open(op) {
                return Err(ErrorKind::UnmatchedParenthesis);
            }
            self.output.push(op);
        }
        Ok(self.output)
    }
}
