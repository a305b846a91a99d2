//! The postfix decoder: postfix sequence → readable infix pattern

use super::syntax;
use crate::error::ErrorKind;

/// One reconstructed subexpression on the decode stack.
///
/// `atomic` records whether a postfix operator may attach to the text
/// directly: a single literal, a parenthesized union, or an operand already
/// ending in a postfix operator all repeat as a unit. A bare concatenation
/// does not — `ab` under `*` must come back as `(ab)*`, or re-encoding
/// would turn the original `(ab)*` into `ab*`.
struct Operand {
    text: String,
    atomic: bool,
}

/// Rebuilds an infix pattern from a postfix sequence.
///
/// The original bracketing is not recoverable; the reconstruction instead
/// uses a canonical one. Unions are always parenthesized, concatenations
/// never are, and unary operators take parentheses only when their operand
/// needs them. Re-encoding the result reproduces the input sequence.
pub(crate) fn decode(postfix: &str) -> Result<String, ErrorKind> {
    let mut stack: Vec<Operand> = Vec::new();

    for ch in postfix.chars() {
        if syntax::is_infix(ch) {
            let rhs = stack.pop().ok_or(ErrorKind::MalformedPostfix)?;
            let lhs = stack.pop().ok_or(ErrorKind::MalformedPostfix)?;
            stack.push(merge(ch, lhs, rhs));
        } else if syntax::is_postfix(ch) {
            let operand = stack.pop().ok_or(ErrorKind::MalformedPostfix)?;
            stack.push(repeat(ch, operand));
        } else {
            stack.push(Operand { text: ch.to_string(), atomic: true });
        }
    }

    // the empty sequence decodes to the empty pattern, mirroring the
    // encoder's treatment of the empty regex
    match stack.pop() {
        Some(operand) if stack.is_empty() => Ok(operand.text),
        Some(_) => Err(ErrorKind::MalformedPostfix),
        None => Ok(String::new()),
    }
}

fn merge(op: char, lhs: Operand, rhs: Operand) -> Operand {
    if op == syntax::CONCAT {
        Operand { text: format!("{}{}", lhs.text, rhs.text), atomic: false }
    } else {
        let text = format!("({}{}{})", lhs.text, syntax::UNION, rhs.text);
        Operand { text, atomic: true }
    }
}

fn repeat(op: char, operand: Operand) -> Operand {
    let text = if operand.atomic {
        format!("{}{}", operand.text, op)
    } else {
        format!("({}){}", operand.text, op)
    };
    Operand { text, atomic: true }
}
