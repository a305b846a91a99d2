//! Classification of the characters that make up the pattern syntax
//!
//! The alphabet is "anything that is not reserved". The reserved set is
//! small and fixed: two infix operators, three postfix operators, and the
//! two brackets. There is no escape mechanism, so a reserved character can
//! never appear as a literal.

/// Union (alternation) operator.
pub const UNION: char = '|';

/// Concatenation operator. Implicit on input, explicit in postfix output.
pub const CONCAT: char = '.';

/// Zero-or-one operator.
pub const OPTIONAL: char = '?';

/// Kleene star (zero-or-more) operator.
pub const STAR: char = '*';

/// One-or-more operator.
pub const PLUS: char = '+';

/// Opens a group.
pub const OPEN: char = '(';

/// Closes a group.
pub const CLOSE: char = ')';

/// Returns whether `ch` is a binary infix operator (`|` or `.`).
pub fn is_infix(ch: char) -> bool {
    matches!(ch, UNION | CONCAT)
}

/// Returns whether `ch` is a unary postfix operator (`?`, `*`, or `+`).
pub fn is_postfix(ch: char) -> bool {
    matches!(ch, OPTIONAL | STAR | PLUS)
}

/// Returns whether `ch` opens a group.
pub fn is_open(ch: char) -> bool {
    ch == OPEN
}

/// Returns whether `ch` closes a group.
pub fn is_close(ch: char) -> bool {
    ch == CLOSE
}

/// Returns whether `ch` stands for itself.
pub fn is_literal(ch: char) -> bool {
    !is_infix(ch) && !is_postfix(ch) && !is_open(ch) && !is_close(ch)
}

/// Binding strength used by the encoder's operator stack. Non-operators
/// (including brackets) get zero, which is what lets an open bracket act as
/// a floor during precedence comparisons.
pub fn precedence(ch: char) -> u8 {
    match ch {
        OPTIONAL | STAR | PLUS => 3,
        CONCAT => 2,
        UNION => 1,
        _ => 0,
    }
}

/// Returns whether the infix operator `ch` associates to the left.
///
/// Semantically both infix operators are associative, but the encoder's
/// output bytes depend on this: concatenation must drain equal-precedence
/// operators off the stack while union must not, or the postfix form of
/// chains like `ab|cd|ef` comes out reordered.
pub fn is_left_associative(ch: char) -> bool {
    ch == CONCAT
}
