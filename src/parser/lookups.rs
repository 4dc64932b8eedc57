use std::collections::HashMap;

use super::parser::Parser;

/// Precedence reported for tokens that are not binary operators.
pub const NOT_AN_OPERATOR: i32 = -1;

/// Binary operator character to precedence; higher binds tighter.
pub type PrecedenceLookup = HashMap<char, i32>;

pub fn create_precedence_lookups(parser: &mut Parser) {
    // Relational
    parser.install_binary_operator('<', 10);

    // Additive and multiplicative
    parser.install_binary_operator('+', 20);
    parser.install_binary_operator('-', 20);
    parser.install_binary_operator('*', 40);
}
