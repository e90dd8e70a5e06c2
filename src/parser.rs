use itertools::Itertools;
use log::debug;

use crate::formula::{Clause, Formula, Literal};

/// The conjunction connective joining clauses.
pub const AND: char = '∧';
/// The disjunction connective joining literals within a clause.
pub const OR: char = '∨';
/// The negation prefix on a literal.
pub const NOT: char = '¬';

/// Reasons a piece of formula text is rejected before parsing.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// The input is empty once surrounding whitespace is trimmed.
    EmptyInput,
    /// Parenthesis depth dips below zero or does not return to zero at the end.
    UnbalancedParens,
    /// A character outside variable tokens, connectives, parentheses, and whitespace.
    InvalidCharacter,
    /// Two connective symbols with nothing between them, e.g. `∧∧`.
    ConsecutiveOperators,
}

fn is_connective(c: char) -> bool {
    matches!(c, AND | OR | NOT)
}

/// Check `text` against the flat CNF surface grammar without building anything.
///
/// Checks run in order and the first failure wins: emptiness, parenthesis balance, character
/// set, connective adjacency. A passing result means [`parse`] is total on `text`. No semantic
/// analysis happens here.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let mut depth = 0isize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(ValidationError::UnbalancedParens);
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ValidationError::UnbalancedParens);
    }

    if !text
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '(' | ')') || is_connective(c))
    {
        return Err(ValidationError::InvalidCharacter);
    }

    // the one legal adjacency is NOT right after a binary connective, as in A∨¬B
    let mut previous = None;
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        if let Some(p) = previous {
            if is_connective(p) && is_connective(c) && !(c == NOT && p != NOT) {
                return Err(ValidationError::ConsecutiveOperators);
            }
        }
        previous = Some(c);
    }

    Ok(())
}

/// Parse `text` into a [`Formula`].
///
/// Assumes [`validate`] accepted `text` and does not re-check it. Clauses are split on [`AND`],
/// literals on [`OR`]; parentheses are stripped (the grammar has no nested sub-expressions), a
/// leading [`NOT`] negates, empty literal fragments are skipped, and clause fragments yielding
/// no literals are dropped.
pub fn parse(text: &str) -> Formula {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let clauses = stripped
        .split(AND)
        .filter_map(|fragment| {
            let fragment: String = fragment.chars().filter(|c| !matches!(c, '(' | ')')).collect();
            let literals = fragment
                .split(OR)
                .filter(|part| !part.is_empty())
                .map(|part| match part.strip_prefix(NOT) {
                    Some(name) => Literal::negative(name),
                    None => Literal::positive(part),
                })
                .collect_vec();

            (!literals.is_empty()).then(|| Clause::new(literals))
        })
        .collect_vec();

    debug!("parsed {} clauses out of {} input bytes", clauses.len(), text.len());

    Formula::new(clauses)
}
