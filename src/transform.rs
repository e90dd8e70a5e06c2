use std::collections::HashSet;

use itertools::Itertools;
use log::debug;
use strum::VariantArray;

use crate::formula::{Clause, Formula, Literal};
use crate::parser::{NOT, OR};

/// Human-readable narration of the rewrites applied by [`canonicalize`], in application order.
///
/// Display-only; the trace never feeds back into the resulting formula.
pub type RewriteTrace = Vec<String>;

/// How [`canonicalize`] brings every clause to exactly three literals.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum Strategy {
    /// Chain over-long clauses into linked three-literal fragments via fresh helper variables,
    /// then pad whatever is still short. Keeps every original literal.
    Splitting,
    /// Pad short clauses with fresh variables and cut over-long clauses down to their first
    /// three literals. The truncation is lossy and does not preserve satisfiability in general;
    /// it is kept as-is because the walkthrough is built around it.
    Padding,
    /// Narrated upstream as defining a gadget variable for a nested sub-formula. The flat
    /// grammar cannot express that nesting, so over it this rewrites exactly like
    /// [`Splitting`](Strategy::Splitting).
    Gadget,
}

// Hands out variable names unused so far in one canonicalization run.
// Owned by a single canonicalize() call; never shared, so concurrent runs cannot collide.
struct FreshVariables {
    counter: usize,
    taken: HashSet<String>,
}

impl FreshVariables {
    fn scoped_to(formula: &Formula) -> Self {
        Self { counter: 0, taken: formula.variable_names() }
    }

    fn next(&mut self) -> String {
        loop {
            self.counter += 1;
            let candidate = format!("h{}", self.counter);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Rewrite `formula` so that every clause has exactly three literals, per `strategy`.
///
/// Returns the rewritten formula together with a trace of the rewrites in the order they were
/// applied. Fresh variable names are scoped to this call: they collide neither with names
/// already in `formula` nor with one another.
///
/// The postcondition holds on every strategy's supported inputs; the one documented exception
/// is [`Strategy::Padding`] on clauses past three literals, which truncates (see the variant
/// docs).
pub fn canonicalize(formula: &Formula, strategy: Strategy) -> (Formula, RewriteTrace) {
    let mut fresh = FreshVariables::scoped_to(formula);
    let mut trace = RewriteTrace::new();

    let clauses = match strategy {
        Strategy::Splitting | Strategy::Gadget => split_all(formula, &mut fresh, &mut trace),
        Strategy::Padding => pad_all(formula, &mut fresh, &mut trace),
    };

    debug!(
        "canonicalize via {:?}: {} clauses in, {} clauses out, {} trace entries",
        strategy,
        formula.clauses().len(),
        clauses.len(),
        trace.len()
    );

    (Formula::new(clauses), trace)
}

fn split_all(formula: &Formula, fresh: &mut FreshVariables, trace: &mut RewriteTrace) -> Vec<Clause> {
    let mut emitted = Vec::with_capacity(formula.clauses().len());

    for clause in formula.clauses() {
        match clause.arity() {
            1 | 2 => {
                trace.push(format!("{} passes through; it still needs padding", clause));
                emitted.push(clause.clone());
            }
            3 => emitted.push(clause.clone()),
            _ => emitted.extend(split_chain(clause, fresh, trace)),
        }
    }

    // second pass: bring everything the first pass left short up to three literals
    emitted
        .into_iter()
        .map(|clause| match clause.arity() {
            1 => {
                let padding = Literal::positive(fresh.next());
                trace.push(format!("{}: appended {}{}{}", clause, padding, OR, padding.inverted()));
                let mut literals = clause.literals().to_vec();
                literals.push(padding.clone());
                literals.push(padding.inverted());
                Clause::new(literals)
            }
            2 => {
                let padding = Literal::positive(fresh.next());
                trace.push(format!("{}: appended {}", clause, padding));
                let mut literals = clause.literals().to_vec();
                literals.push(padding);
                Clause::new(literals)
            }
            _ => clause,
        })
        .collect_vec()
}

// The standard chain split: the two polarities of each helper variable link consecutive
// fragments, so satisfying the chain is equivalent to satisfying the original disjunction.
fn split_chain(clause: &Clause, fresh: &mut FreshVariables, trace: &mut RewriteTrace) -> Vec<Clause> {
    let mut out = Vec::new();
    let mut remaining = clause.literals().to_vec();

    while remaining.len() > 3 {
        let helper = fresh.next();
        let mut rest = remaining.split_off(2);
        remaining.push(Literal::positive(helper.as_str()));
        let head = Clause::new(remaining);
        trace.push(format!("{}: split off {}, carrying {}{} forward", clause, head, NOT, helper));
        out.push(head);

        rest.insert(0, Literal::negative(helper));
        remaining = rest;
    }

    let tail = Clause::new(remaining);
    trace.push(format!("{}: remainder {} closes the chain", clause, tail));
    out.push(tail);

    out
}

fn pad_all(formula: &Formula, fresh: &mut FreshVariables, trace: &mut RewriteTrace) -> Vec<Clause> {
    formula
        .clauses()
        .iter()
        .map(|clause| match clause.arity() {
            3 => clause.clone(),
            arity if arity < 3 => {
                let mut literals = clause.literals().to_vec();
                while literals.len() < 3 {
                    literals.push(Literal::positive(fresh.next()));
                }
                let padded = Clause::new(literals);
                trace.push(format!("{}: padded up to {}", clause, padded));
                padded
            }
            _ => {
                let truncated = Clause::new(clause.literals()[..3].to_vec());
                let dropped = clause.literals()[3..].iter().join(", ");
                trace.push(format!("{}: truncated to {}, dropping {}", clause, truncated, dropped));
                truncated
            }
        })
        .collect_vec()
}
