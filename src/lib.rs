#![warn(missing_docs)]

//! # `cliquot`
//!
//! The transformation engine behind an interactive walkthrough of the classical
//! SAT → 3-CNF → CLIQUE polynomial-time reduction. The layer above draws animated canvases and
//! narration; this crate supplies the part that has to be right bit-for-bit: parsing CNF
//! surface text, rewriting clauses to exactly three literals, lowering the result to a
//! compatibility graph, and searching that graph for a clique that certifies satisfiability.
//!
//! Start with [`validate`] and [`parse`] to turn text like `(A∨B)∧(¬C∨D∨E∨F)` into a
//! [`Formula`], pick a [`Strategy`] and call [`canonicalize`], build a [`CompatibilityGraph`]
//! from the result, and ask a [`CliqueSolver`] for a witness. Rendering back to text is the
//! [`Display`](std::fmt::Display) impl on [`Formula`].
//!
//! # Internals
//! The reduction is the textbook one. Each literal occurrence in the 3-CNF formula becomes one
//! graph vertex; an edge joins every pair of occurrences that come from different clauses and
//! are not complementary. Selecting one mutually adjacent vertex per clause is then exactly a
//! consistent choice of one true literal per clause, so a clause-spanning clique and a
//! satisfying assignment are the same object.
//!
//! Every operation is a synchronous pure function over immutable inputs. The only state in the
//! pipeline, the fresh-variable counter, lives inside a single [`canonicalize`] call, so
//! concurrent callers never collide on generated names.
//!
//! Two of the three rewrite strategies are deliberately simplified teaching devices rather
//! than strict equisatisfiability transforms; see [`Strategy`] for the guarantees each one
//! carries.

pub use formula::{Clause, Formula, Literal};
pub use graph::{CompatibilityGraph, VertexId};
pub use parser::{parse, validate, ValidationError};
pub use solver::CliqueSolver;
pub use transform::{canonicalize, RewriteTrace, Strategy};

pub(crate) mod formula;
pub(crate) mod graph;
pub(crate) mod parser;
pub(crate) mod solver;
pub(crate) mod transform;
