use log::debug;
use unordered_pair::UnorderedPair;

use crate::graph::{CompatibilityGraph, VertexId};

/// Searches a [`CompatibilityGraph`] for a clique containing exactly one vertex per clause.
///
/// "No clique" is an ordinary outcome here, not a failure: the lowered graph of an
/// unsatisfiable formula genuinely contains none.
pub struct CliqueSolver<'a> {
    graph: &'a CompatibilityGraph,
}

impl<'a> From<&'a CompatibilityGraph> for CliqueSolver<'a> {
    fn from(graph: &'a CompatibilityGraph) -> Self {
        Self { graph }
    }
}

impl CliqueSolver<'_> {
    /// Find the first clause-spanning clique, or [`None`] once the search space is exhausted.
    ///
    /// Clause groups are tried in clause order and vertices within a group in position order,
    /// backtracking as soon as a required edge is missing, so the same graph always yields the
    /// same witness. A witness certifies both that the selection is pairwise adjacent and that
    /// setting every chosen literal true satisfies the lowered formula.
    pub fn solve(&self) -> Option<Vec<VertexId>> {
        let mut chosen = Vec::with_capacity(self.graph.clause_count());

        if self.extend(&mut chosen) {
            Some(chosen)
        } else {
            debug!("no clique spans all {} clauses", self.graph.clause_count());
            None
        }
    }

    fn extend(&self, chosen: &mut Vec<VertexId>) -> bool {
        let clause = chosen.len();
        if clause == self.graph.clause_count() {
            return true;
        }

        for candidate in self.graph.clause_vertices(clause) {
            let compatible = chosen
                .iter()
                .all(|previous| self.graph.connected(UnorderedPair::from((*previous, candidate))));

            if compatible {
                chosen.push(candidate);
                if self.extend(chosen) {
                    return true;
                }
                chosen.pop();
            }
        }

        false
    }
}
