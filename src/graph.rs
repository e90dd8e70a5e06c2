use itertools::Itertools;
use log::debug;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::formula::{Clause, Formula, Literal};

/// Identifies one literal occurrence: `(clause index, position within that clause)`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(pub usize, pub usize);

/// The graph the CLIQUE half of the reduction runs on.
///
/// One vertex exists per literal occurrence in the lowered formula, not per distinct variable.
/// An edge joins two occurrences iff they come from different clauses and are not
/// complementary. A clique touching every clause is then exactly a consistent choice of one
/// true literal per clause, so finding one certifies satisfiability.
pub struct CompatibilityGraph {
    graph: UnGraphMap<VertexId, ()>,
    partition: Vec<Clause>,
}

impl From<&Formula> for CompatibilityGraph {
    fn from(formula: &Formula) -> Self {
        let vertices = formula
            .clauses()
            .iter()
            .enumerate()
            .flat_map(|(c, clause)| (0..clause.arity()).map(move |p| VertexId(c, p)))
            .collect_vec();

        let mut graph = UnGraphMap::with_capacity(vertices.len(), vertices.len() * vertices.len() / 2);
        for vertex in &vertices {
            graph.add_node(*vertex);
        }

        // O(n²) pair scan; the graphs here stay in the tens of vertices
        for pair in vertices.iter().combinations(2) {
            let (v1, v2) = (*pair[0], *pair[1]);
            if v1.0 == v2.0 {
                continue;
            }

            let l1 = &formula.clauses()[v1.0].literals()[v1.1];
            let l2 = &formula.clauses()[v2.0].literals()[v2.1];
            if !l1.complements(l2) {
                graph.add_edge(v1, v2, ());
            }
        }

        debug!("lowered {} literal occurrences into {} compatibility edges", graph.node_count(), graph.edge_count());

        Self { graph, partition: formula.clauses().to_vec() }
    }
}

impl CompatibilityGraph {
    /// The number of literal occurrences; always three times the clause count on 3-CNF input.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// The number of compatibility edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The number of clause groups the vertices partition into.
    pub fn clause_count(&self) -> usize {
        self.partition.len()
    }

    /// The literal carried by `vertex`.
    pub fn literal(&self, vertex: VertexId) -> &Literal {
        &self.partition[vertex.0].literals()[vertex.1]
    }

    /// Every vertex, in clause-then-position order.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.partition
            .iter()
            .enumerate()
            .flat_map(|(c, clause)| (0..clause.arity()).map(move |p| VertexId(c, p)))
            .collect_vec()
    }

    /// The vertices originating from clause `clause`, in position order.
    pub fn clause_vertices(&self, clause: usize) -> Vec<VertexId> {
        (0..self.partition[clause].arity()).map(|p| VertexId(clause, p)).collect_vec()
    }

    /// Every edge, as an unordered vertex pair.
    pub fn edges(&self) -> Vec<UnorderedPair<VertexId>> {
        self.graph.all_edges().map(|(v1, v2, _)| UnorderedPair::from((v1, v2))).collect_vec()
    }

    /// Whether the two ends of `pair` are compatible, i.e. joined by an edge.
    pub fn connected(&self, pair: UnorderedPair<VertexId>) -> bool {
        self.graph.contains_edge(pair.0, pair.1)
    }
}
