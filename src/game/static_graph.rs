use crate::game::Vertex;

/// An immutable directed graph over vertices `0..V`, stored in compressed adjacency form.
///
/// Both directions are kept: successors are needed for cycle detection, predecessors for
/// attractor computation. Each adjacency list is sorted and free of duplicates.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticGraph {
    successor_index: Vec<usize>,
    successors: Vec<Vertex>,
    predecessor_index: Vec<usize>,
    predecessors: Vec<Vertex>,
}

impl StaticGraph {
    /// Build a graph with `vertex_count` vertices from a list of `(source, target)` edges.
    ///
    /// Duplicate edges are merged.
    ///
    /// # Panics
    ///
    /// Panics if an edge refers to a vertex outside of `0..vertex_count`.
    pub fn new(vertex_count: usize, edges: &[(Vertex, Vertex)]) -> StaticGraph {
        let mut forward = edges.to_vec();
        for (source, target) in &forward {
            assert!(
                *source < vertex_count && *target < vertex_count,
                "Edge {source} -> {target} is out of range for {vertex_count} vertices."
            );
        }
        forward.sort_unstable();
        forward.dedup();

        let mut backward: Vec<(Vertex, Vertex)> = forward.iter().map(|(s, t)| (*t, *s)).collect();
        backward.sort_unstable();

        let (successor_index, successors) = compress(vertex_count, &forward);
        let (predecessor_index, predecessors) = compress(vertex_count, &backward);
        StaticGraph {
            successor_index,
            successors,
            predecessor_index,
            predecessors,
        }
    }

    /// The number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.successor_index.len().saturating_sub(1)
    }

    /// The number of (distinct) edges.
    pub fn edge_count(&self) -> usize {
        self.successors.len()
    }

    pub fn successors(&self, vertex: Vertex) -> &[Vertex] {
        &self.successors[self.successor_index[vertex]..self.successor_index[vertex + 1]]
    }

    pub fn predecessors(&self, vertex: Vertex) -> &[Vertex] {
        &self.predecessors[self.predecessor_index[vertex]..self.predecessor_index[vertex + 1]]
    }

    pub fn outdegree(&self, vertex: Vertex) -> usize {
        self.successor_index[vertex + 1] - self.successor_index[vertex]
    }

    pub fn indegree(&self, vertex: Vertex) -> usize {
        self.predecessor_index[vertex + 1] - self.predecessor_index[vertex]
    }

    /// Check whether `source -> target` is an edge of this graph.
    pub fn has_succ(&self, source: Vertex, target: Vertex) -> bool {
        self.successors(source).binary_search(&target).is_ok()
    }

    /// Iterate over all edges in `(source, target)` order.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        (0..self.vertex_count())
            .flat_map(move |source| self.successors(source).iter().map(move |t| (source, *t)))
    }
}

/// Turn a sorted list of edges into an offset table and a flat target list.
fn compress(vertex_count: usize, sorted_edges: &[(Vertex, Vertex)]) -> (Vec<usize>, Vec<Vertex>) {
    let mut index = Vec::with_capacity(vertex_count + 1);
    let mut targets = Vec::with_capacity(sorted_edges.len());
    let mut edges = sorted_edges.iter().peekable();
    for vertex in 0..vertex_count {
        index.push(targets.len());
        while let Some((_, target)) = edges.next_if(|(source, _)| *source == vertex) {
            targets.push(*target);
        }
    }
    index.push(targets.len());
    (index, targets)
}
