//! Translation of vertex identifiers between nested subgames.
//!
//! Every subgame built by [`crate::game::ParityGame::make_subgame`] numbers its vertices
//! `0..n`. A [`VertexMap`] remembers which parent vertex each of them came from. Solvers
//! that delegate to subsolvers on subgames of subgames compose these maps so that the
//! innermost game can always be related to the top-level one.

use crate::game::{Strategy, Vertex};

/// Maps vertex `i` of a subgame to vertex `map[i]` of its parent game.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexMap(Vec<Vertex>);

impl From<Vec<Vertex>> for VertexMap {
    fn from(value: Vec<Vertex>) -> Self {
        VertexMap(value)
    }
}

impl VertexMap {
    /// The map of a game onto itself.
    pub fn identity(vertex_count: usize) -> VertexMap {
        VertexMap((0..vertex_count).collect())
    }

    /// The number of subgame vertices covered by this map.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Translate a subgame vertex into a parent vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the subgame.
    pub fn to_parent(&self, vertex: Vertex) -> Vertex {
        self.0[vertex]
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.0
    }

    /// Compose this map (subgame -> parent) with `parent_map` (parent -> grandparent),
    /// producing a map from the subgame directly into the grandparent.
    pub fn compose(mut self, parent_map: &VertexMap) -> VertexMap {
        merge_vertex_maps(&mut self.0, parent_map.as_slice());
        self
    }
}

/// Replace every `outer[i]` by `inner_map[outer[i]]`.
///
/// # Panics
///
/// Panics if some value of `outer` is not a valid index into `inner_map`.
pub fn merge_vertex_maps(outer: &mut [Vertex], inner_map: &[Vertex]) {
    for v in outer.iter_mut() {
        assert!(
            *v < inner_map.len(),
            "Vertex {v} is not covered by a map of size {}.",
            inner_map.len()
        );
        *v = inner_map[*v];
    }
}

/// Copy the moves of `sub_strategy` (computed for a subgame) into `global_strategy`
/// (defined for the parent game), translating both endpoints through `index_map`.
///
/// Subgame vertices without a move leave the corresponding global entry untouched.
pub fn merge_strategies(global_strategy: &mut Strategy, sub_strategy: &Strategy, index_map: &[Vertex]) {
    assert_eq!(sub_strategy.len(), index_map.len());
    for (v, next) in sub_strategy.iter().enumerate() {
        if let Some(w) = next {
            global_strategy[index_map[v]] = Some(index_map[*w]);
        }
    }
}
