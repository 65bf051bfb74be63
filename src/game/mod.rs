//! Explicit parity games.
//!
//! A [`ParityGame`] is a directed graph over vertices `0..V` where each vertex carries
//! a [`Priority`] and is owned by one of the two [`Player`]s. Games use the *min-parity*
//! condition: an infinite play is won by the player matching the parity of the smallest
//! priority that occurs infinitely often.
//!
//! Solutions are represented as a [`Strategy`]: for every vertex won by its owner, the
//! successor the owner moves to. Vertices without a move are won by the opponent of their
//! owner. See [`ParityGame::winners`] and [`ParityGame::verify`].

mod random;
mod static_graph;
mod verify;


pub use static_graph::StaticGraph;

/// Vertex identifier. Always an index into the game it is used with.
pub type Vertex = usize;

/// Vertex priority. Lower priorities are more significant.
pub type Priority = usize;

/// For each vertex, the successor chosen by the vertex owner (or `None` if the owner
/// does not win the vertex).
pub type Strategy = Vec<Option<Vertex>>;

/// One of the two players of a parity game. `Even` wins plays whose minimal recurring
/// priority is even, `Odd` the rest.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    Even,
    Odd,
}

impl Player {
    /// The player that benefits from cycles dominated by `priority`.
    pub fn from_priority(priority: Priority) -> Player {
        if priority % 2 == 0 {
            Player::Even
        } else {
            Player::Odd
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::Even => Player::Odd,
            Player::Odd => Player::Even,
        }
    }

    /// Numeric index of the player (`0` for [`Player::Even`], `1` for [`Player::Odd`]).
    pub fn index(self) -> usize {
        match self {
            Player::Even => 0,
            Player::Odd => 1,
        }
    }
}

/// Per-vertex data of a [`ParityGame`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParityGameVertex {
    pub priority: Priority,
    pub player: Player,
}

impl ParityGameVertex {
    pub fn new(priority: Priority, player: Player) -> ParityGameVertex {
        ParityGameVertex { priority, player }
    }
}

/// An explicit parity game.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParityGame {
    graph: StaticGraph,
    vertices: Vec<ParityGameVertex>,
    d: usize,
}

impl ParityGame {
    /// Create a new game from vertex data and a list of `(source, target)` edges.
    ///
    /// # Panics
    ///
    /// Panics if an edge refers to a vertex that is not in `vertices`.
    pub fn new(vertices: Vec<ParityGameVertex>, edges: &[(Vertex, Vertex)]) -> ParityGame {
        let graph = StaticGraph::new(vertices.len(), edges);
        ParityGame::from_graph(graph, vertices)
    }

    fn from_graph(graph: StaticGraph, vertices: Vec<ParityGameVertex>) -> ParityGame {
        debug_assert_eq!(graph.vertex_count(), vertices.len());
        let d = vertices
            .iter()
            .map(|it| it.priority + 1)
            .max()
            .unwrap_or_default();
        ParityGame { graph, vertices, d }
    }

    /// The number of vertices `V`.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Upper bound on vertex priorities: every priority is in `0..d()`.
    pub fn d(&self) -> usize {
        self.d
    }

    pub fn graph(&self) -> &StaticGraph {
        &self.graph
    }

    pub fn priority(&self, vertex: Vertex) -> Priority {
        self.vertices[vertex].priority
    }

    pub fn player(&self, vertex: Vertex) -> Player {
        self.vertices[vertex].player
    }

    pub fn vertex(&self, vertex: Vertex) -> ParityGameVertex {
        self.vertices[vertex]
    }

    pub fn has_succ(&self, source: Vertex, target: Vertex) -> bool {
        self.graph.has_succ(source, target)
    }

    pub fn outdegree(&self, vertex: Vertex) -> usize {
        self.graph.outdegree(vertex)
    }

    pub fn successors(&self, vertex: Vertex) -> &[Vertex] {
        self.graph.successors(vertex)
    }

    pub fn predecessors(&self, vertex: Vertex) -> &[Vertex] {
        self.graph.predecessors(vertex)
    }

    /// The number of vertices with the given `priority`.
    pub fn cardinality(&self, priority: Priority) -> usize {
        self.vertices
            .iter()
            .filter(|it| it.priority == priority)
            .count()
    }

    /// A game is proper if every vertex has at least one successor.
    pub fn is_proper(&self) -> bool {
        (0..self.vertex_count()).all(|v| self.outdegree(v) > 0)
    }

    /// Build the subgame induced by `vertices`.
    ///
    /// Vertex `i` of the result corresponds to `vertices[i]` in this game, so `vertices`
    /// doubles as the map from the subgame back to this game. Edges leading outside
    /// of the subset are dropped. Priorities and owners are kept as they are.
    ///
    /// When `proper` is set, the caller promises that every selected vertex that has
    /// a successor in this game keeps at least one successor inside the subset (checked in
    /// debug builds). In particular, the subgame of a proper game is then proper as well.
    ///
    /// # Panics
    ///
    /// Panics if `vertices` contains duplicates or vertices outside of this game.
    pub fn make_subgame(&self, vertices: &[Vertex], proper: bool) -> ParityGame {
        let mut local = vec![None; self.vertex_count()];
        for (i, v) in vertices.iter().enumerate() {
            assert!(local[*v].is_none(), "Vertex {v} selected twice.");
            local[*v] = Some(i);
        }

        let mut edges = Vec::new();
        for (i, v) in vertices.iter().enumerate() {
            edges.extend(
                self.successors(*v)
                    .iter()
                    .filter_map(|w| local[*w])
                    .map(|w| (i, w)),
            );
        }

        let data = vertices.iter().map(|v| self.vertices[*v]).collect();
        let subgame = ParityGame::from_graph(StaticGraph::new(vertices.len(), &edges), data);
        debug_assert!(
            !proper
                || vertices
                    .iter()
                    .enumerate()
                    .all(|(i, v)| self.outdegree(*v) == 0 || subgame.outdegree(i) > 0)
        );
        subgame
    }

    /// Derive the winner of every vertex from a `strategy`: the owner wins a vertex
    /// exactly when the strategy assigns it a move.
    pub fn winners(&self, strategy: &Strategy) -> Vec<Player> {
        assert_eq!(strategy.len(), self.vertex_count());
        strategy
            .iter()
            .enumerate()
            .map(|(v, next)| {
                if next.is_some() {
                    self.player(v)
                } else {
                    self.player(v).opponent()
                }
            })
            .collect()
    }
}
