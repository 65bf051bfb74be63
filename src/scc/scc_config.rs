use crate::game::{StaticGraph, Vertex};

/// A configuration object for SCC enumeration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SccConfig {
    /// The graph used for SCC computation. To enumerate components of an induced subgraph,
    /// build the corresponding subgame first (see [`crate::game::ParityGame::make_subgame`]).
    pub graph: StaticGraph,
    /// Indicate that trivial components (a single vertex without a self-loop) should not
    /// be reported (default: false).
    pub filter_trivial: bool,
}

impl From<StaticGraph> for SccConfig {
    fn from(value: StaticGraph) -> Self {
        SccConfig::new(value)
    }
}

impl From<&StaticGraph> for SccConfig {
    fn from(value: &StaticGraph) -> Self {
        SccConfig::new(value.clone())
    }
}

impl SccConfig {
    /// Create a new instance of [`SccConfig`] that reports every component.
    pub fn new(graph: StaticGraph) -> SccConfig {
        SccConfig {
            graph,
            filter_trivial: false,
        }
    }

    /// Set [`SccConfig::filter_trivial`].
    pub fn with_trivial_filter(mut self, filter_trivial: bool) -> SccConfig {
        self.filter_trivial = filter_trivial;
        self
    }

    /// A component is trivial if it cannot host a cycle.
    pub fn is_trivial(&self, scc: &[Vertex]) -> bool {
        match scc {
            [v] => !self.graph.has_succ(*v, *v),
            _ => scc.is_empty(),
        }
    }
}
