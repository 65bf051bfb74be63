use crate::game::{StaticGraph, Vertex};
use crate::scc::SccConfig;
use cancel_this::is_cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, GeneratorStep};
use log::{debug, trace};

/// Internal state of the (iterative) Tarjan's SCC algorithm.
///
/// The DFS is driven by an explicit call stack, so the state can be suspended after
/// every reported component and the recursion depth is not limited by the thread stack.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TarjanState {
    next_root: Vertex,
    counter: usize,
    index: Vec<Option<usize>>,
    low_link: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<Vertex>,
    /// DFS frames: a vertex and the position of the next successor to explore.
    call_stack: Vec<(Vertex, usize)>,
}

/// Step implementation of Tarjan's algorithm. Each successful step yields one SCC.
/// Components are produced in reverse topological order.
pub struct TarjanStep;

impl From<&StaticGraph> for TarjanState {
    fn from(value: &StaticGraph) -> Self {
        TarjanState::new(value.vertex_count())
    }
}

impl TarjanState {
    /// Create a fresh state for a graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> TarjanState {
        TarjanState {
            next_root: 0,
            counter: 0,
            index: vec![None; vertex_count],
            low_link: vec![0; vertex_count],
            on_stack: vec![false; vertex_count],
            stack: Vec::new(),
            call_stack: Vec::new(),
        }
    }

    fn visit(&mut self, vertex: Vertex) {
        self.index[vertex] = Some(self.counter);
        self.low_link[vertex] = self.counter;
        self.counter += 1;
        self.on_stack[vertex] = true;
        self.stack.push(vertex);
        self.call_stack.push((vertex, 0));
    }

    /// Pop the component rooted in `root` from the vertex stack.
    fn pop_component(&mut self, root: Vertex) -> Vec<Vertex> {
        let mut scc = Vec::new();
        while let Some(v) = self.stack.pop() {
            self.on_stack[v] = false;
            scc.push(v);
            if v == root {
                break;
            }
        }
        scc
    }
}

impl GeneratorStep<SccConfig, TarjanState, Vec<Vertex>> for TarjanStep {
    fn step(context: &SccConfig, state: &mut TarjanState) -> Completable<Option<Vec<Vertex>>> {
        is_cancelled!()?;

        if state.call_stack.is_empty() {
            let vertex_count = state.index.len();
            while state.next_root < vertex_count && state.index[state.next_root].is_some() {
                state.next_root += 1;
            }
            if state.next_root == vertex_count {
                debug!("Tarjan finished; {} vertices visited.", state.counter);
                return Ok(None);
            }
            trace!("Starting DFS from root {}.", state.next_root);
            state.visit(state.next_root);
        }

        while let Some(&(v, position)) = state.call_stack.last() {
            let successors = context.graph.successors(v);
            if let Some(&w) = successors.get(position) {
                let top = state.call_stack.len() - 1;
                state.call_stack[top].1 += 1;
                match state.index[w] {
                    None => state.visit(w),
                    Some(w_index) if state.on_stack[w] => {
                        state.low_link[v] = state.low_link[v].min(w_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            state.call_stack.pop();
            if let Some(&(parent, _)) = state.call_stack.last() {
                state.low_link[parent] = state.low_link[parent].min(state.low_link[v]);
            }

            if Some(state.low_link[v]) == state.index[v] {
                let scc = state.pop_component(v);
                if context.filter_trivial && context.is_trivial(&scc) {
                    trace!("Skipping trivial component {v}.");
                    continue;
                }
                trace!("Found component of size {} rooted in {v}.", scc.len());
                return Ok(Some(scc));
            }
        }

        Err(Suspended)
    }
}
