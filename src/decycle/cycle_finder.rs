use crate::attractor::make_attractor_set;
use crate::dense_set::DenseSet;
use crate::game::{ParityGame, Player, Priority, Strategy, Vertex};
use crate::scc::{SccConfig, TarjanScc, TarjanState};
use crate::vertex_map::VertexMap;
use cancel_this::Cancellable;
use computation_process::Stateful;
use log::{debug, trace};
use std::collections::VecDeque;

/// Finds the vertices that are won by `priority % 2` because they can be kept on a cycle
/// whose minimal priority is exactly `priority`.
///
/// The search runs in the subgame induced by `mapping`. The caller is responsible for
/// choosing the subset such that every vertex not owned by the benefiting player has
/// a single successor in the full game, and all priorities are at least `priority`.
pub struct CycleFinder<'a> {
    priority: Priority,
    player: Player,
    mapping: &'a VertexMap,
    subgame: ParityGame,
    /// Scratch membership flags of the component currently being inspected.
    in_scc: Vec<bool>,
    winning_set: DenseSet,
    winning_queue: VecDeque<Vertex>,
    substrat: Strategy,
}

impl<'a> CycleFinder<'a> {
    pub fn new(game: &ParityGame, priority: Priority, mapping: &'a VertexMap) -> CycleFinder<'a> {
        let subgame = game.make_subgame(mapping.as_slice(), false);
        let vertex_count = subgame.vertex_count();
        CycleFinder {
            priority,
            player: Player::from_priority(priority),
            mapping,
            subgame,
            in_scc: vec![false; vertex_count],
            winning_set: DenseSet::new(0, vertex_count),
            winning_queue: VecDeque::new(),
            substrat: vec![None; vertex_count],
        }
    }

    /// Find the dominated cycles, attract towards them inside the subgame, and record the
    /// result in parent-game terms: moves go to `strategy`, won vertices to `done_set` and
    /// `done_queue`.
    ///
    /// # Panics
    ///
    /// Panics if a vertex found here is already in `done_set`.
    pub fn run(
        mut self,
        strategy: &mut Strategy,
        done_set: &mut DenseSet,
        done_queue: &mut VecDeque<Vertex>,
    ) -> Cancellable<()> {
        let config = SccConfig::from(self.subgame.graph());
        let initial_state = TarjanState::from(self.subgame.graph());
        for scc in TarjanScc::configure(config, initial_state) {
            self.check_scc(&scc?);
        }

        if !self.winning_queue.is_empty() {
            debug!(
                "Found {} dominated cycles with priority {}.",
                self.winning_queue.len(),
                self.priority
            );
            make_attractor_set(
                &self.subgame,
                self.player,
                &mut self.winning_set,
                &mut self.winning_queue,
                &mut self.substrat,
            )?;
        }

        for v in self.winning_set.iter() {
            let global = self.mapping.to_parent(v);
            if let Some(w) = self.substrat[v] {
                strategy[global] = Some(self.mapping.to_parent(w));
            }
            assert!(done_set.insert(global), "Vertex {global} solved twice.");
            done_queue.push_back(global);
        }
        Ok(())
    }

    /// Pick one vertex of `priority` that has an edge inside `scc` and mark it as won.
    fn check_scc(&mut self, scc: &[Vertex]) {
        for v in scc {
            self.in_scc[*v] = true;
        }

        for v in scc.iter().copied() {
            if self.subgame.priority(v) != self.priority {
                continue;
            }

            let successors = self.subgame.successors(v);
            let Some(w) = successors.iter().copied().find(|w| self.in_scc[*w]) else {
                // Only a vertex without a self-loop is alone in its component.
                assert_eq!(scc.len(), 1, "Vertex {v} has no edge inside its component.");
                continue;
            };

            if self.subgame.player(v) == self.player {
                self.substrat[v] = Some(w);
            }
            trace!("Vertex {v} lies on a cycle dominated by {}.", self.priority);
            self.winning_set.insert(v);
            self.winning_queue.push_back(v);
            break;
        }

        for v in scc {
            self.in_scc[*v] = false;
        }
    }
}
