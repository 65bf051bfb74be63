use crate::attractor::make_attractor_set;
use crate::decycle::CycleFinder;
use crate::dense_set::DenseSet;
use crate::game::{ParityGame, Player, Strategy, Vertex};
use crate::solver::{ParityGameSolver, ParityGameSolverFactory};
use crate::vertex_map::{VertexMap, merge_strategies};
use cancel_this::{Cancellable, is_cancelled};
use log::{debug, info, trace};
use std::collections::VecDeque;
use std::rc::Rc;

/// The result of the dominated-cycle pre-pass: a strategy that is valid on `solved`.
#[derive(Clone, Debug)]
pub struct PartialSolution {
    pub strategy: Strategy,
    pub solved: DenseSet,
}

/// Solves the parts of a game that are attracted to dominated cycles and delegates
/// the rest to a fallback solver.
///
/// Priorities are processed in ascending order. For priority `p`, a cycle is dominated
/// if all of its vertices have priority at least `p`, at least one has priority `p`, and
/// every vertex on it is either owned by `p % 2` or has no other move. Such a cycle is
/// won by `p % 2`, and so is its attractor.
pub struct DecycleSolver<'a> {
    game: &'a ParityGame,
    vertex_map: Option<&'a VertexMap>,
    fallback: Rc<dyn ParityGameSolverFactory>,
}

impl<'a> DecycleSolver<'a> {
    pub fn new(
        game: &'a ParityGame,
        vertex_map: Option<&'a VertexMap>,
        fallback: Rc<dyn ParityGameSolverFactory>,
    ) -> DecycleSolver<'a> {
        DecycleSolver {
            game,
            vertex_map,
            fallback,
        }
    }

    /// Run only the dominated-cycle decomposition, without delegating the remainder.
    pub fn solve_dominated_cycles(&self) -> Cancellable<PartialSolution> {
        let vertex_count = self.game.vertex_count();
        let mut strategy = vec![None; vertex_count];
        let mut solved = DenseSet::new(0, vertex_count);
        let mut solved_queue = VecDeque::new();

        for priority in 0..self.game.d() {
            if solved.len() == vertex_count {
                break;
            }
            is_cancelled!()?;

            let player = Player::from_priority(priority);
            let mapping: Vec<Vertex> = (0..vertex_count)
                .filter(|v| {
                    !solved.contains(*v)
                        && self.game.priority(*v) >= priority
                        && (self.game.player(*v) == player || self.game.outdegree(*v) == 1)
                })
                .collect();
            let mapping = VertexMap::from(mapping);

            info!(
                "Searching for dominated cycles with priority {priority} in {} vertices.",
                mapping.len()
            );

            let before = solved.len();
            CycleFinder::new(self.game, priority, &mapping).run(
                &mut strategy,
                &mut solved,
                &mut solved_queue,
            )?;
            let in_cycles = solved.len() - before;

            // Vertices outside of `mapping` can still be forced into the new region.
            make_attractor_set(
                self.game,
                player,
                &mut solved,
                &mut solved_queue,
                &mut strategy,
            )?;

            info!(
                "Priority {priority}: {in_cycles} vertices on dominated cycles, {} attracted; {}/{vertex_count} solved.",
                solved.len() - before - in_cycles,
                solved.len(),
            );
        }

        Ok(PartialSolution { strategy, solved })
    }

    /// Translate a vertex of this game into the top-level game.
    fn top_level(&self, vertex: Vertex) -> Vertex {
        self.vertex_map.map_or(vertex, |map| map.to_parent(vertex))
    }
}

impl ParityGameSolver for DecycleSolver<'_> {
    fn solve(&mut self) -> Cancellable<Strategy> {
        let PartialSolution {
            mut strategy,
            solved,
        } = self.solve_dominated_cycles()?;

        let vertex_count = self.game.vertex_count();
        if solved.len() == vertex_count {
            info!("All {vertex_count} vertices solved by cycle decomposition.");
            return Ok(strategy);
        }

        if solved.is_empty() {
            // Nothing changed, the fallback can work on this game directly.
            info!("No dominated cycles found; delegating the whole game.");
            return self.fallback.create(self.game, self.vertex_map).solve();
        }

        let unsolved: Vec<Vertex> = (0..vertex_count)
            .filter(|v| !solved.contains(*v))
            .collect();
        info!(
            "Delegating {} of {vertex_count} vertices to the fallback solver.",
            unsolved.len()
        );
        for v in unsolved.iter() {
            trace!("Vertex {v} (top-level {}) is unsolved.", self.top_level(*v));
        }

        // Both maps must outlive the subsolver.
        let subgame = self.game.make_subgame(&unsolved, true);
        let unsolved = VertexMap::from(unsolved);
        let submap = self.vertex_map.map(|map| unsolved.clone().compose(map));

        let sub_strategy = {
            let mut subsolver = self
                .fallback
                .create(&subgame, Some(submap.as_ref().unwrap_or(&unsolved)));
            subsolver.solve()?
        };
        debug!("Merging strategy of {} delegated vertices.", sub_strategy.len());

        merge_strategies(&mut strategy, &sub_strategy, unsolved.as_slice());
        Ok(strategy)
    }
}

/// Creates [`DecycleSolver`] instances that share one fallback factory.
#[derive(Clone)]
pub struct DecycleSolverFactory {
    fallback: Rc<dyn ParityGameSolverFactory>,
}

impl DecycleSolverFactory {
    pub fn new(fallback: Rc<dyn ParityGameSolverFactory>) -> DecycleSolverFactory {
        DecycleSolverFactory { fallback }
    }
}

impl ParityGameSolverFactory for DecycleSolverFactory {
    fn create<'a>(
        &self,
        game: &'a ParityGame,
        vertex_map: Option<&'a VertexMap>,
    ) -> Box<dyn ParityGameSolver + 'a> {
        Box::new(DecycleSolver::new(game, vertex_map, self.fallback.clone()))
    }
}
