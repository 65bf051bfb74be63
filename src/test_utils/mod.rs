pub mod reference_solver;

use crate::game::{ParityGame, ParityGameVertex, Player, Priority, Strategy, Vertex};
use crate::solver::{ParityGameSolver, ParityGameSolverFactory};
use crate::test_utils::reference_solver::ReferenceSolver;
use crate::vertex_map::VertexMap;
use cancel_this::{Cancellable, Cancelled};
use std::cell::RefCell;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Build a game from `(priority, player)` pairs and a list of edges.
///
/// # Example
///
/// `mk_game(&[(0, Player::Even), (1, Player::Odd)], &[(0, 1), (1, 0)])` is a two-vertex
/// cycle won by `Even`.
pub fn mk_game(vertices: &[(Priority, Player)], edges: &[(Vertex, Vertex)]) -> ParityGame {
    let vertices = vertices
        .iter()
        .map(|(priority, player)| ParityGameVertex::new(*priority, *player))
        .collect();
    ParityGame::new(vertices, edges)
}

/// Assert that `strategy` is a valid winning strategy of `game`.
pub fn assert_verified(game: &ParityGame, strategy: &Strategy) {
    match game.verify(strategy) {
        Ok(Ok(())) => {}
        Ok(Err(v)) => panic!("Verification failed at vertex {v}: {strategy:?}"),
        Err(e) => panic!("Verification cancelled: {e}"),
    }
}

/// A solver factory which remembers every game it was asked to solve, together with the
/// vertex map, and solves it using the [`ReferenceSolver`].
#[derive(Default)]
pub struct RecordingFactory {
    pub calls: RefCell<Vec<(ParityGame, Option<VertexMap>)>>,
}

impl ParityGameSolverFactory for RecordingFactory {
    fn create<'a>(
        &self,
        game: &'a ParityGame,
        vertex_map: Option<&'a VertexMap>,
    ) -> Box<dyn ParityGameSolver + 'a> {
        self.calls
            .borrow_mut()
            .push((game.clone(), vertex_map.cloned()));
        Box::new(ReferenceSolver::new(game))
    }
}

/// A solver factory whose solvers always report cancellation.
pub struct CancelledFactory;

struct CancelledSolver;

impl ParityGameSolver for CancelledSolver {
    fn solve(&mut self) -> Cancellable<Strategy> {
        Err(Cancelled::new("CancelledSolver"))
    }
}

impl ParityGameSolverFactory for CancelledFactory {
    fn create<'a>(
        &self,
        _game: &'a ParityGame,
        _vertex_map: Option<&'a VertexMap>,
    ) -> Box<dyn ParityGameSolver + 'a> {
        Box::new(CancelledSolver)
    }
}
