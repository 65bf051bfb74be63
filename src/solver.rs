//! Abstractions for pluggable parity game solvers.
//!
//! Solvers are created on demand by a [`ParityGameSolverFactory`], which allows one solver
//! to delegate (parts of) a game to another solver without knowing its concrete type.
//! Factories are shared through [`std::rc::Rc`] when several solvers need the same one.

use crate::game::{ParityGame, Strategy};
use crate::vertex_map::VertexMap;
use cancel_this::Cancellable;

/// A solver instance bound to a single game.
pub trait ParityGameSolver {
    /// Compute a [`Strategy`] covering every vertex of the game.
    ///
    /// Returns `Err` only if the computation was cancelled.
    fn solve(&mut self) -> Cancellable<Strategy>;
}

/// Creates [`ParityGameSolver`] instances.
pub trait ParityGameSolverFactory {
    /// Create a solver for `game`.
    ///
    /// If `game` is a subgame of some larger game, `vertex_map` translates its vertices
    /// into vertices of the top-level game. Solvers may use it for reporting, but the
    /// returned strategy always refers to vertices of `game`.
    fn create<'a>(
        &self,
        game: &'a ParityGame,
        vertex_map: Option<&'a VertexMap>,
    ) -> Box<dyn ParityGameSolver + 'a>;
}
