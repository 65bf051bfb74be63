//! Dominated-cycle decomposition.
//!
//! A cheap pre-pass for parity game solvers: for each priority `p` in ascending order,
//! find cycles that are dominated by `p` and controlled by `p % 2` ([`CycleFinder`]),
//! attract the rest of the game towards them, and finally hand whatever remains to
//! another solver ([`DecycleSolver`]). On many games arising from verification problems,
//! the pre-pass alone decides most (or all) vertices.
//!
//! ```
//! use biodivine_algo_decycle::decycle::DecycleSolver;
//! use biodivine_algo_decycle::game::{ParityGame, ParityGameVertex, Player};
//! use biodivine_algo_decycle::solver::{ParityGameSolver, ParityGameSolverFactory};
//! use biodivine_algo_decycle::vertex_map::VertexMap;
//! use std::rc::Rc;
//!
//! // 0 -> 1 -> 2 -> 0, where the minimal priority 0 is even.
//! let game = ParityGame::new(
//!     vec![
//!         ParityGameVertex::new(2, Player::Even),
//!         ParityGameVertex::new(1, Player::Odd),
//!         ParityGameVertex::new(0, Player::Even),
//!     ],
//!     &[(0, 1), (1, 2), (2, 0)],
//! );
//!
//! // The pre-pass never needs the fallback on this game.
//! struct NoFallback;
//! impl ParityGameSolverFactory for NoFallback {
//!     fn create<'a>(
//!         &self,
//!         _game: &'a ParityGame,
//!         _vertex_map: Option<&'a VertexMap>,
//!     ) -> Box<dyn ParityGameSolver + 'a> {
//!         unreachable!()
//!     }
//! }
//!
//! let solution = DecycleSolver::new(&game, None, Rc::new(NoFallback))
//!     .solve_dominated_cycles()
//!     .unwrap();
//! assert_eq!(solution.solved.len(), 3);
//! assert_eq!(solution.strategy, vec![Some(1), None, Some(0)]);
//! ```

mod cycle_finder;
mod decycle_solver;


pub use cycle_finder::CycleFinder;
pub use decycle_solver::{DecycleSolver, DecycleSolverFactory, PartialSolution};
