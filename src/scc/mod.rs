//! Explicit strongly connected component enumeration.
//!
//! Components are produced lazily by a [`computation_process::Generator`], one component
//! per item, so the caller can interleave per-component work with the decomposition or
//! stop early. The generator is cancellable through `cancel_this`.
//!
//! ```
//! use biodivine_algo_decycle::game::{ParityGame, ParityGameVertex, Player};
//! use biodivine_algo_decycle::scc::{SccConfig, TarjanScc, TarjanState};
//! use computation_process::Stateful;
//!
//! let v = ParityGameVertex::new(0, Player::Even);
//! let game = ParityGame::new(vec![v; 3], &[(0, 1), (1, 0), (1, 2)]);
//!
//! let config = SccConfig::from(game.graph());
//! let sccs = TarjanScc::configure(config, TarjanState::from(game.graph()))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(sccs.len(), 2);
//! ```

mod scc_config;
mod tarjan;


use crate::game::Vertex;
use computation_process::Generator;
pub use scc_config::SccConfig;
pub use tarjan::{TarjanState, TarjanStep};

/// Tarjan's algorithm, enumerating components in reverse topological order.
pub type TarjanScc = Generator<SccConfig, TarjanState, Vec<Vertex>, TarjanStep>;
