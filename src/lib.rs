//! Dominated-cycle decomposition for explicit parity games.
//!
//! The crate is organised bottom-up:
//!  - [`game`]: explicit min-parity games, subgames, strategy verification.
//!  - [`dense_set`] and [`vertex_map`]: vertex sets and vertex translation between subgames.
//!  - [`scc`] and [`attractor`]: the graph algorithms used by the solvers.
//!  - [`solver`]: the pluggable solver abstraction.
//!  - [`decycle`]: the dominated-cycle solver itself.
//!
//! All long-running operations are cooperatively cancellable through `cancel_this`.

#[cfg(test)]
mod test_utils;

pub mod attractor;
pub mod decycle;
pub mod dense_set;
pub mod game;
pub mod scc;
pub mod solver;
pub mod vertex_map;
