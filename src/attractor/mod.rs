//! Attractor computation on explicit parity games.
//!
//! The attractor of a set `T` for a player `P` is the set of vertices from which `P` can
//! force the play into `T`. It is the least fixpoint of adding `P`-owned vertices with
//! *some* successor in the set and opponent-owned vertices with *all* successors in the set.
//!
//! The computation is a backward breadth-first search over predecessors; every vertex
//! enters the queue at most once, so a single call takes `O(E)` time.


use crate::dense_set::DenseSet;
use crate::game::{ParityGame, Player, Strategy, Vertex};
use cancel_this::{Cancellable, is_cancelled};
use log::{debug, trace};
use std::collections::VecDeque;

/// Extend `region` to its attractor for `player`.
///
/// Every vertex of `todo` must already be in `region`; the search propagates backwards
/// from these vertices only, so vertices of `region` that are not queued are treated as
/// already processed. Newly attracted `player` vertices get `strategy[u] = Some(w)` with `w`
/// the vertex they were attracted through; newly attracted opponent vertices get `None`.
///
/// When the function returns, `todo` is empty.
pub fn make_attractor_set(
    game: &ParityGame,
    player: Player,
    region: &mut DenseSet,
    todo: &mut VecDeque<Vertex>,
    strategy: &mut Strategy,
) -> Cancellable<()> {
    let initial = region.len();
    while let Some(w) = todo.pop_front() {
        is_cancelled!()?;
        debug_assert!(region.contains(w));
        for u in game.predecessors(w).iter().copied() {
            if region.contains(u) {
                continue;
            }

            if game.player(u) == player {
                strategy[u] = Some(w);
            } else if game.successors(u).iter().all(|x| region.contains(*x)) {
                strategy[u] = None;
            } else {
                // The opponent can still escape.
                continue;
            }

            trace!("Vertex {u} attracted by {player:?} through {w}.");
            region.insert(u);
            todo.push_back(u);
        }
    }

    debug!(
        "Attractor of {player:?} grew by {} to {} vertices.",
        region.len() - initial,
        region.len()
    );
    Ok(())
}
