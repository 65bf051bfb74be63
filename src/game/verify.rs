use crate::game::{ParityGame, Player, StaticGraph, Strategy, Vertex};
use crate::scc::{SccConfig, TarjanScc, TarjanState};
use cancel_this::{Cancellable, is_cancelled};
use computation_process::Stateful;
use log::{debug, info};

impl ParityGame {
    /// Check that `strategy` is a winning strategy for both players on their respective
    /// winning regions (as given by [`ParityGame::winners`]).
    ///
    /// The check consists of three parts:
    ///  - Every move of the strategy is an edge of the game.
    ///  - Winning regions are closed: a winner-owned vertex moves inside its region and
    ///    every successor of a loser-owned vertex lies inside the winner's region.
    ///  - Once the winner is restricted to its strategy, the region contains no cycle whose
    ///    minimal priority favours the loser.
    ///
    /// Returns `Ok(Err(v))` with the first vertex `v` at which a violation is detected.
    pub fn verify(&self, strategy: &Strategy) -> Cancellable<Result<(), Vertex>> {
        info!("Verifying strategy for game with {} vertices.", self.vertex_count());
        if strategy.len() != self.vertex_count() {
            return Ok(Err(strategy.len().min(self.vertex_count())));
        }

        let winners = self.winners(strategy);
        for v in 0..self.vertex_count() {
            is_cancelled!()?;
            let closed = match strategy[v] {
                Some(w) => self.has_succ(v, w) && winners[w] == winners[v],
                None => self.successors(v).iter().all(|w| winners[*w] == winners[v]),
            };
            if !closed {
                debug!("Vertex {v} escapes the region of {:?}.", winners[v]);
                return Ok(Err(v));
            }
        }

        for player in [Player::Even, Player::Odd] {
            if let Err(v) = self.verify_region(strategy, &winners, player)? {
                return Ok(Err(v));
            }
        }

        info!("Strategy verified.");
        Ok(Ok(()))
    }

    /// Look for a cycle won by the opponent inside the region of `player` once `player`
    /// is bound to `strategy`.
    fn verify_region(
        &self,
        strategy: &Strategy,
        winners: &[Player],
        player: Player,
    ) -> Cancellable<Result<(), Vertex>> {
        let region: Vec<Vertex> = (0..self.vertex_count())
            .filter(|v| winners[*v] == player)
            .collect();

        // Outside of the region, all vertices are isolated and thus irrelevant.
        let mut edges = Vec::new();
        for v in region.iter().copied() {
            match strategy[v] {
                Some(w) => edges.push((v, w)),
                None => edges.extend(self.successors(v).iter().map(|w| (v, *w))),
            }
        }
        let bound = ParityGame::from_graph(
            StaticGraph::new(self.vertex_count(), &edges),
            self.vertices.clone(),
        );

        let opponent = player.opponent();
        for priority in (opponent.index()..self.d()).step_by(2) {
            is_cancelled!()?;
            let candidates: Vec<Vertex> = region
                .iter()
                .copied()
                .filter(|v| bound.priority(*v) >= priority)
                .collect();
            if !candidates.iter().any(|v| bound.priority(*v) == priority) {
                continue;
            }

            let subgame = bound.make_subgame(&candidates, false);
            let initial_state = TarjanState::from(subgame.graph());
            let config = SccConfig::from(subgame.graph()).with_trivial_filter(true);
            for scc in TarjanScc::configure(config, initial_state) {
                let scc = scc?;
                if let Some(local) = scc.iter().find(|v| bound.priority(candidates[**v]) == priority)
                {
                    let v = candidates[*local];
                    debug!("Vertex {v} lies on a cycle won by {opponent:?}.");
                    return Ok(Err(v));
                }
            }
        }

        Ok(Ok(()))
    }
}
