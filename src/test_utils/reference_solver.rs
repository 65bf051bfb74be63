use crate::game::{ParityGame, Player, Strategy, Vertex};
use crate::solver::{ParityGameSolver, ParityGameSolverFactory};
use crate::vertex_map::VertexMap;
use cancel_this::{Cancellable, is_cancelled};
use log::debug;
use std::collections::VecDeque;

/// A naive recursive (Zielonka-style) solver used to cross-check the results of
/// the optimized algorithms. Exponential in the worst case; only meant for small games.
///
/// A player who gets stuck in a vertex without successors loses the play.
pub struct ReferenceSolver<'a> {
    game: &'a ParityGame,
}

pub struct ReferenceSolverFactory;

impl<'a> ReferenceSolver<'a> {
    pub fn new(game: &'a ParityGame) -> ReferenceSolver<'a> {
        ReferenceSolver { game }
    }

    /// Solve the subgame induced by `alive`, storing winners and moves of its vertices.
    fn solve_region(
        &self,
        alive: Vec<bool>,
        winners: &mut [Player],
        strategy: &mut Strategy,
    ) -> Cancellable<()> {
        is_cancelled!()?;
        let Some(min_priority) = (0..alive.len())
            .filter(|v| alive[*v])
            .map(|v| self.game.priority(v))
            .min()
        else {
            return Ok(());
        };

        let player = Player::from_priority(min_priority);
        let top: Vec<bool> = (0..alive.len())
            .map(|v| alive[v] && self.game.priority(v) == min_priority)
            .collect();
        let attracted = self.attract(&alive, player, top.clone(), strategy);
        let rest = mask_minus(&alive, &attracted);
        self.solve_region(rest.clone(), winners, strategy)?;

        let opponent = player.opponent();
        let lost: Vec<bool> = (0..alive.len())
            .map(|v| rest[v] && winners[v] == opponent)
            .collect();

        if !lost.contains(&true) {
            // The whole region is won by `player`.
            for v in (0..alive.len()).filter(|v| attracted[*v]) {
                winners[v] = player;
                if top[v] && self.game.player(v) == player {
                    strategy[v] = self.game.successors(v).iter().copied().find(|w| alive[*w]);
                }
            }
            return Ok(());
        }

        let opponent_attracted = self.attract(&alive, opponent, lost, strategy);
        for v in (0..alive.len()).filter(|v| opponent_attracted[*v]) {
            winners[v] = opponent;
        }
        self.solve_region(mask_minus(&alive, &opponent_attracted), winners, strategy)
    }

    /// Attractor of `set` for `player` within `alive`.
    fn attract(
        &self,
        alive: &[bool],
        player: Player,
        mut set: Vec<bool>,
        strategy: &mut Strategy,
    ) -> Vec<bool> {
        let mut escapes: Vec<usize> = (0..alive.len())
            .map(|v| {
                self.game
                    .successors(v)
                    .iter()
                    .filter(|w| alive[**w])
                    .count()
            })
            .collect();
        let mut queue: VecDeque<Vertex> = (0..alive.len()).filter(|v| set[*v]).collect();
        while let Some(w) = queue.pop_front() {
            for u in self.game.predecessors(w).iter().copied() {
                if !alive[u] || set[u] {
                    continue;
                }
                if self.game.player(u) == player {
                    strategy[u] = Some(w);
                } else {
                    escapes[u] -= 1;
                    if escapes[u] > 0 {
                        continue;
                    }
                }
                set[u] = true;
                queue.push_back(u);
            }
        }
        set
    }
}

fn mask_minus(left: &[bool], right: &[bool]) -> Vec<bool> {
    left.iter().zip(right).map(|(l, r)| *l && !*r).collect()
}

impl ParityGameSolver for ReferenceSolver<'_> {
    fn solve(&mut self) -> Cancellable<Strategy> {
        let vertex_count = self.game.vertex_count();
        let mut winners = vec![Player::Even; vertex_count];
        let mut strategy = vec![None; vertex_count];

        // Dead ends first; whatever remains afterwards is a proper subgame.
        let mut alive = vec![true; vertex_count];
        for player in [Player::Even, Player::Odd] {
            let stuck = (0..vertex_count)
                .map(|v| {
                    alive[v]
                        && self.game.player(v) == player.opponent()
                        && self.game.outdegree(v) == 0
                })
                .collect();
            let won = self.attract(&alive, player, stuck, &mut strategy);
            for v in (0..vertex_count).filter(|v| won[*v]) {
                winners[v] = player;
            }
            alive = mask_minus(&alive, &won);
        }
        self.solve_region(alive, &mut winners, &mut strategy)?;

        // Only the winner of a vertex keeps a move there.
        for v in 0..vertex_count {
            if self.game.player(v) != winners[v] {
                strategy[v] = None;
            }
        }
        debug!(
            "Reference solver finished; Even wins {} of {vertex_count} vertices.",
            winners.iter().filter(|it| **it == Player::Even).count()
        );
        Ok(strategy)
    }
}

impl ParityGameSolverFactory for ReferenceSolverFactory {
    fn create<'a>(
        &self,
        game: &'a ParityGame,
        _vertex_map: Option<&'a VertexMap>,
    ) -> Box<dyn ParityGameSolver + 'a> {
        Box::new(ReferenceSolver::new(game))
    }
}
