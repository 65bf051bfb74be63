use crate::game::{ParityGame, ParityGameVertex, Player, Vertex};
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

impl ParityGame {
    /// Generate a pseudo-random proper game with `size` vertices.
    ///
    /// Every vertex receives between `1` and `out_degree` distinct successors (capped by
    /// `size`), a priority drawn uniformly from `0..priorities` and a uniformly chosen owner.
    /// The same `seed` always produces the same game.
    ///
    /// # Panics
    ///
    /// Panics if `out_degree` or `priorities` is zero while `size` is not.
    pub fn random(size: usize, out_degree: usize, priorities: usize, seed: u64) -> ParityGame {
        if size == 0 {
            return ParityGame::default();
        }
        assert!(out_degree > 0, "Random games need at least one successor per vertex.");
        assert!(priorities > 0, "Random games need at least one priority.");

        let ref mut rng = SmallRng::seed_from_u64(seed);
        let max_degree = out_degree.min(size);

        let mut vertices = Vec::with_capacity(size);
        let mut edges: Vec<(Vertex, Vertex)> = Vec::with_capacity(size * max_degree);
        for v in 0..size {
            let player = if rng.random_bool(0.5) {
                Player::Odd
            } else {
                Player::Even
            };
            vertices.push(ParityGameVertex::new(rng.random_range(0..priorities), player));

            let degree = rng.random_range(1..=max_degree);
            edges.extend(index::sample(rng, size, degree).into_iter().map(|w| (v, w)));
        }

        let game = ParityGame::new(vertices, &edges);
        debug!(
            "Generated random game with {} vertices, {} edges and d={} (seed={seed}).",
            game.vertex_count(),
            game.graph().edge_count(),
            game.d(),
        );
        game
    }
}
