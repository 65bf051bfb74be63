use biodivine_algo_decycle::decycle::{DecycleSolver, PartialSolution};
use biodivine_algo_decycle::game::{ParityGame, Player, Strategy};
use biodivine_algo_decycle::solver::{ParityGameSolver, ParityGameSolverFactory};
use biodivine_algo_decycle::vertex_map::VertexMap;
use cancel_this::{Cancellable, Cancelled};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use std::rc::Rc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "biodivine_decycle")]
#[command(about = "Run the dominated-cycle decomposition on a random parity game")]
struct Args {
    /// Number of vertices of the generated game
    #[arg(long, default_value_t = 1000, require_equals = true)]
    size: usize,

    /// Maximal number of successors of each vertex
    #[arg(long, default_value_t = 3, require_equals = true)]
    out_degree: usize,

    /// Number of distinct priorities (priorities are drawn from 0..PRIORITIES)
    #[arg(long, default_value_t = 8, require_equals = true)]
    priorities: usize,

    /// Seed of the random game generator
    #[arg(long, default_value_t = 0, require_equals = true)]
    seed: u64,

    /// Stop the computation after the given number of seconds (0 = no limit)
    #[arg(long, value_name = "SECONDS", default_value_t = 0, require_equals = true)]
    timeout: u64,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

/// Only the pre-pass is executed here, so the remainder is never handed over.
struct NoFallback;

impl ParityGameSolver for NoFallback {
    fn solve(&mut self) -> Cancellable<Strategy> {
        Err(Cancelled::new("NoFallback"))
    }
}

impl ParityGameSolverFactory for NoFallback {
    fn create<'a>(
        &self,
        _game: &'a ParityGame,
        _vertex_map: Option<&'a VertexMap>,
    ) -> Box<dyn ParityGameSolver + 'a> {
        Box::new(NoFallback)
    }
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    if args.size > 0 && (args.priorities == 0 || args.out_degree == 0) {
        eprintln!("Non-empty games need at least one priority and one successor per vertex.");
        std::process::exit(1);
    }

    let game = ParityGame::random(args.size, args.out_degree, args.priorities, args.seed);
    println!(
        "Generated game with {} vertices, {} edges and {} priorities.",
        game.vertex_count(),
        game.graph().edge_count(),
        game.d()
    );

    let solver = DecycleSolver::new(&game, None, Rc::new(NoFallback));
    let result = if args.timeout == 0 {
        solver.solve_dominated_cycles()
    } else {
        let timeout = Duration::from_secs(args.timeout);
        cancel_this::on_timeout(timeout, || solver.solve_dominated_cycles())
    };

    let PartialSolution { strategy, solved } = result.unwrap_or_else(|e| {
        eprintln!("Computation cancelled: {}", e);
        std::process::exit(2);
    });

    let winners = game.winners(&strategy);
    let won_by = |player: Player| solved.iter().filter(|v| winners[*v] == player).count();
    println!("Solved {} of {} vertices.", solved.len(), game.vertex_count());
    println!(" - won by Even: {}", won_by(Player::Even));
    println!(" - won by Odd: {}", won_by(Player::Odd));
    println!(
        "Remaining subgame has {} vertices.",
        game.vertex_count() - solved.len()
    );
}
