use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use tile_merge::{init_logging, Board, Direction};

/// Play seeded random games to completion and report each result as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1, help = "Number of games to play")]
    games: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = match cli.seed {
        Some(s) => s,
        None => rand::rng().random(),
    };
    log::info!("simulating {} game(s) with seed {}", cli.games, seed);

    let mut board = Board::with_seed(seed);
    let mut policy = SmallRng::seed_from_u64(seed.wrapping_add(1));

    for game in 0..cli.games {
        if game > 0 {
            board.reset();
        }
        let mut moves = 0usize;
        while board.is_running() {
            let legal: Vec<Direction> = board.legal_moves().iter().collect();
            if legal.is_empty() {
                anyhow::bail!("running board with no legal moves:\n{}", board);
            }
            let dir = legal[policy.random_range(0..legal.len())];
            board.apply(dir);
            moves += 1;
        }
        let result = json!({
            "game": game,
            "seed": seed,
            "score": board.score(),
            "max_tile": board.max_tile(),
            "moves": moves,
            "status": format!("{:?}", board.status()),
        });
        println!("{}", serde_json::to_string(&result)?);
    }
    Ok(())
}
