//! Plays one seeded game of random moves and prints every position.

use banqi::{CannonEnumeration, GameConfig, GameEngine, GameResult, MovePolicy, RandomPolicy};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Random-play harness for the banqi engine
#[derive(Parser, Debug)]
#[command(name = "random_game")]
#[command(about = "Play a game of Chinese Dark Chess with random moves", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for the shuffle and the move policy
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Stop after this many actions
    #[arg(long, default_value = "10000")]
    max_steps: u32,

    /// Actions without a flip or capture before a draw
    #[arg(long, default_value = "50")]
    draw_threshold: u32,

    /// Only list adjacent cannon captures in legal actions
    #[arg(long)]
    adjacent_cannon: bool,

    /// Do not print the board after each step
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let cannons = if cli.adjacent_cannon {
        CannonEnumeration::Adjacent
    } else {
        CannonEnumeration::FullLines
    };
    let config = GameConfig::default()
        .with_seed(cli.seed)
        .with_draw_threshold(cli.draw_threshold)
        .with_cannon_enumeration(cannons);

    let mut engine = GameEngine::new(config);
    let mut policy = RandomPolicy::new(cli.seed);

    info!(seed = cli.seed, "start");
    if !cli.quiet {
        print!("{}", engine.render());
    }

    let mut steps = 0;
    while steps < cli.max_steps {
        let legal = engine.legal_actions();
        let Some(action) = policy.choose(&engine, &legal) else {
            info!("no legal actions, draw");
            break;
        };

        let player = engine.current_player();
        let step = match engine.apply_action(action) {
            Ok(step) => step,
            Err(err) => {
                warn!(%action, %err, "rejected");
                break;
            }
        };
        steps += 1;

        println!("Step {steps}: {player} chooses {action}");
        if !cli.quiet {
            print!("{}", engine.render());
        }

        match step.info.winner {
            Some(GameResult::Draw) => println!("=== Draw ==="),
            Some(GameResult::Winner(p)) => println!("=== {p} wins ==="),
            None => continue,
        }
        break;
    }

    println!("total steps: {steps}");
}
