#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{init_logging, print_boards, AiPlayer, CliPlayer, GameEngine, GameStatus, Side};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer (default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let the computer play against itself and report the result.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn greet() {
    println!("Welcome to Sea Battle!");
    println!("Enter coordinates as `x y` separated by a space, counting from 1.");
    println!("x runs along the horizontal axis, y along the vertical one.");
    println!("Symbols: O = water, T = miss, ■ = ship, X = hit.\n");
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let level = init_logging();
    let cli = Cli::parse();
    log::debug!("logging at {}", level);

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => {
            greet();
            let rng = make_rng(seed);
            let mut engine = GameEngine::new(
                Box::new(CliPlayer::stdio()),
                Box::new(AiPlayer::new()),
                rng,
            )
            .map_err(|e| anyhow::anyhow!(e))?;

            let status = engine.run()?;
            println!();
            print_boards(engine.user_board(), engine.ai_board());
            match status {
                GameStatus::UserWon => println!("You win! The enemy fleet is destroyed."),
                GameStatus::AiWon => println!("The computer wins. Your fleet is destroyed."),
                _ => {}
            }
        }
        Commands::Simulate { seed } => {
            let rng = make_rng(seed);
            let mut engine = GameEngine::new(
                Box::new(AiPlayer::new()),
                Box::new(AiPlayer::new()),
                rng,
            )
            .map_err(|e| anyhow::anyhow!(e))?;

            let status = engine.run()?;
            engine.ai_board_mut().reveal();
            print_boards(engine.user_board(), engine.ai_board());
            let winner = match status.winner() {
                Some(Side::User) => "player 1",
                Some(Side::Ai) => "player 2",
                None => "nobody",
            };
            println!("Winner: {} after {} shots", winner, engine.shots_fired());
        }
    }
    Ok(())
}
