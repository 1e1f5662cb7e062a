#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use ocean::{init_logging, run_session, Board};

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
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Shoot at a randomly placed fleet until every ship is sunk.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Print a randomly placed fleet with every ship visible.
    Reveal {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (fleet will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut board = Board::new();
            board
                .place_fleet_randomly(&mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let summary = run_session(&mut board, stdin.lock(), &mut stdout)?;
            log::info!("session finished: {:?}", summary);
        }
        Commands::Reveal { seed } => {
            let mut rng = make_rng(seed);
            let mut board = Board::new();
            board
                .place_fleet_randomly(&mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            print!("{}", board.render_revealed());
            for (_, ship) in board.ships() {
                if let Some((row, col)) = ship.bow() {
                    println!(
                        "{:<10} bow ({}, {}) {:?}",
                        ship.ship_type(),
                        row,
                        col,
                        ship.orientation()
                    );
                }
            }
        }
    }
    Ok(())
}
