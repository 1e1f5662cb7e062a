use ocean::{autoplay, init_logging, Board};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng)?;
    let stats = autoplay(&mut board, &mut rng)?;

    let result = json!({
        "seed": seed,
        "complete": board.is_complete(),
        "stats": stats,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
