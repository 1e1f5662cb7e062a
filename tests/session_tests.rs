use std::io::Cursor;

use ocean::{run_session, Board, Orientation, Ship, ShipKind, FLEET_SIZE, TOTAL_SHIP_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn placed_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng).unwrap();
    board
}

#[test]
fn test_session_plays_to_completion() {
    let mut board = placed_board(99);
    let mut script = String::from("hello\n12 3\n");
    for (r, c) in board.ships().flat_map(|(_, s)| s.cells()).collect::<Vec<_>>() {
        script.push_str(&format!("{} {}\n", r, c));
    }

    let mut out = Vec::new();
    let summary = run_session(&mut board, Cursor::new(script), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(summary.completed);
    assert_eq!(summary.stats.shots_fired, TOTAL_SHIP_CELLS as u32);
    assert_eq!(summary.stats.ships_sunk, FLEET_SIZE as u32);
    assert!(text.starts_with("Welcome to Battleship!"));
    assert_eq!(text.matches("Invalid coordinates").count(), 2);
    assert_eq!(text.matches("You sank a").count(), FLEET_SIZE);
    assert!(text.contains("Congratulations! You've sunk all the ships!"));
    assert!(text.contains(&format!("Total shots fired: {}", TOTAL_SHIP_CELLS)));
}

#[test]
fn test_session_stops_at_end_of_input() {
    let mut board = Board::new();
    Ship::new(ShipKind::Destroyer)
        .place(0, 0, Orientation::Horizontal, &mut board)
        .unwrap();

    let mut out = Vec::new();
    let summary = run_session(&mut board, Cursor::new("0,0\n5 5\n"), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(!summary.completed);
    assert_eq!(summary.stats.shots_fired, 2);
    assert_eq!(summary.stats.hits, 1);
    assert!(text.contains("You hit a ship!"));
    assert!(text.contains("You missed."));
    assert!(text.contains("Session ended"));
}
