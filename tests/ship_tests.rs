use ocean::{Board, BoardError, Orientation, Ship, ShipKind};

#[test]
fn test_kind_lengths_and_names() {
    let expected = [
        (ShipKind::Battleship, 4, "Battleship"),
        (ShipKind::Cruiser, 3, "Cruiser"),
        (ShipKind::Destroyer, 2, "Destroyer"),
        (ShipKind::Submarine, 1, "Submarine"),
        (ShipKind::EmptySea, 1, "EmptySea"),
    ];
    for (kind, len, name) in expected {
        let ship = Ship::new(kind);
        assert_eq!(ship.length(), len);
        assert_eq!(ship.ship_type(), name);
        assert_eq!(ship.bow(), None);
    }
}

#[test]
fn test_placeable_respects_edges() {
    let board = Board::new();
    let battleship = Ship::new(ShipKind::Battleship);
    assert!(battleship.is_placeable(0, 6, Orientation::Horizontal, &board));
    assert!(!battleship.is_placeable(0, 7, Orientation::Horizontal, &board));
    assert!(battleship.is_placeable(6, 9, Orientation::Vertical, &board));
    assert!(!battleship.is_placeable(7, 9, Orientation::Vertical, &board));
}

#[test]
fn test_placeable_rejects_touching_ships() {
    let mut board = Board::new();
    Ship::new(ShipKind::Destroyer)
        .place(4, 4, Orientation::Horizontal, &mut board)
        .unwrap();

    let sub = Ship::new(ShipKind::Submarine);
    // overlap
    assert!(!sub.is_placeable(4, 5, Orientation::Horizontal, &board));
    // side and end contact
    assert!(!sub.is_placeable(3, 4, Orientation::Horizontal, &board));
    assert!(!sub.is_placeable(4, 6, Orientation::Horizontal, &board));
    // diagonal contact
    assert!(!sub.is_placeable(5, 6, Orientation::Horizontal, &board));
    assert!(!sub.is_placeable(3, 3, Orientation::Horizontal, &board));
    // one cell of water in between
    assert!(sub.is_placeable(4, 7, Orientation::Horizontal, &board));
    assert!(sub.is_placeable(2, 4, Orientation::Horizontal, &board));

    let cruiser = Ship::new(ShipKind::Cruiser);
    // vertical run whose tail would touch the destroyer's bow diagonally
    assert!(!cruiser.is_placeable(1, 3, Orientation::Vertical, &board));
    assert!(cruiser.is_placeable(0, 3, Orientation::Vertical, &board));
}

#[test]
fn test_place_sets_bow_and_cells() {
    let mut board = Board::new();
    let id = Ship::new(ShipKind::Cruiser)
        .place(2, 7, Orientation::Vertical, &mut board)
        .unwrap();
    let ship = board.ship(id).unwrap();
    assert_eq!(ship.bow(), Some((2, 7)));
    assert_eq!(ship.orientation(), Orientation::Vertical);
    assert_eq!(ship.cells().collect::<Vec<_>>(), vec![(2, 7), (3, 7), (4, 7)]);
    for (r, c) in ship.cells() {
        assert!(board.is_occupied(r, c));
        assert_eq!(board.occupant(r, c).unwrap().ship_type(), "Cruiser");
    }
    assert!(!board.is_occupied(5, 7));
}

#[test]
fn test_place_off_board_fails() {
    let mut board = Board::new();
    assert_eq!(
        Ship::new(ShipKind::Battleship)
            .place(8, 0, Orientation::Vertical, &mut board)
            .unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(board.ships().count(), 0);
}

#[test]
fn test_resolve_shot_on_ship() {
    let mut board = Board::new();
    let id = Ship::new(ShipKind::Destroyer)
        .place(0, 0, Orientation::Vertical, &mut board)
        .unwrap();
    let mut ship = board.ship(id).unwrap().clone();

    assert!(!ship.resolve_shot(0, 1));
    assert!(!ship.is_fired_upon());

    assert!(ship.resolve_shot(0, 0));
    assert!(ship.is_hit_at(0, 0));
    assert!(!ship.is_hit_at(1, 0));
    assert!(!ship.is_sunk());

    assert!(ship.resolve_shot(0, 0));
    assert!(ship.resolve_shot(1, 0));
    assert!(ship.is_sunk());
    assert!(!ship.resolve_shot(1, 0));
}

#[test]
fn test_empty_sea_never_hit() {
    let mut sea = Ship::empty_sea();
    assert!(!sea.is_fired_upon());
    assert!(!sea.resolve_shot(3, 3));
    assert!(sea.is_fired_upon());
    assert!(!sea.is_sunk());
    assert!(!sea.is_hit_at(3, 3));
    assert!(!sea.is_hit_at(0, 0));
}
