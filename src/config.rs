use crate::ship::ShipKind;

pub const BOARD_SIZE: usize = 10;
pub const FLEET_SIZE: usize = 10;

/// Standard fleet, largest vessels first so later placements rarely fail.
pub const FLEET: [ShipKind; FLEET_SIZE] = [
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// Per-ship sampling ceiling for the bounded placement variant.
pub const DEFAULT_PLACEMENT_ATTEMPTS: u32 = 10_000;

