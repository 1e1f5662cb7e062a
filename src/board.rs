//! The 10×10 ocean: occupant grid, fleet placement, shot dispatch and
//! running statistics.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, GuessResult};
use crate::config::{BOARD_SIZE, FLEET, FLEET_SIZE};
use crate::ship::{Orientation, Ship};

type BB = BitBoard<u128, BOARD_SIZE>;

/// Handle to an occupant owned by a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipId(usize);

impl ShipId {
    /// Position of the occupant in the board's arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Lifecycle of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    Setup,
    InProgress,
    Complete,
}

/// Snapshot of the running counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardStats {
    pub shots_fired: u32,
    pub hits: u32,
    pub ships_sunk: u32,
    pub ships_remaining: u32,
}

/// Board state. Every cell refers to exactly one occupant in `occupants`:
/// the first `BOARD_SIZE * BOARD_SIZE` entries are open water, vessels are
/// appended as they are placed.
pub struct Board {
    occupants: Vec<Ship>,
    grid: [[ShipId; BOARD_SIZE]; BOARD_SIZE],
    ship_map: BB,
    phase: GamePhase,
    shots_fired: u32,
    hit_count: u32,
    ships_sunk: u32,
}

impl Board {
    /// Create a board of untouched open water.
    pub fn new() -> Self {
        let occupants = (0..BOARD_SIZE * BOARD_SIZE)
            .map(|_| Ship::empty_sea())
            .collect();
        let grid = core::array::from_fn(|r| core::array::from_fn(|c| ShipId(r * BOARD_SIZE + c)));
        Board {
            occupants,
            grid,
            ship_map: BB::new(),
            phase: GamePhase::Setup,
            shots_fired: 0,
            hit_count: 0,
            ships_sunk: 0,
        }
    }

    fn check_coord(row: usize, col: usize) -> Result<(), BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            Err(BoardError::InvalidCoordinate { row, col })
        } else {
            Ok(())
        }
    }

    /// Occupant of the cell at (`row`, `col`).
    pub fn occupant(&self, row: usize, col: usize) -> Result<&Ship, BoardError> {
        Self::check_coord(row, col)?;
        Ok(&self.occupants[self.grid[row][col].0])
    }

    /// Look up an occupant by handle.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.occupants.get(id.0)
    }

    /// Placed vessels with their handles, in placement order.
    pub fn ships(&self) -> impl Iterator<Item = (ShipId, &Ship)> {
        self.occupants
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind().is_vessel())
            .map(|(i, s)| (ShipId(i), s))
    }

    /// Mask of every cell covered by a vessel.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// `true` if a vessel covers (`row`, `col`). Cells off the board are water.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.ship_map.get(row, col).unwrap_or(false)
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_complete() {
            GamePhase::Complete
        } else {
            self.phase
        }
    }

    /// Take ownership of a ship whose bow is set and point its footprint cells at it.
    pub(crate) fn install(&mut self, ship: Ship) -> ShipId {
        let id = ShipId(self.occupants.len());
        for (r, c) in ship.cells() {
            self.grid[r][c] = id;
            if ship.kind().is_vessel() {
                // cells() stays within bounds once placed
                let _ = self.ship_map.set(r, c);
            }
        }
        self.occupants.push(ship);
        id
    }

    /// Place the standard fleet at uniformly sampled positions, retrying each
    /// ship until a legal spot turns up.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.place_fleet(rng, None)
    }

    /// Like [`Board::place_fleet_randomly`] but gives up on a ship after
    /// `max_attempts` samples. Ships placed before the failure stay placed.
    pub fn try_place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        max_attempts: u32,
    ) -> Result<(), BoardError> {
        self.place_fleet(rng, Some(max_attempts))
    }

    fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        max_attempts: Option<u32>,
    ) -> Result<(), BoardError> {
        for kind in FLEET {
            let ship = Ship::new(kind);
            let mut attempts: u32 = 0;
            let (row, col, orientation) = loop {
                if max_attempts.is_some_and(|max| attempts >= max) {
                    log::warn!("gave up placing {} after {} attempts", kind.name(), attempts);
                    return Err(BoardError::PlacementExhausted {
                        ship: kind.name(),
                        attempts,
                    });
                }
                attempts = attempts.saturating_add(1);
                let row = rng.random_range(0..BOARD_SIZE);
                let col = rng.random_range(0..BOARD_SIZE);
                let orientation = if rng.random_bool(0.5) {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if ship.is_placeable(row, col, orientation, self) {
                    break (row, col, orientation);
                }
            };
            ship.place(row, col, orientation, self)?;
            log::debug!(
                "placed {} at ({}, {}) {:?} after {} attempts",
                kind.name(),
                row,
                col,
                orientation,
                attempts
            );
        }
        self.phase = GamePhase::InProgress;
        Ok(())
    }

    /// Fire at (`row`, `col`) and report what happened.
    ///
    /// Every accepted shot counts towards `shots_fired`; a hit counts towards
    /// `hit_count` even when that segment was already hit.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        Self::check_coord(row, col)?;
        self.shots_fired += 1;
        let target = &mut self.occupants[self.grid[row][col].0];
        let result = if target.resolve_shot(row, col) {
            self.hit_count += 1;
            if target.is_sunk() {
                self.ships_sunk += 1;
                GuessResult::Sink(target.ship_type())
            } else {
                GuessResult::Hit
            }
        } else {
            GuessResult::Miss
        };
        log::trace!("shot {} at ({}, {}): {:?}", self.shots_fired, row, col, result);
        if matches!(result, GuessResult::Sink(_)) && self.is_complete() {
            log::info!("fleet destroyed after {} shots", self.shots_fired);
        }
        Ok(result)
    }

    /// Fire at (`row`, `col`); `true` on a hit.
    pub fn fire_at(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.fire(row, col).map(|result| result.is_hit())
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    /// Successful shots, counting repeat hits on the same segment.
    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    pub fn ships_sunk(&self) -> u32 {
        self.ships_sunk
    }

    /// Returns `true` once the whole fleet is sunk.
    pub fn is_complete(&self) -> bool {
        self.ships_sunk as usize == FLEET_SIZE
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats {
            shots_fired: self.shots_fired,
            hits: self.hit_count,
            ships_sunk: self.ships_sunk,
            ships_remaining: (FLEET_SIZE as u32).saturating_sub(self.ships_sunk),
        }
    }

    fn cell_symbol(&self, row: usize, col: usize, reveal: bool) -> char {
        let occupant = &self.occupants[self.grid[row][col].0];
        if occupant.is_sunk() {
            'x'
        } else if occupant.is_hit_at(row, col) {
            'S'
        } else if !occupant.kind().is_vessel() && occupant.is_fired_upon() {
            '-'
        } else if reveal && occupant.kind().is_vessel() {
            '#'
        } else {
            '.'
        }
    }

    fn write_grid<W: Write>(&self, out: &mut W, reveal: bool) -> fmt::Result {
        write!(out, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(out, "{} ", c)?;
        }
        writeln!(out)?;
        for r in 0..BOARD_SIZE {
            write!(out, "{} ", r)?;
            for c in 0..BOARD_SIZE {
                write!(out, "{} ", self.cell_symbol(r, c, reveal))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Player view: `x` sunk, `S` hit, `-` missed water, `.` untouched.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_grid(&mut out, false);
        out
    }

    /// Like [`Board::render`] but shows intact vessel cells as `#`.
    pub fn render_revealed(&self) -> String {
        let mut out = String::new();
        let _ = self.write_grid(&mut out, true);
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, false)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  phase: {:?},\n  stats: {:?},\n  ship_map: {:?},\n  ships: {:?}\n}}",
            self.phase(),
            self.stats(),
            self.ship_map,
            self.ships().map(|(_, s)| s).collect::<Vec<_>>()
        )
    }
}
