//! Vessels and open water, modelled as one kind-tagged occupant type.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::board::{Board, ShipId};
use crate::common::BoardError;
use crate::config::BOARD_SIZE;

type BB = BitBoard<u128, BOARD_SIZE>;

/// A board coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along the column axis from the bow.
    #[default]
    Horizontal,
    /// Extends along the row axis from the bow.
    Vertical,
}

/// Every kind of cell occupant. `EmptySea` is open water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipKind {
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
    EmptySea,
}

impl ShipKind {
    /// Number of cells the occupant covers.
    pub const fn length(&self) -> usize {
        match self {
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
            ShipKind::Submarine | ShipKind::EmptySea => 1,
        }
    }

    /// Display name of the kind.
    pub const fn name(&self) -> &'static str {
        match self {
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
            ShipKind::EmptySea => "EmptySea",
        }
    }

    /// `false` only for open water.
    pub const fn is_vessel(&self) -> bool {
        !matches!(self, ShipKind::EmptySea)
    }
}

/// Coordinates covered by `length` cells starting at (`row`, `col`).
pub fn footprint(
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
) -> impl Iterator<Item = Coord> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => (row, col + i),
        Orientation::Vertical => (row + i, col),
    })
}

/// One cell occupant: a vessel with per-segment hit flags, or open water
/// whose single flag records whether it was fired upon.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    bow: Option<Coord>,
    orientation: Orientation,
    hits: Vec<bool>,
}

impl Ship {
    /// Create an unplaced occupant of `kind`.
    pub fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            bow: None,
            orientation: Orientation::Horizontal,
            hits: vec![false; kind.length()],
        }
    }

    /// Create an open-water occupant.
    pub fn empty_sea() -> Self {
        Self::new(ShipKind::EmptySea)
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Name of the occupant's kind, e.g. `"Cruiser"` or `"EmptySea"`.
    pub fn ship_type(&self) -> &'static str {
        self.kind.name()
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    /// Bow coordinate once placed.
    pub fn bow(&self) -> Option<Coord> {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells this ship occupies; empty until placed.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (row, col) = self.bow.unwrap_or((0, 0));
        let length = if self.bow.is_some() { self.length() } else { 0 };
        footprint(row, col, self.orientation, length)
    }

    /// Mask of the footprint this ship would cover at (`row`, `col`).
    pub fn footprint_mask(
        &self,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<BB, BoardError> {
        let len = self.length();
        let (end_row, end_col) = match orientation {
            Orientation::Horizontal => (Some(row), col.checked_add(len - 1)),
            Orientation::Vertical => (row.checked_add(len - 1), Some(col)),
        };
        match (end_row, end_col) {
            (Some(r), Some(c)) if r < BOARD_SIZE && c < BOARD_SIZE => {}
            _ => return Err(BoardError::ShipOutOfBounds),
        }
        Ok(BB::from_cells(footprint(row, col, orientation, len))?)
    }

    /// Whether the ship fits at (`row`, `col`) with at least one cell of open
    /// water between it and every vessel already on `board`, diagonals included.
    pub fn is_placeable(
        &self,
        row: usize,
        col: usize,
        orientation: Orientation,
        board: &Board,
    ) -> bool {
        match self.footprint_mask(row, col, orientation) {
            Ok(mask) => (mask.dilate() & board.ship_map()).is_empty(),
            Err(_) => false,
        }
    }

    /// Fix the bow and orientation and move the ship onto `board`.
    ///
    /// Only the board edges are checked here; callers confirm spacing with
    /// [`Ship::is_placeable`] first.
    pub fn place(
        mut self,
        row: usize,
        col: usize,
        orientation: Orientation,
        board: &mut Board,
    ) -> Result<ShipId, BoardError> {
        self.footprint_mask(row, col, orientation)?;
        self.bow = Some((row, col));
        self.orientation = orientation;
        Ok(board.install(self))
    }

    fn segment_index(&self, row: usize, col: usize) -> Option<usize> {
        let (bow_row, bow_col) = self.bow?;
        let len = self.length();
        match self.orientation {
            Orientation::Horizontal if row == bow_row && col >= bow_col && col < bow_col + len => {
                Some(col - bow_col)
            }
            Orientation::Vertical if col == bow_col && row >= bow_row && row < bow_row + len => {
                Some(row - bow_row)
            }
            _ => None,
        }
    }

    /// Apply a shot at (`row`, `col`). Returns `true` for a hit on a vessel
    /// still afloat, including repeat hits on the same segment.
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> bool {
        if !self.kind.is_vessel() {
            self.hits[0] = true;
            return false;
        }
        if self.is_sunk() {
            return false;
        }
        match self.segment_index(row, col) {
            Some(i) => {
                self.hits[i] = true;
                true
            }
            None => false,
        }
    }

    /// All segments hit. Open water never sinks.
    pub fn is_sunk(&self) -> bool {
        self.kind.is_vessel() && self.hits.iter().all(|&h| h)
    }

    /// Whether the segment at (`row`, `col`) has been hit.
    pub fn is_hit_at(&self, row: usize, col: usize) -> bool {
        self.kind.is_vessel()
            && self
                .segment_index(row, col)
                .is_some_and(|i| self.hits[i])
    }

    /// Open water that has taken a shot, or a vessel with any segment hit.
    pub fn is_fired_upon(&self) -> bool {
        self.hits.iter().any(|&h| h)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", bow: {:?}, orientation: {:?}, hits: {:?} }}",
            self.ship_type(),
            self.bow,
            self.orientation,
            self.hits,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_flags_sized_to_kind() {
        assert_eq!(Ship::new(ShipKind::Battleship).hits.len(), 4);
        assert_eq!(Ship::new(ShipKind::Destroyer).hits.len(), 2);
        assert_eq!(Ship::empty_sea().hits.len(), 1);
    }

    #[test]
    fn unplaced_ship_has_no_cells() {
        assert_eq!(Ship::new(ShipKind::Cruiser).cells().count(), 0);
    }

    #[test]
    fn footprint_runs_along_orientation() {
        let cells: Vec<_> = footprint(2, 3, Orientation::Vertical, 3).collect();
        assert_eq!(cells, vec![(2, 3), (3, 3), (4, 3)]);
    }
}
