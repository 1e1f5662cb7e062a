//! Common types for the ocean board: board errors and shot results.

use crate::bitboard::BitBoardError;

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GuessResult {
    /// Shot landed on a vessel that is still afloat.
    Hit,
    /// Shot landed on open water, or on a vessel that was already sunk.
    Miss,
    /// Shot hit the last intact segment of a vessel, carrying its name.
    Sink(&'static str),
}

impl GuessResult {
    /// `true` for `Hit` and `Sink`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Shot coordinate outside the 10×10 board.
    InvalidCoordinate { row: usize, col: usize },
    /// Ship footprint would leave the board.
    ShipOutOfBounds,
    /// Random placement gave up after the configured number of samples.
    PlacementExhausted { ship: &'static str, attempts: u32 },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::PlacementExhausted { ship, attempts } => write!(
                f,
                "Unable to place {} after {} attempts",
                ship, attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
