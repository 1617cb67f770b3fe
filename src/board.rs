//! Game board state: the cell grid, the fleet, placement validation and
//! shot resolution.

use crate::common::{PlaceError, ShotOutcome};
use crate::config::{BOARD_SIZE, NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS};
use crate::coord::Coord;
use crate::ship::Ship;
use log::debug;
use rand::Rng;

/// Shot status of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStatus {
    #[default]
    NotChecked,
    Hit,
    Miss,
}

/// One grid position: the occupying ship, if any, and the shot status.
/// Ships are referenced by their index in the owning board's fleet, so
/// many cells may point at the same ship.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cell {
    pub ship: Option<usize>,
    pub status: CellStatus,
}

/// A player's private board: grid, fleet and aggregate hit counters.
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: [Ship; NUM_SHIPS],
    cells_hit: usize,
    cells_total: usize,
}

/// Split a placement answer into its two endpoint coordinates. Anything
/// but exactly two parseable coordinates is a coordinate error.
pub fn parse_endpoints(input: &str) -> Result<(Coord, Coord), PlaceError> {
    let mut tokens = input.split_whitespace();
    let a = tokens.next().and_then(Coord::parse);
    let b = tokens.next().and_then(Coord::parse);
    match (a, b, tokens.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(PlaceError::BadCoordinates),
    }
}

impl Board {
    /// Create a board with the full fleet initialized and nothing placed.
    pub fn new() -> Self {
        let ships = core::array::from_fn(|i| Ship::new(SHIPS[i]));
        Board {
            cells: [[Cell::default(); BOARD_SIZE]; BOARD_SIZE],
            ships,
            cells_hit: 0,
            cells_total: TOTAL_SHIP_CELLS,
        }
    }

    /// Read one cell. Out-of-range coordinates are a programming error
    /// and panic; user input is validated before it gets here.
    pub fn cell(&self, at: Coord) -> Cell {
        self.cells[at.row][at.col]
    }

    /// The fleet, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Distinct ship cells hit so far.
    pub fn cells_hit(&self) -> usize {
        self.cells_hit
    }

    /// Cells covered by the full fleet.
    pub fn cells_total(&self) -> usize {
        self.cells_total
    }

    /// `true` once every fleet cell has been hit.
    pub fn all_sunk(&self) -> bool {
        self.cells_hit >= self.cells_total
    }

    /// Validate placing `ship_index` with endpoints `a` and `b`, and mark
    /// the span cells on success. Rejection leaves the board untouched;
    /// partial writes cannot occur.
    pub fn place_ship(&mut self, ship_index: usize, a: Coord, b: Coord) -> Result<(), PlaceError> {
        let span = self.validate_span(ship_index, a, b)?;
        for at in &span {
            self.cells[at.row][at.col].ship = Some(ship_index);
        }
        debug!("placed {} at {} {}", self.ships[ship_index].name(), a, b);
        Ok(())
    }

    /// Cells the span would cover, or the reason the placement is rejected.
    fn validate_span(&self, ship_index: usize, a: Coord, b: Coord) -> Result<Vec<Coord>, PlaceError> {
        let span: Vec<Coord> = if a.row == b.row {
            if a.col == b.col {
                return Err(PlaceError::BadLocation);
            }
            let (lo, hi) = (a.col.min(b.col), a.col.max(b.col));
            (lo..=hi).map(|col| Coord::new(a.row, col)).collect()
        } else if a.col == b.col {
            let (lo, hi) = (a.row.min(b.row), a.row.max(b.row));
            (lo..=hi).map(|row| Coord::new(row, a.col)).collect()
        } else {
            return Err(PlaceError::BadLocation);
        };

        // The rulebook counts span cells inclusively and requires an exact
        // match with the ship's length.
        let ship = &self.ships[ship_index];
        if span.len() != ship.length() {
            return Err(PlaceError::BadLength(ship.name()));
        }
        if span.iter().any(|&at| self.too_close(ship_index, at)) {
            return Err(PlaceError::TooClose);
        }
        Ok(span)
    }

    /// Whether a cell of another ship lies in the 3x3 neighbourhood of
    /// `at`, clipped at the board edge. Cells of the ship currently being
    /// placed do not count.
    fn too_close(&self, ship_index: usize, at: Coord) -> bool {
        for row in at.row.saturating_sub(1)..=(at.row + 1).min(BOARD_SIZE - 1) {
            for col in at.col.saturating_sub(1)..=(at.col + 1).min(BOARD_SIZE - 1) {
                if matches!(self.cells[row][col].ship, Some(other) if other != ship_index) {
                    return true;
                }
            }
        }
        false
    }

    /// Resolve a shot at `at`, updating cell status and hit counters.
    /// Re-firing at an already checked cell reports the same class of
    /// outcome but never counts twice.
    pub fn fire(&mut self, at: Coord) -> ShotOutcome {
        let cell = self.cells[at.row][at.col];
        let outcome = match cell.ship {
            None => {
                self.cells[at.row][at.col].status = CellStatus::Miss;
                ShotOutcome::Miss
            }
            Some(index) => {
                if cell.status == CellStatus::NotChecked {
                    self.ships[index].record_hit();
                    self.cells_hit += 1;
                }
                self.cells[at.row][at.col].status = CellStatus::Hit;
                if !self.ships[index].is_sunk() {
                    ShotOutcome::Hit
                } else if self.all_sunk() {
                    ShotOutcome::Won
                } else {
                    ShotOutcome::Sunk
                }
            }
        };
        debug!("shot at {}: {:?}", at, outcome);
        outcome
    }

    /// Propose endpoints for a random valid placement of `ship_index`, or
    /// `None` when 100 attempts found no spot.
    pub fn random_placement<R: Rng>(&self, rng: &mut R, ship_index: usize) -> Option<(Coord, Coord)> {
        let len = self.ships[ship_index].length();
        for _ in 0..100 {
            let horizontal: bool = rng.random();
            let (a, b) = if horizontal {
                let row = rng.random_range(0..BOARD_SIZE);
                let col = rng.random_range(0..=BOARD_SIZE - len);
                (Coord::new(row, col), Coord::new(row, col + len - 1))
            } else {
                let row = rng.random_range(0..=BOARD_SIZE - len);
                let col = rng.random_range(0..BOARD_SIZE);
                (Coord::new(row, col), Coord::new(row + len - 1, col))
            };
            if self.validate_span(ship_index, a, b).is_ok() {
                return Some((a, b));
            }
        }
        None
    }
}
