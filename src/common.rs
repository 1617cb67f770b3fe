//! Common types for the rules engine: placement errors and shot outcomes.

use core::fmt;

/// Result of resolving one shot on the defender's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed on open water.
    Miss,
    /// Shot hit an undepleted ship.
    Hit,
    /// The hit completed a ship.
    Sunk,
    /// The hit completed the last ship; the firer has won.
    Won,
}

/// Reasons a placement request (or a shot coordinate) is rejected.
/// Every variant re-prompts the player; none of them mutate any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// Input did not parse to cells on the board.
    BadCoordinates,
    /// Endpoints identical, or differing in both row and column.
    BadLocation,
    /// Span between the endpoints does not match the ship's length.
    BadLength(&'static str),
    /// A span cell touches a cell of another ship.
    TooClose,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::BadCoordinates => write!(f, "You entered the wrong coordinates!"),
            PlaceError::BadLocation => write!(f, "Wrong ship location!"),
            PlaceError::BadLength(name) => write!(f, "Wrong length of the {}!", name),
            PlaceError::TooClose => write!(f, "You placed it too close to another one."),
        }
    }
}
