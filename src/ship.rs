//! Ship definitions and per-ship damage tracking.

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A fleet member and the damage it has taken so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    hits: usize,
}

impl Ship {
    /// Fresh, undamaged ship of the given type.
    pub fn new(ship_type: ShipType) -> Self {
        Self { ship_type, hits: 0 }
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Cells of this ship that have been hit.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// `true` once every cell of the ship has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.ship_type.length()
    }

    /// Count one newly hit cell. Callers only invoke this the first time
    /// a cell is shot, so the tally can never pass the length.
    pub(crate) fn record_hit(&mut self) {
        debug_assert!(self.hits < self.ship_type.length());
        self.hits += 1;
    }
}
