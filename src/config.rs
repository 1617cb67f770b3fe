use crate::ship::ShipType;

/// Edge length of the square grid.
pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
/// The fixed fleet, in the order ships are placed during setup.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Aircraft Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Submarine", 3),
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
];
/// Cells covered by a complete fleet (sum of the lengths above).
pub const TOTAL_SHIP_CELLS: usize = 17;
