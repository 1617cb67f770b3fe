use seabattle::{Board, Coord, ShotOutcome, NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS};

#[test]
fn fleet_is_the_fixed_five() {
    let names: Vec<&str> = SHIPS.iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        ["Aircraft Carrier", "Battleship", "Submarine", "Cruiser", "Destroyer"]
    );
    let lengths: Vec<usize> = SHIPS.iter().map(|s| s.length()).collect();
    assert_eq!(lengths, [5, 4, 3, 3, 2]);
    assert_eq!(NUM_SHIPS, SHIPS.len());
    assert_eq!(
        TOTAL_SHIP_CELLS,
        SHIPS.iter().map(|s| s.length()).sum::<usize>()
    );
}

#[test]
fn new_board_fleet_is_undamaged() {
    let board = Board::new();
    assert_eq!(board.ships().len(), NUM_SHIPS);
    assert!(board.ships().iter().all(|s| s.hits() == 0 && !s.is_sunk()));
    assert_eq!(board.cells_hit(), 0);
    assert_eq!(board.cells_total(), TOTAL_SHIP_CELLS);
}

#[test]
fn destroyer_sinks_after_two_hits() {
    let mut board = Board::new();
    let destroyer = NUM_SHIPS - 1;
    board
        .place_ship(destroyer, Coord::new(0, 0), Coord::new(0, 1))
        .unwrap();
    assert_eq!(board.fire(Coord::new(0, 0)), ShotOutcome::Hit);
    assert_eq!(board.ships()[destroyer].hits(), 1);
    assert!(!board.ships()[destroyer].is_sunk());
    assert_eq!(board.fire(Coord::new(0, 1)), ShotOutcome::Sunk);
    assert_eq!(board.ships()[destroyer].hits(), 2);
    assert!(board.ships()[destroyer].is_sunk());
}
