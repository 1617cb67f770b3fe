use seabattle::{render_board, Board, Coord, ShotOutcome, BOARD_SIZE, NUM_SHIPS};

fn coord(text: &str) -> Coord {
    Coord::parse(text).unwrap()
}

#[test]
fn empty_board_renders_headers_and_unknown_cells() {
    let board = Board::new();
    let text = render_board(&board, true);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), BOARD_SIZE + 1);
    assert_eq!(lines[0], "  1 2 3 4 5 6 7 8 9 10");
    assert_eq!(lines[1], "A ~ ~ ~ ~ ~ ~ ~ ~ ~ ~");
    assert_eq!(lines[10], "J ~ ~ ~ ~ ~ ~ ~ ~ ~ ~");
}

#[test]
fn neither_view_reveals_unshot_ships() {
    let mut board = Board::new();
    board
        .place_ship(NUM_SHIPS - 1, coord("A1"), coord("A2"))
        .unwrap();
    let fogged = render_board(&board, true);
    let own = render_board(&board, false);
    assert_eq!(fogged, own);
    assert!(!fogged.contains('X'));
    assert!(!fogged.contains('M'));
    assert_eq!(fogged.lines().nth(1).unwrap(), "A ~ ~ ~ ~ ~ ~ ~ ~ ~ ~");
}

#[test]
fn shots_show_up_in_both_views() {
    let mut board = Board::new();
    board
        .place_ship(NUM_SHIPS - 1, coord("A1"), coord("A2"))
        .unwrap();
    assert_eq!(board.fire(coord("A1")), ShotOutcome::Hit);
    assert_eq!(board.fire(coord("B5")), ShotOutcome::Miss);
    for fog in [true, false] {
        let text = render_board(&board, fog);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "A X ~ ~ ~ ~ ~ ~ ~ ~ ~");
        assert_eq!(lines[2], "B ~ ~ ~ ~ M ~ ~ ~ ~ ~");
    }
}

#[test]
fn rendering_does_not_mutate_the_board() {
    let mut board = Board::new();
    board
        .place_ship(NUM_SHIPS - 1, coord("D4"), coord("E4"))
        .unwrap();
    board.fire(coord("D4"));
    let first = render_board(&board, true);
    let second = render_board(&board, true);
    assert_eq!(first, second);
    assert_eq!(board.cells_hit(), 1);
}
