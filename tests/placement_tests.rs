use seabattle::{
    generate_random_board, place_random_ship, Board, CellState, Coordinate, BOARD_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_place_random_ship_on_empty_board() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new();
    assert!(place_random_ship(&mut rng, &mut board, 3));
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.ships()[0].length(), 3);
    let intact = board
        .cells()
        .filter(|c| c.state() == CellState::ShipIntact)
        .count();
    assert_eq!(intact, 3);
}

#[test]
fn test_place_random_ship_fails_without_empty_cells() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new();
    for y in 0..BOARD_SIZE as i32 {
        for x in 0..BOARD_SIZE as i32 {
            board.shoot(Coordinate::new(x, y)).unwrap();
        }
    }
    assert!(board.empty_cells().is_empty());
    assert!(!place_random_ship(&mut rng, &mut board, 1));
    assert!(board.ships().is_empty());
}

#[test]
fn test_place_random_ship_gives_up_when_nothing_fits() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = Board::new();
    assert!(!place_random_ship(&mut rng, &mut board, BOARD_SIZE as usize + 1));
    assert!(board.ships().is_empty());
    assert_eq!(board.empty_cells().len(), 36);
}

#[test]
fn test_generate_many_boards() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for _ in 0..50 {
        let board = generate_random_board(&mut rng).unwrap();
        assert_eq!(board.alive_count(), 7);
        assert!(!board.is_hidden());
        assert!(board.cells().all(|c| c.state() != CellState::Miss));
    }
}
