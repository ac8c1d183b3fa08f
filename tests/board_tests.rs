use tile_merge::{Board, BoardError, Direction, GameStatus, Grid, INITIAL_TILES, MAX_TILE};

const EMPTY_ROW: [u32; 4] = [0, 0, 0, 0];

fn count_spawnable(grid: &Grid) -> (usize, usize) {
    let twos = grid.iter().flatten().filter(|&&v| v == 2).count();
    let fours = grid.iter().flatten().filter(|&&v| v == 4).count();
    (twos, fours)
}

#[test]
fn test_new_board_is_seeded() {
    let board = Board::with_seed(7);
    assert_eq!(board.status(), GameStatus::Running);
    assert_eq!(board.score(), 0);
    assert_eq!(board.tile_count(), INITIAL_TILES);
    let (twos, fours) = count_spawnable(&board.grid());
    assert_eq!(twos + fours, INITIAL_TILES);
    assert!(!board.legal_moves().is_empty());
}

#[test]
fn test_reset_restores_fresh_game() {
    let mut board = Board::with_seed(11);
    board
        .set_grid(&[[2u32, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]])
        .unwrap();
    board.apply(Direction::Right);
    board.reset();
    assert_eq!(board.status(), GameStatus::Running);
    assert_eq!(board.score(), 0);
    assert_eq!(board.tile_count(), INITIAL_TILES);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Board::with_seed(99);
    let mut b = Board::with_seed(99);
    for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down].repeat(8) {
        assert_eq!(a.apply(dir), b.apply(dir));
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.score(), b.score());
    }
}

#[test]
fn test_set_grid_replaces_grid() {
    let mut board = Board::with_seed(1);
    let grid: Grid = [EMPTY_ROW, [2, 0, 0, 0], [0, 2, 0, 0], EMPTY_ROW];
    board.set_grid(&grid).unwrap();
    assert_eq!(board.grid(), grid);
    assert!(board.legal_moves().is_full());
}

#[test]
fn test_set_grid_rejects_wrong_size() {
    let mut board = Board::with_seed(3);
    let before = board.state();
    let small: [[u32; 3]; 3] = [[2, 0, 0], [0, 0, 0], [0, 0, 2]];
    assert_eq!(
        board.set_grid(&small),
        Err(BoardError::InvalidDimensions { rows: 3, cols: 3 })
    );
    assert_eq!(board.state(), before);

    let wide = vec![vec![0u32; 5]; 4];
    assert_eq!(
        board.set_grid(&wide[..]),
        Err(BoardError::InvalidDimensions { rows: 4, cols: 5 })
    );
    assert_eq!(board.state(), before);
}

#[test]
fn test_set_grid_rejects_invalid_tile() {
    let mut board = Board::with_seed(3);
    let before = board.state();
    let grid: Grid = [[2, 0, 0, 0], [0, 3, 0, 0], EMPTY_ROW, EMPTY_ROW];
    assert_eq!(
        board.set_grid(&grid),
        Err(BoardError::InvalidTile { row: 1, col: 1, value: 3 })
    );
    assert_eq!(board.state(), before);
}

#[test]
fn test_apply_slides_and_spawns_one_tile() {
    let mut board = Board::with_seed(5);
    board
        .set_grid(&[EMPTY_ROW, [2, 0, 0, 0], [0, 2, 0, 0], EMPTY_ROW])
        .unwrap();
    let status = board.apply(Direction::Left);
    assert_eq!(status, GameStatus::Running);
    assert_eq!(board.score(), 0);
    assert_eq!(board.tile_count(), 3);

    let grid = board.grid();
    assert_eq!(grid[1][0], 2);
    assert_eq!(grid[2][0], 2);
    let spawned: Vec<u32> = grid
        .iter()
        .enumerate()
        .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &v)| (r, c, v)))
        .filter(|&(r, c, v)| v != 0 && !((r == 1 || r == 2) && c == 0))
        .map(|(_, _, v)| v)
        .collect();
    assert_eq!(spawned.len(), 1);
    assert!(spawned[0] == 2 || spawned[0] == 4);
}

#[test]
fn test_apply_adds_merge_score() {
    let mut board = Board::with_seed(8);
    board
        .set_grid(&[[2u32, 2, 2, 2], EMPTY_ROW, EMPTY_ROW, EMPTY_ROW])
        .unwrap();
    board.apply(Direction::Left);
    assert_eq!(board.score(), 8);
    let row = board.grid()[0];
    assert_eq!(&row[..2], &[4, 4]);

    board
        .set_grid(&[[2u32, 2, 2, 0], EMPTY_ROW, EMPTY_ROW, EMPTY_ROW])
        .unwrap();
    board.apply(Direction::Left);
    assert_eq!(board.score(), 12);
    assert_eq!(&board.grid()[0][..2], &[4, 2]);
}

#[test]
fn test_illegal_move_is_noop() {
    let mut board = Board::with_seed(13);
    board
        .set_grid(&[[2u32, 4, 0, 0], [8, 0, 0, 0], [16, 2, 8, 0], [4, 0, 0, 0]])
        .unwrap();
    assert!(!board.is_legal(Direction::Left));
    let before = board.state();
    for _ in 0..5 {
        assert_eq!(board.apply(Direction::Left), GameStatus::Running);
        assert_eq!(board.state(), before);
        assert!(!board.legal_moves().contains(Direction::Left));
    }
}

#[test]
fn test_unknown_direction_code_is_noop() {
    let mut board = Board::with_seed(21);
    let before = board.state();
    assert_eq!(board.apply_code(4), GameStatus::Running);
    assert_eq!(board.apply_code(u8::MAX), GameStatus::Running);
    assert_eq!(board.state(), before);
    assert_eq!(
        Direction::try_from(9u8),
        Err(BoardError::UnknownDirection(9))
    );
    assert_eq!(Direction::try_from(2u8), Ok(Direction::Up));
}

#[test]
fn test_terminal_grid_ends_game() {
    let mut board = Board::with_seed(2);
    board
        .set_grid(&[[2u32, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
        .unwrap();
    assert_eq!(board.status(), GameStatus::Ended);
    assert!(!board.is_running());
    let before = board.state();
    for dir in Direction::ALL {
        assert_eq!(board.apply(dir), GameStatus::Ended);
    }
    assert_eq!(board.state(), before);
}

#[test]
fn test_last_spawn_can_end_game() {
    // Moving right frees only (3, 0). A spawned 2 leaves no pairs; a 4 pairs with (3, 1).
    let grid: Grid = [[2, 4, 2, 4], [4, 2, 4, 2], [8, 16, 8, 16], [4, 32, 64, 0]];
    let mut saw_end = false;
    for seed in 0..64 {
        let mut board = Board::with_seed(seed);
        board.set_grid(&grid).unwrap();
        assert_eq!(board.status(), GameStatus::Running);
        let status = board.apply(Direction::Right);
        let after = board.grid();
        assert_eq!(after[3][1..], [4, 32, 64]);
        if after[3][0] == 2 {
            assert_eq!(status, GameStatus::Ended);
            saw_end = true;
        } else {
            assert_eq!(after[3][0], 4);
            assert_eq!(status, GameStatus::Running);
        }
        assert_eq!(board.status(), status);
    }
    assert!(saw_end);
}

#[test]
fn test_spawn_tiles_until_full() {
    let mut board = Board::with_seed(17);
    board.set_grid(&[EMPTY_ROW; 4]).unwrap();
    board.spawn_tiles(1).unwrap();
    assert_eq!(board.tile_count(), 1);
    board.spawn_tiles(3).unwrap();
    assert_eq!(board.tile_count(), 4);
    while board.tile_count() < 16 {
        let before = board.tile_count();
        board.spawn_tiles(2).unwrap();
        assert_eq!(board.tile_count(), before + 2);
    }
    let (twos, fours) = count_spawnable(&board.grid());
    assert_eq!(twos + fours, 16);
}

#[test]
fn test_spawn_over_request_fails_without_changes() {
    let mut board = Board::with_seed(23);
    board
        .set_grid(&[[2u32, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 0]])
        .unwrap();
    let before = board.state();
    assert_eq!(
        board.spawn_tiles(3),
        Err(BoardError::InsufficientSpace {
            requested: 3,
            available: 2
        })
    );
    assert_eq!(board.state(), before);
}

#[test]
fn test_display_lists_status_score_and_rows() {
    let mut board = Board::with_seed(4);
    board
        .set_grid(&[[2u32, 0, 0, 0], EMPTY_ROW, EMPTY_ROW, [0, 0, 0, 4]])
        .unwrap();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "In Progress");
    assert_eq!(lines[1], "Score: 0");
    assert_eq!(lines[2], "[2, 0, 0, 0]");
    assert_eq!(lines[5], "[0, 0, 0, 4]");
}

#[test]
fn test_largest_tiles_merge_without_overflow() {
    const HALF: u32 = MAX_TILE / 2;
    let mut board = Board::with_seed(29);
    board
        .set_grid(&[[HALF; 4], EMPTY_ROW, EMPTY_ROW, EMPTY_ROW])
        .unwrap();
    assert_eq!(board.apply(Direction::Left), GameStatus::Running);
    assert_eq!(&board.grid()[0][..2], &[MAX_TILE, MAX_TILE]);
    assert_eq!(board.score(), 2 * u64::from(MAX_TILE));

    for dir in Direction::ALL.repeat(4) {
        board.apply(dir);
        assert_eq!(board.max_tile(), MAX_TILE);
    }
}

#[test]
fn test_largest_tile_pair_does_not_merge() {
    let mut board = Board::with_seed(31);
    board
        .set_grid(&[[MAX_TILE, MAX_TILE, 0, 0], EMPTY_ROW, EMPTY_ROW, EMPTY_ROW])
        .unwrap();
    assert!(!board.is_legal(Direction::Left));
    let before = board.state();
    board.apply(Direction::Left);
    assert_eq!(board.state(), before);
}

#[test]
fn test_set_grid_keeps_ended_board_ended() {
    let mut board = Board::with_seed(37);
    board
        .set_grid(&[[2u32, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
        .unwrap();
    assert_eq!(board.status(), GameStatus::Ended);

    board
        .set_grid(&[[2u32, 0, 0, 0], EMPTY_ROW, EMPTY_ROW, EMPTY_ROW])
        .unwrap();
    assert_eq!(board.status(), GameStatus::Ended);
    let before = board.state();
    assert_eq!(board.apply(Direction::Right), GameStatus::Ended);
    assert_eq!(board.state(), before);

    board.reset();
    assert_eq!(board.status(), GameStatus::Running);
}

#[test]
fn test_spawned_fours_are_one_in_ten() {
    let mut twos = 0;
    let mut fours = 0;
    for seed in 0..400 {
        let mut board = Board::with_seed(seed);
        board.set_grid(&[EMPTY_ROW; 4]).unwrap();
        board.spawn_tiles(16).unwrap();
        let (t, f) = count_spawnable(&board.grid());
        twos += t;
        fours += f;
    }
    assert_eq!(twos + fours, 400 * 16);
    let share = fours as f64 / (twos + fours) as f64;
    assert!((0.08..0.12).contains(&share), "share of fours {}", share);
}
