use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tile_merge::{Board, BoardState, Direction};

proptest! {
    #[test]
    fn board_state_roundtrip(seed in any::<u64>(), moves in 0..40usize) {
        let mut board = Board::with_seed(seed);
        for i in 0..moves {
            board.apply(Direction::ALL[i % 4]);
        }
        let state = board.state();
        let bytes = bincode::serialize(&state).unwrap();
        let decoded: BoardState = bincode::deserialize(&bytes).unwrap();
        let restored = Board::from_state(decoded, SmallRng::seed_from_u64(seed));
        prop_assert_eq!(board.state(), restored.state());
        prop_assert_eq!(board.legal_moves(), restored.legal_moves());
    }
}

#[test]
fn board_state_json_layout() {
    let mut board = Board::with_seed(0);
    board
        .set_grid(&[[2u32, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]])
        .unwrap();
    let value = serde_json::to_value(board.state()).unwrap();
    assert_eq!(value["score"], 0);
    assert_eq!(value["status"], "Running");
    assert_eq!(value["grid"][0][0], 2);
    assert_eq!(value["grid"][3][3], 4);
}
