//! Tests verifying the minimax engine plays tic-tac-toe perfectly.
//!
//! Perfect play means:
//! - Never losing against any opponent
//! - Always exploiting opponent mistakes it is given
//! - Drawing against another perfect player

use oxo_board::{status, Board, GameStatus, Player};
use oxo_minimax::{Minimax, MinimaxConfig, Scoring};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Play a full game between the engine (as `engine_side`) and a seeded
/// random opponent. O moves first, the reference turn order. Returns the
/// final board.
fn play_vs_random(engine_side: Player, seed: u64, scoring: Scoring) -> Board {
    let mut minimax = Minimax::new(MinimaxConfig::with_scoring(scoring));
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut board = Board::standard();
    let mut turn = Player::O;

    while !status(&board).is_terminal() {
        let coord = if turn == engine_side {
            minimax
                .decide(&board, turn)
                .best_move
                .expect("non-terminal position has a move")
        } else {
            let moves = board.available_moves();
            moves[rng.gen_range(0..moves.len())]
        };
        board.apply(coord, turn).expect("chosen moves are legal");
        turn = turn.opposite();
    }
    board
}

#[test]
fn engine_never_loses_moving_first() {
    for seed in 0..20 {
        let board = play_vs_random(Player::O, seed, Scoring::DepthAdjusted);
        if let GameStatus::Won(line) = status(&board) {
            assert_eq!(
                line.player,
                Player::O,
                "engine (O) lost with seed {}. Final board:\n{}",
                seed,
                board
            );
        }
    }
}

#[test]
fn engine_never_loses_moving_second() {
    for seed in 0..50 {
        let board = play_vs_random(Player::X, seed, Scoring::DepthAdjusted);
        if let GameStatus::Won(line) = status(&board) {
            assert_eq!(
                line.player,
                Player::X,
                "engine (X) lost with seed {}. Final board:\n{}",
                seed,
                board
            );
        }
    }
}

#[test]
fn engine_never_loses_with_flat_scoring() {
    for seed in 0..25 {
        let board = play_vs_random(Player::X, seed, Scoring::Flat);
        if let GameStatus::Won(line) = status(&board) {
            assert_eq!(
                line.player,
                Player::X,
                "engine (X, flat scoring) lost with seed {}. Final board:\n{}",
                seed,
                board
            );
        }
    }
}

/// Running `decide` at every ply from the empty board must end in a draw:
/// optimal play from an empty 3x3 board never produces a winner.
#[test]
fn engine_vs_engine_draws() {
    for scoring in [Scoring::DepthAdjusted, Scoring::Flat] {
        let mut minimax = Minimax::new(MinimaxConfig::with_scoring(scoring));
        let mut board = Board::standard();
        let mut turn = Player::O;

        while !status(&board).is_terminal() {
            let coord = minimax
                .decide(&board, turn)
                .best_move
                .expect("non-terminal position has a move");
            board.apply(coord, turn).unwrap();
            turn = turn.opposite();
        }

        assert_eq!(
            status(&board),
            GameStatus::Draw,
            "optimal play should draw, final board:\n{}",
            board
        );
        assert!(board.is_full());
    }
}

/// Same position, same configuration: the decision is reproducible move
/// for move across two separately constructed searchers.
#[test]
fn engine_games_are_deterministic() {
    let play_out = || {
        let mut minimax = Minimax::new(MinimaxConfig::default());
        let mut board = Board::standard();
        let mut turn = Player::O;
        let mut moves = Vec::new();

        while !status(&board).is_terminal() {
            let coord = minimax.decide(&board, turn).best_move.unwrap();
            moves.push(coord);
            board.apply(coord, turn).unwrap();
            turn = turn.opposite();
        }
        moves
    };

    assert_eq!(play_out(), play_out());
}

/// The engine punishes a blunder: O holds opposite corners and the center
/// is open, so taking it completes the main diagonal on the spot.
#[test]
fn engine_exploits_losing_opponent() {
    let board = Board::from_notation("O.X/.../..O").unwrap();
    let mut minimax = Minimax::new(MinimaxConfig::default());

    let decision = minimax.decide(&board, Player::O);
    assert_eq!(decision.best_move, Some(oxo_board::Coord::new(1, 1)));
    assert!(
        decision.score.favors_o(),
        "O should have a forced win, got score {}",
        decision.score
    );
}

mod properties {
    use super::*;
    use oxo_minimax::Decision;
    use proptest::prelude::*;

    /// A board reachable by random legal play. At least two marks keeps
    /// the full-tree searches cheap enough to run hundreds of cases.
    fn arb_live_position() -> impl Strategy<Value = (Board, Player)> {
        (2usize..=7).prop_flat_map(|num_moves| {
            proptest::collection::vec(0usize..9, num_moves).prop_map(|move_indices| {
                let mut board = Board::standard();
                let mut turn = Player::O;
                for idx in move_indices {
                    if status(&board).is_terminal() {
                        break;
                    }
                    let moves = board.available_moves();
                    board.apply(moves[idx % moves.len()], turn).unwrap();
                    turn = turn.opposite();
                }
                (board, turn)
            })
        })
    }

    proptest! {
        /// `decide` never mutates the input board.
        #[test]
        fn prop_decide_leaves_board_intact((board, turn) in arb_live_position()) {
            let before = board.clone();
            Minimax::new(MinimaxConfig::default()).decide(&board, turn);
            prop_assert_eq!(board, before);
        }

        /// Any returned move is legal on the input board, and a move is
        /// returned exactly when the position is non-terminal.
        #[test]
        fn prop_decision_move_is_legal((board, turn) in arb_live_position()) {
            let Decision { best_move, .. } =
                Minimax::new(MinimaxConfig::default()).decide(&board, turn);

            match best_move {
                Some(coord) => {
                    prop_assert!(!status(&board).is_terminal());
                    prop_assert!(board.available_moves().contains(&coord));
                }
                None => prop_assert!(status(&board).is_terminal()),
            }
        }

        /// Two independent searchers agree on every position.
        #[test]
        fn prop_decide_is_deterministic((board, turn) in arb_live_position()) {
            let a = Minimax::new(MinimaxConfig::default()).decide(&board, turn);
            let b = Minimax::new(MinimaxConfig::default()).decide(&board, turn);
            prop_assert_eq!(a, b);
        }
    }
}
