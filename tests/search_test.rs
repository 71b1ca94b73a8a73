use numdiv::engine::config::*;
use numdiv::engine::*;
use numdiv::moves::*;
mod common;

const SCORE_SETS: [(Points, Points, Points); 3] = [(0, 0, 0), (5, 2, 1), (0, 7, 3)];

fn both(
    number: Number,
    a: Points,
    b: Points,
    bank: Points,
    computer: Player,
    depth: u32,
) -> (SearchResult, SearchResult) {
    (
        choose_move(number, a, b, bank, computer, Algorithm::Minimax, Some(depth)),
        choose_move(number, a, b, bank, computer, Algorithm::AlphaBeta, Some(depth)),
    )
}

#[test]
fn pruning_never_changes_the_answer() {
    common::setup();
    for number in 11..2000 {
        for &computer in &[Player::A, Player::B] {
            for &depth in &[1, 2, 3, 4, 6] {
                for &(a, b, bank) in SCORE_SETS.iter() {
                    let (mm, ab) = both(number, a, b, bank, computer, depth);
                    assert_eq!(mm.best_move, ab.best_move, "{} depth {}", number, depth);
                    assert_eq!(mm.score, ab.score, "{} depth {}", number, depth);
                    assert!(ab.nodes <= mm.nodes);
                }
            }
        }
    }
}

#[test]
fn pruning_equivalence_from_real_starts() {
    common::setup();
    for &number in &[27648, 25920, 20004, 24000, 29994, 21870] {
        for &depth in &[5, 8, 10] {
            for &computer in &[Player::A, Player::B] {
                let (mm, ab) = both(number, 0, 0, 0, computer, depth);
                assert_eq!(mm.best_move, ab.best_move);
                assert_eq!(mm.score, ab.score);
                assert!(ab.nodes <= mm.nodes);
            }
        }
    }
}

#[test]
fn deterministic() {
    common::setup();
    let first = choose_move(25920, 3, 4, 1, Player::B, Algorithm::AlphaBeta, Some(8));
    for _ in 0..5 {
        let again = choose_move(25920, 3, 4, 1, Player::B, Algorithm::AlphaBeta, Some(8));
        assert_eq!(again.best_move, first.best_move);
        assert_eq!(again.score, first.score);
        assert_eq!(again.nodes, first.nodes);
    }
}

#[test]
fn returned_divisor_is_legal() {
    common::setup();
    for number in 11..3000 {
        let res = choose_move(number, 0, 0, 0, Player::A, Algorithm::AlphaBeta, None);
        match res.best_move {
            Some(d) => assert!(d.divides(number)),
            None => {
                assert!(number % 2 != 0 && number % 3 != 0);
                assert_eq!(res.score, std::f64::NEG_INFINITY);
            }
        }
    }
}

#[test]
fn ties_go_to_two() {
    common::setup();
    // one ply with the real evaluator: both scores are pinned at the maximum,
    // so 18 and 12 both read as level with a divide-by-3 left to the opponent
    for &computer in &[Player::A, Player::B] {
        let (mm, ab) = both(36, std::u32::MAX, std::u32::MAX, 0, computer, 1);
        for res in [mm, ab].iter() {
            assert_eq!(res.best_move, Some(Divisor::Two));
            assert_eq!(res.score, -THREE_BONUS);
            assert_eq!(res.nodes, 3);
        }
    }

    // both lines end in a 1001 win three plies down
    let (mm, ab) = both(72, 2, 0, 1, Player::A, 3);
    for res in [mm, ab].iter() {
        assert_eq!(res.best_move, Some(Divisor::Two));
        assert_eq!(res.score, 1001.0);
    }

    // every line loses: nothing improves on -inf and the first move is kept
    let (mm, ab) = both(66, 0, 0, 0, Player::A, 3);
    for res in [mm, ab].iter() {
        assert_eq!(res.best_move, Some(Divisor::Two));
        assert_eq!(res.score, std::f64::NEG_INFINITY);
    }
}

#[test]
fn extreme_inputs_do_not_overflow() {
    common::setup();
    // 18 / 3 = 6 leaves a saturated score still ahead of 18 / 2 = 9
    let res = choose_move(18, std::u32::MAX, 0, 0, Player::A, Algorithm::Minimax, None);
    assert_eq!(res.best_move, Some(Divisor::Three));
    assert_eq!(res.score, WIN_OFFSET + std::u32::MAX as f64);

    let res = choose_move(20, 0, 0, std::u32::MAX, Player::B, Algorithm::AlphaBeta, None);
    assert_eq!(res.best_move, Some(Divisor::Two));

    let res = choose_move(1 << 63, 1, 0, 0, Player::A, Algorithm::Minimax, Some(0));
    assert!(res.score.is_finite());
    let (mm, ab) = both(std::u64::MAX - 3, 0, 0, 0, Player::A, 4);
    assert_eq!(mm.best_move, ab.best_move);
    assert_eq!(mm.score, ab.score);
}

#[test]
fn no_move_when_nothing_divides() {
    common::setup();
    let res = choose_move(49, 0, 0, 0, Player::A, Algorithm::Minimax, None);
    assert_eq!(res.best_move, None);
    let res = choose_move(1667, 4, 2, 3, Player::B, Algorithm::AlphaBeta, None);
    assert_eq!(res.best_move, None);
}

#[test]
fn no_move_once_finished() {
    common::setup();
    for number in 0..=TERMINAL_THRESHOLD {
        let res = choose_move(number, 0, 0, 0, Player::A, Algorithm::Minimax, None);
        assert_eq!(res.best_move, None);
        assert_eq!(res.nodes, 0);
    }
}

#[test]
fn near_terminal_choices() {
    common::setup();
    // 18 / 3 = 6 ends the game three points up
    let res = choose_move(18, 0, 0, 0, Player::A, Algorithm::Minimax, None);
    assert_eq!(res.best_move, Some(Divisor::Three));
    assert_eq!(res.score, 1003.0);
    assert_eq!(res.nodes, 3);

    // 20 / 2 = 10 is forced: the opponent gets 2, the bank pays 1
    let res = choose_move(20, 0, 0, 0, Player::A, Algorithm::AlphaBeta, None);
    assert_eq!(res.best_move, Some(Divisor::Two));
    assert_eq!(res.score, -1001.0);
}

#[test]
fn default_depth_search() {
    common::setup();
    let res = choose_move(27648, 0, 0, 0, Player::A, Algorithm::Minimax, None);
    assert_eq!(res.best_move, Some(Divisor::Three));
    assert!((res.score - 34.488).abs() < 1e-9);
    assert_eq!(res.nodes, 30);

    let res = choose_move(27648, 0, 0, 0, Player::B, Algorithm::AlphaBeta, Some(8));
    assert_eq!(res.best_move, Some(Divisor::Three));
    assert!((res.score - 34.968).abs() < 1e-9);
}

#[test]
fn trapping_the_opponent() {
    common::setup();
    let (mm, ab) = both(20004, 0, 0, 0, Player::A, DEFAULT_MAX_DEPTH);
    assert_eq!(mm.best_move, Some(Divisor::Two));
    assert_eq!(mm.score, std::f64::INFINITY);
    assert_eq!(ab.best_move, Some(Divisor::Two));
    assert_eq!(mm.nodes, 9);
    assert_eq!(ab.nodes, 6);
}

#[test]
fn players_are_interchangeable() {
    common::setup();
    for &(number, a, b, bank) in &[(25920, 3, 8, 1), (12345, 0, 2, 0), (7776, 9, 9, 4), (29994, 1, 0, 2)] {
        for &depth in &[1, 3, 5] {
            let as_a = choose_move(number, a, b, bank, Player::A, Algorithm::AlphaBeta, Some(depth));
            let as_b = choose_move(number, b, a, bank, Player::B, Algorithm::AlphaBeta, Some(depth));
            assert_eq!(as_a.best_move, as_b.best_move);
            assert_eq!(as_a.score, as_b.score);
        }
    }
}

#[test]
fn worker_with_custom_eval() {
    common::setup();
    fn bank_only(pos: &Position, _: Player) -> Score {
        pos.bank as Score
    }
    // 60 / 2 = 30 and 60 / 3 = 20 both add to the bank; the first wins the tie
    let config = config::SearchConfig::new(Algorithm::AlphaBeta, 1);
    let worker = Worker::new(Player::A, config).with_eval(bank_only);
    let res = search_with(worker, &Position::root(60, 0, 0, 0));
    assert_eq!(res.best_move, Some(Divisor::Two));
    assert_eq!(res.score, 1.0);
}
