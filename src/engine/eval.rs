use crate::engine::config::*;
use crate::engine::Score;
use crate::moves::*;

/// Signature shared by evaluators; `searcher` is the side being maximised.
pub type EvalFn = fn(&Position, Player) -> Score;

// (searcher's score, opponent's score)
#[inline(always)]
fn split_scores(pos: &Position, searcher: Player) -> (i64, i64) {
    (
        pos.score_of(searcher) as i64,
        pos.score_of(searcher.other()) as i64,
    )
}

/// Heuristic value of `pos` from `searcher`'s point of view.
///
/// Near-terminal positions (number <= 10) are scored by the final outcome,
/// with the bank given to whoever moved into the node, and offset by
/// `WIN_OFFSET` so any win outranks any unfinished line. Other positions
/// combine the score difference and the bank, pushed away from zero by how
/// close the number is to the end, plus a bonus for a divide-by-3 being
/// available to the side on move.
pub fn evaluate(pos: &Position, searcher: Player) -> Score {
    let (mut own, mut opp) = split_scores(pos, searcher);

    if pos.is_terminal() {
        // not maximizing here means the searcher made the last move
        if !pos.maximizing {
            own += pos.bank as i64;
        } else {
            opp += pos.bank as i64;
        }
        return final_score(own - opp);
    }

    let diff = own - opp + pos.bank as i64;
    // in floating point: numbers past i64::MAX must not wrap
    let proximity = (PROXIMITY_ORIGIN - pos.number as Score) / PROXIMITY_SCALE;
    let mut score = if diff > 0 {
        diff as Score + proximity
    } else if diff < 0 {
        diff as Score - proximity
    } else {
        0.0
    };

    if pos.legal_moves().contains(Divisor::Three) {
        if pos.maximizing {
            score += THREE_BONUS;
        } else {
            score -= THREE_BONUS;
        }
    }
    score
}

#[inline(always)]
fn final_score(diff: i64) -> Score {
    if diff > 0 {
        WIN_OFFSET + diff as Score
    } else if diff < 0 {
        -WIN_OFFSET + diff as Score
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(number: Number, score_a: Points, score_b: Points, bank: Points, maximizing: bool) -> Position {
        Position {
            number,
            score_a,
            score_b,
            bank,
            ply: if maximizing { 0 } else { 1 },
            maximizing,
        }
    }

    #[test]
    fn terminal_bank_goes_to_last_mover() {
        // searcher just moved: the bank is theirs
        let pos = at(6, 3, 2, 4, false);
        assert_eq!(evaluate(&pos, Player::A), 1005.0);
        // opponent just moved
        let pos = at(6, 3, 2, 4, true);
        assert_eq!(evaluate(&pos, Player::A), -1003.0);
        assert_eq!(evaluate(&pos, Player::B), -1005.0);
    }

    #[test]
    fn terminal_draw_is_zero() {
        let pos = at(4, 5, 3, 2, true);
        assert_eq!(evaluate(&pos, Player::A), 0.0);
    }

    #[test]
    fn proximity_pushes_away_from_zero() {
        let pos = at(29000, 1, 0, 0, true);
        assert_eq!(evaluate(&pos, Player::A), 1.0 + 1.0);

        let pos = at(20000, 0, 2, 0, true);
        assert_eq!(evaluate(&pos, Player::A), -2.0 - 10.0);
    }

    #[test]
    fn zero_difference_gets_no_proximity() {
        let pos = at(20000, 2, 2, 0, true);
        assert_eq!(evaluate(&pos, Player::A), 0.0);
    }

    #[test]
    fn divide_by_three_bonus_follows_perspective() {
        let max_node = at(27000, 0, 0, 0, true);
        assert_eq!(evaluate(&max_node, Player::A), 3.0);
        let min_node = at(27000, 0, 0, 0, false);
        assert_eq!(evaluate(&min_node, Player::A), -3.0);
    }

    #[test]
    fn huge_numbers_stay_finite() {
        let pos = at(1 << 63, 1, 0, 0, true);
        let score = evaluate(&pos, Player::A);
        assert!(score.is_finite());
        // far above the origin the nudge turns negative
        assert!(score < -1e15);

        // 2^64 - 1 is divisible by 3
        let pos = at(std::u64::MAX, 0, 0, 0, false);
        assert_eq!(evaluate(&pos, Player::B), -THREE_BONUS);
    }

    #[test]
    fn bank_counts_for_searcher_before_the_end() {
        let pos = at(29000, 0, 0, 2, false);
        assert_eq!(evaluate(&pos, Player::B), 2.0 + 1.0);
    }
}
