use std::fmt;
use std::str::FromStr;

use crate::engine::config::{BANK_MODULUS, TERMINAL_THRESHOLD};
use crate::error::NumdivError;

/*
A position is one snapshot of the shared number, both scores and the bank.
Players are absolute labels: either one may be the searcher or move first,
and only the `interface` console fixes player 1 (A) to open the game. Whose
interest the search optimises at a node is tracked separately by the
`maximizing` flag, which flips every ply.
*/
pub type Number = u64;
pub type Points = u32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    A = 0,
    B = 1,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "player 1"),
            Self::B => write!(f, "player 2"),
        }
    }
}

impl FromStr for Player {
    type Err = NumdivError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "1" | "p1" | "player1" => Ok(Player::A),
            "b" | "2" | "p2" | "player2" => Ok(Player::B),
            other => Err(NumdivError::UnknownPlayer(other.to_string())),
        }
    }
}

/// A move: divide the shared number by 2 or by 3.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Divisor {
    Two = 2,
    Three = 3,
}

impl Divisor {
    /// Fixed exploration order. Ties resolve to the earlier entry.
    pub const ALL: [Divisor; 2] = [Divisor::Two, Divisor::Three];

    #[inline(always)]
    pub fn value(self) -> Number {
        self as Number
    }

    #[inline(always)]
    pub fn divides(self, number: Number) -> bool {
        number % self.value() == 0
    }

    pub fn from_value(value: u64) -> Result<Divisor, NumdivError> {
        match value {
            2 => Ok(Divisor::Two),
            3 => Ok(Divisor::Three),
            _ => Err(NumdivError::InvalidDivisor(value)),
        }
    }

    // 2 pays the player who did not move, 3 pays the mover
    #[inline(always)]
    pub fn beneficiary(self, mover: Player) -> Player {
        match self {
            Divisor::Two => mover.other(),
            Divisor::Three => mover,
        }
    }

    #[inline(always)]
    pub fn points(self) -> Points {
        self as Points
    }
}

impl fmt::Display for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Divisor {
    type Err = NumdivError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .trim()
            .parse()
            .map_err(|_| NumdivError::UnknownDivisor(s.trim().to_string()))?;
        Divisor::from_value(value)
    }
}

/// Legal divisors at a position, yielded in the order 2 then 3.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Moves {
    mask: u8,
}

impl Moves {
    fn new() -> Moves {
        Moves { mask: 0 }
    }

    fn add(&mut self, d: Divisor) {
        self.mask |= Self::bit(d);
    }

    #[inline(always)]
    fn bit(d: Divisor) -> u8 {
        match d {
            Divisor::Two => 0b01,
            Divisor::Three => 0b10,
        }
    }

    pub fn size(&self) -> u32 {
        self.mask.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn contains(&self, d: Divisor) -> bool {
        self.mask & Self::bit(d) != 0
    }
}

impl Iterator for Moves {
    type Item = Divisor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == 0 {
            return None;
        }
        let d = if self.mask & 0b01 != 0 {
            Divisor::Two
        } else {
            Divisor::Three
        };
        self.mask &= !Self::bit(d);
        return Some(d);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub number: Number,
    pub score_a: Points,
    pub score_b: Points,
    pub bank: Points,
    // divisions applied since the root of the current search
    pub ply: u32,
    pub maximizing: bool,
}

impl Position {
    /// Root of a search call. The searching side is always the maximizer.
    pub fn root(number: Number, score_a: Points, score_b: Points, bank: Points) -> Position {
        Position {
            number,
            score_a,
            score_b,
            bank,
            ply: 0,
            maximizing: true,
        }
    }

    /// At or below the threshold no further division is attempted.
    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.number <= TERMINAL_THRESHOLD
    }

    pub fn score_of(&self, player: Player) -> Points {
        match player {
            Player::A => self.score_a,
            Player::B => self.score_b,
        }
    }

    pub(crate) fn score_mut(&mut self, player: Player) -> &mut Points {
        match player {
            Player::A => &mut self.score_a,
            Player::B => &mut self.score_b,
        }
    }

    pub fn legal_moves(&self) -> Moves {
        let mut moves = Moves::new();
        for &d in Divisor::ALL.iter() {
            if d.divides(self.number) {
                moves.add(d);
            }
        }
        moves
    }

    /// Position after `mover` divides by `d`. Does not check legality.
    pub fn child(&self, d: Divisor, mover: Player) -> Position {
        debug_assert!(d.divides(self.number));
        let mut next = *self;
        next.number = self.number / d.value();
        // scores and bank saturate instead of wrapping
        let score = next.score_mut(d.beneficiary(mover));
        *score = score.saturating_add(d.points());
        if next.number % BANK_MODULUS == 0 {
            next.bank = next.bank.saturating_add(1);
        }
        next.ply = self.ply + 1;
        next.maximizing = !self.maximizing;
        next
    }

    /// Successors in the fixed order [2, 3]; empty when nothing divides.
    pub fn expand(&self, mover: Player) -> Vec<(Divisor, Position)> {
        self.legal_moves()
            .map(|d| (d, self.child(d, mover)))
            .collect()
    }
}

/// Absolute player moving at `ply` when `searcher` moves at ply 0.
#[inline(always)]
pub fn mover_identity(ply: u32, searcher: Player) -> Player {
    if ply % 2 == 0 {
        searcher
    } else {
        searcher.other()
    }
}

/// Search perspective at `ply`; flips every single move.
#[inline(always)]
pub fn maximizing_at(ply: u32, root_maximizing: bool) -> bool {
    root_maximizing ^ (ply % 2 == 1)
}

// number of positions exactly `depth` plies away. Lines that reach the
// terminal threshold or a dead end earlier contribute nothing.
pub fn perft(depth: u16, pos: &Position, searcher: Player) -> u64 {
    if depth == 0 {
        return 1;
    }
    if pos.is_terminal() {
        return 0;
    }

    let mover = mover_identity(pos.ply, searcher);
    let mut count = 0;
    for (_, child) in pos.expand(mover) {
        debug_assert!(child.number < pos.number);
        count += perft(depth - 1, &child, searcher);
    }
    count
}
