use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::facelet::Face;

/// The 18 face turns in their fixed canonical order. Search move ordering,
/// tie-breaking and the same-axis pruning arithmetic all rely on this order:
/// `index / 3` is the face, `index % 3 + 1` the quarter-turn count.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Move {
    U1,
    U2,
    U3,
    R1,
    R2,
    R3,
    F1,
    F2,
    F3,
    D1,
    D2,
    D3,
    L1,
    L2,
    L3,
    B1,
    B2,
    B3,
}

impl Move {
    pub const ALL: [Move; 18] = [
        Move::U1,
        Move::U2,
        Move::U3,
        Move::R1,
        Move::R2,
        Move::R3,
        Move::F1,
        Move::F2,
        Move::F3,
        Move::D1,
        Move::D2,
        Move::D3,
        Move::L1,
        Move::L2,
        Move::L3,
        Move::B1,
        Move::B2,
        Move::B3,
    ];

    pub const fn face(self) -> Face {
        Face::ALL[self as usize / 3]
    }

    /// Clockwise quarter turns, 1..=3 (3 is the counterclockwise turn).
    pub const fn turns(self) -> u8 {
        self as u8 % 3 + 1
    }

    /// `turns` is taken mod 4 and must not be a multiple of 4.
    pub const fn from_face_turns(face: Face, turns: u8) -> Move {
        Move::ALL[face as usize * 3 + (turns % 4) as usize - 1]
    }

    pub const fn inverse(self) -> Move {
        Move::ALL[(self as usize / 3) * 3 + (2 - self as usize % 3)]
    }

    /// Whether `self` may not directly follow `last` in a canonical search
    /// sequence: repeated faces always merge, and opposite-face pairs
    /// commute so only one of their two orders is explored.
    pub const fn redundant_after(self, last: Move) -> bool {
        let diff = last as i8 / 3 - self as i8 / 3;
        diff == 0 || diff == 3
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.turns() {
            1 => "",
            2 => "2",
            _ => "'",
        };
        write!(f, "{}{}", self.face(), suffix)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("`{0}` is not a move in standard face-turn notation")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = match chars.next() {
            Some('U') => Face::U,
            Some('R') => Face::R,
            Some('F') => Face::F,
            Some('D') => Face::D,
            Some('L') => Face::L,
            Some('B') => Face::B,
            _ => return Err(ParseMoveError(s.to_owned())),
        };
        let turns = match (chars.next(), chars.next()) {
            (None, _) => 1,
            (Some('2'), None) => 2,
            (Some('\''), None) => 3,
            _ => return Err(ParseMoveError(s.to_owned())),
        };
        Ok(Move::from_face_turns(face, turns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_round_trips() {
        for m in Move::ALL {
            assert_eq!(m.to_string().parse::<Move>().unwrap(), m);
        }
        assert_eq!("R'".parse::<Move>().unwrap(), Move::R3);
        assert_eq!("F2".parse::<Move>().unwrap(), Move::F2);
        assert!("R2'".parse::<Move>().is_err());
        assert!("M".parse::<Move>().is_err());
    }

    #[test]
    fn parse_errors_name_the_offending_token() {
        let err = "R2'".parse::<Move>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "`R2'` is not a move in standard face-turn notation"
        );
    }

    #[test]
    fn inverses_pair_up() {
        for m in Move::ALL {
            assert_eq!(m.inverse().inverse(), m);
            assert_eq!(m.inverse().face(), m.face());
            assert_eq!((m.turns() + m.inverse().turns()) % 4, 0);
        }
        assert_eq!(Move::R1.inverse(), Move::R3);
        assert_eq!(Move::U2.inverse(), Move::U2);
    }

    #[test]
    fn redundant_successor_rule() {
        assert!(Move::U1.redundant_after(Move::U3));
        assert!(Move::U1.redundant_after(Move::D2));
        assert!(!Move::D2.redundant_after(Move::U1));
        assert!(!Move::R1.redundant_after(Move::U1));
    }
}
