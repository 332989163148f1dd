use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::moves::{Move, ParseMoveError};

/// An ordered move sequence. Concatenation is composition, applied left to
/// right; two sequences are equivalent when they induce the same net cubie
/// transform.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alg(Vec<Move>);

impl Alg {
    pub fn new() -> Alg {
        Alg(Vec::new())
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Composition: `self` followed by `other`.
    #[must_use]
    pub fn compose(&self, other: &Alg) -> Alg {
        Alg(self.0.iter().chain(&other.0).copied().collect())
    }

    /// Reverses the order and inverts each move, so that
    /// `apply(apply(s, a), a.invert()) == s`.
    #[must_use]
    pub fn invert(&self) -> Alg {
        Alg(self.0.iter().rev().map(|m| m.inverse()).collect())
    }
}

impl From<Vec<Move>> for Alg {
    fn from(moves: Vec<Move>) -> Alg {
        Alg(moves)
    }
}

impl FromIterator<Move> for Alg {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Alg {
        Alg(iter.into_iter().collect())
    }
}

impl fmt::Display for Alg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl FromStr for Alg {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(Move::from_str).collect()
    }
}

/// Rewrites a sequence to a shorter equivalent one: adjacent moves on the
/// same face merge (quarter turns add mod 4) and a zero-turn result is
/// deleted, re-exposing the previous move for further merging. The result
/// induces the same net transform and is never longer than the input.
#[must_use]
pub fn optimize(alg: &Alg) -> Alg {
    let mut out: Vec<Move> = Vec::with_capacity(alg.len());
    for &m in alg.moves() {
        let mut pending = Some(m);
        while let (Some(cur), Some(&top)) = (pending, out.last()) {
            if top.face() != cur.face() {
                break;
            }
            out.pop();
            pending = match (top.turns() + cur.turns()) % 4 {
                0 => None,
                turns => Some(Move::from_face_turns(cur.face(), turns)),
            };
        }
        if let Some(cur) = pending {
            out.push(cur);
        }
    }
    Alg(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::CubieCube;

    fn alg(s: &str) -> Alg {
        s.parse().unwrap()
    }

    #[test]
    fn parse_display_round_trip() {
        let a = alg("R U R' U' R' F R2 U' R' U' R U R' F'");
        assert_eq!(a.len(), 14);
        assert_eq!(a.to_string(), "R U R' U' R' F R2 U' R' U' R U R' F'");
    }

    #[test]
    fn same_face_turns_merge() {
        assert_eq!(optimize(&alg("R R")), alg("R2"));
        assert_eq!(optimize(&alg("R R2")), alg("R'"));
        assert_eq!(optimize(&alg("F2 F2")), Alg::new());
        assert_eq!(optimize(&alg("U U U U")), Alg::new());
    }

    #[test]
    fn cancellation_cascades() {
        // The inner pair cancels, then the outer pair becomes adjacent.
        assert_eq!(optimize(&alg("U R R' U'")), Alg::new());
        assert_eq!(optimize(&alg("U R R' U")), alg("U2"));
        assert_eq!(optimize(&alg("F U2 U2 F")), alg("F2"));
    }

    #[test]
    fn optimize_preserves_net_transform() {
        for s in ["R U R' U' R' F R2 U' R' U' R U R' F'", "R R U U' F F2 B D D2 D"] {
            let a = alg(s);
            let b = optimize(&a);
            assert!(b.len() <= a.len());
            assert_eq!(
                CubieCube::SOLVED.apply_alg(&b),
                CubieCube::SOLVED.apply_alg(&a)
            );
        }
    }

    #[test]
    fn invert_round_trips_state() {
        let a = alg("R U2 F' L D B2 R'");
        let scrambled = CubieCube::SOLVED.apply_alg(&a);
        assert_eq!(scrambled.apply_alg(&a.invert()), CubieCube::SOLVED);
    }
}
