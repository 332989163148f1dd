use crate::alg::Alg;
use crate::facelet::{Face, FaceletCube};
use crate::moves::Move;

/// Corner positions, named by their faces in clockwise sticker order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Corner {
    Urf,
    Ufl,
    Ulb,
    Ubr,
    Dfr,
    Dlf,
    Dbl,
    Drb,
}

/// Edge positions. The last four (FR, FL, BL, BR) form the E slice between
/// the U and D layers; phase 1 of the solver herds them back there.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Edge {
    Ur,
    Uf,
    Ul,
    Ub,
    Dr,
    Df,
    Dl,
    Db,
    Fr,
    Fl,
    Bl,
    Br,
}

impl Corner {
    pub const ALL: [Corner; 8] = [
        Corner::Urf,
        Corner::Ufl,
        Corner::Ulb,
        Corner::Ubr,
        Corner::Dfr,
        Corner::Dlf,
        Corner::Dbl,
        Corner::Drb,
    ];
}

impl Edge {
    pub const ALL: [Edge; 12] = [
        Edge::Ur,
        Edge::Uf,
        Edge::Ul,
        Edge::Ub,
        Edge::Dr,
        Edge::Df,
        Edge::Dl,
        Edge::Db,
        Edge::Fr,
        Edge::Fl,
        Edge::Bl,
        Edge::Br,
    ];
}

/// Indices into the 54-facelet array for each corner position, in clockwise
/// order starting from the U/D sticker.
pub(crate) const CORNER_FACELETS: [[usize; 3]; 8] = [
    [8, 9, 20],
    [6, 18, 38],
    [0, 36, 47],
    [2, 45, 11],
    [29, 26, 15],
    [27, 44, 24],
    [33, 53, 42],
    [35, 17, 51],
];

/// The face each corner sticker shows in the solved cube, same order as
/// `CORNER_FACELETS`.
pub(crate) const CORNER_FACES: [[Face; 3]; 8] = [
    [Face::U, Face::R, Face::F],
    [Face::U, Face::F, Face::L],
    [Face::U, Face::L, Face::B],
    [Face::U, Face::B, Face::R],
    [Face::D, Face::F, Face::R],
    [Face::D, Face::L, Face::F],
    [Face::D, Face::B, Face::L],
    [Face::D, Face::R, Face::B],
];

pub(crate) const EDGE_FACELETS: [[usize; 2]; 12] = [
    [5, 10],
    [7, 19],
    [3, 37],
    [1, 46],
    [32, 16],
    [28, 25],
    [30, 43],
    [34, 52],
    [23, 12],
    [21, 41],
    [50, 39],
    [48, 14],
];

pub(crate) const EDGE_FACES: [[Face; 2]; 12] = [
    [Face::U, Face::R],
    [Face::U, Face::F],
    [Face::U, Face::L],
    [Face::U, Face::B],
    [Face::D, Face::R],
    [Face::D, Face::F],
    [Face::D, Face::L],
    [Face::D, Face::B],
    [Face::F, Face::R],
    [Face::F, Face::L],
    [Face::B, Face::L],
    [Face::B, Face::R],
];

/// A cube on the cubie level: where each corner and edge sits and how it is
/// twisted or flipped. Moves and solver heuristics work here; the facelet
/// grid only appears at the boundary. Corner orientations are twists mod 3,
/// edge orientations flips mod 2.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CubieCube {
    pub cp: [Corner; 8],
    pub co: [u8; 8],
    pub ep: [Edge; 12],
    pub eo: [u8; 12],
}

use Corner::*;
use Edge::*;

/// The six clockwise quarter turns as cubie transforms, in U R F D L B
/// order. Half and counterclockwise turns are compositions of these.
const BASIC_MOVES: [CubieCube; 6] = [
    // U
    CubieCube {
        cp: [Ubr, Urf, Ufl, Ulb, Dfr, Dlf, Dbl, Drb],
        co: [0; 8],
        ep: [Ub, Ur, Uf, Ul, Dr, Df, Dl, Db, Fr, Fl, Bl, Br],
        eo: [0; 12],
    },
    // R
    CubieCube {
        cp: [Dfr, Ufl, Ulb, Urf, Drb, Dlf, Dbl, Ubr],
        co: [2, 0, 0, 1, 1, 0, 0, 2],
        ep: [Fr, Uf, Ul, Ub, Br, Df, Dl, Db, Dr, Fl, Bl, Ur],
        eo: [0; 12],
    },
    // F
    CubieCube {
        cp: [Ufl, Dlf, Ulb, Ubr, Urf, Dfr, Dbl, Drb],
        co: [1, 2, 0, 0, 2, 1, 0, 0],
        ep: [Ur, Fl, Ul, Ub, Dr, Fr, Dl, Db, Uf, Df, Bl, Br],
        eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
    },
    // D
    CubieCube {
        cp: [Urf, Ufl, Ulb, Ubr, Dlf, Dbl, Drb, Dfr],
        co: [0; 8],
        ep: [Ur, Uf, Ul, Ub, Df, Dl, Db, Dr, Fr, Fl, Bl, Br],
        eo: [0; 12],
    },
    // L
    CubieCube {
        cp: [Urf, Ulb, Dbl, Ubr, Dfr, Ufl, Dlf, Drb],
        co: [0, 1, 2, 0, 0, 2, 1, 0],
        ep: [Ur, Uf, Bl, Ub, Dr, Df, Fl, Db, Fr, Ul, Dl, Br],
        eo: [0; 12],
    },
    // B
    CubieCube {
        cp: [Urf, Ufl, Ubr, Drb, Dfr, Dlf, Ulb, Dbl],
        co: [0, 0, 1, 2, 0, 0, 2, 1],
        ep: [Ur, Uf, Ul, Br, Dr, Df, Dl, Bl, Fr, Fl, Ub, Db],
        eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
    },
];

impl CubieCube {
    pub const SOLVED: CubieCube = CubieCube {
        cp: Corner::ALL,
        co: [0; 8],
        ep: Edge::ALL,
        eo: [0; 12],
    };

    /// Group composition: the transform of `self` followed by the transform
    /// of `other`. Orientations propagate through the permutation.
    #[must_use]
    pub fn multiply(&self, other: &CubieCube) -> CubieCube {
        let mut result = CubieCube::SOLVED;
        for i in 0..8 {
            let from = other.cp[i] as usize;
            result.cp[i] = self.cp[from];
            result.co[i] = (self.co[from] + other.co[i]) % 3;
        }
        for i in 0..12 {
            let from = other.ep[i] as usize;
            result.ep[i] = self.ep[from];
            result.eo[i] = (self.eo[from] + other.eo[i]) % 2;
        }
        result
    }

    #[must_use]
    pub fn inverse(&self) -> CubieCube {
        let mut result = CubieCube::SOLVED;
        for i in 0..8 {
            result.cp[self.cp[i] as usize] = Corner::ALL[i];
        }
        for i in 0..8 {
            result.co[i] = (3 - self.co[result.cp[i] as usize]) % 3;
        }
        for i in 0..12 {
            result.ep[self.ep[i] as usize] = Edge::ALL[i];
        }
        for i in 0..12 {
            result.eo[i] = self.eo[result.ep[i] as usize];
        }
        result
    }

    /// Applies one face turn. Pure: the input is untouched and equal inputs
    /// always produce equal outputs.
    #[must_use]
    pub fn apply(&self, m: Move) -> CubieCube {
        let basic = &BASIC_MOVES[m.face() as usize];
        let mut result = *self;
        for _ in 0..m.turns() {
            result = result.multiply(basic);
        }
        result
    }

    /// Applies a move sequence left to right.
    #[must_use]
    pub fn apply_alg(&self, alg: &Alg) -> CubieCube {
        alg.moves().iter().fold(*self, |cube, &m| cube.apply(m))
    }

    pub fn is_solved(&self) -> bool {
        *self == CubieCube::SOLVED
    }
}

impl From<&CubieCube> for FaceletCube {
    /// Renders the cubie state with canonical colors. Total: every cubie
    /// cube has a facelet form, unlike the reverse direction which goes
    /// through the validator.
    fn from(cube: &CubieCube) -> FaceletCube {
        let mut facelets = FaceletCube::SOLVED;
        for (i, corner_facelets) in CORNER_FACELETS.iter().enumerate() {
            let piece = cube.cp[i] as usize;
            let twist = cube.co[i] as usize;
            for (k, &facelet) in corner_facelets.iter().enumerate() {
                facelets.0[facelet] = CORNER_FACES[piece][(k + 3 - twist) % 3].color();
            }
        }
        for (i, edge_facelets) in EDGE_FACELETS.iter().enumerate() {
            let piece = cube.ep[i] as usize;
            let flip = cube.eo[i] as usize;
            for (k, &facelet) in edge_facelets.iter().enumerate() {
                facelets.0[facelet] = EDGE_FACES[piece][(k + flip) % 2].color();
            }
        }
        facelets
    }
}
