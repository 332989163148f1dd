use itertools::Itertools;
use thiserror::Error;

use crate::cubie::{
    CORNER_FACELETS, CORNER_FACES, Corner, CubieCube, EDGE_FACELETS, EDGE_FACES, Edge,
};
use crate::facelet::{Color, Face, FaceletCube};

/// Why a facelet assignment is not a legal, reachable cube. Any state
/// rejected here is physically unreachable by face turns and must not be
/// handed to the solver.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected 9 {color:?} facelets, found {count}")]
    ColorCount { color: Color, count: usize },
    #[error("{color:?} appears on more than one center facelet")]
    DuplicateCenter { color: Color },
    #[error("a {0} position shows a sticker combination that matches no physical piece")]
    UnmatchedPiece(&'static str),
    #[error("the same {0} piece appears more than once")]
    RepeatedPiece(&'static str),
    #[error("cubie permutation has odd swap parity, which no move sequence can produce")]
    PermutationParity,
    #[error(
        "piece orientations are unreachable: corner twists sum to {twist_sum} (mod 3), \
         edge flips to {flip_sum} (mod 2)"
    )]
    Orientation { twist_sum: u8, flip_sum: u8 },
}

/// Checks that a captured or manually entered facelet assignment is a legal
/// cube and derives its cubie form. Colors are interpreted relative to the
/// six centers, so a cube scanned in any spatial orientation validates
/// against its own centers.
///
/// # Errors
///
/// The checks run in order: color counts, distinct centers, piece
/// extraction, permutation parity, orientation sums. See `ValidationError`.
pub fn validate(facelets: &FaceletCube) -> Result<CubieCube, ValidationError> {
    let counts = facelets.facelets().iter().counts();
    for color in Color::ALL {
        let count = counts.get(&color).copied().unwrap_or(0);
        if count != 9 {
            return Err(ValidationError::ColorCount { color, count });
        }
    }

    // The centers define the color→face mapping for every other sticker.
    let mut color_to_face = [None; 6];
    for face in Face::ALL {
        let color = facelets.center(face);
        if color_to_face[color as usize].replace(face).is_some() {
            return Err(ValidationError::DuplicateCenter { color });
        }
    }
    let label = |facelet: usize| -> Face {
        let color = facelets.facelets()[facelet];
        // All six centers are distinct, so every color is mapped.
        color_to_face[color as usize].unwrap()
    };

    let mut cube = CubieCube::SOLVED;
    let mut corner_seen = [false; 8];
    for (i, corner_facelets) in CORNER_FACELETS.iter().enumerate() {
        let stickers = corner_facelets.map(label);
        let Some(twist) = (0..3).find(|&k| stickers[k] == Face::U || stickers[k] == Face::D)
        else {
            return Err(ValidationError::UnmatchedPiece("corner"));
        };
        let shown = [
            stickers[twist],
            stickers[(twist + 1) % 3],
            stickers[(twist + 2) % 3],
        ];
        let Some(piece) = CORNER_FACES.iter().position(|faces| *faces == shown) else {
            return Err(ValidationError::UnmatchedPiece("corner"));
        };
        if std::mem::replace(&mut corner_seen[piece], true) {
            return Err(ValidationError::RepeatedPiece("corner"));
        }
        cube.cp[i] = Corner::ALL[piece];
        cube.co[i] = twist as u8;
    }

    let mut edge_seen = [false; 12];
    for (i, edge_facelets) in EDGE_FACELETS.iter().enumerate() {
        let stickers = edge_facelets.map(label);
        let found = EDGE_FACES.iter().position(|faces| *faces == stickers);
        let (piece, flip) = match found {
            Some(piece) => (piece, 0),
            None => {
                let swapped = [stickers[1], stickers[0]];
                match EDGE_FACES.iter().position(|faces| *faces == swapped) {
                    Some(piece) => (piece, 1),
                    None => return Err(ValidationError::UnmatchedPiece("edge")),
                }
            }
        };
        if std::mem::replace(&mut edge_seen[piece], true) {
            return Err(ValidationError::RepeatedPiece("edge"));
        }
        cube.ep[i] = Edge::ALL[piece];
        cube.eo[i] = flip;
    }

    let corner_parity = permutation_parity(cube.cp.iter().map(|&c| c as usize));
    let edge_parity = permutation_parity(cube.ep.iter().map(|&e| e as usize));
    if corner_parity != edge_parity {
        return Err(ValidationError::PermutationParity);
    }

    let twist_sum = cube.co.iter().sum::<u8>() % 3;
    let flip_sum = cube.eo.iter().sum::<u8>() % 2;
    if twist_sum != 0 || flip_sum != 0 {
        return Err(ValidationError::Orientation { twist_sum, flip_sum });
    }

    Ok(cube)
}

/// True for even permutations.
fn permutation_parity(perm: impl Iterator<Item = usize>) -> bool {
    let perm = perm.collect::<Vec<_>>();
    let mut inversions = 0;
    for i in 0..perm.len() {
        for j in i + 1..perm.len() {
            if perm[j] < perm[i] {
                inversions += 1;
            }
        }
    }
    inversions % 2 == 0
}
