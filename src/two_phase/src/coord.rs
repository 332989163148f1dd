//! Coordinate projections of the cubie group. Each coordinate maps a cube
//! onto a small integer range, with a decoder that reconstructs a
//! representative cube from any value in the range; move and pruning tables
//! are built over these ranges instead of the full group.
//!
//! Phase 1 works with twist, flip and the E-slice edge combination. Phase 2
//! works with the corner permutation, the permutation of the eight U/D-layer
//! edges and the permutation of the four slice edges, all of which are only
//! meaningful once phase 1 has oriented everything and homed the slice.

use cubeflow_core::cubie::{Corner, CubieCube, Edge};

pub const N_TWIST: usize = 2187;
pub const N_FLIP: usize = 2048;
pub const N_SLICE: usize = 495;
pub const N_CORNER_PERM: usize = 40320;
pub const N_UD_EDGE_PERM: usize = 40320;
pub const N_SLICE_PERM: usize = 24;

/// Corner orientations as a base-3 number over the first seven corners. The
/// eighth twist is determined by the rest, so the range is 3^7 = 2187.
pub fn twist(cube: &CubieCube) -> u16 {
    cube.co[..7]
        .iter()
        .fold(0, |acc, &twist| acc * 3 + u16::from(twist))
}

pub fn set_twist(cube: &mut CubieCube, mut twist: u16) {
    let mut sum = 0;
    for i in (0..7).rev() {
        cube.co[i] = (twist % 3) as u8;
        sum += cube.co[i];
        twist /= 3;
    }
    cube.co[7] = (3 - sum % 3) % 3;
}

/// Edge orientations as a base-2 number over the first eleven edges,
/// range 2^11 = 2048.
pub fn flip(cube: &CubieCube) -> u16 {
    cube.eo[..11]
        .iter()
        .fold(0, |acc, &flip| acc * 2 + u16::from(flip))
}

pub fn set_flip(cube: &mut CubieCube, mut flip: u16) {
    let mut sum = 0;
    for i in (0..11).rev() {
        cube.eo[i] = (flip % 2) as u8;
        sum += cube.eo[i];
        flip /= 2;
    }
    cube.eo[11] = sum % 2;
}

/// Which four positions hold the slice edges, ignoring their order: the
/// combinatorial rank of the occupied position set, range C(12,4) = 495.
/// Zero iff all four sit in the slice.
pub fn slice(cube: &CubieCube) -> u16 {
    let mut coord = 0;
    let mut found = 0;
    for j in (0..12).rev() {
        if cube.ep[j] as usize >= 8 {
            coord += binomial(11 - j, found + 1);
            found += 1;
        }
    }
    coord
}

pub fn set_slice(cube: &mut CubieCube, coord: u16) {
    let mut remaining = coord;
    let mut open = 4;
    let mut next_other = 0;
    for j in 0..12 {
        if open > 0 && remaining >= binomial(11 - j, open) {
            remaining -= binomial(11 - j, open);
            cube.ep[j] = Edge::ALL[8 + 4 - open];
            open -= 1;
        } else {
            cube.ep[j] = Edge::ALL[next_other];
            next_other += 1;
        }
    }
}

/// Lehmer rank of the corner permutation, range 8! = 40320.
pub fn corner_perm(cube: &CubieCube) -> u16 {
    perm_rank(&cube.cp.map(|corner| corner as u8))
}

pub fn set_corner_perm(cube: &mut CubieCube, coord: u16) {
    let mut indices = [0; 8];
    perm_unrank(coord, &mut indices);
    for (i, &index) in indices.iter().enumerate() {
        cube.cp[i] = Corner::ALL[index as usize];
    }
}

/// Lehmer rank of the eight U/D-layer edge positions, range 8! = 40320.
/// Only defined when the slice edges are home (slice coordinate zero).
pub fn ud_edge_perm(cube: &CubieCube) -> u16 {
    let mut ud = [0; 8];
    for (slot, &edge) in ud.iter_mut().zip(&cube.ep[..8]) {
        *slot = edge as u8;
    }
    perm_rank(&ud)
}

pub fn set_ud_edge_perm(cube: &mut CubieCube, coord: u16) {
    let mut indices = [0; 8];
    perm_unrank(coord, &mut indices);
    for (i, &index) in indices.iter().enumerate() {
        cube.ep[i] = Edge::ALL[index as usize];
    }
}

/// Lehmer rank of the four slice edges among the slice positions,
/// range 4! = 24. Only defined when the slice coordinate is zero.
pub fn slice_perm(cube: &CubieCube) -> u16 {
    let mut slice = [0; 4];
    for (slot, &edge) in slice.iter_mut().zip(&cube.ep[8..]) {
        *slot = edge as u8 - 8;
    }
    perm_rank(&slice)
}

pub fn set_slice_perm(cube: &mut CubieCube, coord: u16) {
    let mut indices = [0; 4];
    perm_unrank(coord, &mut indices);
    for (i, &index) in indices.iter().enumerate() {
        cube.ep[8 + i] = Edge::ALL[8 + index as usize];
    }
}

fn binomial(n: usize, k: usize) -> u16 {
    if k > n {
        return 0;
    }
    let mut result: u32 = 1;
    for i in 0..k {
        result = result * (n - i) as u32 / (i + 1) as u32;
    }
    result as u16
}

/// Lehmer rank via Horner's rule: left-to-right, each digit counts the
/// later elements smaller than the current one.
fn perm_rank(perm: &[u8]) -> u16 {
    let n = perm.len();
    let mut rank: u32 = 0;
    for i in 0..n {
        let smaller = perm[i + 1..].iter().filter(|&&p| p < perm[i]).count();
        rank = rank * (n - i) as u32 + smaller as u32;
    }
    rank as u16
}

fn perm_unrank(coord: u16, out: &mut [u8]) {
    let n = out.len();
    let mut factorial = 1;
    for i in 1..n {
        factorial *= i as u16;
    }
    let mut remaining = coord;
    let mut available: Vec<u8> = (0..n as u8).collect();
    for i in 0..n {
        let digit = (remaining / factorial) as usize;
        remaining %= factorial;
        out[i] = available.remove(digit);
        if i + 1 < n {
            factorial /= (n - 1 - i) as u16;
        }
    }
}
