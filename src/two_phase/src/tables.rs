//! Precomputed lookup tables: one move table per coordinate and one
//! breadth-first pruning table per coordinate pair. Generated once per
//! process on first use, a second or two of work and a few megabytes.

use std::sync::OnceLock;
use std::time::Instant;

use cubeflow_core::{CubieCube, Move};
use log::{debug, info};

use crate::coord::{
    self, N_CORNER_PERM, N_FLIP, N_SLICE, N_SLICE_PERM, N_TWIST, N_UD_EDGE_PERM,
};
use crate::{start, success};

/// The ten moves that generate the phase-2 subgroup: all U and D turns but
/// only half turns elsewhere. Kept in the same relative order as
/// `Move::ALL` so phase-2 search ordering matches phase 1.
pub const PHASE2_MOVES: [Move; 10] = [
    Move::U1,
    Move::U2,
    Move::U3,
    Move::R2,
    Move::F2,
    Move::D1,
    Move::D2,
    Move::D3,
    Move::L2,
    Move::B2,
];

/// Move tables map `coordinate * move_count + move_index` to the successor
/// coordinate. Pruning tables hold the exact distance of every coordinate
/// pair from the pair's solved state, searched over the phase's move set;
/// the phase heuristic is the max over its two pair tables.
pub struct Tables {
    pub twist_move: Vec<u16>,
    pub flip_move: Vec<u16>,
    pub slice_move: Vec<u16>,
    pub corner_perm_move: Vec<u16>,
    pub ud_edge_perm_move: Vec<u16>,
    pub slice_perm_move: Vec<u16>,
    pub twist_slice_prune: Vec<u8>,
    pub flip_slice_prune: Vec<u8>,
    pub corner_slice_prune: Vec<u8>,
    pub edge_slice_prune: Vec<u8>,
}

/// Returns the process-wide tables, generating them on the first call.
/// Thread safe; later callers block until generation finishes.
pub fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(Tables::generate)
}

impl Tables {
    fn generate() -> Tables {
        info!(start!("Generating move and pruning tables"));
        let begin = Instant::now();

        let twist_move = move_table(N_TWIST, &Move::ALL, coord::set_twist, coord::twist);
        let flip_move = move_table(N_FLIP, &Move::ALL, coord::set_flip, coord::flip);
        let slice_move = move_table(N_SLICE, &Move::ALL, coord::set_slice, coord::slice);
        let corner_perm_move = move_table(
            N_CORNER_PERM,
            &PHASE2_MOVES,
            coord::set_corner_perm,
            coord::corner_perm,
        );
        let ud_edge_perm_move = move_table(
            N_UD_EDGE_PERM,
            &PHASE2_MOVES,
            coord::set_ud_edge_perm,
            coord::ud_edge_perm,
        );
        let slice_perm_move = move_table(
            N_SLICE_PERM,
            &PHASE2_MOVES,
            coord::set_slice_perm,
            coord::slice_perm,
        );
        debug!("Move tables built in {:.3}s", begin.elapsed().as_secs_f64());

        let prune_begin = Instant::now();
        let twist_slice_prune = prune_table(N_TWIST, N_SLICE, 18, &twist_move, &slice_move);
        let flip_slice_prune = prune_table(N_FLIP, N_SLICE, 18, &flip_move, &slice_move);
        let corner_slice_prune = prune_table(
            N_CORNER_PERM,
            N_SLICE_PERM,
            10,
            &corner_perm_move,
            &slice_perm_move,
        );
        let edge_slice_prune = prune_table(
            N_UD_EDGE_PERM,
            N_SLICE_PERM,
            10,
            &ud_edge_perm_move,
            &slice_perm_move,
        );
        debug!(
            "Pruning tables built in {:.3}s",
            prune_begin.elapsed().as_secs_f64()
        );

        info!(
            success!("Tables ready in {:.3}s"),
            begin.elapsed().as_secs_f64()
        );
        Tables {
            twist_move,
            flip_move,
            slice_move,
            corner_perm_move,
            ud_edge_perm_move,
            slice_perm_move,
            twist_slice_prune,
            flip_slice_prune,
            corner_slice_prune,
            edge_slice_prune,
        }
    }

    /// Lower bound on the moves needed to reach the phase-1 subgroup.
    /// Zero exactly when the cube is already inside it.
    pub fn phase1_heuristic(&self, twist: usize, flip: usize, slice: usize) -> u8 {
        self.twist_slice_prune[twist * N_SLICE + slice]
            .max(self.flip_slice_prune[flip * N_SLICE + slice])
    }

    /// Lower bound on the phase-2 moves needed to finish the solve.
    pub fn phase2_heuristic(&self, corner_perm: usize, ud_edge_perm: usize, slice_perm: usize) -> u8 {
        self.corner_slice_prune[corner_perm * N_SLICE_PERM + slice_perm]
            .max(self.edge_slice_prune[ud_edge_perm * N_SLICE_PERM + slice_perm])
    }
}

fn move_table(
    count: usize,
    moves: &[Move],
    set: impl Fn(&mut CubieCube, u16),
    get: impl Fn(&CubieCube) -> u16,
) -> Vec<u16> {
    let mut table = vec![0; count * moves.len()];
    for coordinate in 0..count {
        let mut cube = CubieCube::SOLVED;
        set(&mut cube, coordinate as u16);
        for (index, &m) in moves.iter().enumerate() {
            table[coordinate * moves.len() + index] = get(&cube.apply(m));
        }
    }
    table
}

/// Breadth-first distances over the product of two coordinate spaces that
/// share a move set. Every pair is reachable, so no sentinel survives.
fn prune_table(
    count_a: usize,
    count_b: usize,
    move_count: usize,
    moves_a: &[u16],
    moves_b: &[u16],
) -> Vec<u8> {
    let mut depths = vec![u8::MAX; count_a * count_b];
    depths[0] = 0;
    let mut frontier = vec![0];
    let mut depth = 0;
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &pair in &frontier {
            let (a, b) = (pair / count_b, pair % count_b);
            for index in 0..move_count {
                let child = moves_a[a * move_count + index] as usize * count_b
                    + moves_b[b * move_count + index] as usize;
                if depths[child] == u8::MAX {
                    depths[child] = depth + 1;
                    next.push(child);
                }
            }
        }
        depth += 1;
        frontier = next;
    }
    depths
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeflow_core::Alg;

    #[test]
    fn move_tables_agree_with_cubie_moves() {
        let tables = tables();
        let scramble: Alg = "R U R' U' R' F R2 U' R' U' R U R' F'".parse().unwrap();
        let mut cube = CubieCube::SOLVED;
        for &m in scramble.moves() {
            let twist = coord::twist(&cube) as usize;
            let flip = coord::flip(&cube) as usize;
            let slice = coord::slice(&cube) as usize;
            cube = cube.apply(m);
            assert_eq!(
                tables.twist_move[twist * 18 + m as usize],
                coord::twist(&cube)
            );
            assert_eq!(tables.flip_move[flip * 18 + m as usize], coord::flip(&cube));
            assert_eq!(
                tables.slice_move[slice * 18 + m as usize],
                coord::slice(&cube)
            );
        }
    }

    #[test]
    fn phase2_move_tables_agree_within_the_subgroup() {
        let tables = tables();
        let alg: Alg = "U R2 D' F2 U2 L2 B2 D".parse().unwrap();
        let mut cube = CubieCube::SOLVED;
        for &m in alg.moves() {
            let corner = coord::corner_perm(&cube) as usize;
            let ud = coord::ud_edge_perm(&cube) as usize;
            let slice = coord::slice_perm(&cube) as usize;
            cube = cube.apply(m);
            let index = PHASE2_MOVES.iter().position(|&p| p == m).unwrap();
            assert_eq!(
                tables.corner_perm_move[corner * 10 + index],
                coord::corner_perm(&cube)
            );
            assert_eq!(
                tables.ud_edge_perm_move[ud * 10 + index],
                coord::ud_edge_perm(&cube)
            );
            assert_eq!(
                tables.slice_perm_move[slice * 10 + index],
                coord::slice_perm(&cube)
            );
        }
    }

    #[test]
    fn pruning_tables_are_complete_and_admissible() {
        let tables = tables();
        assert!(tables.twist_slice_prune.iter().all(|&d| d != u8::MAX));
        assert!(tables.corner_slice_prune.iter().all(|&d| d != u8::MAX));
        assert_eq!(tables.phase1_heuristic(0, 0, 0), 0);
        assert_eq!(tables.phase2_heuristic(0, 0, 0), 0);
        // One move away means distance exactly one.
        let cube = CubieCube::SOLVED.apply(Move::R1);
        let h = tables.phase1_heuristic(
            coord::twist(&cube) as usize,
            coord::flip(&cube) as usize,
            coord::slice(&cube) as usize,
        );
        assert_eq!(h, 1);
    }
}
