//! Two-phase iterative deepening search. Phase 1 drives the cube into the
//! subgroup generated by U, D and the four half turns, where every piece is
//! oriented and the slice edges sit in the slice; phase 2 finishes the solve
//! without leaving it. Phase-1 solutions are enumerated shortest-first and
//! each is extended by a bounded phase-2 search, so the first completed
//! solution respects the overall move budget.

use std::time::{Duration, Instant};

use cubeflow_core::{Alg, CubieCube, Move, optimize};
use log::{debug, info};
use thiserror::Error;

use crate::coord;
use crate::tables::{PHASE2_MOVES, Tables, tables};
use crate::{success, working};

/// Search budgets. The defaults find a solution for any valid cube well
/// within a second once the tables exist.
#[derive(Clone, Copy, Debug)]
pub struct SolveOptions {
    /// Upper bound on the total solution length.
    pub max_depth: u8,
    /// Wall-clock budget for the search itself. Table generation on the
    /// first solve is not counted against it.
    pub time_budget: Duration,
}

impl Default for SolveOptions {
    fn default() -> SolveOptions {
        SolveOptions {
            max_depth: 24,
            time_budget: Duration::from_secs(30),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolverError {
    #[error("no solution of at most {max_depth} moves found; retry with a larger depth budget")]
    DepthBudgetExceeded { max_depth: u8 },
    #[error("search exceeded its time budget of {budget:?}; retry with a larger one")]
    TimeBudgetExceeded { budget: Duration },
    #[error("exhausted a depth budget every cube satisfies; a table or coordinate is defective")]
    InvariantViolation,
}

/// A found solution. Applying `moves` to the input cube yields the solved
/// state; the first `phase1_len` moves reach the phase-2 subgroup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub moves: Alg,
    pub phase1_len: usize,
}

/// One move of a solution paired with a human-readable account of what the
/// move is working toward.
#[derive(Clone, Debug)]
pub struct SolutionStep {
    pub r#move: Move,
    pub description: String,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Expands the solution into annotated steps for presentation.
    pub fn steps(&self) -> Vec<SolutionStep> {
        self.moves
            .moves()
            .iter()
            .enumerate()
            .map(|(i, &m)| SolutionStep {
                r#move: m,
                description: if i < self.phase1_len {
                    format!("orient pieces and home the slice edges ({m})")
                } else {
                    format!("permute the remaining pieces into place ({m})")
                },
            })
            .collect()
    }

    /// Cancels adjacent same-face moves in each phase. Search ordering
    /// already forbids them within and across the phase boundary, so this
    /// normally returns the solution unchanged, but callers composing
    /// solutions with other sequences rely on it.
    #[must_use]
    pub fn optimized(&self) -> Solution {
        let (phase1, phase2) = self.moves.moves().split_at(self.phase1_len);
        let phase1 = optimize(&Alg::from(phase1.to_vec()));
        let phase2 = optimize(&Alg::from(phase2.to_vec()));
        Solution {
            phase1_len: phase1.len(),
            moves: phase1.compose(&phase2),
        }
    }
}

/// Finds a solution of at most `options.max_depth` moves, deterministically:
/// equal cubes and options always yield the same solution.
///
/// # Errors
///
/// `DepthBudgetExceeded` or `TimeBudgetExceeded` when the budgets run out;
/// `InvariantViolation` in place of the depth error when the budget was
/// already deep enough for every valid cube.
pub fn solve(cube: &CubieCube, options: &SolveOptions) -> Result<Solution, SolverError> {
    if cube.is_solved() {
        return Ok(Solution {
            moves: Alg::new(),
            phase1_len: 0,
        });
    }
    let tables = tables();
    let begin = Instant::now();
    let mut search = Search {
        tables,
        start: *cube,
        deadline: begin + options.time_budget,
        budget: options.time_budget,
        max_depth: options.max_depth,
        phase1: Vec::new(),
        phase2: Vec::new(),
    };

    let twist = coord::twist(cube) as usize;
    let flip = coord::flip(cube) as usize;
    let slice = coord::slice(cube) as usize;
    for depth1 in tables.phase1_heuristic(twist, flip, slice)..=options.max_depth {
        debug!(working!("Searching with phase-1 depth {}"), depth1);
        if search.search_phase1(twist, flip, slice, depth1, None)? {
            let phase1_len = search.phase1.len();
            let moves: Alg = search.phase1.into_iter().chain(search.phase2).collect();
            info!(
                success!("Found a {}-move solution ({} + {}) in {:.3}s"),
                moves.len(),
                phase1_len,
                moves.len() - phase1_len,
                begin.elapsed().as_secs_f64()
            );
            return Ok(Solution { moves, phase1_len });
        }
    }
    // 20 phase-1 moves plus 10 phase-2 moves bound every valid cube.
    if options.max_depth >= 30 {
        Err(SolverError::InvariantViolation)
    } else {
        Err(SolverError::DepthBudgetExceeded {
            max_depth: options.max_depth,
        })
    }
}

/// Like [`solve`], but a budget failure is retried once with the exhausted
/// budget relaxed: six more moves of depth, or double the time.
pub fn solve_with_retry(cube: &CubieCube, options: &SolveOptions) -> Result<Solution, SolverError> {
    match solve(cube, options) {
        Err(SolverError::DepthBudgetExceeded { max_depth }) => {
            info!(working!("Retrying with a depth budget of {}"), max_depth + 6);
            solve(
                cube,
                &SolveOptions {
                    max_depth: max_depth + 6,
                    ..*options
                },
            )
        }
        Err(SolverError::TimeBudgetExceeded { budget }) => {
            info!(working!("Retrying with a time budget of {:?}"), budget * 2);
            solve(
                cube,
                &SolveOptions {
                    time_budget: budget * 2,
                    ..*options
                },
            )
        }
        other => other,
    }
}

struct Search<'a> {
    tables: &'a Tables,
    start: CubieCube,
    deadline: Instant,
    budget: Duration,
    max_depth: u8,
    phase1: Vec<Move>,
    phase2: Vec<Move>,
}

impl Search<'_> {
    /// Depth-limited search toward the phase-2 subgroup. On success the
    /// complete solution sits in `phase1` and `phase2` and `true` bubbles
    /// up without unwinding them.
    fn search_phase1(
        &mut self,
        twist: usize,
        flip: usize,
        slice: usize,
        togo: u8,
        last: Option<Move>,
    ) -> Result<bool, SolverError> {
        if Instant::now() >= self.deadline {
            return Err(SolverError::TimeBudgetExceeded {
                budget: self.budget,
            });
        }
        let in_subgroup = twist == 0 && flip == 0 && slice == 0;
        if togo == 0 {
            return if in_subgroup { self.phase2_root(last) } else { Ok(false) };
        }
        for (index, &m) in Move::ALL.iter().enumerate() {
            if last.is_some_and(|l| m.redundant_after(l)) {
                continue;
            }
            // From inside the subgroup, fewer than five moves cannot leave
            // it and return; subgroup moves would only duplicate endings
            // phase 2 generates anyway.
            if in_subgroup && togo < 5 && PHASE2_MOVES.contains(&m) {
                continue;
            }
            let twist = self.tables.twist_move[twist * 18 + index] as usize;
            let flip = self.tables.flip_move[flip * 18 + index] as usize;
            let slice = self.tables.slice_move[slice * 18 + index] as usize;
            if self.tables.phase1_heuristic(twist, flip, slice) >= togo {
                continue;
            }
            self.phase1.push(m);
            if self.search_phase1(twist, flip, slice, togo - 1, Some(m))? {
                return Ok(true);
            }
            self.phase1.pop();
        }
        Ok(false)
    }

    /// Runs phase 2 from the cube the current phase-1 prefix reaches. The
    /// prefix is short, so replaying it on the cubie level is cheaper than
    /// tracking phase-2 coordinates through phase 1.
    fn phase2_root(&mut self, last: Option<Move>) -> Result<bool, SolverError> {
        let mut cube = self.start;
        for &m in &self.phase1 {
            cube = cube.apply(m);
        }
        let corner = coord::corner_perm(&cube) as usize;
        let ud_edge = coord::ud_edge_perm(&cube) as usize;
        let slice = coord::slice_perm(&cube) as usize;
        // Capping phase 2 keeps a failed coset search cheap; longer
        // completions surface anyway through deeper phase-1 prefixes.
        let remaining = (self.max_depth - self.phase1.len() as u8).min(11);
        let floor = self.tables.phase2_heuristic(corner, ud_edge, slice);
        if floor > remaining {
            return Ok(false);
        }
        for depth2 in floor..=remaining {
            self.phase2.clear();
            if self.search_phase2(corner, ud_edge, slice, depth2, last)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn search_phase2(
        &mut self,
        corner: usize,
        ud_edge: usize,
        slice: usize,
        togo: u8,
        last: Option<Move>,
    ) -> Result<bool, SolverError> {
        if Instant::now() >= self.deadline {
            return Err(SolverError::TimeBudgetExceeded {
                budget: self.budget,
            });
        }
        if togo == 0 {
            return Ok(corner == 0 && ud_edge == 0 && slice == 0);
        }
        for (index, &m) in PHASE2_MOVES.iter().enumerate() {
            if last.is_some_and(|l| m.redundant_after(l)) {
                continue;
            }
            let corner = self.tables.corner_perm_move[corner * 10 + index] as usize;
            let ud_edge = self.tables.ud_edge_perm_move[ud_edge * 10 + index] as usize;
            let slice = self.tables.slice_perm_move[slice * 10 + index] as usize;
            if self.tables.phase2_heuristic(corner, ud_edge, slice) >= togo {
                continue;
            }
            self.phase2.push(m);
            if self.search_phase2(corner, ud_edge, slice, togo - 1, Some(m))? {
                return Ok(true);
            }
            self.phase2.pop();
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_input_yields_the_empty_solution() {
        let solution = solve(&CubieCube::SOLVED, &SolveOptions::default()).unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.phase1_len, 0);
        assert!(solution.steps().is_empty());
    }

    #[test]
    fn single_move_scrambles_solve_in_one_move() {
        for m in [Move::R1, Move::U2, Move::B3] {
            let cube = CubieCube::SOLVED.apply(m);
            let solution = solve(&cube, &SolveOptions::default()).unwrap();
            assert_eq!(solution.moves, Alg::from(vec![m.inverse()]), "{m}");
        }
    }

    #[test]
    fn steps_cover_every_move_in_order() {
        let cube = CubieCube::SOLVED.apply_alg(&"R U F2".parse().unwrap());
        let solution = solve(&cube, &SolveOptions::default()).unwrap();
        let steps = solution.steps();
        assert_eq!(steps.len(), solution.len());
        for (step, &m) in steps.iter().zip(solution.moves.moves()) {
            assert_eq!(step.r#move, m);
            assert!(!step.description.is_empty());
        }
    }

    #[test]
    fn optimized_solution_reaches_the_same_state() {
        let cube = CubieCube::SOLVED.apply_alg(&"L2 D F' R B2 U2".parse().unwrap());
        let solution = solve(&cube, &SolveOptions::default()).unwrap();
        let optimized = solution.optimized();
        assert!(optimized.len() <= solution.len());
        assert!(cube.apply_alg(&optimized.moves).is_solved());
    }
}
