//! Two-phase solver for the CubeFlow engine: coordinate projections of the
//! cubie group, precomputed move and pruning tables, and the iterative
//! deepening search that strings them together.

#![warn(clippy::pedantic)]
#![allow(
    clippy::similar_names,
    clippy::too_many_lines,
    clippy::cast_possible_truncation
)]

pub mod coord;
pub mod solver;
pub mod tables;

pub use solver::{Solution, SolutionStep, SolveOptions, SolverError, solve, solve_with_retry};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
