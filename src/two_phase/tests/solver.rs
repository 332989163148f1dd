use std::time::Duration;

use cubeflow_core::{Alg, CubieCube, FaceletCube, optimize, validate};
use two_phase::{SolveOptions, SolverError, solve, solve_with_retry};

#[test_log::test]
fn solves_a_superflip_style_scramble_end_to_end() {
    let scramble: Alg = "R U R' U' R' F R2 U' R' U' R U R' F'".parse().unwrap();
    let cube = CubieCube::SOLVED.apply_alg(&scramble);

    // The full pipeline: facelet capture, validation, solve, optimize.
    let captured = FaceletCube::from(&cube);
    let validated = validate(&captured).unwrap();
    assert_eq!(validated, cube);

    let solution = solve(&validated, &SolveOptions::default()).unwrap();
    assert!(!solution.is_empty());
    assert!(solution.len() <= 24, "solution was {} moves", solution.len());

    let cleaned = optimize(&solution.moves);
    assert!(cleaned.len() <= solution.len());
    assert!(cube.apply_alg(&cleaned).is_solved());
}

#[test_log::test]
fn solves_scrambles_of_varying_depth() {
    for scramble in [
        "U",
        "R2 D'",
        "F L B2 U'",
        "D2 B U' L2 F' R D' B2",
        "L U2 F D' R2 B' U L2 D F2 R' B",
    ] {
        let cube = CubieCube::SOLVED.apply_alg(&scramble.parse().unwrap());
        let solution = solve(&cube, &SolveOptions::default()).unwrap();
        assert!(
            cube.apply_alg(&solution.moves).is_solved(),
            "scramble {scramble} left the cube unsolved"
        );
        assert!(solution.len() <= 24);
        assert!(solution.phase1_len <= solution.len());
    }
}

#[test_log::test]
fn solving_is_deterministic() {
    let cube = CubieCube::SOLVED.apply_alg(&"B2 L D' F R2 U B' L2 D".parse().unwrap());
    let first = solve(&cube, &SolveOptions::default()).unwrap();
    let second = solve(&cube, &SolveOptions::default()).unwrap();
    assert_eq!(first.moves, second.moves);
    assert_eq!(first.phase1_len, second.phase1_len);
}

#[test_log::test]
fn zero_time_budget_reports_the_time_error() {
    let cube = CubieCube::SOLVED.apply_alg(&"R U F".parse().unwrap());
    let options = SolveOptions {
        time_budget: Duration::ZERO,
        ..SolveOptions::default()
    };
    assert_eq!(
        solve(&cube, &options),
        Err(SolverError::TimeBudgetExceeded {
            budget: Duration::ZERO
        })
    );
}

#[test_log::test]
fn tiny_depth_budget_reports_the_depth_error() {
    let cube =
        CubieCube::SOLVED.apply_alg(&"L U2 F D' R2 B' U L2 D F2 R' B".parse().unwrap());
    let options = SolveOptions {
        max_depth: 1,
        ..SolveOptions::default()
    };
    assert_eq!(
        solve(&cube, &options),
        Err(SolverError::DepthBudgetExceeded { max_depth: 1 })
    );
}

#[test_log::test]
fn retry_relaxes_an_exhausted_depth_budget() {
    let cube = CubieCube::SOLVED.apply_alg(&"R U F".parse().unwrap());
    let options = SolveOptions {
        max_depth: 2,
        ..SolveOptions::default()
    };
    // No two-move solution exists, but the retry at depth 8 finds one.
    let solution = solve_with_retry(&cube, &options).unwrap();
    assert!(cube.apply_alg(&solution.moves).is_solved());
    assert!(solution.len() <= 8);
}

#[test_log::test]
fn solved_capture_needs_no_moves() {
    let cube = validate(&FaceletCube::SOLVED).unwrap();
    let solution = solve(&cube, &SolveOptions::default()).unwrap();
    assert!(solution.is_empty());
}
