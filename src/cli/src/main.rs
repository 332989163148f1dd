use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::eyre;
use cubeflow_core::{Alg, CubieCube, FaceletCube, optimize, validate};
use owo_colors::OwoColorize;
use two_phase::{SolveOptions, solve_with_retry};

/// Solves Rubik's cubes
#[derive(Parser)]
#[command(version, about)]
enum Commands {
    /// Solve a cube given as 54 facelet letters (URFDLB), faces in
    /// U R F D L B order, each face row by row
    Solve {
        facelets: String,
        /// Upper bound on the solution length
        #[arg(long, default_value_t = 24)]
        max_depth: u8,
        /// Search time budget in seconds
        #[arg(long, default_value_t = 30)]
        time_budget: u64,
        /// Print the bare move sequence without step annotations
        #[arg(long)]
        raw: bool,
    },
    /// Print the facelet string a move sequence scrambles the solved cube to
    Scramble {
        /// Moves in standard face-turn notation, e.g. R U R' U'
        moves: Vec<String>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    match Commands::parse() {
        Commands::Solve {
            facelets,
            max_depth,
            time_budget,
            raw,
        } => {
            let captured = FaceletCube::from_str(&facelets)?;
            let cube = validate(&captured)?;
            let options = SolveOptions {
                max_depth,
                time_budget: Duration::from_secs(time_budget),
            };
            let solution = solve_with_retry(&cube, &options)?.optimized();

            if raw {
                println!("{}", solution.moves);
                return Ok(());
            }
            if solution.is_empty() {
                println!("{}", "Already solved".green());
                return Ok(());
            }
            for (number, step) in solution.steps().iter().enumerate() {
                println!(
                    "{:>3}. {:<3} {}",
                    number + 1,
                    step.r#move.bold(),
                    step.description.dimmed()
                );
            }
            println!(
                "{} in {} moves ({} phase 1, {} phase 2)",
                "Solved".green().bold(),
                solution.len(),
                solution.phase1_len,
                solution.len() - solution.phase1_len
            );
        }
        Commands::Scramble { moves } => {
            if moves.is_empty() {
                return Err(eyre!("Give at least one move, e.g. `scramble R U R'`"));
            }
            let alg: Alg = moves.join(" ").parse()?;
            let cleaned = optimize(&alg);
            let cube = CubieCube::SOLVED.apply_alg(&cleaned);
            println!("{}", FaceletCube::from(&cube));
        }
    }
    Ok(())
}
