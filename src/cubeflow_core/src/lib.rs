//! Cube state model, move engine, validator and move-sequence optimizer for
//! the CubeFlow solving engine.

#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::cast_possible_truncation)]

pub mod alg;
pub mod cubie;
pub mod facelet;
pub mod moves;
pub mod validate;

pub use alg::{Alg, optimize};
pub use cubie::{Corner, CubieCube, Edge};
pub use facelet::{Color, Face, FaceletCube, MalformedInputError};
pub use moves::Move;
pub use validate::{ValidationError, validate};
