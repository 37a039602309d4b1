//! Useful functions and structs for fallingsand calculations.

pub mod errors;
pub mod grid;
pub mod image;
pub mod vectors;
