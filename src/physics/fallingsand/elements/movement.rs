//! Movement of elements in the world.
//! Useful for common or default behaviors of elements in the world.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::physics::fallingsand::data::element_grid::ElementGrid;
use crate::physics::fallingsand::util::vectors::XyIndex;

use super::element::Movement;

/// The movement of fluids
pub mod fluid;
/// The movement of solids
pub mod solid;

/// Runs the movement rule for one cell, returns true if it moved
/// `pos` must be an interior cell: 1 <= x <= width - 2 and y <= height - 2
pub fn process(movement: Movement, grid: &mut ElementGrid, pos: XyIndex) -> bool {
    match movement {
        Movement::Powder => solid::solid_process(grid, pos),
        Movement::Liquid => fluid::fluid_process(grid, pos),
        Movement::Immobile => false,
    }
}

/// Swaps `from` with the first of `candidates` that currently holds Empty
/// Reads the grid as it is right now, including moves made earlier in this tick
fn swap_with_first_empty(grid: &mut ElementGrid, from: XyIndex, candidates: [XyIndex; 3]) -> bool {
    match candidates
        .into_iter()
        .find(|target| grid.get_unchecked(*target).is_empty())
    {
        Some(target) => {
            grid.swap_unchecked(from, target);
            true
        }
        None => false,
    }
}
