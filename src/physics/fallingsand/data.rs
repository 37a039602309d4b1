//! The data module contains the data structures for the falling sand physics engine.
//! These are where the actual grids of elements are stored.

pub mod element_grid;
pub mod material_catalog;
