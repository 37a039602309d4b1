//! Falling sand physics engine.
//! A fixed size grid of materials that fall under gravity one cell per tick.

pub mod data;
pub mod editor;
pub mod elements;
pub mod sandbox;
pub mod util;
