//! This module contains all the elements that are used in the game.

pub mod element;
pub mod movement;
