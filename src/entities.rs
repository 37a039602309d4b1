//! This module contains all the top level bevy plugins.
//! These wire the physics engine into a bevy app.

pub mod sandbox;
