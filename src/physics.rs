//! This module contains all the physics related code.
//!
//! When contributing to this module, please keep the following things in mind:
//! * I try to maintain this module as "game engine agnostic" as possible.
//!   Bevy types show up for colors, logging and the frame counter only,
//!   the engine never touches a window or a texture.
//! * Physics should be highly unit tested.

pub mod fallingsand;
pub mod util;
