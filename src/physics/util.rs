//! Utilities shared by the physics modules.

pub mod clock;
