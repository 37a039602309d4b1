pub mod entities;
pub mod physics;
