//! Error types shared by the falling sand engine
#![warn(missing_docs)]

use derive_more::{Display, From};

use crate::physics::fallingsand::data::material_catalog::CatalogError;

use super::vectors::XyVector;

/// Everything that can go wrong when building or directly addressing a sandbox
#[derive(Debug, Display, Clone, PartialEq, Eq, From)]
pub enum SandboxError {
    /// The grid would have a zero or negative extent
    #[display(
        fmt = "grid dimensions must be positive, got {} x {}",
        width,
        height
    )]
    #[from(ignore)]
    InvalidArgument {
        /// Requested width in cells
        width: isize,
        /// Requested height in cells
        height: isize,
    },
    /// A direct get/set/swap went outside the grid, this is a caller bug
    #[display(fmt = "{} went outside the constraints of grid", _0)]
    OutOfBounds(XyVector),
    /// The material catalog was not complete
    #[display(fmt = "material catalog is misconfigured: {}", _0)]
    Config(CatalogError),
}

impl std::error::Error for SandboxError {}
