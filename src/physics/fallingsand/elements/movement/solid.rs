use crate::physics::fallingsand::{data::element_grid::ElementGrid, util::vectors::XyIndex};

/// Where a powder looks, in priority order: below, below-left, below-right
pub fn powder_candidates(pos: XyIndex) -> [XyIndex; 3] {
    [
        XyIndex::new(pos.x, pos.y + 1),
        XyIndex::new(pos.x - 1, pos.y + 1),
        XyIndex::new(pos.x + 1, pos.y + 1),
    ]
}

/// Default solid element behavior
/// Fall straight down if we can, otherwise slide off diagonally, left first
pub fn solid_process(grid: &mut ElementGrid, pos: XyIndex) -> bool {
    super::swap_with_first_empty(grid, pos, powder_candidates(pos))
}
