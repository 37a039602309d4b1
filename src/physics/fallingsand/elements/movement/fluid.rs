use crate::physics::fallingsand::{data::element_grid::ElementGrid, util::vectors::XyIndex};

/// Where a liquid looks, in priority order: below, left, right
/// Left always wins over right, there is no alternation
pub fn liquid_candidates(pos: XyIndex) -> [XyIndex; 3] {
    [
        XyIndex::new(pos.x, pos.y + 1),
        XyIndex::new(pos.x - 1, pos.y),
        XyIndex::new(pos.x + 1, pos.y),
    ]
}

/// Default fluid element behavior
pub fn fluid_process(grid: &mut ElementGrid, pos: XyIndex) -> bool {
    super::swap_with_first_empty(grid, pos, liquid_candidates(pos))
}
