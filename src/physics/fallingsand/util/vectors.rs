use derive_more::{Display, From};

/// My personal coordinate type for the sandbox grid
/// x is the column, positive to the right
/// y is the row, positive downwards (row 0 is the top of the screen)
///
/// Signed so that pointer-derived positions left of or above the canvas
/// can be represented and rejected instead of wrapping around.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, From)]
#[display(fmt = "({}, {})", x, y)]
pub struct XyVector {
    pub x: isize,
    pub y: isize,
}

/// Convienient constants
impl XyVector {
    pub const ZERO: Self = Self { x: 0, y: 0 };
}

impl XyVector {
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Converts into an unsigned grid index if both components are inside `width` x `height`
    pub fn to_index(&self, width: usize, height: usize) -> Option<XyIndex> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        if x < width && y < height {
            Some(XyIndex { x, y })
        } else {
            None
        }
    }
}

/// Same as XyVector, but already known to be inside the grid
/// This is what the hot loop uses so it never re-checks bounds
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "[{}, {}]", x, y)]
pub struct XyIndex {
    pub x: usize,
    pub y: usize,
}

impl XyIndex {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}
