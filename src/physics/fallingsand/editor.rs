//! The only way besides ticking to change what is in the grid.
//! Positions usually come straight from the pointer, so anything off the canvas is ignored.

use bevy::log::debug;
use bevy::math::Vec2;
use itertools::iproduct;

use super::data::element_grid::ElementGrid;
use super::elements::element::MaterialKind;
use super::util::vectors::XyVector;

/// A circle of cells painted at once, the default only covers the center cell
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub radius: f32,
}

impl Brush {
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }

    /// The radius as used for painting, NaN and negatives paint only the center
    fn reach(&self) -> f64 {
        f64::from(self.radius.max(0.0))
    }

    /// Whether `pos` is within the radius of `center`
    pub fn covers(&self, center: XyVector, pos: XyVector) -> bool {
        let dx = pos.x as f64 - center.x as f64;
        let dy = pos.y as f64 - center.y as f64;
        dx * dx + dy * dy <= self.reach() * self.reach()
    }

    /// Every cell of a `width` x `height` grid under the brush, row by row
    /// Only the part of the bounding box that overlaps the grid is walked, so the
    /// center may be anywhere and the radius may be infinite.
    pub fn cells(
        &self,
        center: XyVector,
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = XyVector> {
        let brush = *self;
        let reach = self.reach();
        // Float to int casts saturate, an empty overlap gives an empty range
        let span = move |c: isize, len: usize| {
            let lo = (c as f64 - reach).ceil().max(0.0);
            let hi = (c as f64 + reach).floor().min(len as f64 - 1.0);
            lo as isize..=hi as isize
        };
        iproduct!(span(center.y, height), span(center.x, width))
            .map(|(y, x)| XyVector::new(x, y))
            .filter(move |pos| brush.covers(center, *pos))
    }
}

/// A queued change to the grid, applied between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditCommand {
    Select(MaterialKind),
    Place(XyVector),
    Paint { center: XyVector, brush: Brush },
    Reset,
}

/// Holds the currently selected material and applies edits to a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Editor {
    selected: MaterialKind,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(MaterialKind::Sand)
    }
}

impl Editor {
    pub fn new(selected: MaterialKind) -> Self {
        Self { selected }
    }

    pub fn select(&mut self, kind: MaterialKind) {
        debug!("selected {}", kind);
        self.selected = kind;
    }
    pub fn selected(&self) -> MaterialKind {
        self.selected
    }

    /// Puts the selected material at `pos`, returns false if `pos` was off the grid
    pub fn place(&self, grid: &mut ElementGrid, pos: XyVector) -> bool {
        grid.set(pos, self.selected).is_ok()
    }

    /// Like place, but takes a pointer position local to the canvas and the on-screen size of one cell
    pub fn place_from_pointer(&self, grid: &mut ElementGrid, pointer: Vec2, cell_scale: Vec2) -> bool {
        if cell_scale.x <= 0.0 || cell_scale.y <= 0.0 || !cell_scale.is_finite() {
            return false;
        }
        let cell = (pointer / cell_scale).floor();
        if !cell.is_finite() {
            return false;
        }
        self.place(grid, XyVector::new(cell.x as isize, cell.y as isize))
    }

    /// Places the selected material on every in-bounds cell under the brush, returns how many
    pub fn paint(&self, grid: &mut ElementGrid, center: XyVector, brush: Brush) -> usize {
        brush
            .cells(center, grid.width(), grid.height())
            .filter(|pos| self.place(grid, *pos))
            .count()
    }

    pub fn reset(&self, grid: &mut ElementGrid) {
        grid.clear();
    }

    /// Applies one queued command
    pub fn apply(&mut self, grid: &mut ElementGrid, command: EditCommand) {
        debug!("applying {:?}", command);
        match command {
            EditCommand::Select(kind) => self.select(kind),
            EditCommand::Place(pos) => {
                self.place(grid, pos);
            }
            EditCommand::Paint { center, brush } => {
                self.paint(grid, center, brush);
            }
            EditCommand::Reset => self.reset(grid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_grid() -> ElementGrid {
        ElementGrid::new(5, 5).unwrap()
    }

    #[test]
    fn test_defaults_to_sand() {
        assert_eq!(Editor::default().selected(), MaterialKind::Sand);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut editor = Editor::default();
        editor.select(MaterialKind::Water);
        editor.select(MaterialKind::Water);
        assert_eq!(editor.selected(), MaterialKind::Water);
    }

    #[test]
    fn test_place_uses_selection() {
        let mut grid = get_grid();
        let mut editor = Editor::default();
        editor.select(MaterialKind::Stone);
        assert!(editor.place(&mut grid, XyVector::new(1, 2)));
        assert_eq!(grid.get(XyVector::new(1, 2)), Ok(MaterialKind::Stone));
    }

    #[test]
    fn test_place_out_of_bounds_is_a_no_op() {
        let mut grid = get_grid();
        grid.mark_clean();
        let editor = Editor::default();
        assert!(!editor.place(&mut grid, XyVector::new(-1, 0)));
        assert!(!editor.place(&mut grid, XyVector::new(5, 0)));
        assert!(!editor.place(&mut grid, XyVector::new(0, 5)));
        assert_eq!(grid.count(MaterialKind::Empty), 25);
        assert!(!grid.is_dirty());
    }

    #[test]
    fn test_place_from_pointer() {
        let mut grid = get_grid();
        let editor = Editor::default();
        let scale = Vec2::new(4.0, 4.0);
        assert!(editor.place_from_pointer(&mut grid, Vec2::new(9.5, 3.9), scale));
        assert_eq!(grid.get(XyVector::new(2, 0)), Ok(MaterialKind::Sand));
        // Just left of the canvas
        assert!(!editor.place_from_pointer(&mut grid, Vec2::new(-0.5, 1.0), scale));
        assert!(!editor.place_from_pointer(&mut grid, Vec2::new(1.0, 1.0), Vec2::ZERO));
        assert!(!editor.place_from_pointer(&mut grid, Vec2::new(1.0, 1.0), Vec2::INFINITY));
        assert!(!editor.place_from_pointer(&mut grid, Vec2::new(f32::MAX, 1.0), scale));
        assert_eq!(grid.count(MaterialKind::Sand), 1);
    }

    #[test]
    fn test_brush_cells() {
        let center = XyVector::new(2, 2);
        assert_eq!(
            Brush::default().cells(center, 5, 5).collect::<Vec<_>>(),
            vec![center]
        );
        // A plus shape
        let plus: Vec<_> = Brush::new(1.0).cells(center, 5, 5).collect();
        assert_eq!(
            plus,
            vec![
                XyVector::new(2, 1),
                XyVector::new(1, 2),
                XyVector::new(2, 2),
                XyVector::new(3, 2),
                XyVector::new(2, 3),
            ]
        );
        assert_eq!(Brush::new(1.5).cells(center, 5, 5).count(), 9);
        assert_eq!(Brush::new(f32::NAN).cells(center, 5, 5).count(), 1);
        assert_eq!(Brush::new(-3.0), Brush::default());
    }

    #[test]
    fn test_paint_clips_to_grid() {
        let mut grid = get_grid();
        let editor = Editor::new(MaterialKind::Water);
        let placed = editor.paint(&mut grid, XyVector::ZERO, Brush::new(1.0));
        assert_eq!(placed, 3);
        assert_eq!(grid.count(MaterialKind::Water), 3);
    }

    #[test]
    fn test_paint_from_off_the_canvas() {
        let mut grid = get_grid();
        let editor = Editor::default();
        // Only the edge of the circle reaches the grid
        let placed = editor.paint(&mut grid, XyVector::new(-3, 0), Brush::new(4.0));
        assert_eq!(placed, 4);
        assert_eq!(grid.get(XyVector::new(1, 0)), Ok(MaterialKind::Sand));
        assert_eq!(grid.get(XyVector::new(0, 2)), Ok(MaterialKind::Sand));
        assert_eq!(grid.get(XyVector::new(0, 3)), Ok(MaterialKind::Empty));
    }

    #[test]
    fn test_paint_far_away_is_a_no_op() {
        let mut grid = get_grid();
        grid.mark_clean();
        let editor = Editor::default();
        for center in [
            XyVector::new(isize::MAX, 0),
            XyVector::new(isize::MIN, isize::MIN),
            XyVector::new(0, isize::MAX),
        ] {
            assert_eq!(editor.paint(&mut grid, center, Brush::new(1.0)), 0);
        }
        assert!(!grid.is_dirty());
    }

    #[test]
    fn test_huge_brush_covers_the_grid() {
        let mut grid = get_grid();
        let editor = Editor::new(MaterialKind::Stone);
        assert_eq!(editor.paint(&mut grid, XyVector::new(2, 2), Brush::new(f32::INFINITY)), 25);
        grid.clear();
        assert_eq!(editor.paint(&mut grid, XyVector::new(-7, 40), Brush::new(1e6)), 25);
        assert_eq!(grid.count(MaterialKind::Stone), 25);
    }

    #[test]
    fn test_apply_commands() {
        let mut grid = get_grid();
        let mut editor = Editor::default();
        editor.apply(&mut grid, EditCommand::Select(MaterialKind::Fire));
        editor.apply(&mut grid, EditCommand::Place(XyVector::new(3, 3)));
        assert_eq!(grid.get(XyVector::new(3, 3)), Ok(MaterialKind::Fire));
        editor.apply(&mut grid, EditCommand::Reset);
        assert_eq!(grid.count(MaterialKind::Empty), 25);
        assert_eq!(editor.selected(), MaterialKind::Fire);
    }
}
