use std::sync::Arc;

use bevy::log::trace;
use itertools::iproduct;
use ndarray::ArrayView2;

use crate::physics::fallingsand::data::material_catalog::MaterialCatalog;
use crate::physics::fallingsand::elements::element::MaterialKind;
use crate::physics::fallingsand::elements::movement;
use crate::physics::fallingsand::util::errors::SandboxError;
use crate::physics::fallingsand::util::grid::Grid;
use crate::physics::fallingsand::util::image::{RawImage, Rgba};
use crate::physics::fallingsand::util::vectors::{XyIndex, XyVector};

/// An element grid is a fixed size 2D grid of materials and their resolved colors
///
/// The color buffer is a cache of `catalog.lookup(material).get_rgba()` for every cell.
/// Every mutation goes through `&mut self`, so nobody can observe a material
/// without its matching color.
#[derive(Clone, Debug)]
pub struct ElementGrid {
    materials: Grid<MaterialKind>,
    colors: Grid<Rgba>,
    catalog: Arc<MaterialCatalog>,

    /// True whenever a cell changed since the presentation layer last took it
    dirty: bool,
}

/* Initialization */
impl ElementGrid {
    /// Creates a new element grid using the standard catalog, every cell Empty
    pub fn new(width: usize, height: usize) -> Result<Self, SandboxError> {
        Self::with_catalog(width, height, Arc::new(MaterialCatalog::standard()))
    }

    /// Creates a new element grid with the given catalog, every cell Empty
    pub fn with_catalog(
        width: usize,
        height: usize,
        catalog: Arc<MaterialCatalog>,
    ) -> Result<Self, SandboxError> {
        if width == 0 || height == 0 {
            return Err(SandboxError::InvalidArgument {
                width: width as isize,
                height: height as isize,
            });
        }
        let empty = catalog.lookup(MaterialKind::Empty).get_rgba();
        Ok(Self {
            materials: Grid::new_fill(width, height, MaterialKind::Empty),
            colors: Grid::new_fill(width, height, empty),
            catalog,
            dirty: true,
        })
    }
}

/* Getters */
impl ElementGrid {
    pub fn width(&self) -> usize {
        self.materials.get_width()
    }
    pub fn height(&self) -> usize {
        self.materials.get_height()
    }
    pub fn in_bounds(&self, pos: XyVector) -> bool {
        pos.to_index(self.width(), self.height()).is_some()
    }
    pub fn get_catalog(&self) -> &Arc<MaterialCatalog> {
        &self.catalog
    }
    /// The material at a position
    pub fn get(&self, pos: XyVector) -> Result<MaterialKind, SandboxError> {
        self.materials.checked_get(pos).copied()
    }
    /// The resolved color at a position
    pub fn color(&self, pos: XyVector) -> Result<Rgba, SandboxError> {
        self.colors.checked_get(pos).copied()
    }
    /// Number of cells currently holding `kind`
    pub fn count(&self, kind: MaterialKind) -> usize {
        self.materials.iter().filter(|k| **k == kind).count()
    }
    pub(crate) fn get_unchecked(&self, idx: XyIndex) -> MaterialKind {
        *self.materials.get(idx)
    }
}

/* Dirty flag, owned by whoever presents the grid */
impl ElementGrid {
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
    /// Returns the dirty flag and clears it, call this when you repaint
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

/* Modifiers */
impl ElementGrid {
    /// Writes a material and its color in one step
    pub fn set(&mut self, pos: XyVector, kind: MaterialKind) -> Result<(), SandboxError> {
        let idx = self.materials.checked_index(pos)?;
        self.set_unchecked(idx, kind);
        Ok(())
    }

    /// Exchanges two cells, material and color together
    pub fn swap(&mut self, a: XyVector, b: XyVector) -> Result<(), SandboxError> {
        let a = self.materials.checked_index(a)?;
        let b = self.materials.checked_index(b)?;
        self.swap_unchecked(a, b);
        self.dirty = true;
        Ok(())
    }

    /// Resets every cell to Empty
    pub fn clear(&mut self) {
        let empty = self.catalog.lookup(MaterialKind::Empty).get_rgba();
        self.materials.fill(MaterialKind::Empty);
        self.colors.fill(empty);
        self.dirty = true;
    }

    pub(crate) fn set_unchecked(&mut self, idx: XyIndex, kind: MaterialKind) {
        let rgba = self.catalog.lookup(kind).get_rgba();
        self.materials.set(idx, kind);
        self.colors.set(idx, rgba);
        self.dirty = true;
    }

    /// The movement primitive, does not touch the dirty flag, tick handles that
    pub(crate) fn swap_unchecked(&mut self, a: XyIndex, b: XyIndex) {
        self.materials.swap(a, b);
        self.colors.swap(a, b);
    }
}

/* Processing */
impl ElementGrid {
    /// Advances the grid by exactly one tick, returns true if any cell moved
    ///
    /// Rows go bottom to top starting one above the floor, columns go left to right
    /// skipping the two border columns. Updates are in place: each cell sees moves
    /// made earlier in the same pass. Going bottom up is what stops something that
    /// just fell from being picked up again on the row below.
    pub fn tick(&mut self) -> bool {
        let (width, height) = (self.width(), self.height());
        if width < 3 || height < 2 {
            return false;
        }
        let mut changed = false;
        for (y, x) in iproduct!((0..height - 1).rev(), 1..width - 1) {
            let pos = XyIndex::new(x, y);
            let kind = self.get_unchecked(pos);
            changed |= movement::process(kind.movement(), self, pos);
        }
        if changed {
            self.dirty = true;
        }
        trace!("tick on {}x{} grid, changed: {}", width, height, changed);
        changed
    }
}

/* Presentation */
impl ElementGrid {
    /// Read-only view of the color buffer indexed `[[y, x]]`, does not clear dirty
    pub fn snapshot_colors(&self) -> ArrayView2<'_, Rgba> {
        self.colors.view()
    }
    /// The color buffer as row-major RGBA8 bytes, ready for a texture upload
    pub fn as_rgba_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.colors.get_data_slice())
    }
    pub fn to_raw_image(&self) -> RawImage {
        RawImage::from_rgba(self.width(), self.height(), self.colors.get_data_slice())
    }
}
