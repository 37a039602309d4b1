//! A simple 2d grid type
//! Backed by ndarray so that the whole buffer is one contiguous row-major allocation,
//! which is exactly the layout a texture upload wants.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use ndarray::{Array2, ArrayView2};

use super::errors::SandboxError;
use super::vectors::{XyIndex, XyVector};

/// A simple 2d grid type
/// Stored as `[[y, x]]` so iteration order is row by row, top to bottom
#[derive(Clone, Debug)]
pub struct Grid<T>(Array2<T>);

/* =================
 * Initialization
 * ================= */
impl<T> Grid<T> {
    /// Create a new grid filled with one value
    pub fn new_fill(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self(Array2::from_elem((height, width), value))
    }
}

/* ======================================
 * Simple Getters
 * Access basic attributes of the struct
 * ====================================== */
impl<T> Grid<T> {
    /// Get the width of the grid
    pub fn get_width(&self) -> usize {
        self.0.ncols()
    }
    /// Get the height of the grid
    pub fn get_height(&self) -> usize {
        self.0.nrows()
    }
    /// Get the data as a row-major slice
    pub fn get_data_slice(&self) -> &[T] {
        // Only ever built through from_elem, so always standard layout
        self.0
            .as_slice()
            .expect("grid is always in standard layout")
    }
    /// Get a read-only view of the data, indexed `[[y, x]]`
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.0.view()
    }
}

/* ======================================
 * Position Based Getters
 * Access data at a position
 * ====================================== */
impl<T> Grid<T> {
    /// Converts a signed coordinate to an index, or errors if it is outside the grid
    pub fn checked_index(&self, pos: XyVector) -> Result<XyIndex, SandboxError> {
        pos.to_index(self.get_width(), self.get_height())
            .ok_or(SandboxError::OutOfBounds(pos))
    }
    /// Gets the value at the given index
    pub fn get(&self, idx: XyIndex) -> &T {
        &self.0[[idx.y, idx.x]]
    }
    /// Gets the value at the given coordinate, or returns an error if the coordinate is out of bounds
    pub fn checked_get(&self, pos: XyVector) -> Result<&T, SandboxError> {
        let idx = self.checked_index(pos)?;
        Ok(self.get(idx))
    }
    /// Sets the value at the given index, overwriting the old value
    pub fn set(&mut self, idx: XyIndex, value: T) {
        self.0[[idx.y, idx.x]] = value;
    }
    /// Exchanges the values at two indices
    pub fn swap(&mut self, a: XyIndex, b: XyIndex) {
        self.0.swap([a.y, a.x], [b.y, b.x]);
    }
    /// Overwrites every cell with a clone of `value`
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.0.fill(value);
    }
}

/// Iteration
impl<T> Grid<T> {
    /// Get an iterator over the grid, row by row
    pub fn iter(&self) -> std::slice::Iter<T> {
        self.get_data_slice().iter()
    }
}
