//! A simulation session: one grid, one editor, and the edits waiting for the next tick.
//!
//! The loop is always the same: drain pending edits, tick once, then let the
//! presentation layer repaint if the grid is dirty. Edits are never applied mid-tick.

use std::collections::VecDeque;
use std::sync::Arc;

use bevy::log::{info, trace};
use bevy::math::Vec2;

use super::data::element_grid::ElementGrid;
use super::data::material_catalog::MaterialCatalog;
use super::editor::{EditCommand, Editor};
use super::elements::element::MaterialKind;
use super::util::errors::SandboxError;
use crate::physics::util::clock::Clock;

/// How big the grid should be
#[derive(Debug, Clone, Copy, PartialEq)]
enum GridSize {
    /// Exact number of cells
    Cells { width: usize, height: usize },
    /// Derived from the size of the viewport and the size of one cell on screen
    Viewport { size: Vec2, block_size: f32 },
}

/// Builds a Sandbox
#[derive(Clone)]
pub struct SandboxBuilder {
    size: GridSize,
    catalog: MaterialCatalog,
    selected: MaterialKind,
}

impl Default for SandboxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SandboxBuilder {
    /// Start here
    pub fn new() -> Self {
        Self {
            size: GridSize::Cells {
                width: 160,
                height: 120,
            },
            catalog: MaterialCatalog::standard(),
            selected: MaterialKind::Sand,
        }
    }
    /// The exact size of the grid in cells
    pub fn dimensions(mut self, width: usize, height: usize) -> Self {
        self.size = GridSize::Cells { width, height };
        self
    }
    /// Size the grid to cover a viewport where every cell is `block_size` pixels wide
    pub fn viewport(mut self, size: Vec2, block_size: f32) -> Self {
        self.size = GridSize::Viewport { size, block_size };
        self
    }
    /// Replace the standard palette
    pub fn catalog(mut self, catalog: MaterialCatalog) -> Self {
        self.catalog = catalog;
        self
    }
    /// What the editor places before anything else is selected
    pub fn selected(mut self, selected: MaterialKind) -> Self {
        self.selected = selected;
        self
    }

    /// Works out the grid size without building anything
    pub fn grid_dimensions(&self) -> Result<(usize, usize), SandboxError> {
        match self.size {
            GridSize::Cells { width, height } => {
                if width == 0 || height == 0 {
                    Err(SandboxError::InvalidArgument {
                        width: width as isize,
                        height: height as isize,
                    })
                } else {
                    Ok((width, height))
                }
            }
            GridSize::Viewport { size, block_size } => {
                let cells = (size / block_size).floor();
                // Float to int casts saturate and map NaN to 0, which is what the error should show
                if block_size.is_nan()
                    || block_size <= 0.0
                    || !cells.is_finite()
                    || cells.x < 1.0
                    || cells.y < 1.0
                {
                    return Err(SandboxError::InvalidArgument {
                        width: cells.x as isize,
                        height: cells.y as isize,
                    });
                }
                Ok((cells.x as usize, cells.y as usize))
            }
        }
    }

    pub fn build(self) -> Result<Sandbox, SandboxError> {
        let (width, height) = self.grid_dimensions()?;
        let grid = ElementGrid::with_catalog(width, height, Arc::new(self.catalog))?;
        info!("built {}x{} sandbox", width, height);
        Ok(Sandbox {
            grid,
            editor: Editor::new(self.selected),
            pending: VecDeque::new(),
            clock: Clock::default(),
        })
    }
}

/// What happened during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// How many queued edits were applied before the tick
    pub edits_applied: usize,
    /// Whether the tick itself moved anything
    pub changed: bool,
    /// Whether the presentation layer needs to repaint
    pub dirty: bool,
    /// The tick that just ran
    pub frame: u32,
}

/// Owns the grid exclusively, everything else borrows it
#[derive(Debug, Clone)]
pub struct Sandbox {
    grid: ElementGrid,
    editor: Editor,
    pending: VecDeque<EditCommand>,
    clock: Clock,
}

impl Sandbox {
    pub fn builder() -> SandboxBuilder {
        SandboxBuilder::new()
    }

    pub fn grid(&self) -> &ElementGrid {
        &self.grid
    }
    /// For the presentation layer to take the dirty flag, or for direct edits between steps
    pub fn grid_mut(&mut self) -> &mut ElementGrid {
        &mut self.grid
    }
    pub fn editor(&self) -> &Editor {
        &self.editor
    }
    pub fn catalog(&self) -> &MaterialCatalog {
        self.grid.get_catalog()
    }
    pub fn clock(&self) -> Clock {
        self.clock
    }
    pub fn pending_edits(&self) -> usize {
        self.pending.len()
    }
    /// True once a step has run and the latest tick moved nothing
    pub fn is_settled(&self) -> bool {
        self.clock.is_settled()
    }

    /// Queues an edit for the start of the next step
    pub fn submit(&mut self, command: EditCommand) {
        self.pending.push_back(command);
    }

    /// Applies every queued edit in order
    pub fn apply_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Some(command) = self.pending.pop_front() {
            self.editor.apply(&mut self.grid, command);
            applied += 1;
        }
        applied
    }

    /// Drains the edit queue, then advances the grid by one tick
    pub fn step(&mut self) -> StepReport {
        let edits_applied = self.apply_pending();
        let changed = self.grid.tick();
        self.clock.update(changed);
        let report = StepReport {
            edits_applied,
            changed,
            dirty: self.grid.is_dirty(),
            frame: self.clock.get_current_frame(),
        };
        trace!("{:?}", report);
        report
    }
}
