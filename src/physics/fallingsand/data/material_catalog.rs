//! The palette of materials the sandbox knows about.
//! Built once, validated once, then only ever read.
#![warn(missing_docs)]

use bevy::render::color::Color;
use derive_more::Display;
use hashbrown::HashMap;
use strum::IntoEnumIterator;

use crate::physics::fallingsand::elements::element::{MaterialInfo, MaterialKind};
use crate::physics::fallingsand::util::errors::SandboxError;

/// Why a catalog failed to validate
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// The same kind was registered twice
    #[display(fmt = "{} is registered more than once", _0)]
    Duplicate(MaterialKind),
    /// A kind has no entry
    #[display(fmt = "{} has no entry", _0)]
    Missing(MaterialKind),
}

impl std::error::Error for CatalogError {}

/// Maps every material kind to its display information
/// Insertion order is kept, it is the order a palette should be shown in
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    /// Entries in insertion order
    entries: Vec<MaterialInfo>,
    /// Position of each kind inside `entries`
    index: HashMap<MaterialKind, usize>,
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl MaterialCatalog {
    /// Validates that there is exactly one entry per kind
    pub fn new(entries: Vec<MaterialInfo>) -> Result<Self, SandboxError> {
        let index = Self::index_entries(&entries)?;
        Ok(Self { entries, index })
    }

    /// Position of every kind in `entries`, failing on the first duplicate or missing kind
    fn index_entries(entries: &[MaterialInfo]) -> Result<HashMap<MaterialKind, usize>, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, info) in entries.iter().enumerate() {
            if index.insert(info.get_id(), i).is_some() {
                return Err(CatalogError::Duplicate(info.get_id()));
            }
        }
        if let Some(missing) = MaterialKind::iter().find(|kind| !index.contains_key(kind)) {
            return Err(CatalogError::Missing(missing));
        }
        Ok(index)
    }

    /// The palette the sandbox ships with
    pub fn standard() -> Self {
        let entries = vec![
            MaterialInfo::new(MaterialKind::Empty, Color::rgb(0.0, 0.0, 0.0), "Empty"),
            MaterialInfo::new(MaterialKind::Sand, Color::rgb(1.0, 1.0, 0.0), "Sand"),
            MaterialInfo::new(MaterialKind::Water, Color::rgb(0.0, 0.5, 1.0), "Water"),
            MaterialInfo::new(MaterialKind::Stone, Color::rgb(0.4, 0.4, 0.4), "Stone"),
            MaterialInfo::new(MaterialKind::Fire, Color::rgb(1.0, 0.35, 0.0), "Fire"),
        ];
        match Self::new(entries) {
            Ok(catalog) => catalog,
            Err(err) => unreachable!("standard catalog is incomplete: {}", err),
        }
    }

    /// Total over the enum once the catalog has been validated
    pub fn lookup(&self, id: MaterialKind) -> &MaterialInfo {
        &self.entries[self.index[&id]]
    }

    /// Every entry in insertion order
    pub fn all(&self) -> impl Iterator<Item = (MaterialKind, &MaterialInfo)> {
        self.entries.iter().map(|info| (info.get_id(), info))
    }

    /// Number of entries, always the number of kinds
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a validated catalog, here for clippy
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
