use bevy::render::color::Color;
use strum_macros::{Display, EnumCount, EnumIter};

use crate::physics::fallingsand::util::image::Rgba;

/// Identifies a material
/// Closed set, add a variant here and an entry in the catalog to extend it
#[derive(
    Default, Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount,
)]
pub enum MaterialKind {
    /// The only kind another cell may be displaced into
    #[default]
    Empty,
    Sand,
    Water,
    Stone,
    /// Immobile for now, it does not burn or spread
    Fire,
}

/// How a material moves under gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Down, then down-left, then down-right
    Powder,
    /// Down, then left, then right
    Liquid,
    /// Never relocates on its own
    Immobile,
}

impl MaterialKind {
    pub fn movement(self) -> Movement {
        match self {
            MaterialKind::Sand => Movement::Powder,
            MaterialKind::Water => Movement::Liquid,
            MaterialKind::Empty | MaterialKind::Stone | MaterialKind::Fire => Movement::Immobile,
        }
    }

    pub fn is_empty(self) -> bool {
        self == MaterialKind::Empty
    }
}

/// Links a material to how it is displayed
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialInfo {
    id: MaterialKind,
    color: Color,
    name: String,
}

impl MaterialInfo {
    pub fn new(id: MaterialKind, color: Color, name: impl Into<String>) -> Self {
        Self {
            id,
            color,
            name: name.into(),
        }
    }
    pub fn get_id(&self) -> MaterialKind {
        self.id
    }
    pub fn get_color(&self) -> Color {
        self.color
    }
    pub fn get_name(&self) -> &str {
        &self.name
    }
    /// The color as it is stored in the grid's color buffer
    pub fn get_rgba(&self) -> Rgba {
        self.color.as_rgba_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_only_sand_and_water_move() {
        let mobile: Vec<MaterialKind> = MaterialKind::iter()
            .filter(|kind| kind.movement() != Movement::Immobile)
            .collect();
        assert_eq!(mobile, vec![MaterialKind::Sand, MaterialKind::Water]);
    }

    #[test]
    fn test_empty_is_unique() {
        assert_eq!(MaterialKind::iter().filter(|k| k.is_empty()).count(), 1);
        assert_eq!(MaterialKind::default(), MaterialKind::Empty);
        assert_eq!(MaterialKind::COUNT, 5);
    }

    #[test]
    fn test_rgba() {
        let info = MaterialInfo::new(MaterialKind::Sand, Color::rgb(1.0, 1.0, 0.0), "Sand");
        assert_eq!(info.get_rgba(), [255, 255, 0, 255]);
        assert_eq!(info.get_name(), "Sand");
        assert_eq!(info.get_id(), MaterialKind::Sand);
    }
}
