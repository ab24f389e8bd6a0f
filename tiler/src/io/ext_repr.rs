use crate::entities::{PatternStyle, TileClass};
use serde::{Deserialize, Serialize};

/// A length as written in an instance file: either a number of inches or a
/// feet-and-inches string such as `"5'11\""`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtLength {
    Inches(f32),
    Text(String),
}

impl From<f32> for ExtLength {
    fn from(inches: f32) -> Self {
        ExtLength::Inches(inches)
    }
}

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub tile: ExtTile,
    /// Grout joint widths, 1/4" in both directions if not specified
    #[serde(default)]
    pub grout: ExtGrout,
    #[serde(default)]
    pub pattern: PatternStyle,
    /// Whether remnants of previous cuts may be used for later cuts
    #[serde(default = "default_reuse_scraps")]
    pub reuse_scraps: bool,
    /// The walls, in the order in which they are tiled and drawn
    pub walls: Vec<ExtWall>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cutouts: Vec<ExtCutout>,
}

fn default_reuse_scraps() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtTile {
    pub width: ExtLength,
    pub height: ExtLength,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtGrout {
    pub horizontal: ExtLength,
    pub vertical: ExtLength,
}

impl Default for ExtGrout {
    fn default() -> Self {
        ExtGrout {
            horizontal: ExtLength::Inches(0.25),
            vertical: ExtLength::Inches(0.25),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtWall {
    /// Unique label of the wall, referenced by cutouts
    pub label: String,
    pub width: ExtLength,
    pub height: ExtLength,
}

/// External representation of a [`Cutout`](crate::entities::Cutout).
/// Position is relative to the top-left corner of the wall it belongs to.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCutout {
    pub name: String,
    /// Label of the wall this cutout belongs to
    pub wall: String,
    pub x: ExtLength,
    pub y: ExtLength,
    pub width: ExtLength,
    pub height: ExtLength,
}

/// External representation of a [`LayoutSolution`](crate::placement::LayoutSolution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub summary: ExtSummary,
    pub walls: Vec<ExtWallStats>,
    pub tiles: Vec<ExtPlacedTile>,
    /// Remnants left over at the end, in ascending order
    pub scrap_pool: Vec<f32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtSummary {
    pub full_tiles: usize,
    pub cut_tiles: usize,
    pub total_tiles: usize,
    pub scraps_reused: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtWallStats {
    pub label: String,
    pub full_tiles: usize,
    pub cut_tiles: usize,
    pub suppressed_tiles: usize,
    pub scraps_reused: usize,
}

/// External representation of a [`PlacedTile`](crate::entities::PlacedTile), in wall-local coordinates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedTile {
    pub wall: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub class: TileClass,
}
