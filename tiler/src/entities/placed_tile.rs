use crate::geometry::primitives::Rect;
use serde::{Deserialize, Serialize};

/// How a placed tile was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileClass {
    /// An uncut tile
    Full,
    /// Cut from a fresh tile, the offcut went to the scrap pool
    FreshCut,
    /// Cut from a remnant taken out of the scrap pool
    ReusedCut,
    /// Partially covered by a cutout, needs to be cut around it
    CutoutClipped,
}

impl TileClass {
    pub fn is_cut(&self) -> bool {
        !matches!(self, TileClass::Full)
    }
}

/// A tile (or piece of tile) placed on a wall. Coordinates are local to the wall.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTile {
    pub wall_label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub class: TileClass,
}

impl PlacedTile {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
