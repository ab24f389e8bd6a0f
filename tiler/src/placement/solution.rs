use crate::entities::{PlacedTile, ScrapPool, TileClass};

/// Complete result of a layout run.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutSolution {
    /// Every placed tile, in placement order (wall, then row, then column)
    pub tiles: Vec<PlacedTile>,
    pub full_tiles: usize,
    /// Tiles which had to be cut, whether from a fresh tile, a remnant or around a cutout
    pub cut_tiles: usize,
    /// Number of cuts satisfied by a remnant instead of a fresh tile
    pub scraps_reused: usize,
    /// Remnants left unused at the end of the run
    pub residual_scraps: ScrapPool,
    /// Per wall breakdown of the counters, in wall order
    pub wall_stats: Vec<WallStats>,
}

impl LayoutSolution {
    pub fn total_tiles(&self) -> usize {
        self.full_tiles + self.cut_tiles
    }

    pub fn tiles_on_wall<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a PlacedTile> + 'a {
        self.tiles.iter().filter(move |t| t.wall_label == label)
    }

    pub fn wall_stats(&self, label: &str) -> Option<&WallStats> {
        self.wall_stats.iter().find(|s| s.label == label)
    }

    pub fn count(&self, class: TileClass) -> usize {
        self.tiles.iter().filter(|t| t.class == class).count()
    }
}

/// Counters of a single wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallStats {
    pub label: String,
    pub full_tiles: usize,
    pub cut_tiles: usize,
    /// Grid cells left empty because a cutout consumed (nearly) the entire tile
    pub suppressed_tiles: usize,
    pub scraps_reused: usize,
}

impl WallStats {
    pub fn new(label: &str) -> Self {
        WallStats {
            label: label.to_owned(),
            full_tiles: 0,
            cut_tiles: 0,
            suppressed_tiles: 0,
            scraps_reused: 0,
        }
    }

    pub fn total_tiles(&self) -> usize {
        self.full_tiles + self.cut_tiles
    }
}
