use crate::entities::{Instance, PlacedTile, ScrapPool, TileClass, Wall};
use crate::geometry::overlap_area;
use crate::geometry::primitives::Rect;
use crate::placement::{LayoutSolution, WallStats};
use crate::util::assertions;
use crate::{SUPPRESSION_RATIO, TOLERANCE};
use itertools::Itertools;
use log::{debug, trace};

/// Lays out tiles wall by wall, row by row and column by column.
///
/// Owns all state of a single run: the scrap pool and the counters.
/// The order in which tiles are visited is part of the contract, as it determines which remnants
/// are available for which cut. A remnant cut on one wall can be reused on the next.
pub struct PlacementEngine<'a> {
    instance: &'a Instance,
    scrap_pool: ScrapPool,
    tiles: Vec<PlacedTile>,
    wall_stats: Vec<WallStats>,
    scraps_reused: usize,
}

/// Grid of tile cells covering a single wall.
#[derive(Clone, Copy, Debug)]
struct WallGrid {
    pitch_x: f32,
    pitch_y: f32,
    tiles_across: usize,
    tiles_up: usize,
}

impl<'a> PlacementEngine<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            scrap_pool: ScrapPool::new(),
            tiles: vec![],
            wall_stats: vec![],
            scraps_reused: 0,
        }
    }

    pub fn run(mut self) -> LayoutSolution {
        let instance = self.instance;
        for wall in &instance.walls {
            self.place_wall(wall);
        }

        let full_tiles = self.wall_stats.iter().map(|s| s.full_tiles).sum::<usize>();
        let cut_tiles = self.wall_stats.iter().map(|s| s.cut_tiles).sum::<usize>();
        debug!(
            "[PLACE] run finished: {} full, {} cut, {} scraps reused, {} remnants left {}",
            full_tiles,
            cut_tiles,
            self.scraps_reused,
            self.scrap_pool.len(),
            self.scrap_pool
        );

        let solution = LayoutSolution {
            tiles: self.tiles,
            full_tiles,
            cut_tiles,
            scraps_reused: self.scraps_reused,
            residual_scraps: self.scrap_pool,
            wall_stats: self.wall_stats,
        };
        debug_assert!(assertions::solution_counters_match_tiles(&solution));
        debug_assert!(assertions::tiles_within_wall_width(instance, &solution));
        solution
    }

    fn place_wall(&mut self, wall: &Wall) {
        let tile = self.instance.tile;
        let grid = {
            let pitch_x = tile.pitch_x(&self.instance.grout);
            let pitch_y = tile.pitch_y(&self.instance.grout);
            WallGrid {
                pitch_x,
                pitch_y,
                tiles_across: (wall.width / pitch_x).ceil() as usize,
                tiles_up: (wall.height / pitch_y).ceil() as usize,
            }
        };
        let cutouts = self
            .instance
            .cutouts_on(&wall.label)
            .map(|c| c.rect())
            .collect_vec();

        debug!(
            "[PLACE] {}: {:.2}x{:.2}, grid of {}x{} cells, {} cutout(s)",
            wall.label,
            wall.width,
            wall.height,
            grid.tiles_across,
            grid.tiles_up,
            cutouts.len()
        );

        let mut stats = WallStats::new(&wall.label);
        for row in 0..grid.tiles_up {
            self.place_row(wall, grid, row, &cutouts, &mut stats);
        }
        self.wall_stats.push(stats);
    }

    fn place_row(
        &mut self,
        wall: &Wall,
        grid: WallGrid,
        row: usize,
        cutouts: &[Rect],
        stats: &mut WallStats,
    ) {
        let tile = self.instance.tile;
        let row_y = row as f32 * grid.pitch_y;
        let offset = self
            .instance
            .pattern
            .row_offset(row, tile.width, self.instance.grout.horizontal);

        if offset > TOLERANCE {
            //starter piece filling the gap left of the shifted grid
            let width = f32::min(offset, wall.width);
            let class = self.cut_piece(width, stats);
            let starter = Rect::new(0.0, row_y, width, tile.height);
            self.emit(wall, starter, class, stats);
        }

        for col in 0..=grid.tiles_across {
            let tile_x = col as f32 * grid.pitch_x + offset;
            if tile_x >= wall.width {
                break;
            }
            //clipped against the right edge of the wall only, rows may overflow at the bottom
            let draw_width = f32::min(tile.width, wall.width - tile_x);
            let rect = Rect::new(tile_x, row_y, draw_width, tile.height);

            let mut class = match draw_width < tile.width - TOLERANCE {
                true => self.cut_piece(draw_width, stats),
                false => TileClass::Full,
            };

            let covered: f32 = cutouts.iter().map(|c| overlap_area(&rect, c)).sum();
            let usable_ratio = 1.0 - covered / tile.area();
            if usable_ratio <= SUPPRESSION_RATIO {
                trace!(
                    "[PLACE] {} row {row} col {col}: consumed by cutout",
                    wall.label
                );
                stats.suppressed_tiles += 1;
                continue;
            }
            if usable_ratio < 1.0 {
                class = TileClass::CutoutClipped;
            }
            self.emit(wall, rect, class, stats);
        }
    }

    /// Obtains a piece of `width`, either from a remnant or by cutting a fresh tile.
    fn cut_piece(&mut self, width: f32, stats: &mut WallStats) -> TileClass {
        let reused = match self.instance.reuse_scraps {
            true => self.scrap_pool.try_reuse(width),
            false => None,
        };
        let class = match reused {
            Some(remnant) => {
                trace!("[PLACE] {width:.2} cut from remnant of {remnant:.2}");
                self.scraps_reused += 1;
                stats.scraps_reused += 1;
                TileClass::ReusedCut
            }
            None => {
                let offcut = self.scrap_pool.record_offcut(self.instance.tile.width, width);
                trace!("[PLACE] {width:.2} cut from fresh tile, offcut: {offcut:?}");
                TileClass::FreshCut
            }
        };
        debug_assert!(assertions::scrap_pool_is_valid(&self.scrap_pool));
        class
    }

    fn emit(&mut self, wall: &Wall, rect: Rect, class: TileClass, stats: &mut WallStats) {
        match class.is_cut() {
            true => stats.cut_tiles += 1,
            false => stats.full_tiles += 1,
        }
        self.tiles.push(PlacedTile {
            wall_label: wall.label.clone(),
            x: rect.x_min,
            y: rect.y_min,
            width: rect.width(),
            height: rect.height(),
            class,
        });
    }
}
