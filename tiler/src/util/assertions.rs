use crate::TOLERANCE;
use crate::entities::{Instance, ScrapPool};
use crate::placement::LayoutSolution;
use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

/// Every remnant is longer than [`TOLERANCE`] and the remnants are sorted
pub fn scrap_pool_is_valid(pool: &ScrapPool) -> bool {
    let scraps = pool.scraps();
    if let Some(s) = scraps.iter().find(|&&s| s <= TOLERANCE || !s.is_finite()) {
        error!("scrap pool contains invalid remnant: {s}");
        return false;
    }
    scraps.iter().tuple_windows().all(|(a, b)| a <= b)
}

/// The counters of a solution agree with its placed tiles
pub fn solution_counters_match_tiles(solution: &LayoutSolution) -> bool {
    let (cut, full): (Vec<_>, Vec<_>) = solution.tiles.iter().partition(|t| t.class.is_cut());
    let per_wall_ok = solution.wall_stats.iter().all(|stats| {
        let on_wall = solution.tiles_on_wall(&stats.label).collect_vec();
        on_wall.len() == stats.total_tiles()
            && on_wall.iter().filter(|t| t.class.is_cut()).count() == stats.cut_tiles
    });
    full.len() == solution.full_tiles
        && cut.len() == solution.cut_tiles
        && solution.wall_stats.iter().map(|s| s.scraps_reused).sum::<usize>()
            == solution.scraps_reused
        && per_wall_ok
}

/// No placed tile sticks out of the right edge of its wall, and all tiles have the nominal tile height
pub fn tiles_within_wall_width(instance: &Instance, solution: &LayoutSolution) -> bool {
    solution.tiles.iter().all(|t| {
        let Some(wall) = instance.wall(&t.wall_label) else {
            return false;
        };
        let right = t.x + t.width;
        (right < wall.width || approx_eq!(f32, right, wall.width, epsilon = 1e-4))
            && t.x >= 0.0
            && t.height == instance.tile.height
    })
}
