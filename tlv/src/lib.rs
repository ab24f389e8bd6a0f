use std::sync::LazyLock;
use std::time::Instant;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;
use tiler::entities::Instance;
use tiler::io::ext_repr::ExtInstance;
use tiler::io::import::Importer;
use tiler::placement::{LayoutSolution, PlacementEngine};

use crate::config::TlvConfig;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Imports an external instance, computes its tile layout and logs the tile count summary.
pub fn layout_instance(
    ext_instance: &ExtInstance,
    config: &TlvConfig,
) -> Result<(Instance, LayoutSolution)> {
    let instance = Importer::new(config.reuse_scraps)
        .import_instance(ext_instance)
        .with_context(|| format!("invalid instance: {}", ext_instance.name))?;

    let start = Instant::now();
    let solution = PlacementEngine::new(&instance).run();
    info!(
        "[TLV] layout of {} computed in {:.3}ms",
        instance.name,
        start.elapsed().as_secs_f64() * 1000.0
    );

    for stats in &solution.wall_stats {
        info!(
            "[TLV] {}: {} full, {} cut, {} left out for cutouts, {} scraps reused",
            stats.label,
            stats.full_tiles,
            stats.cut_tiles,
            stats.suppressed_tiles,
            stats.scraps_reused
        );
    }
    info!("[TLV] full tiles: {}", solution.full_tiles);
    info!("[TLV] cut tiles: {}", solution.cut_tiles);
    info!("[TLV] total tiles: {}", solution.total_tiles());
    info!("[TLV] scraps reused: {}", solution.scraps_reused);
    if config.debug_scrap_pool {
        info!(
            "[TLV] scrap pool (inches): [{}], {:.2} in total",
            solution.residual_scraps.scraps().iter().join(", "),
            solution.residual_scraps.total_length()
        );
    }

    Ok((instance, solution))
}
