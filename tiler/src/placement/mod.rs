mod engine;
mod solution;

#[doc(inline)]
pub use engine::PlacementEngine;
#[doc(inline)]
pub use solution::LayoutSolution;
#[doc(inline)]
pub use solution::WallStats;

use crate::entities::Instance;

/// Computes the complete tile layout of `instance`, starting from an empty scrap pool.
pub fn compute_layout(instance: &Instance) -> LayoutSolution {
    PlacementEngine::new(instance).run()
}
