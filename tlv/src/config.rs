use serde::{Deserialize, Serialize};
use tiler::io::svg::SvgDrawOptions;

/// Configuration for the tile layout visualizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct TlvConfig {
    /// Overrides whether remnants may be reused. If undefined, the setting of the instance is used
    #[serde(default)]
    pub reuse_scraps: Option<bool>,
    /// Logs the remnants left over after the layout has been computed
    #[serde(default)]
    pub debug_scrap_pool: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
