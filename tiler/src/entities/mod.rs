mod cutout;
mod instance;
mod pattern;
mod placed_tile;
mod scrap_pool;
mod tile;
mod wall;

#[doc(inline)]
pub use cutout::Cutout;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use pattern::PatternStyle;
#[doc(inline)]
pub use placed_tile::PlacedTile;
#[doc(inline)]
pub use placed_tile::TileClass;
#[doc(inline)]
pub use scrap_pool::ScrapPool;
#[doc(inline)]
pub use tile::GroutSpec;
#[doc(inline)]
pub use tile::TileSpec;
#[doc(inline)]
pub use wall::Wall;
