/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// Parsing of feet-and-inches dimensions
pub mod dimension;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// All logic for creating SVG from [`LayoutSolution`](crate::placement::LayoutSolution)s
#[cfg(feature = "svg")]
pub mod svg;
