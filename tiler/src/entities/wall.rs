use crate::error::{InputError, ensure_positive};
use crate::geometry::primitives::Rect;

/// A rectangular wall to be tiled. Dimensions are in inches.
#[derive(Clone, Debug, PartialEq)]
pub struct Wall {
    pub label: String,
    pub width: f32,
    pub height: f32,
}

impl Wall {
    pub fn new(label: impl Into<String>, width: f32, height: f32) -> Result<Self, InputError> {
        let label = label.into();
        let width = ensure_positive(format!("width of {label}"), width)?;
        let height = ensure_positive(format!("height of {label}"), height)?;
        Ok(Wall {
            label,
            width,
            height,
        })
    }

    /// The wall in its own (local) frame: origin at the top-left corner, `y` pointing down.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}
