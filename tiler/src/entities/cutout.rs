use crate::error::{InputError, ensure_finite, ensure_non_negative};
use crate::geometry::primitives::Rect;

/// A rectangular region of a wall that must stay free of tiles (a window, a valve, ...).
/// Coordinates are local to the wall it is bound to.
#[derive(Clone, Debug, PartialEq)]
pub struct Cutout {
    pub name: String,
    pub wall_label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Cutout {
    /// Zero-sized cutouts are accepted, they never overlap any tile.
    /// The position may lie outside of the wall, only the part covering the wall matters.
    pub fn new(
        name: impl Into<String>,
        wall_label: impl Into<String>,
        (x, y): (f32, f32),
        (width, height): (f32, f32),
    ) -> Result<Self, InputError> {
        let name = name.into();
        let x = ensure_finite(format!("x position of {name}"), x)?;
        let y = ensure_finite(format!("y position of {name}"), y)?;
        let width = ensure_non_negative(format!("width of {name}"), width)?;
        let height = ensure_non_negative(format!("height of {name}"), height)?;
        Ok(Cutout {
            name,
            wall_label: wall_label.into(),
            x,
            y,
            width,
            height,
        })
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
