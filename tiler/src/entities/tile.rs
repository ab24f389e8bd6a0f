use crate::error::{InputError, ensure_non_negative, ensure_positive};

/// Nominal footprint of a full tile, shared by all walls of an instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSpec {
    pub width: f32,
    pub height: f32,
}

impl TileSpec {
    pub fn new(width: f32, height: f32) -> Result<Self, InputError> {
        Ok(TileSpec {
            width: ensure_positive("tile width", width)?,
            height: ensure_positive("tile height", height)?,
        })
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Distance between the origins of horizontally adjacent tiles
    pub fn pitch_x(&self, grout: &GroutSpec) -> f32 {
        self.width + grout.horizontal
    }

    /// Distance between the origins of vertically adjacent tiles
    pub fn pitch_y(&self, grout: &GroutSpec) -> f32 {
        self.height + grout.vertical
    }
}

/// Grout joint widths, added to the tile dimensions to obtain the pitch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroutSpec {
    pub horizontal: f32,
    pub vertical: f32,
}

impl GroutSpec {
    pub fn new(horizontal: f32, vertical: f32) -> Result<Self, InputError> {
        Ok(GroutSpec {
            horizontal: ensure_non_negative("horizontal grout", horizontal)?,
            vertical: ensure_non_negative("vertical grout", vertical)?,
        })
    }

    pub fn none() -> Self {
        GroutSpec {
            horizontal: 0.0,
            vertical: 0.0,
        }
    }
}

impl Default for GroutSpec {
    fn default() -> Self {
        GroutSpec {
            horizontal: 0.25,
            vertical: 0.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_includes_grout() {
        let tile = TileSpec::new(12.0, 6.0).unwrap();
        let grout = GroutSpec::new(0.25, 0.125).unwrap();
        assert_eq!(tile.pitch_x(&grout), 12.25);
        assert_eq!(tile.pitch_y(&grout), 6.125);
        assert_eq!(tile.pitch_x(&GroutSpec::none()), 12.0);
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(TileSpec::new(0.0, 10.0).is_err());
        assert!(TileSpec::new(10.0, -1.0).is_err());
        assert!(TileSpec::new(f32::NAN, 10.0).is_err());
        assert!(GroutSpec::new(-0.1, 0.0).is_err());
        assert!(GroutSpec::new(0.0, 0.0).is_ok());
    }
}
