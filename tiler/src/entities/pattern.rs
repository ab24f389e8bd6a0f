use serde::{Deserialize, Serialize};

/// Determines the horizontal shift of every row of tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternStyle {
    /// Every row starts at the left edge of the wall
    #[default]
    Straight,
    /// Odd rows are shifted by half a pitch (brick pattern)
    HalfOffset,
    /// Rows cycle through shifts of zero, one and two thirds of a pitch
    ThirdOffset,
}

impl PatternStyle {
    /// Number of rows after which the pattern repeats.
    pub fn period(&self) -> usize {
        match self {
            PatternStyle::Straight => 1,
            PatternStyle::HalfOffset => 2,
            PatternStyle::ThirdOffset => 3,
        }
    }

    /// Horizontal start offset of row `row_index`.
    /// A positive offset means the row begins with a starter piece of exactly this width.
    pub fn row_offset(&self, row_index: usize, tile_width: f32, grout_horizontal: f32) -> f32 {
        let period = self.period();
        let step = tile_width / period as f32 + grout_horizontal / period as f32;
        (row_index % period) as f32 * step
    }
}
