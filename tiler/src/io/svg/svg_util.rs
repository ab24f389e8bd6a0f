use crate::entities::TileClass;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgTheme,
    /// Draws the wall labels above the walls and the cutout names inside the cutouts
    #[serde(default = "default_draw_labels")]
    pub draw_labels: bool,
}

fn default_draw_labels() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SvgTheme {
    #[default]
    Classic,
    Gray,
}

impl SvgTheme {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgTheme::Classic => CLASSIC_THEME,
            SvgTheme::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub tile_fill: Color,
    pub full_stroke: Color,
    pub cut_stroke: Color,
    pub reused_stroke: Color,
    pub wall_stroke: Color,
    pub cutout_fill: Color,
    pub text_fill: Color,
}

impl SvgLayoutTheme {
    pub fn tile_stroke(&self, class: TileClass) -> Color {
        match class {
            TileClass::Full => self.full_stroke,
            TileClass::FreshCut | TileClass::CutoutClipped => self.cut_stroke,
            TileClass::ReusedCut => self.reused_stroke,
        }
    }
}

pub static CLASSIC_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 1.0,
    tile_fill: Color(0xD3, 0xD3, 0xD3),     //LIGHT GRAY
    full_stroke: Color(0x80, 0x80, 0x80),   //GRAY
    cut_stroke: Color(0xFF, 0x00, 0x00),    //RED
    reused_stroke: Color(0x00, 0x00, 0xFF), //BLUE
    wall_stroke: Color(0x00, 0x00, 0x00),
    cutout_fill: Color(0xFF, 0xFF, 0xFF),
    text_fill: Color(0x00, 0x00, 0x00),
};

pub static GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 1.5,
    tile_fill: Color(0xC3, 0xC3, 0xC3),
    full_stroke: Color(0x8F, 0x8F, 0x8F),
    cut_stroke: Color(0x40, 0x40, 0x40),
    reused_stroke: Color(0x00, 0x00, 0x00),
    wall_stroke: Color(0x00, 0x00, 0x00),
    cutout_fill: Color(0xFF, 0xFF, 0xFF),
    text_fill: Color(0x2D, 0x2D, 0x2D),
};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Color {
    pub fn change_brightness(&self, fraction: f32) -> Color {
        let scale = |c: u8| (c as f32 * fraction).clamp(0.0, 255.0) as u8;
        Color(scale(self.0), scale(self.1), scale(self.2))
    }
}
