use crate::entities::Wall;
use crate::geometry::primitives::Rect;
use ordered_float::OrderedFloat;

/// Visual gap (in inches) between two consecutive walls in the shared drawing space.
/// It has no physical meaning.
pub const WALL_GAP: f32 = 6.0;

/// Position of a single wall within a [`Scene`].
#[derive(Clone, Debug, PartialEq)]
pub struct WallFrame {
    pub label: String,
    /// Horizontal offset of the wall's local origin in the scene
    pub base_x: f32,
    pub width: f32,
    pub height: f32,
}

impl WallFrame {
    /// The outline of the wall in scene coordinates
    pub fn outline(&self) -> Rect {
        Rect::new(self.base_x, 0.0, self.width, self.height)
    }
}

/// Walls arranged left to right in a shared coordinate space, used for rendering.
///
/// Only translates wall-local rectangles, all overlap logic stays local to each wall.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub frames: Vec<WallFrame>,
}

impl Scene {
    pub fn compose(walls: &[Wall]) -> Self {
        let frames = walls
            .iter()
            .scan(0.0, |next_x, wall| {
                let frame = WallFrame {
                    label: wall.label.clone(),
                    base_x: *next_x,
                    width: wall.width,
                    height: wall.height,
                };
                *next_x += wall.width + WALL_GAP;
                Some(frame)
            })
            .collect();
        Scene { frames }
    }

    pub fn frame(&self, label: &str) -> Option<&WallFrame> {
        self.frames.iter().find(|f| f.label == label)
    }

    /// Translates a rectangle in the local frame of wall `label` into scene coordinates.
    /// Returns `None` if no wall with this label is part of the scene.
    pub fn to_scene_rect(&self, label: &str, local: Rect) -> Option<Rect> {
        self.frame(label).map(|f| local.translate(f.base_x, 0.0))
    }

    /// Distance from the left edge of the first wall to the right edge of the last one
    pub fn total_width(&self) -> f32 {
        self.frames.last().map_or(0.0, |f| f.base_x + f.width)
    }

    pub fn max_height(&self) -> f32 {
        self.frames
            .iter()
            .map(|f| OrderedFloat(f.height))
            .max()
            .map_or(0.0, |h| h.into_inner())
    }

    pub fn bbox(&self) -> Rect {
        Rect::new(0.0, 0.0, self.total_width(), self.max_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::compose(&[
            Wall::new("Wall A", 60.0, 90.0).unwrap(),
            Wall::new("Wall B", 36.0, 96.0).unwrap(),
            Wall::new("Wall C", 60.0, 90.0).unwrap(),
        ])
    }

    #[test]
    fn walls_are_placed_side_by_side() {
        let scene = scene();
        let bases = scene.frames.iter().map(|f| f.base_x).collect::<Vec<_>>();
        assert_eq!(bases, vec![0.0, 66.0, 108.0]);
        assert_eq!(scene.total_width(), 168.0);
        assert_eq!(scene.max_height(), 96.0);
        assert_eq!(scene.bbox(), Rect::new(0.0, 0.0, 168.0, 96.0));
    }

    #[test]
    fn local_rects_are_translated_to_their_wall() {
        let scene = scene();
        let local = Rect::new(10.0, 20.0, 5.0, 5.0);
        assert_eq!(
            scene.to_scene_rect("Wall B", local),
            Some(Rect::new(76.0, 20.0, 5.0, 5.0))
        );
        assert_eq!(scene.to_scene_rect("Wall A", local), Some(local));
        assert_eq!(scene.to_scene_rect("Wall Z", local), None);
        assert_eq!(
            scene.frame("Wall C").map(|f| f.outline()),
            Some(Rect::new(108.0, 0.0, 60.0, 90.0))
        );
    }
}
