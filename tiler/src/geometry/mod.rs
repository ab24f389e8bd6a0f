pub mod geo_enums;
pub mod geo_traits;
pub mod primitives;

use crate::geometry::primitives::Rect;

/// Area of the axis-aligned intersection of `a` and `b`, `0.0` if they are disjoint,
/// merely touch, or either of them is degenerate (zero width or height).
pub fn overlap_area(a: &Rect, b: &Rect) -> f32 {
    Rect::intersection(*a, *b).map_or(0.0, |i| i.area())
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn partial_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 8.0, 10.0, 10.0);
        assert!(approx_eq!(f32, overlap_area(&a, &b), 10.0));
        assert!(approx_eq!(f32, overlap_area(&b, &a), 10.0));
    }

    #[test]
    fn enclosed_overlap_is_area_of_inner() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert!(approx_eq!(f32, overlap_area(&outer, &inner), 20.0));
    }

    #[test]
    fn disjoint_and_touching_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(overlap_area(&a, &Rect::new(20.0, 20.0, 5.0, 5.0)), 0.0);
        assert_eq!(overlap_area(&a, &Rect::new(10.0, 0.0, 5.0, 10.0)), 0.0);
    }

    #[test]
    fn degenerate_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(overlap_area(&a, &Rect::new(5.0, 5.0, 0.0, 3.0)), 0.0);
        assert_eq!(overlap_area(&a, &Rect::new(5.0, 5.0, 3.0, 0.0)), 0.0);
    }
}
