//! Axis-aligned bounding-box collision detection.

use glam::{IVec2, UVec2};

/// An axis-aligned rectangle: top-left corner plus size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: IVec2,
    pub size: UVec2,
}

impl Rect {
    pub const fn new(pos: IVec2, size: UVec2) -> Self {
        Rect { pos, size }
    }

    /// Returns true iff the two rectangles intersect with strict inequality
    /// on all four axes. Touching edges do not count as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max_corner();
        let b_max = other.max_corner();
        self.pos.x < b_max.x && a_max.x > other.pos.x && self.pos.y < b_max.y && a_max.y > other.pos.y
    }

    fn max_corner(&self) -> IVec2 {
        self.pos + self.size.as_ivec2()
    }
}

/// Trait for anything that occupies a box on the board.
pub trait Collidable {
    /// Returns the bounding box of this object.
    fn bounds(&self) -> Rect;

    /// Checks if this object overlaps another.
    fn collides_with(&self, other: &dyn Collidable) -> bool {
        self.bounds().overlaps(&other.bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: u32, h: u32) -> Rect {
        Rect::new(IVec2::new(x, y), UVec2::new(w, h))
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = rect(0, 0, 32, 32);
        let b = rect(16, 16, 32, 32);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_single_pixel_overlap() {
        let a = rect(0, 0, 32, 32);
        let b = rect(31, 31, 32, 32);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0, 0, 32, 32);
        assert!(!a.overlaps(&rect(32, 0, 32, 32)));
        assert!(!a.overlaps(&rect(0, 32, 32, 32)));
        assert!(!a.overlaps(&rect(-32, 0, 32, 32)));
        assert!(!a.overlaps(&rect(0, -32, 32, 32)));
    }

    #[test]
    fn test_touching_corners_do_not_overlap() {
        let a = rect(0, 0, 32, 32);
        let b = rect(32, 32, 32, 32);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = rect(0, 0, 32, 32);
        let inner = rect(14, 14, 4, 4);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_disjoint_rects() {
        let a = rect(0, 0, 32, 32);
        let b = rect(100, 100, 32, 32);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_collidable_defaults_to_bounds_overlap() {
        struct Fixed(Rect);
        impl Collidable for Fixed {
            fn bounds(&self) -> Rect {
                self.0
            }
        }

        let a = Fixed(rect(0, 0, 8, 8));
        let b = Fixed(rect(4, 4, 8, 8));
        let c = Fixed(rect(8, 0, 8, 8));
        assert!(a.collides_with(&b));
        assert!(!a.collides_with(&c));
    }
}
