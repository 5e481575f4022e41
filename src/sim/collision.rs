//! Axis-aligned rectangle overlap
//!
//! The arena is a flat rectangle, so collision is a plain AABB test between
//! the player box and each falling object's box.

/// An axis-aligned rectangle; y grows downward, matching screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// True when the rectangles overlap. Exactly-touching edges count as
    /// overlap (the disjointness comparisons are strict).
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 52.0, 52.0);
        let b = Rect::new(26.0, 26.0, 52.0, 56.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_disjoint_rects() {
        let a = Rect::new(0.0, 0.0, 52.0, 52.0);

        // Clearly to the right
        let b = Rect::new(100.0, 0.0, 52.0, 56.0);
        assert!(!a.intersects(&b));

        // Clearly below
        let c = Rect::new(0.0, 100.0, 52.0, 56.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_touching_edges_count_as_overlap() {
        let a = Rect::new(0.0, 0.0, 52.0, 52.0);

        // b's left edge exactly on a's right edge
        let b = Rect::new(52.0, 0.0, 52.0, 52.0);
        assert!(a.intersects(&b));

        // c's top edge exactly on a's bottom edge
        let c = Rect::new(0.0, 52.0, 52.0, 52.0);
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_containment_is_overlap() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }
}
