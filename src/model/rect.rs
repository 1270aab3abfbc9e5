//! Axis-aligned rectangles in image pixel coordinates.

use serde::{Deserialize, Serialize};

/// A bounding rectangle on the screenshot.
///
/// Coordinates are image pixels with the origin at the top-left corner and
/// `y` increasing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its edges.
    pub fn from_edges(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Whether every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_edges(
            self.min_x().min(other.min_x()),
            self.min_y().min(other.min_y()),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        )
    }

    /// Check whether `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Overlap of the two vertical ranges relative to the shorter height.
    ///
    /// Returns 0 when the ranges are disjoint or either height is zero.
    pub fn vertical_overlap_ratio(&self, other: &Rect) -> f64 {
        let overlap = self.max_y().min(other.max_y()) - self.min_y().max(other.min_y());
        if overlap <= 0.0 {
            return 0.0;
        }
        let min_height = self.height.min(other.height);
        if min_height <= 0.0 {
            return 0.0;
        }
        overlap / min_height
    }

    /// Distance between the nearer vertical edges, or 0 when the horizontal
    /// ranges overlap.
    pub fn horizontal_gap(&self, other: &Rect) -> f64 {
        if self.max_x() < other.min_x() {
            other.min_x() - self.max_x()
        } else if other.max_x() < self.min_x() {
            self.min_x() - other.max_x()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 30.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.max_x(), 110.0);
        assert_eq!(r.mid_x(), 60.0);
        assert_eq!(r.min_y(), 20.0);
        assert_eq!(r.max_y(), 50.0);
        assert_eq!(r.mid_y(), 35.0);
    }

    #[test]
    fn test_union_contains_both() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 5.0, 10.0, 20.0);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(0.0, 0.0, 30.0, 25.0));
        assert!(u.contains(&a));
        assert!(u.contains(&b));
    }

    #[test]
    fn test_vertical_overlap_ratio() {
        let line = Rect::new(0.0, 100.0, 50.0, 30.0);
        // Half of the shorter (20px) box overlaps.
        let half = Rect::new(60.0, 120.0, 50.0, 20.0);
        assert!((line.vertical_overlap_ratio(&half) - 0.5).abs() < 1e-9);

        let inside = Rect::new(60.0, 105.0, 50.0, 10.0);
        assert!((line.vertical_overlap_ratio(&inside) - 1.0).abs() < 1e-9);

        let below = Rect::new(0.0, 130.0, 50.0, 30.0);
        assert_eq!(line.vertical_overlap_ratio(&below), 0.0);
    }

    #[test]
    fn test_horizontal_gap() {
        let a = Rect::new(0.0, 0.0, 50.0, 10.0);
        assert_eq!(a.horizontal_gap(&Rect::new(60.0, 0.0, 10.0, 10.0)), 10.0);
        assert_eq!(Rect::new(60.0, 0.0, 10.0, 10.0).horizontal_gap(&a), 10.0);
        assert_eq!(a.horizontal_gap(&Rect::new(40.0, 0.0, 30.0, 10.0)), 0.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect::new(f64::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect::new(0.0, 0.0, f64::INFINITY, 1.0).is_finite());
    }
}
