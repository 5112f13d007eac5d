//! 2D geometry primitives shared by the graph and viewport layers.
//!
//! Workflow documents place nodes in an unbounded "world" coordinate
//! space chosen by the exporting tool; the viewport maps that space onto
//! the screen. Both layers exchange these types.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in either world or screen coordinates.
///
/// The coordinate space is contextual: node positions are world
/// coordinates, pointer positions and viewport offsets are screen
/// coordinates. The viewport translates between the two.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin point (0, 0).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A width/height pair, used for viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a size from width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The center point of a rectangle of this size anchored at the origin.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// An axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// The degenerate zero-sized box at the origin.
    ///
    /// Used as the fallback for empty node sets so centering logic
    /// always has a well-defined target.
    pub const ZERO: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
    };

    /// Creates a bounding box from its extremes.
    #[must_use]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Whether the point lies within the box (inclusive on all edges).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Grows the box to include the given point.
    #[must_use]
    pub fn expanded_to(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Creates a box spanning exactly one point.
    #[must_use]
    pub const fn at_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 2.0);
        assert_eq!(a + b, Point::new(4.0, 6.0));
        assert_eq!(a - b, Point::new(2.0, 2.0));
    }

    #[test]
    fn size_center() {
        let size = Size::new(800.0, 600.0);
        assert_eq!(size.center(), Point::new(400.0, 300.0));
    }

    #[test]
    fn bounds_center() {
        let bounds = Bounds::new(-100.0, 0.0, 300.0, 200.0);
        assert_eq!(bounds.center(), Point::new(100.0, 100.0));
    }

    #[test]
    fn bounds_zero_is_origin_centered() {
        assert_eq!(Bounds::ZERO.center(), Point::ORIGIN);
    }

    #[test]
    fn bounds_contains_edges_inclusive() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(bounds.contains(Point::new(5.0, 5.0)));
        assert!(!bounds.contains(Point::new(10.1, 5.0)));
    }

    #[test]
    fn bounds_expands_to_cover_point() {
        let bounds = Bounds::at_point(Point::new(5.0, 5.0));
        let grown = bounds.expanded_to(Point::new(-3.0, 12.0));
        assert_eq!(grown, Bounds::new(-3.0, 5.0, 5.0, 12.0));
    }

    #[test]
    fn point_serde_roundtrip() {
        let point = Point::new(1.5, -2.5);
        let json = serde_json::to_string(&point).expect("serialize");
        let parsed: Point = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(point, parsed);
    }
}
