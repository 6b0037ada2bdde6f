//! Axis-aligned 2D primitives used for collision and drawing
//!
//! Screen space: origin at the top-left corner, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A filled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub r: f32,
}

impl Circle {
    pub fn new(center: Vec2, r: f32) -> Self {
        Self { center, r }
    }

    /// Translate the circle in place
    #[inline]
    pub fn move_by(&mut self, delta: Vec2) {
        self.center += delta;
    }
}

/// A line segment from `begin` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub begin: Vec2,
    pub end: Vec2,
}

impl Line {
    pub fn new(begin: Vec2, end: Vec2) -> Self {
        Self { begin, end }
    }

    /// Closest point on the segment to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let line_vec = self.end - self.begin;
        let len_sq = line_vec.length_squared();
        if len_sq < f32::EPSILON {
            return self.begin;
        }
        let t = ((point - self.begin).dot(line_vec) / len_sq).clamp(0.0, 1.0);
        self.begin + line_vec * t
    }

    /// True when the segment touches or crosses the circle
    pub fn intersects(&self, circle: &Circle) -> bool {
        self.closest_point(circle.center).distance_squared(circle.center) <= circle.r * circle.r
    }
}

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle of `size` whose center sits at `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top_y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom_y(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Top edge, left to right
    pub fn top(&self) -> Line {
        Line::new(self.pos, Vec2::new(self.right(), self.top_y()))
    }

    /// Bottom edge, right to left
    pub fn bottom(&self) -> Line {
        Line::new(
            Vec2::new(self.right(), self.bottom_y()),
            Vec2::new(self.left(), self.bottom_y()),
        )
    }

    /// Grow (or shrink, for negative `amount`) every side by `amount`
    pub fn stretched(&self, amount: f32) -> Self {
        Self {
            pos: self.pos - Vec2::splat(amount),
            size: self.size + Vec2::splat(amount * 2.0),
        }
    }

    /// Closest point inside the rectangle to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.pos, self.pos + self.size)
    }

    /// True when the rectangle and circle overlap or touch
    pub fn intersects(&self, circle: &Circle) -> bool {
        self.closest_point(circle.center).distance_squared(circle.center) <= circle.r * circle.r
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top_y()
            && point.y <= self.bottom_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_circle_overlap() {
        let rect = Rect::new(Vec2::new(0.0, 60.0), Vec2::new(40.0, 20.0));

        // Center inside
        assert!(rect.intersects(&Circle::new(Vec2::new(20.0, 70.0), 8.0)));
        // Just below, within radius of the bottom edge
        assert!(rect.intersects(&Circle::new(Vec2::new(20.0, 86.0), 8.0)));
        // Too far below
        assert!(!rect.intersects(&Circle::new(Vec2::new(20.0, 90.0), 8.0)));
        // Near a corner but outside the radius
        assert!(!rect.intersects(&Circle::new(Vec2::new(46.0, 86.0), 8.0)));
    }

    #[test]
    fn test_edges() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(40.0, 20.0));
        let ball = Circle::new(Vec2::new(30.0, 44.0), 8.0);

        assert!(rect.bottom().intersects(&ball));
        assert!(!rect.top().intersects(&ball));

        let side = Circle::new(Vec2::new(55.0, 30.0), 8.0);
        assert!(rect.intersects(&side));
        assert!(!rect.bottom().intersects(&side));
        assert!(!rect.top().intersects(&side));
    }

    #[test]
    fn test_from_center_and_stretched() {
        let rect = Rect::from_center(Vec2::new(400.0, 500.0), Vec2::new(60.0, 10.0));
        assert_eq!(rect.pos, Vec2::new(370.0, 495.0));
        assert_eq!(rect.center(), Vec2::new(400.0, 500.0));

        let inner = rect.stretched(-1.0);
        assert_eq!(inner.pos, Vec2::new(371.0, 496.0));
        assert_eq!(inner.size, Vec2::new(58.0, 8.0));
        assert!(rect.contains(inner.pos));
    }

    #[test]
    fn test_degenerate_line() {
        let point = Line::new(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
        assert_eq!(point.closest_point(Vec2::new(100.0, 0.0)), Vec2::new(5.0, 5.0));
        assert!(point.intersects(&Circle::new(Vec2::new(8.0, 5.0), 3.0)));
    }
}
