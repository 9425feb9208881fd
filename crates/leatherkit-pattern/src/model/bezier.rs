use lyon::geom::{point, QuadraticBezierSegment};
use serde::{Deserialize, Serialize};

use super::{PatternPrimitive, Point};

/// A quadratic bezier curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternBezier {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl PatternBezier {
    pub fn new(start: Point, control: Point, end: Point) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    fn segment(&self) -> QuadraticBezierSegment<f64> {
        QuadraticBezierSegment {
            from: point(self.start.x, self.start.y),
            ctrl: point(self.control.x, self.control.y),
            to: point(self.end.x, self.end.y),
        }
    }

    /// Point on the curve at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let p = self.segment().sample(t.clamp(0.0, 1.0));
        Point::new(p.x, p.y)
    }
}

impl PatternPrimitive for PatternBezier {
    fn start(&self) -> Point {
        self.start
    }

    fn end(&self) -> Point {
        self.end
    }

    /// The control point stands in for the midpoint; it is what the editor
    /// shows as the curve's handle.
    fn mid_anchor(&self) -> Point {
        self.control
    }

    fn sample(&self, segments: usize) -> Vec<Point> {
        let count = segments.max(2);
        let last = (count - 1) as f64;
        let mut points: Vec<Point> = (0..count)
            .map(|i| self.point_at(i as f64 / last))
            .collect();
        // Pin the endpoints so sampled paths meet exactly at shared vertices.
        points[0] = self.start;
        points[count - 1] = self.end;
        points
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.start = self.start.translated(dx, dy);
        self.control = self.control.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
    }
}
