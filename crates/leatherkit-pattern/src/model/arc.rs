use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::{PatternPrimitive, Point};

/// A circular arc through three points.
///
/// The arc starts at `start`, passes through `mid` and ends at `end`; its
/// center and sweep direction are derived from those three points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternArc {
    pub start: Point,
    pub mid: Point,
    pub end: Point,
}

/// Center, radius and angular span of a three-point arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    /// Signed sweep in radians; positive is counter-clockwise.
    pub sweep: f64,
}

impl PatternArc {
    pub fn new(start: Point, mid: Point, end: Point) -> Self {
        Self { start, mid, end }
    }

    /// Circle through the three points, or `None` when they are collinear
    /// (or coincident) and no finite circle exists.
    pub fn geometry(&self) -> Option<ArcGeometry> {
        let (a, b, c) = (self.start, self.mid, self.end);
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if d.abs() < 1e-9 {
            return None;
        }

        let a2 = a.x * a.x + a.y * a.y;
        let b2 = b.x * b.x + b.y * b.y;
        let c2 = c.x * c.x + c.y * c.y;
        let center = Point::new(
            (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
            (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
        );
        if !center.is_finite() {
            return None;
        }

        let angle_of = |p: Point| (p.y - center.y).atan2(p.x - center.x);
        let start_angle = angle_of(a);
        let ccw_sweep = (angle_of(c) - start_angle).rem_euclid(TAU);
        let ccw_to_mid = (angle_of(b) - start_angle).rem_euclid(TAU);

        // Go counter-clockwise when that passes through `mid`, otherwise the
        // other way round.
        let sweep = if ccw_to_mid <= ccw_sweep {
            ccw_sweep
        } else {
            ccw_sweep - TAU
        };

        Some(ArcGeometry {
            center,
            radius: center.distance_to(&a),
            start_angle,
            sweep,
        })
    }
}

impl PatternPrimitive for PatternArc {
    fn start(&self) -> Point {
        self.start
    }

    fn end(&self) -> Point {
        self.end
    }

    fn mid_anchor(&self) -> Point {
        self.mid
    }

    fn sample(&self, segments: usize) -> Vec<Point> {
        let Some(arc) = self.geometry() else {
            return vec![self.start, self.end];
        };

        let count = segments.max(2);
        let last = (count - 1) as f64;
        let mut points: Vec<Point> = (0..count)
            .map(|i| {
                let angle = arc.start_angle + arc.sweep * (i as f64 / last);
                Point::new(
                    arc.center.x + arc.radius * angle.cos(),
                    arc.center.y + arc.radius * angle.sin(),
                )
            })
            .collect();
        points[0] = self.start;
        points[count - 1] = self.end;
        points
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.start = self.start.translated(dx, dy);
        self.mid = self.mid.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
    }
}
