use serde::{Deserialize, Serialize};

use super::{PatternPrimitive, Point};

/// A straight segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternLine {
    pub start: Point,
    pub end: Point,
}

impl PatternLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl PatternPrimitive for PatternLine {
    fn start(&self) -> Point {
        self.start
    }

    fn end(&self) -> Point {
        self.end
    }

    fn mid_anchor(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    // A straight segment needs no subdivision, whatever density is asked for.
    fn sample(&self, _segments: usize) -> Vec<Point> {
        vec![self.start, self.end]
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.start = self.start.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
    }
}
