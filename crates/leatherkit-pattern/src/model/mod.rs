use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use leatherkit_core::{PatternError, Result};

mod arc;
mod bezier;
mod line;

pub use arc::{ArcGeometry, PatternArc};
pub use bezier::PatternBezier;
pub use leatherkit_core::{Bounds, Point};
pub use line::PatternLine;

/// Behaviour shared by every drawable primitive.
pub trait PatternPrimitive {
    fn start(&self) -> Point;
    fn end(&self) -> Point;
    /// Point used for "mid" anchors and midpoint snapping.
    fn mid_anchor(&self) -> Point;
    /// Ordered points along the primitive; always at least two.
    fn sample(&self, segments: usize) -> Vec<Point>;
    fn translate(&mut self, dx: f64, dy: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Line,
    Arc,
    Bezier,
}

/// The geometric part of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeGeometry {
    Line(PatternLine),
    Arc(PatternArc),
    Bezier(PatternBezier),
}

impl PatternPrimitive for ShapeGeometry {
    fn start(&self) -> Point {
        match self {
            ShapeGeometry::Line(s) => s.start(),
            ShapeGeometry::Arc(s) => s.start(),
            ShapeGeometry::Bezier(s) => s.start(),
        }
    }

    fn end(&self) -> Point {
        match self {
            ShapeGeometry::Line(s) => s.end(),
            ShapeGeometry::Arc(s) => s.end(),
            ShapeGeometry::Bezier(s) => s.end(),
        }
    }

    fn mid_anchor(&self) -> Point {
        match self {
            ShapeGeometry::Line(s) => s.mid_anchor(),
            ShapeGeometry::Arc(s) => s.mid_anchor(),
            ShapeGeometry::Bezier(s) => s.mid_anchor(),
        }
    }

    fn sample(&self, segments: usize) -> Vec<Point> {
        match self {
            ShapeGeometry::Line(s) => s.sample(segments),
            ShapeGeometry::Arc(s) => s.sample(segments),
            ShapeGeometry::Bezier(s) => s.sample(segments),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            ShapeGeometry::Line(s) => s.translate(dx, dy),
            ShapeGeometry::Arc(s) => s.translate(dx, dy),
            ShapeGeometry::Bezier(s) => s.translate(dx, dy),
        }
    }
}

impl ShapeGeometry {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeGeometry::Line(_) => ShapeType::Line,
            ShapeGeometry::Arc(_) => ShapeType::Arc,
            ShapeGeometry::Bezier(_) => ShapeType::Bezier,
        }
    }
}

/// Role of a shape as classified by its line type.
///
/// Line types are owned by the document; the engine only reads the role to
/// decide, for instance, which shapes receive stitch holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineRole {
    Cut,
    Stitch,
    Fold,
    Guide,
    Mark,
    Other,
}

impl LineRole {
    /// Lenient classification: unknown line types map to `Other`.
    pub fn from_line_type(line_type_id: &str) -> Self {
        line_type_id.parse().unwrap_or(LineRole::Other)
    }
}

impl FromStr for LineRole {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cut" => Ok(Self::Cut),
            "stitch" => Ok(Self::Stitch),
            "fold" => Ok(Self::Fold),
            "guide" => Ok(Self::Guide),
            "mark" => Ok(Self::Mark),
            _ => Err(PatternError::unknown("line role", s)),
        }
    }
}

impl fmt::Display for LineRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cut => write!(f, "cut"),
            Self::Stitch => write!(f, "stitch"),
            Self::Fold => write!(f, "fold"),
            Self::Guide => write!(f, "guide"),
            Self::Mark => write!(f, "mark"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A drawn shape together with its document metadata.
///
/// `layer_id` and `group_id` are lookup keys only; the document owns the
/// referenced layers and groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: String,
    pub layer_id: String,
    pub line_type_id: String,
    #[serde(default)]
    pub group_id: Option<String>,
    pub geometry: ShapeGeometry,
}

impl Shape {
    pub fn new(
        id: impl Into<String>,
        layer_id: impl Into<String>,
        line_type_id: impl Into<String>,
        geometry: ShapeGeometry,
    ) -> Self {
        Self {
            id: id.into(),
            layer_id: layer_id.into(),
            line_type_id: line_type_id.into(),
            group_id: None,
            geometry,
        }
    }

    pub fn line(
        id: impl Into<String>,
        layer_id: impl Into<String>,
        line_type_id: impl Into<String>,
        start: Point,
        end: Point,
    ) -> Self {
        Self::new(
            id,
            layer_id,
            line_type_id,
            ShapeGeometry::Line(PatternLine::new(start, end)),
        )
    }

    pub fn arc(
        id: impl Into<String>,
        layer_id: impl Into<String>,
        line_type_id: impl Into<String>,
        start: Point,
        mid: Point,
        end: Point,
    ) -> Self {
        Self::new(
            id,
            layer_id,
            line_type_id,
            ShapeGeometry::Arc(PatternArc::new(start, mid, end)),
        )
    }

    pub fn bezier(
        id: impl Into<String>,
        layer_id: impl Into<String>,
        line_type_id: impl Into<String>,
        start: Point,
        control: Point,
        end: Point,
    ) -> Self {
        Self::new(
            id,
            layer_id,
            line_type_id,
            ShapeGeometry::Bezier(PatternBezier::new(start, control, end)),
        )
    }

    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn shape_type(&self) -> ShapeType {
        self.geometry.shape_type()
    }

    pub fn role(&self) -> LineRole {
        LineRole::from_line_type(&self.line_type_id)
    }

    pub fn start(&self) -> Point {
        self.geometry.start()
    }

    pub fn end(&self) -> Point {
        self.geometry.end()
    }

    pub fn mid_anchor(&self) -> Point {
        self.geometry.mid_anchor()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.geometry.translate(dx, dy);
    }

    /// Copy of the shape moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Shape {
        let mut moved = self.clone();
        moved.translate(dx, dy);
        moved
    }

    /// Bounding box of the sampled outline.
    pub fn bounds(&self, segments: usize) -> Bounds {
        let points = self.geometry.sample(segments);
        Bounds::from_points(&points).unwrap_or_else(|| {
            let p = self.start();
            Bounds::new(p.x, p.y, p.x, p.y)
        })
    }

    /// Sampled outline as a lyon path, for handing over to renderers.
    pub fn to_lyon_path(&self, segments: usize) -> Path {
        let points = self.geometry.sample(segments);
        let mut builder = Path::builder();
        builder.begin(point(points[0].x as f32, points[0].y as f32));
        for p in &points[1..] {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.end(false);
        builder.build()
    }
}

/// A document layer. Constraints can measure against a layer's bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: String,
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Layer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible: true,
        }
    }
}

/// A fold line; acts as a guide for snapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldLine {
    pub id: String,
    pub start: Point,
    pub end: Point,
}

impl FoldLine {
    pub fn new(id: impl Into<String>, start: Point, end: Point) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Closest point on the segment to `p`.
    pub fn project(&self, p: Point) -> Point {
        let d = self.end - self.start;
        let len_sq = d.dot(&d);
        if len_sq <= leatherkit_core::EPSILON {
            return self.start;
        }
        let t = ((p - self.start).dot(&d) / len_sq).clamp(0.0, 1.0);
        self.start.lerp(&self.end, t)
    }
}

/// A hardware placement marker (snap, rivet, buckle hole, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareMarker {
    pub id: String,
    pub kind: String,
    pub point: Point,
}

impl HardwareMarker {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, point: Point) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            point,
        }
    }
}
