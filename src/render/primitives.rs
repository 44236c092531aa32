//! Drawing primitives handed to a surface.
//!
//! These are plain data: a surface decides how to turn them into output.
//! The helper constructors carry the house style (black hairline strokes,
//! transparent fill) so call sites only spell out what differs.

use glam::{DVec2, dvec2};

use crate::path::PathDescription;

use super::defaults;

/// Stroke color, fill and stroke width shared by outlined shapes
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub stroke: String,
    pub fill: String,
    pub stroke_width: f64,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            stroke: defaults::STROKE.to_string(),
            fill: defaults::TRANSPARENT.to_string(),
            stroke_width: defaults::STROKE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CirclePrimitive {
    pub center: DVec2,
    pub radius: f64,
    pub paint: Paint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub from: DVec2,
    pub to: DVec2,
    pub stroke: String,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub position: DVec2,
    pub content: String,
    pub font_size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub d: PathDescription,
    pub paint: Paint,
}

/// Anything a surface can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle(CirclePrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
    Path(PathPrimitive),
    Group(Vec<Primitive>),
    /// Clip path definition; its children describe the clipping region.
    ClipPath { id: String, children: Vec<Primitive> },
}

impl Primitive {
    /// Number of drawable leaves, counting inside groups and clip paths.
    pub fn leaf_count(&self) -> usize {
        match self {
            Primitive::Group(children) | Primitive::ClipPath { children, .. } => {
                children.iter().map(Primitive::leaf_count).sum()
            }
            _ => 1,
        }
    }
}

impl From<CirclePrimitive> for Primitive {
    fn from(value: CirclePrimitive) -> Self {
        Primitive::Circle(value)
    }
}

impl From<LinePrimitive> for Primitive {
    fn from(value: LinePrimitive) -> Self {
        Primitive::Line(value)
    }
}

impl From<TextPrimitive> for Primitive {
    fn from(value: TextPrimitive) -> Self {
        Primitive::Text(value)
    }
}

impl From<PathPrimitive> for Primitive {
    fn from(value: PathPrimitive) -> Self {
        Primitive::Path(value)
    }
}

/// Outlined circle with the default paint.
pub fn circle(center: DVec2, radius: f64) -> CirclePrimitive {
    CirclePrimitive {
        center,
        radius,
        paint: Paint::default(),
    }
}

impl CirclePrimitive {
    pub fn with_colors(mut self, stroke: &str, fill: &str) -> Self {
        self.paint.stroke = stroke.to_string();
        self.paint.fill = fill.to_string();
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.paint.stroke_width = width;
        self
    }
}

pub fn line(from: DVec2, to: DVec2) -> LinePrimitive {
    LinePrimitive {
        from,
        to,
        stroke: defaults::STROKE.to_string(),
        stroke_width: defaults::STROKE_WIDTH,
    }
}

impl LinePrimitive {
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }
}

pub fn text(position: DVec2, content: impl Into<String>) -> TextPrimitive {
    TextPrimitive {
        position,
        content: content.into(),
        font_size: defaults::FONT_SIZE,
    }
}

impl TextPrimitive {
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }
}

pub fn path(d: PathDescription) -> PathPrimitive {
    PathPrimitive {
        d,
        paint: Paint::default(),
    }
}

impl PathPrimitive {
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.paint.stroke_width = width;
        self
    }
}

/// Where and how long to draw the reference ruler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ruler {
    pub x: f64,
    pub y: f64,
    pub length: f64,
}

impl Default for Ruler {
    fn default() -> Self {
        Self {
            x: defaults::RULER_X,
            y: defaults::RULER_Y,
            length: defaults::RULER_LENGTH,
        }
    }
}

/// Reference ruler: a labelled baseline with a tick at each end.
pub fn measure(ruler: Ruler, stroke_width: f64, font_size: f64) -> Primitive {
    let Ruler { x, y, length } = ruler;
    let tick = defaults::RULER_TICK;
    let label = format!("{}mm", crate::path::fmt_num(length));

    Primitive::Group(vec![
        text(dvec2(x, y - defaults::RULER_LABEL_RISE), label)
            .with_font_size(font_size)
            .into(),
        line(dvec2(x, y), dvec2(x + length, y))
            .with_stroke_width(stroke_width)
            .into(),
        line(dvec2(x, y - tick), dvec2(x, y + tick))
            .with_stroke_width(stroke_width)
            .into(),
        line(dvec2(x + length, y - tick), dvec2(x + length, y + tick))
            .with_stroke_width(stroke_width)
            .into(),
    ])
}
