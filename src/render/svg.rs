//! SVG surface

use std::path::Path;

use ::svg::Document;
use ::svg::node::Node;
use ::svg::node::element::{
    Circle as SvgCircle, ClipPath, Definitions, Group, Line as SvgLine, Path as SvgPath,
    Text as SvgText,
};

use crate::errors::SchematicError;
use crate::path::fmt_num;

use super::Surface;
use super::primitives::{CirclePrimitive, Paint, PathPrimitive, Primitive};

/// A surface that serializes its primitives to an SVG document.
///
/// Coordinates are millimeters; the document maps one user unit to one
/// millimeter through `width`/`height` and the `viewBox`.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    id: String,
    width: f64,
    height: f64,
    children: Vec<Primitive>,
}

impl SvgSurface {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            children: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Build the SVG document for the current children.
    pub fn to_document(&self) -> Document {
        let view_box = format!("0 0 {} {}", fmt_num(self.width), fmt_num(self.height));
        let document = Document::new()
            .set("id", self.id.as_str())
            .set("width", format!("{}mm", fmt_num(self.width)))
            .set("height", format!("{}mm", fmt_num(self.height)))
            .set("viewBox", view_box);

        self.children
            .iter()
            .fold(document, |document, child| document.add(to_node(child)))
    }

    /// Serialize the surface to SVG text.
    pub fn render(&self) -> String {
        self.to_document().to_string()
    }

    /// Write the surface to an SVG file.
    pub fn save(&self, path: &Path) -> Result<(), SchematicError> {
        ::svg::save(path, &self.to_document()).map_err(|source| SchematicError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Surface for SvgSurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn clear(&mut self) {
        self.children.clear();
    }

    fn append(&mut self, primitive: Primitive) {
        self.children.push(primitive);
    }

    fn remove(&mut self, index: usize) -> Option<Primitive> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    fn children(&self) -> &[Primitive] {
        &self.children
    }
}

fn circle_node(circle: &CirclePrimitive) -> SvgCircle {
    let Paint {
        stroke,
        fill,
        stroke_width,
    } = &circle.paint;
    SvgCircle::new()
        .set("cx", fmt_num(circle.center.x))
        .set("cy", fmt_num(circle.center.y))
        .set("r", fmt_num(circle.radius))
        .set("stroke-width", fmt_num(*stroke_width))
        .set("stroke", stroke.as_str())
        .set("fill", fill.as_str())
}

fn path_node(path: &PathPrimitive) -> SvgPath {
    let Paint {
        stroke,
        fill,
        stroke_width,
    } = &path.paint;
    SvgPath::new()
        .set("d", path.d.as_str())
        .set("stroke", stroke.as_str())
        .set("fill", fill.as_str())
        .set("stroke-width", fmt_num(*stroke_width))
}

/// Convert a primitive into an SVG node, recursing into groups.
fn to_node(primitive: &Primitive) -> Box<dyn Node> {
    match primitive {
        Primitive::Circle(circle) => Box::new(circle_node(circle)),
        Primitive::Line(line) => Box::new(
            SvgLine::new()
                .set("x1", fmt_num(line.from.x))
                .set("y1", fmt_num(line.from.y))
                .set("x2", fmt_num(line.to.x))
                .set("y2", fmt_num(line.to.y))
                .set("stroke", line.stroke.as_str())
                .set("stroke-width", fmt_num(line.stroke_width)),
        ),
        Primitive::Text(text) => Box::new(
            SvgText::new(text.content.as_str())
                .set("x", fmt_num(text.position.x))
                .set("y", fmt_num(text.position.y))
                .set("font-size", fmt_num(text.font_size)),
        ),
        Primitive::Path(path) => Box::new(path_node(path)),
        Primitive::Group(children) => Box::new(
            children
                .iter()
                .fold(Group::new(), |group, child| group.add(to_node(child))),
        ),
        Primitive::ClipPath { id, children } => {
            let clip = children
                .iter()
                .fold(ClipPath::new().set("id", id.as_str()), |clip, child| {
                    clip.add(to_node(child))
                });
            Box::new(Definitions::new().add(clip))
        }
    }
}
