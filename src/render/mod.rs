//! Rendering for spinner schematics
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `primitives`: Circle, line, text and path primitives plus the ruler
//! - `svg`: An SVG-backed surface
//!
//! `draw_schematic` turns a computed layout into primitives and appends
//! them to any `Surface`.

pub mod defaults;
pub mod primitives;
pub mod svg;

pub use primitives::{Paint, Primitive, Ruler};
pub use self::svg::SvgSurface;

use crate::errors::SchematicError;
use crate::layout::Schematic;
use primitives::{circle, measure, path};

/// A display surface that holds primitives in drawing order.
pub trait Surface {
    /// Identifier the surface is known by in its host document.
    fn id(&self) -> &str;

    /// Remove every child.
    fn clear(&mut self);

    /// Attach a primitive after the existing children.
    fn append(&mut self, primitive: Primitive);

    /// Detach the child at `index`, if any.
    fn remove(&mut self, index: usize) -> Option<Primitive>;

    fn children(&self) -> &[Primitive];
}

/// Drawing settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub surface_id: String,
    pub stroke_width: f64,
    pub font_size: f64,
    /// Fill of the central bearing.
    pub bearing_fill: String,
    /// Radius of the dot marking each bearing center.
    pub hub_dot_radius: f64,
    /// Extra radius of the clip circle beyond the outline.
    pub clip_margin: f64,
    /// Reference ruler; `None` leaves it out.
    pub ruler: Option<Ruler>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            surface_id: defaults::SURFACE_ID.to_string(),
            stroke_width: defaults::STROKE_WIDTH,
            font_size: defaults::FONT_SIZE,
            bearing_fill: defaults::BEARING_FILL.to_string(),
            hub_dot_radius: defaults::HUB_DOT_RADIUS,
            clip_margin: defaults::CLIP_MARGIN,
            ruler: Some(Ruler::default()),
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<(), SchematicError> {
        fn invalid(name: &'static str, reason: impl Into<String>) -> SchematicError {
            SchematicError::InvalidOption {
                name,
                reason: reason.into(),
            }
        }

        if self.surface_id.trim().is_empty() {
            return Err(invalid("surface_id", "must not be empty"));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(invalid("stroke_width", "must be finite and not negative"));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(invalid("font_size", "must be finite and positive"));
        }
        if !self.hub_dot_radius.is_finite() || self.hub_dot_radius < 0.0 {
            return Err(invalid("hub_dot_radius", "must be finite and not negative"));
        }
        if !self.clip_margin.is_finite() {
            return Err(invalid("clip_margin", "must be finite"));
        }
        if let Some(ruler) = self.ruler {
            if !ruler.length.is_finite() || ruler.length <= 0.0 {
                return Err(invalid("ruler.length", "must be finite and positive"));
            }
        }
        Ok(())
    }
}

/// Redraw `surface` with the given layout.
///
/// Order: clip definition, central bearing and its dot, each branch bearing
/// and its dot, the body outline, then the ruler.
pub fn draw_schematic<S: Surface + ?Sized>(
    surface: &mut S,
    schematic: &Schematic,
    options: &RenderOptions,
) {
    let width = options.stroke_width;
    let dot = |center| {
        circle(center, options.hub_dot_radius)
            .with_colors(defaults::STROKE, defaults::STROKE)
            .with_stroke_width(width)
    };

    surface.clear();

    surface.append(Primitive::ClipPath {
        id: defaults::CLIP_ID.to_string(),
        children: vec![
            circle(schematic.center, schematic.spinner_radius + options.clip_margin)
                .with_stroke_width(width)
                .into(),
        ],
    });

    surface.append(
        circle(schematic.center, schematic.bearing_radius)
            .with_colors(defaults::STROKE, &options.bearing_fill)
            .with_stroke_width(width)
            .into(),
    );
    surface.append(dot(schematic.center).into());

    for bearing in &schematic.bearing_points {
        surface.append(
            circle(bearing.center, schematic.bearing_radius)
                .with_stroke_width(width)
                .into(),
        );
        surface.append(dot(bearing.center).into());
    }

    surface.append(
        path(schematic.outline.clone())
            .with_stroke_width(width)
            .into(),
    );

    if let Some(ruler) = options.ruler {
        surface.append(measure(ruler, width, options.font_size));
    }

    crate::log::debug!(
        surface = surface.id(),
        children = surface.children().len(),
        "drew schematic"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::generate;
    use crate::types::SchematicParams;

    fn drawn(branches: u32, options: &RenderOptions) -> SvgSurface {
        let schematic = generate(SchematicParams::new(branches, 30.0, 18.0));
        let mut surface = SvgSurface::new("spinner", schematic.extent(), schematic.extent());
        draw_schematic(&mut surface, &schematic, options);
        surface
    }

    #[test]
    fn child_order() {
        let surface = drawn(3, &RenderOptions::default());
        let children = surface.children();
        // clip, hub bearing, hub dot, 3 x (bearing, dot), outline, ruler
        assert_eq!(children.len(), 11);
        assert!(matches!(children[0], Primitive::ClipPath { .. }));
        assert!(matches!(children[9], Primitive::Path(_)));
        assert!(matches!(children[10], Primitive::Group(_)));
    }

    #[test]
    fn hub_bearing_is_filled() {
        let surface = drawn(3, &RenderOptions::default());
        let Primitive::Circle(hub) = &surface.children()[1] else {
            panic!("expected the hub bearing");
        };
        assert_eq!(hub.radius, 9.0);
        assert_eq!(hub.paint.fill, "blue");

        let Primitive::Circle(dot) = &surface.children()[2] else {
            panic!("expected the hub dot");
        };
        assert_eq!(dot.radius, 1.0);
        assert_eq!(dot.paint.fill, "black");
    }

    #[test]
    fn clip_circle_extends_past_outline() {
        let surface = drawn(3, &RenderOptions::default());
        let Primitive::ClipPath { id, children } = &surface.children()[0] else {
            panic!("expected the clip path");
        };
        assert_eq!(id, "clip");
        let Primitive::Circle(clip) = &children[0] else {
            panic!("clip region should be a circle");
        };
        assert_eq!(clip.radius, 44.5);
    }

    #[test]
    fn redraw_clears_previous_children() {
        let schematic = generate(SchematicParams::new(5, 30.0, 18.0));
        let mut surface = SvgSurface::new("spinner", 200.0, 200.0);
        draw_schematic(&mut surface, &schematic, &RenderOptions::default());
        draw_schematic(&mut surface, &schematic, &RenderOptions::default());
        assert_eq!(surface.children().len(), 1 + 2 + 5 * 2 + 1 + 1);
    }

    #[test]
    fn ruler_is_optional() {
        let options = RenderOptions {
            ruler: None,
            ..RenderOptions::default()
        };
        let surface = drawn(3, &options);
        assert_eq!(surface.children().len(), 10);
    }

    #[test]
    fn stroke_width_applies_everywhere() {
        let options = RenderOptions {
            stroke_width: 0.25,
            ..RenderOptions::default()
        };
        let out = drawn(3, &options).render();
        assert!(out.contains(r#"stroke-width="0.25""#));
        assert!(!out.contains(r#"stroke-width="0.5""#));
    }

    #[test]
    fn options_validation() {
        assert!(RenderOptions::default().validate().is_ok());

        let bad = RenderOptions {
            stroke_width: -1.0,
            ..RenderOptions::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(SchematicError::InvalidOption {
                name: "stroke_width",
                ..
            })
        ));

        let bad = RenderOptions {
            surface_id: "  ".into(),
            ..RenderOptions::default()
        };
        assert!(bad.validate().is_err());

        let bad = RenderOptions {
            ruler: Some(Ruler {
                length: 0.0,
                ..Ruler::default()
            }),
            ..RenderOptions::default()
        };
        assert!(bad.validate().is_err());
    }
}
