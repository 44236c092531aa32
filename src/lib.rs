//! Scaled technical schematics of multi-armed spinner bodies.
//!
//! Three numbers describe a spinner: how many arms it has, how far each
//! bearing sits from the center, and the bearing diameter (millimeters).
//! [`generate`] turns them into bearing positions and a closed outline path;
//! [`render::draw_schematic`] places the result on a [`render::Surface`].
//!
//! ```
//! use spinner_schematic::{SchematicParams, generate};
//!
//! let schematic = generate(SchematicParams::new(3, 30.0, 18.0));
//! assert_eq!(schematic.spinner_radius, 43.5);
//! assert!(schematic.outline.as_str().starts_with("M "));
//! assert!(schematic.outline.as_str().ends_with(" Z"));
//! ```

pub mod errors;
pub mod layout;
pub mod log;
pub mod parse;
pub mod path;
pub mod render;
pub mod types;

pub use errors::{PathParseError, SchematicError};
pub use layout::{BearingPoint, Schematic, generate};
pub use parse::parse_path;
pub use path::{PathBuilder, PathCommand, PathDescription, fmt_num};
pub use render::{RenderOptions, Surface, SvgSurface, draw_schematic};
pub use types::SchematicParams;

/// Lay out a spinner and render it to an SVG document string.
///
/// Parameters are not validated (see [`SchematicParams::validate`]); the
/// options are, since a bad stroke width or font size would silently produce
/// an unreadable drawing.
pub fn render_svg(
    params: SchematicParams,
    options: &RenderOptions,
) -> Result<String, SchematicError> {
    Ok(draw(params, options)?.render())
}

/// Lay out a spinner and draw it onto a fresh SVG surface sized to fit.
pub fn draw(params: SchematicParams, options: &RenderOptions) -> Result<SvgSurface, SchematicError> {
    options.validate()?;
    let schematic = generate(params);
    let extent = schematic.extent();
    let mut surface = SvgSurface::new(options.surface_id.as_str(), extent, extent);
    draw_schematic(&mut surface, &schematic, options);
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_default_spinner() {
        let svg = render_svg(SchematicParams::default(), &RenderOptions::default()).unwrap();
        assert!(svg.contains(r#"id="spinner""#));
        assert!(svg.contains(r#"viewBox="0 0 107 107""#));
        assert_eq!(svg.matches("<circle").count(), 9);
        assert_eq!(svg.matches("<line").count(), 3);
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn render_rejects_bad_options() {
        let options = RenderOptions {
            font_size: 0.0,
            ..RenderOptions::default()
        };
        let err = render_svg(SchematicParams::default(), &options).unwrap_err();
        assert!(matches!(err, SchematicError::InvalidOption { name: "font_size", .. }));
    }

    #[test]
    fn draw_sizes_surface_to_layout() {
        let surface = draw(SchematicParams::new(6, 40.0, 22.0), &RenderOptions::default()).unwrap();
        // spinner radius 40 + 16.5, plus margin on both sides
        assert_eq!(surface.width(), 133.0);
        assert_eq!(surface.height(), 133.0);
    }
}
