//! Path description builder.
//!
//! `PathBuilder` accumulates drawing commands in emission order and serializes
//! them into the SVG path mini-language: one letter per command, numeric
//! arguments separated by single spaces, commands separated by single spaces.
//!
//! The builder knows nothing about geometry. It never reorders, merges or
//! validates commands; appending after `close` simply re-opens the path.

use std::fmt;

use glam::{DVec2, dvec2};

use crate::errors::PathParseError;

/// Format a coordinate for a path description.
///
/// Shortest decimal form that round-trips, no fixed precision and no
/// exponent. Integral values print without a fractional part, negative zero
/// prints as `0`, and non-finite values print as `NaN`, `Infinity` or
/// `-Infinity`.
pub fn fmt_num(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo(DVec2),
    /// `m dx dy`
    MoveDelta(DVec2),
    /// `L x y`
    LineTo(DVec2),
    /// `l dx dy`
    LineDelta(DVec2),
    /// `H x`
    HorizontalTo(f64),
    /// `h dx`
    HorizontalDelta(f64),
    /// `V y`
    VerticalTo(f64),
    /// `v dy`
    VerticalDelta(f64),
    /// `S x2 y2 x y`
    SplineTo { control: DVec2, end: DVec2 },
    /// `s dx2 dy2 dx dy`
    SplineDelta { control: DVec2, end: DVec2 },
    /// `Z` (also read from `z`)
    Close,
}

impl PathCommand {
    /// The command letter as written in a path description.
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::MoveDelta(_) => 'm',
            PathCommand::LineTo(_) => 'L',
            PathCommand::LineDelta(_) => 'l',
            PathCommand::HorizontalTo(_) => 'H',
            PathCommand::HorizontalDelta(_) => 'h',
            PathCommand::VerticalTo(_) => 'V',
            PathCommand::VerticalDelta(_) => 'v',
            PathCommand::SplineTo { .. } => 'S',
            PathCommand::SplineDelta { .. } => 's',
            PathCommand::Close => 'Z',
        }
    }

    /// True for relative (lowercase) commands.
    pub fn is_relative(&self) -> bool {
        matches!(
            self,
            PathCommand::MoveDelta(_)
                | PathCommand::LineDelta(_)
                | PathCommand::HorizontalDelta(_)
                | PathCommand::VerticalDelta(_)
                | PathCommand::SplineDelta { .. }
        )
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.letter();
        match *self {
            PathCommand::MoveTo(p)
            | PathCommand::MoveDelta(p)
            | PathCommand::LineTo(p)
            | PathCommand::LineDelta(p) => {
                write!(f, "{} {} {}", letter, fmt_num(p.x), fmt_num(p.y))
            }
            PathCommand::HorizontalTo(v)
            | PathCommand::HorizontalDelta(v)
            | PathCommand::VerticalTo(v)
            | PathCommand::VerticalDelta(v) => write!(f, "{} {}", letter, fmt_num(v)),
            PathCommand::SplineTo { control, end } | PathCommand::SplineDelta { control, end } => {
                write!(
                    f,
                    "{} {} {} {} {}",
                    letter,
                    fmt_num(control.x),
                    fmt_num(control.y),
                    fmt_num(end.x),
                    fmt_num(end.y)
                )
            }
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// Builder for path descriptions.
///
/// # Example
///
/// ```
/// use spinner_schematic::PathBuilder;
///
/// let mut path = PathBuilder::new();
/// path.move_to(1.0, 2.0);
/// path.line_to(3.0, 4.0);
/// path.close();
/// assert_eq!(path.result(), "M 1 2 L 3 4 Z");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Absolute move, starting a new subpath.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.push(PathCommand::MoveTo(dvec2(x, y)));
    }

    /// Relative move.
    pub fn move_delta(&mut self, dx: f64, dy: f64) {
        self.push(PathCommand::MoveDelta(dvec2(dx, dy)));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.push(PathCommand::LineTo(dvec2(x, y)));
    }

    pub fn line_delta(&mut self, dx: f64, dy: f64) {
        self.push(PathCommand::LineDelta(dvec2(dx, dy)));
    }

    pub fn horizontal_to(&mut self, x: f64) {
        self.push(PathCommand::HorizontalTo(x));
    }

    pub fn horizontal_delta(&mut self, dx: f64) {
        self.push(PathCommand::HorizontalDelta(dx));
    }

    pub fn vertical_to(&mut self, y: f64) {
        self.push(PathCommand::VerticalTo(y));
    }

    pub fn vertical_delta(&mut self, dy: f64) {
        self.push(PathCommand::VerticalDelta(dy));
    }

    /// Smooth curve through control point `(x2, y2)` to `(x, y)`.
    pub fn spline_to(&mut self, x2: f64, y2: f64, x: f64, y: f64) {
        self.push(PathCommand::SplineTo {
            control: dvec2(x2, y2),
            end: dvec2(x, y),
        });
    }

    /// Relative form of [`spline_to`](Self::spline_to).
    pub fn spline_delta(&mut self, dx2: f64, dy2: f64, dx: f64, dy: f64) {
        self.push(PathCommand::SplineDelta {
            control: dvec2(dx2, dy2),
            end: dvec2(dx, dy),
        });
    }

    /// Curve with control point `(x1, y1)` ending at `(x, y)`.
    ///
    /// Emits the same `S` command as [`spline_to`](Self::spline_to), not a
    /// quadratic `Q`. Existing drawings depend on that output.
    pub fn quadratic_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.spline_to(x1, y1, x, y);
    }

    /// Close the current subpath back to its start.
    pub fn close(&mut self) {
        self.push(PathCommand::Close);
    }

    /// Commands emitted so far, in order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialize the commands into a path description string.
    pub fn result(&self) -> String {
        self.commands
            .iter()
            .map(PathCommand::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Consume the builder, keeping the serialized description.
    pub fn finish(self) -> PathDescription {
        PathDescription(self.result())
    }
}

/// A serialized path description, ready for a path primitive's `d` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathDescription(String);

impl PathDescription {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the description back into commands.
    pub fn commands(&self) -> Result<Vec<PathCommand>, PathParseError> {
        crate::parse::parse_path(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PathDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PathDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_has_empty_result() {
        let builder = PathBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.result(), "");
    }

    #[test]
    fn move_then_line() {
        let mut builder = PathBuilder::new();
        builder.move_to(1.0, 2.0);
        builder.line_to(3.0, 4.0);
        assert_eq!(builder.result(), "M 1 2 L 3 4");
    }

    #[test]
    fn result_is_idempotent() {
        let mut builder = PathBuilder::new();
        builder.move_to(0.5, -2.25);
        builder.horizontal_delta(3.0);
        builder.close();
        let first = builder.result();
        let second = builder.result();
        assert_eq!(first, second);
        assert_eq!(builder.len(), 3);
    }

    #[test]
    fn every_command_letter() {
        let mut builder = PathBuilder::new();
        builder.move_to(1.0, 2.0);
        builder.move_delta(3.0, 4.0);
        builder.line_to(5.0, 6.0);
        builder.line_delta(-1.0, -2.0);
        builder.horizontal_to(7.5);
        builder.horizontal_delta(-0.5);
        builder.vertical_to(8.0);
        builder.vertical_delta(0.25);
        builder.spline_to(1.0, 1.0, 2.0, 2.0);
        builder.spline_delta(1.0, 0.0, 2.0, 0.0);
        builder.close();
        insta::assert_snapshot!(
            builder.result(),
            @"M 1 2 m 3 4 L 5 6 l -1 -2 H 7.5 h -0.5 V 8 v 0.25 S 1 1 2 2 s 1 0 2 0 Z"
        );
    }

    #[test]
    fn quadratic_emits_spline_letter() {
        let mut spline = PathBuilder::new();
        spline.spline_to(1.0, 2.0, 3.0, 4.0);
        let mut quadratic = PathBuilder::new();
        quadratic.quadratic_to(1.0, 2.0, 3.0, 4.0);
        assert_eq!(spline.result(), quadratic.result());
        assert_eq!(quadratic.result(), "S 1 2 3 4");
    }

    #[test]
    fn appending_after_close_reopens() {
        let mut builder = PathBuilder::new();
        builder.move_to(0.0, 0.0);
        builder.close();
        builder.line_to(1.0, 1.0);
        assert_eq!(builder.result(), "M 0 0 Z L 1 1");
    }

    #[test]
    fn duplicates_are_kept() {
        let mut builder = PathBuilder::new();
        builder.close();
        builder.close();
        assert_eq!(builder.result(), "Z Z");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(-3.0), "-3");
        assert_eq!(fmt_num(83.5), "83.5");
        assert_eq!(fmt_num(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(f64::NAN), "NaN");
        assert_eq!(fmt_num(f64::INFINITY), "Infinity");
        assert_eq!(fmt_num(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn finish_keeps_description() {
        let mut builder = PathBuilder::new();
        builder.move_to(2.0, 3.0);
        builder.vertical_to(9.0);
        let description = builder.finish();
        assert_eq!(description.as_str(), "M 2 3 V 9");
        assert_eq!(description.to_string(), "M 2 3 V 9");
    }

    #[test]
    fn relative_flags() {
        assert!(PathCommand::LineDelta(DVec2::ZERO).is_relative());
        assert!(!PathCommand::LineTo(DVec2::ZERO).is_relative());
        assert!(!PathCommand::Close.is_relative());
    }
}
