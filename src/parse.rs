//! Parse path descriptions back into commands.
//!
//! Accepts everything `PathBuilder` emits, plus lowercase `z` and commas as
//! separators. Implicit command repetition (`L 1 2 3 4`) is not supported.

use glam::dvec2;
use miette::{NamedSource, SourceSpan};
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::PathParseError;
use crate::path::PathCommand;

#[derive(Parser)]
#[grammar = "path.pest"]
pub struct PathParser;

const SOURCE_NAME: &str = "<path>";

fn named_source(source: &str) -> NamedSource<String> {
    NamedSource::new(SOURCE_NAME, source.to_string())
}

/// Parse a path description into commands.
pub fn parse_path(source: &str) -> Result<Vec<PathCommand>, PathParseError> {
    let pairs = PathParser::parse(Rule::path, source).map_err(|e| {
        let span: SourceSpan = match e.location {
            InputLocation::Pos(pos) => (pos, 0).into(),
            InputLocation::Span((start, end)) => (start, end - start).into(),
        };
        PathParseError::Syntax {
            message: e.variant.message().into_owned(),
            src: named_source(source),
            span,
        }
    })?;

    let mut commands = Vec::new();
    for pair in pairs.flat_map(|path| path.into_inner()) {
        if pair.as_rule() == Rule::EOI {
            continue;
        }
        commands.push(parse_command(pair, source)?);
    }

    crate::log::debug!(count = commands.len(), "parsed path description");
    Ok(commands)
}

fn parse_command(pair: Pair<Rule>, source: &str) -> Result<PathCommand, PathParseError> {
    let rule = pair.as_rule();
    let span = pair.as_span();
    let args = pair
        .into_inner()
        .map(|number| parse_number(number, source))
        .collect::<Result<Vec<f64>, _>>()?;

    let command = match (rule, args.as_slice()) {
        (Rule::move_abs, &[x, y]) => PathCommand::MoveTo(dvec2(x, y)),
        (Rule::move_rel, &[dx, dy]) => PathCommand::MoveDelta(dvec2(dx, dy)),
        (Rule::line_abs, &[x, y]) => PathCommand::LineTo(dvec2(x, y)),
        (Rule::line_rel, &[dx, dy]) => PathCommand::LineDelta(dvec2(dx, dy)),
        (Rule::horizontal_abs, &[x]) => PathCommand::HorizontalTo(x),
        (Rule::horizontal_rel, &[dx]) => PathCommand::HorizontalDelta(dx),
        (Rule::vertical_abs, &[y]) => PathCommand::VerticalTo(y),
        (Rule::vertical_rel, &[dy]) => PathCommand::VerticalDelta(dy),
        (Rule::spline_abs, &[x2, y2, x, y]) => PathCommand::SplineTo {
            control: dvec2(x2, y2),
            end: dvec2(x, y),
        },
        (Rule::spline_rel, &[dx2, dy2, dx, dy]) => PathCommand::SplineDelta {
            control: dvec2(dx2, dy2),
            end: dvec2(dx, dy),
        },
        (Rule::close, &[]) => PathCommand::Close,
        (rule, args) => {
            return Err(PathParseError::Syntax {
                message: format!("unexpected {:?} with {} arguments", rule, args.len()),
                src: named_source(source),
                span: (span.start(), span.end() - span.start()).into(),
            });
        }
    };
    Ok(command)
}

fn parse_number(pair: Pair<Rule>, source: &str) -> Result<f64, PathParseError> {
    let text = pair.as_str();
    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    match magnitude {
        "NaN" => Ok(f64::NAN),
        "Infinity" if negative => Ok(f64::NEG_INFINITY),
        "Infinity" => Ok(f64::INFINITY),
        _ => text.parse::<f64>().map_err(|_| {
            let span = pair.as_span();
            PathParseError::InvalidNumber {
                text: text.to_string(),
                src: named_source(source),
                span: (span.start(), span.end() - span.start()).into(),
            }
        }),
    }
}
