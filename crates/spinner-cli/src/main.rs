use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use spinner_schematic::render::Ruler;
use spinner_schematic::{
    RenderOptions, Schematic, SchematicError, SchematicParams, fmt_num, generate,
};

#[derive(Parser, Debug)]
#[command(name = "spinner", version, about = "Draw a scaled spinner schematic")]
struct Cli {
    #[arg(long, default_value_t = 3, help = "Number of arms")]
    branches: u32,
    #[arg(long, default_value_t = 30.0, help = "Center to bearing center distance (mm)")]
    internal_radius: f64,
    #[arg(long, default_value_t = 18.0, help = "Bearing diameter (mm)")]
    bearing_size: f64,
    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,
    #[arg(long, short, help = "Write to this file instead of stdout")]
    output: Option<PathBuf>,
    #[arg(long, help = "Reject zero branches and non-positive dimensions")]
    strict: bool,
    #[arg(long, default_value_t = 0.5, help = "Stroke width (mm)")]
    stroke_width: f64,
    #[arg(long, default_value_t = 6.0, help = "Label font size")]
    font_size: f64,
    #[arg(long, help = "Leave out the reference ruler")]
    no_ruler: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// Full SVG document
    Svg,
    /// Outline path description only
    Path,
    /// Computed dimensions and bearing centers
    Summary,
}

impl Cli {
    fn params(&self) -> SchematicParams {
        SchematicParams::new(self.branches, self.internal_radius, self.bearing_size)
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            stroke_width: self.stroke_width,
            font_size: self.font_size,
            ruler: (!self.no_ruler).then(Ruler::default),
            ..RenderOptions::default()
        }
    }
}

fn summary(schematic: &Schematic) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "center: {} {}",
        fmt_num(schematic.center.x),
        fmt_num(schematic.center.y)
    );
    let _ = writeln!(out, "bearing radius: {}", fmt_num(schematic.bearing_radius));
    let _ = writeln!(out, "spinner radius: {}", fmt_num(schematic.spinner_radius));
    for bearing in &schematic.bearing_points {
        let _ = writeln!(
            out,
            "bearing {}: {} {}",
            bearing.index,
            fmt_num(bearing.center.x),
            fmt_num(bearing.center.y)
        );
    }
    let _ = writeln!(out, "outline: {}", schematic.outline);
    out
}

fn run(cli: &Cli) -> Result<(), SchematicError> {
    let params = cli.params();
    if cli.strict {
        params.validate()?;
    }
    let options = cli.render_options();

    let text = match cli.format {
        Format::Svg => {
            let surface = spinner_schematic::draw(params, &options)?;
            if let Some(path) = &cli.output {
                surface.save(path)?;
                tracing::info!(path = %path.display(), "wrote schematic");
                return Ok(());
            }
            surface.render()
        }
        Format::Path => format!("{}\n", generate(params).outline),
        Format::Summary => summary(&generate(params)),
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, text).map_err(|source| SchematicError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote schematic");
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn main() -> miette::Result<()> {
    // stdout carries the drawing, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");
    run(&cli)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_spinner() {
        let cli = Cli::try_parse_from(["spinner"]).unwrap();
        assert_eq!(cli.params(), SchematicParams::new(3, 30.0, 18.0));
        assert_eq!(cli.format, Format::Svg);
        assert_eq!(cli.render_options(), RenderOptions::default());
    }

    #[test]
    fn flags_map_to_options() {
        let cli = Cli::try_parse_from([
            "spinner",
            "--branches",
            "5",
            "--bearing-size",
            "22",
            "--format",
            "path",
            "--stroke-width",
            "0.3",
            "--no-ruler",
        ])
        .unwrap();
        assert_eq!(cli.params().branch_count, 5);
        assert_eq!(cli.params().bearing_size, 22.0);
        assert_eq!(cli.format, Format::Path);
        let options = cli.render_options();
        assert_eq!(options.stroke_width, 0.3);
        assert!(options.ruler.is_none());
    }

    #[test]
    fn strict_rejects_zero_branches() {
        let cli = Cli::try_parse_from(["spinner", "--branches", "0", "--strict"]).unwrap();
        assert!(matches!(run(&cli), Err(SchematicError::NoBranches)));
    }

    #[test]
    fn summary_lists_bearings() {
        let text = summary(&generate(SchematicParams::new(3, 30.0, 18.0)));
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("center: 53.5 53.5"));
        assert_eq!(lines.next(), Some("bearing radius: 9"));
        assert_eq!(lines.next(), Some("spinner radius: 43.5"));
        assert_eq!(lines.next(), Some("bearing 0: 83.5 53.5"));
        assert!(text.lines().last().unwrap().starts_with("outline: M "));
    }
}
