use spinner_schematic::{SchematicParams, generate};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let branches = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3);

    let schematic = generate(SchematicParams::new(branches, 30.0, 18.0));
    for bearing in &schematic.bearing_points {
        tracing::info!(
            index = bearing.index,
            x = bearing.center.x,
            y = bearing.center.y,
            "bearing"
        );
    }
    println!("{}", schematic.outline);
}
