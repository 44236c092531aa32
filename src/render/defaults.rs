//! Default drawing settings (all lengths in millimeters)

pub const SURFACE_ID: &str = "spinner";
pub const CLIP_ID: &str = "clip";
pub const STROKE: &str = "black";
pub const TRANSPARENT: &str = "transparent";
pub const BEARING_FILL: &str = "blue";
pub const STROKE_WIDTH: f64 = 0.5;
pub const FONT_SIZE: f64 = 6.0;
pub const HUB_DOT_RADIUS: f64 = 1.0;
pub const CLIP_MARGIN: f64 = 1.0;
pub const RULER_X: f64 = 10.0;
pub const RULER_Y: f64 = 10.0;
pub const RULER_LENGTH: f64 = 10.0;
/// Distance from the ruler baseline up to its label.
pub const RULER_LABEL_RISE: f64 = 3.0;
/// Half height of the ruler end ticks.
pub const RULER_TICK: f64 = 2.0;
