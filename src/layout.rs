//! Spinner layout: bearing positions and the body outline.
//!
//! Everything is driven by evenly spaced polar angles around the diagram
//! center, so the result is rotationally symmetric for any branch count.
//! Angles grow clockwise on screen because the y axis points down.

use std::f64::consts::TAU;

use glam::{DVec2, dvec2};

use crate::path::{PathBuilder, PathDescription};
use crate::types::{SchematicParams, polar};

/// Space left between the outline's bounding circle and the diagram edge (mm).
pub const MARGIN: f64 = 10.0;

/// Ratio between the bearing radius and the material around each bearing.
const ARM_WALL_RATIO: f64 = 1.5;

/// The waist between two arms sits at the spinner radius divided by this.
const WAIST_DIVISOR: f64 = 3.0;

/// Center of one bearing hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearingPoint {
    pub index: u32,
    /// Polar angle in radians, measured from the positive x axis.
    pub angle: f64,
    pub center: DVec2,
}

/// Computed layout for one parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct Schematic {
    pub params: SchematicParams,
    pub center: DVec2,
    pub bearing_radius: f64,
    pub spinner_radius: f64,
    /// Angle between consecutive branches. Infinite when there are no branches.
    pub angle_step: f64,
    pub bearing_points: Vec<BearingPoint>,
    pub outline: PathDescription,
}

impl Schematic {
    /// Width and height of the square area the diagram occupies.
    pub fn extent(&self) -> f64 {
        self.center.x * 2.0
    }
}

/// Compute the layout of a spinner.
///
/// Never fails. Zero branches yields an infinite angle step, no bearing
/// points and an outline holding only the closing command; non-positive or
/// non-finite dimensions flow through the arithmetic unchanged.
pub fn generate(params: SchematicParams) -> Schematic {
    let bearing_radius = params.bearing_size / 2.0;
    let spinner_radius = params.internal_radius + bearing_radius * ARM_WALL_RATIO;
    let center = dvec2(spinner_radius + MARGIN, spinner_radius + MARGIN);
    let angle_step = TAU / params.branch_count as f64;

    let bearing_points = (0..params.branch_count)
        .map(|index| {
            let angle = angle_step * index as f64;
            BearingPoint {
                index,
                angle,
                center: polar(center, params.internal_radius, angle),
            }
        })
        .collect();

    let outline = build_outline(center, spinner_radius, params.branch_count, angle_step);

    crate::log::debug!(
        branch_count = params.branch_count,
        bearing_radius,
        spinner_radius,
        center_x = center.x,
        center_y = center.y,
        "generated spinner layout"
    );

    Schematic {
        params,
        center,
        bearing_radius,
        spinner_radius,
        angle_step,
        bearing_points,
        outline,
    }
}

/// Build the closed body outline.
///
/// Each branch contributes a flat arm tip (three points on the outer circle)
/// followed by a line into the waist halfway to the next branch.
fn build_outline(
    center: DVec2,
    spinner_radius: f64,
    branch_count: u32,
    angle_step: f64,
) -> PathDescription {
    let mut path = PathBuilder::new();

    for i in 0..branch_count {
        let angle = angle_step * i as f64;
        let previous_quarter = angle - angle_step / 6.0;
        let quarter = angle + angle_step / 6.0;
        let semi = angle + angle_step / 2.0;

        let outer = polar(center, spinner_radius, angle);
        let control = polar(center, spinner_radius, previous_quarter);
        let inner = polar(center, spinner_radius / WAIST_DIVISOR, semi);
        let next_control = polar(center, spinner_radius, quarter);

        if i == 0 {
            path.move_to(control.x, control.y);
        } else {
            path.line_to(control.x, control.y);
        }
        path.line_to(outer.x, outer.y);
        path.line_to(next_control.x, next_control.y);
        path.line_to(inner.x, inner.y);
    }
    path.close();

    path.finish()
}
