//! Input parameters and small numeric helpers.
//!
//! All lengths are millimeters. Nothing here is validated implicitly: the
//! layout accepts whatever it is given, and `SchematicParams::validate` is
//! for hosts that want to reject bad input up front.

use std::fmt;

use glam::{DVec2, dvec2};

use crate::errors::SchematicError;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Check that a value is finite and strictly positive.
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Dimensions of a spinner body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchematicParams {
    /// Number of radial arms.
    pub branch_count: u32,
    /// Distance from the center to each bearing hole center, in mm.
    pub internal_radius: f64,
    /// Diameter of each bearing hole, in mm.
    pub bearing_size: f64,
}

impl SchematicParams {
    pub const fn new(branch_count: u32, internal_radius: f64, bearing_size: f64) -> Self {
        Self {
            branch_count,
            internal_radius,
            bearing_size,
        }
    }

    /// Reject parameters that cannot describe a physical spinner.
    ///
    /// Branch counts of one and two are accepted (with a warning) since the
    /// layout handles them without trouble.
    pub fn validate(&self) -> Result<(), SchematicError> {
        if self.branch_count == 0 {
            return Err(SchematicError::NoBranches);
        }
        check_positive(self.internal_radius).map_err(|source| {
            SchematicError::InvalidParameter {
                name: "internal_radius",
                source,
            }
        })?;
        check_positive(self.bearing_size).map_err(|source| SchematicError::InvalidParameter {
            name: "bearing_size",
            source,
        })?;
        if self.branch_count < 3 {
            crate::log::warn!(
                branch_count = self.branch_count,
                "fewer than three branches does not give a balanced spinner"
            );
        }
        Ok(())
    }
}

impl Default for SchematicParams {
    fn default() -> Self {
        Self::new(3, 30.0, 18.0)
    }
}

/// Polar to Cartesian conversion around `center`.
#[inline]
pub fn polar(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    dvec2(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn check_positive_rejects_each_bad_class() {
        assert_eq!(check_positive(f64::NAN), Err(NumericError::NaN));
        assert_eq!(check_positive(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(check_positive(0.0), Err(NumericError::Zero));
        assert_eq!(check_positive(-1.5), Err(NumericError::Negative));
        assert_eq!(check_positive(2.5), Ok(2.5));
    }

    #[test]
    fn polar_quarter_turns() {
        let c = dvec2(10.0, 20.0);
        let east = polar(c, 5.0, 0.0);
        assert_eq!(east, dvec2(15.0, 20.0));

        let south = polar(c, 5.0, FRAC_PI_2);
        assert!((south.x - 10.0).abs() < 1e-12);
        assert!((south.y - 25.0).abs() < 1e-12);

        let west = polar(c, 5.0, PI);
        assert!((west.x - 5.0).abs() < 1e-12);
        assert!((west.y - 20.0).abs() < 1e-12);
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(SchematicParams::default().validate().is_ok());
    }

    #[test]
    fn validate_accepts_two_branches() {
        assert!(SchematicParams::new(2, 30.0, 18.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_branches() {
        let err = SchematicParams::new(0, 30.0, 18.0).validate().unwrap_err();
        assert!(matches!(err, SchematicError::NoBranches));
    }

    #[test]
    fn validate_names_bad_field() {
        let err = SchematicParams::new(3, 30.0, -4.0).validate().unwrap_err();
        match err {
            SchematicError::InvalidParameter { name, source } => {
                assert_eq!(name, "bearing_size");
                assert_eq!(source, NumericError::Negative);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = SchematicParams::new(3, f64::NAN, 18.0).validate().unwrap_err();
        assert!(matches!(
            err,
            SchematicError::InvalidParameter {
                name: "internal_radius",
                source: NumericError::NaN
            }
        ));
    }
}
