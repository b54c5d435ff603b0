/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Interpolation helpers for tabulated functions

use super::errors::{Result, UtilsError};

/// Linear interpolation between two points
///
/// # Arguments
///
/// * `x` - The x-coordinate at which to interpolate
/// * `x0`, `y0` - The first known point
/// * `x1`, `y1` - The second known point
///
/// # Returns
///
/// The interpolated y-value at x
pub fn linear_interpolate(x: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    if (x1 - x0).abs() < f64::EPSILON * x0.abs().max(1.0) {
        return y0;
    }

    let t = (x - x0) / (x1 - x0);
    y0 * (1.0 - t) + y1 * t
}

/// Linear interpolation on a tabulated function without extrapolation
///
/// Unlike a clamping lookup, a query outside `[x_values[0], x_values[n-1]]`
/// is an error: the caller decides how to report it.
///
/// # Arguments
///
/// * `x` - The x-coordinate at which to interpolate
/// * `x_values` - Abscissae, sorted in ascending order
/// * `y_values` - Corresponding ordinates
pub fn interpolate_table(x: f64, x_values: &[f64], y_values: &[f64]) -> Result<f64> {
    if x_values.len() != y_values.len() {
        return Err(UtilsError::Generic(format!(
            "x_values ({}) and y_values ({}) must have the same length",
            x_values.len(),
            y_values.len()
        )));
    }

    let (Some(&min), Some(&max)) = (x_values.first(), x_values.last()) else {
        return Err(UtilsError::Generic(
            "Empty arrays provided for interpolation".to_string(),
        ));
    };

    if x.is_nan() || x < min || x > max {
        return Err(UtilsError::OutOfDomain { x, min, max });
    }

    // Index of the first abscissa strictly greater than x
    let upper = x_values.partition_point(|&v| v <= x);
    if upper == 0 {
        return Ok(y_values[0]);
    }
    let lower = upper - 1;
    if upper == x_values.len() || x_values[lower] == x {
        return Ok(y_values[lower]);
    }

    Ok(linear_interpolate(
        x,
        x_values[lower],
        y_values[lower],
        x_values[upper],
        y_values[upper],
    ))
}

/// Piecewise-linear interpolant over a fixed set of nodes
#[derive(Debug, Clone)]
pub struct LinearInterpolant {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LinearInterpolant {
    /// Build an interpolant; nodes must be ascending in x
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(UtilsError::Generic(format!(
                "x ({}) and y ({}) vectors must have the same length",
                x.len(),
                y.len()
            )));
        }
        if x.is_empty() {
            return Err(UtilsError::Generic("Interpolant needs at least one node".to_string()));
        }
        if x.windows(2).any(|w| w[1] < w[0]) {
            return Err(UtilsError::Generic("Interpolation nodes must be ascending".to_string()));
        }
        Ok(Self { x, y })
    }

    /// Evaluate at `x`, failing outside the node range
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        interpolate_table(x, &self.x, &self.y)
    }
}
