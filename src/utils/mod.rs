/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Utility functions for PKA calculations
//!
//! This module provides physical constants, unit conversions and the
//! interpolation primitives shared by the spectrum and damage modules.

pub mod constants;
pub mod conversions;
pub mod errors;
pub mod math;

pub use conversions::{
    amu_to_kg, ev_to_mev, group_midpoints, group_widths, mass_defect_to_mev, mev_to_ev,
};
pub use errors::UtilsError;
pub use math::{interpolate_table, linear_interpolate, LinearInterpolant};
