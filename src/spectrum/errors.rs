/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for energy-group structures and flux spectra

use thiserror::Error;

/// Errors that can occur while building or regridding spectra
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumError {
    /// Boundaries do not define at least one ascending group
    #[error("Invalid energy group structure: {0}")]
    InvalidGroupStructure(String),

    /// Value array length disagrees with the group count
    #[error("Spectrum has {found} values but the group structure has {expected} groups")]
    LengthMismatch { expected: usize, found: usize },

    /// A target midpoint lies outside the source midpoint range
    #[error("Cannot interpolate flux at {energy:e} MeV: source midpoints span [{min:e}, {max:e}] MeV")]
    OutOfRangeInterpolation { energy: f64, min: f64, max: f64 },

    /// The spectrum cannot be normalized
    #[error("Flux spectrum sums to {0}, cannot normalize")]
    ZeroFlux(f64),

    /// Unknown flux unit code
    #[error("Unknown flux unit code: {0}")]
    UnknownUnit(i64),
}

/// Result type for spectrum operations
pub type Result<T> = std::result::Result<T, SpectrumError>;
