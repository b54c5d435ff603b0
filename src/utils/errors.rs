/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the utils module

use thiserror::Error;

/// Errors that can occur in the utils module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    /// Generic error with a message
    #[error("Utility error: {0}")]
    Generic(String),

    /// Query point lies outside the tabulated abscissae
    #[error("x = {x} lies outside the interpolation domain [{min}, {max}]")]
    OutOfDomain { x: f64, min: f64, max: f64 },
}

/// A specialized Result type for utils operations
pub type Result<T> = std::result::Result<T, UtilsError>;
