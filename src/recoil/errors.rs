/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for recoil matrices and channels

use thiserror::Error;

use crate::damage::DamageError;

/// Result type for recoil operations
pub type Result<T> = std::result::Result<T, RecoilError>;

/// Recoil-matrix specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecoilError {
    /// Matrix, flux or cross-section dimensions disagree
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A matrix entry is negative or not finite
    #[error("Invalid matrix entry at ({row}, {col}): {value}")]
    InvalidEntry { row: usize, col: usize, value: f64 },

    /// Kinematic input is not usable
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A derived result was already computed for this channel
    #[error("{0} was already computed for channel {1}")]
    AlreadyComputed(&'static str, String),

    /// The channel has not been collapsed against a flux yet
    #[error("Channel {0} has no PKA spectrum yet")]
    NotCollapsed(String),

    /// Damage estimation failed
    #[error("Damage error: {0}")]
    Damage(#[from] DamageError),
}
