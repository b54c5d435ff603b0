/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for damage estimation

use thiserror::Error;

/// Result type for damage operations
pub type Result<T> = std::result::Result<T, DamageError>;

/// Damage-estimation specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DamageError {
    /// PKA spectrum length does not match the group structure
    #[error("PKA spectrum has {found} groups, expected {expected}")]
    LengthMismatch { expected: usize, found: usize },

    /// Displacement threshold must be positive
    #[error("Invalid displacement threshold: {0} eV")]
    InvalidThreshold(f64),

    /// Unknown damage model name
    #[error("Unknown damage model: {0}")]
    UnknownModel(String),
}
