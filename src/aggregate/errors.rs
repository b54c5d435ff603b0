/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for aggregation

use thiserror::Error;

/// Result type for aggregation
pub type Result<T> = std::result::Result<T, AggregateError>;

/// Aggregation specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregateError {
    /// The channel carries no PKA spectrum
    #[error("Channel {0} has not been collapsed")]
    NotCollapsed(String),

    /// A contribution is on a different group structure than the accumulator
    #[error("Group structure of {channel} does not match accumulator {target}")]
    GroupMismatch { channel: String, target: String },

    /// Weighting ratio is not finite
    #[error("Invalid weighting ratio {0}")]
    InvalidRatio(f64),
}
