/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for nuclide identification

use thiserror::Error;

/// Errors that can occur while resolving nuclide identities
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NuclideError {
    /// The identifier cannot be decomposed into a known (Z, A)
    #[error("Invalid nuclide identifier: {0}")]
    InvalidIdentifier(String),

    /// A reaction channel does not lead to a single residual nucleus
    #[error("Cannot determine daughter of channel '{title}' (MT {mtd}) on {parent}")]
    UnknownDaughter {
        title: String,
        mtd: i32,
        parent: String,
    },
}

/// Result type for nuclide operations
pub type Result<T> = std::result::Result<T, NuclideError>;
