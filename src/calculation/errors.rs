/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the calculation driver
//!
//! Every variant names the file, nuclide or channel that failed so a fatal
//! diagnostic points at its source.

use std::path::PathBuf;

use thiserror::Error;

use crate::aggregate::AggregateError;
use crate::input::InputError;
use crate::nuclide::NuclideError;
use crate::recoil::RecoilError;
use crate::spectrum::SpectrumError;

/// Result type for calculation operations
pub type Result<T> = std::result::Result<T, CalculationError>;

/// Errors raised while running a calculation
#[derive(Error, Debug)]
pub enum CalculationError {
    #[error("Failed to read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: InputError,
    },

    #[error("Flux error: {0}")]
    Flux(#[from] SpectrumError),

    #[error("Invalid parent nuclide '{parent}': {source}")]
    Parent {
        parent: String,
        #[source]
        source: NuclideError,
    },

    #[error("{nuclide}: {source}")]
    Daughter {
        nuclide: String,
        #[source]
        source: NuclideError,
    },

    #[error("{nuclide}: flux regridding failed: {source}")]
    Regrid {
        nuclide: String,
        #[source]
        source: SpectrumError,
    },

    #[error("{nuclide}, {channel}: {source}")]
    Channel {
        nuclide: String,
        channel: String,
        #[source]
        source: RecoilError,
    },

    #[error("Aggregation failed: {0}")]
    Aggregate(#[from] AggregateError),
}
