/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for run configuration and input files

use std::io;
use thiserror::Error;

use crate::recoil::RecoilError;
use crate::spectrum::SpectrumError;

/// Errors that can occur while reading configuration and input files
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("Missing required configuration: {0}")]
    MissingRequiredConfig(String),

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid group structure or flux: {0}")]
    Spectrum(#[from] SpectrumError),

    #[error("{context}: {source}")]
    Matrix {
        context: String,
        #[source]
        source: RecoilError,
    },
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
