/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Run configuration and input file readers
//!
//! This module loads the JSON run configuration and reads the two file
//! formats a run consumes: the flux spectrum and the SPECTER-PKA
//! recoil-matrix files, one per parent nuclide.

mod config;
mod errors;
mod flux_file;
mod parser;
mod pka_file;

pub use config::{PkaFileEntry, RunConfig};
pub use errors::{InputError, Result};
pub use flux_file::{parse_flux, read_flux_file};
pub use pka_file::{
    read_pka_file, CrossSectionSection, MatrixSection, PkaFile, PkaFileReader, SectionHeader,
};
