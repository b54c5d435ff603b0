/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Energy group structures and flux spectra
//!
//! This module provides the multigroup energy grid shared by recoil matrices
//! and spectra, and the flux normalization and regridding needed to collapse
//! a recoil matrix against an arbitrary input flux.

mod energy_group;
mod errors;
mod flux;

pub use energy_group::EnergyGroupStructure;
pub use errors::{Result, SpectrumError};
pub use flux::{FluxSpectrum, FluxUnit, NormalizedFlux};
