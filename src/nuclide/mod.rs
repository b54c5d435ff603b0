/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Nuclide identity resolution
//!
//! This module turns the heterogeneous nuclide identifiers found in input
//! files into canonical (Z, A) identities, and names the daughter species
//! produced by each reaction channel.

pub mod database;
mod errors;
mod identifier;
mod reaction;

pub use database::{atomic_number_from_symbol, element_symbol};
pub use errors::{NuclideError, Result};
pub use identifier::{NuclideId, NuclideIdentity, NuclideSpec};
pub use reaction::{
    daughter_of, residual_za, IncidentParticle, MT_ALPHA_RANGE, MT_PROTON_RANGE,
    MT_RADIATIVE_CAPTURE,
};
