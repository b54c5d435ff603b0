/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Recoil matrices and reaction channels
//!
//! A recoil matrix maps incident neutron groups onto outgoing recoil groups
//! for one reaction channel. Collapsing it against a flux on the incident
//! grid gives the PKA spectrum of that channel.

mod channel;
mod errors;
mod matrix;
mod ngamma;

pub use channel::RecoilChannel;
pub use errors::{RecoilError, Result};
pub use matrix::{MatrixEntry, RecoilMatrix};
pub use ngamma::{synthesize_capture_matrix, CaptureKinematics};
