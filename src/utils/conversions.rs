/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Unit conversion and energy-group helpers

use super::constants;

/// Convert energy from MeV to eV
pub fn mev_to_ev(mev: f64) -> f64 {
    mev * constants::MEV_TO_EV
}

/// Convert energy from eV to MeV
pub fn ev_to_mev(ev: f64) -> f64 {
    ev / constants::MEV_TO_EV
}

/// Convert a mass in amu to kilograms
pub fn amu_to_kg(amu: f64) -> f64 {
    amu / (1000.0 * constants::AVOGADRO)
}

/// Convert a rest-mass difference in amu to its energy equivalent in MeV
pub fn mass_defect_to_mev(delta_amu: f64) -> f64 {
    amu_to_kg(delta_amu) * constants::SPEED_OF_LIGHT.powi(2) * constants::JOULE_TO_MEV
}

/// Midpoints of consecutive group boundaries
pub fn group_midpoints(bounds: &[f64]) -> Vec<f64> {
    bounds.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
}

/// Widths of consecutive group boundaries
pub fn group_widths(bounds: &[f64]) -> Vec<f64> {
    bounds.windows(2).map(|w| w[1] - w[0]).collect()
}
