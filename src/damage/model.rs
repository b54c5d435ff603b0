/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Damage energy and displacement efficiency models
//!
//! The damage energy of a recoil is the part of its kinetic energy lost to
//! nuclear stopping, computed with the Robinson fit to the Lindhard partition.
//! The MD-corrected model further scales it by the Stoller cascade efficiency
//! for iron, which accounts for in-cascade recombination.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DamageError;
use crate::utils::interpolate_table;

/// Atomic number of iron, the only lattice with an efficiency correction
const IRON: u32 = 26;

/// Upper end of the closed-form efficiency fit, keV
const EFFICIENCY_FIT_LIMIT_KEV: f64 = 40.0;

/// Stoller MD cascade efficiency in iron: (damage energy keV, efficiency)
const MD_EFFICIENCY_TABLE: [(f64, f64); 30] = [
    (39.2961, 0.310464),
    (45.1360, 0.334810),
    (50.8440, 0.347829),
    (56.4302, 0.356973),
    (61.9030, 0.363730),
    (111.570, 0.402940),
    (154.243, 0.422496),
    (191.764, 0.434847),
    (225.228, 0.444354),
    (255.382, 0.452342),
    (282.773, 0.455008),
    (307.817, 0.460384),
    (330.842, 0.462952),
    (352.112, 0.466695),
    (502.267, 0.476762),
    (591.365, 0.475192),
    (651.587, 0.469268),
    (695.521, 0.467951),
    (812.090, 0.462645),
    (897.060, 0.465139),
    (970.010, 0.468211),
    (1005.03, 0.482998),
    (1029.28, 0.501126),
    (1051.22, 0.555980),
    (1063.06, 0.600856),
    (1072.27, 0.699076),
    (1076.76, 0.777360),
    (1079.62, 0.863651),
    (1081.68, 0.942473),
    (1.0e10, 0.942473),
];

/// Displacement model applied to the damage energy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageModel {
    /// Norgett-Robinson-Torrens: damage energy only
    Nrt,
    /// NRT scaled by the MD cascade efficiency
    #[default]
    Md,
}

impl DamageModel {
    /// Damage coefficient (eV) of one PKA of energy `energy_ev`
    ///
    /// # Arguments
    ///
    /// * `energy_ev` - PKA kinetic energy in eV
    /// * `pka` - (Z, A) of the recoiling atom
    /// * `lattice` - (Z, A) of the host lattice
    /// * `threshold` - Displacement threshold E_d in eV
    pub fn coefficient(&self, energy_ev: f64, pka: (u32, u32), lattice: (u32, u32), threshold: f64) -> f64 {
        let damage = damage_energy(energy_ev, pka, lattice, threshold);
        match self {
            DamageModel::Nrt => damage,
            DamageModel::Md => damage * md_efficiency(lattice.0, damage),
        }
    }
}

impl fmt::Display for DamageModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageModel::Nrt => write!(f, "nrt"),
            DamageModel::Md => write!(f, "md"),
        }
    }
}

impl FromStr for DamageModel {
    type Err = DamageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nrt" => Ok(DamageModel::Nrt),
            "md" => Ok(DamageModel::Md),
            _ => Err(DamageError::UnknownModel(s.to_string())),
        }
    }
}

/// Robinson damage energy (eV) of a PKA in a lattice
///
/// Zero at or below the displacement threshold and for a bare neutron.
pub fn damage_energy(energy_ev: f64, pka: (u32, u32), lattice: (u32, u32), threshold: f64) -> f64 {
    if energy_ev <= threshold || pka.0 == 0 || pka.1 == 0 || lattice.0 == 0 {
        return 0.0;
    }
    let (z1, a1) = (f64::from(pka.0), f64::from(pka.1));
    let (z2, a2) = (f64::from(lattice.0), f64::from(lattice.1));

    let z1_23 = z1.powf(2.0 / 3.0);
    let z_sum = z1_23 + z2.powf(2.0 / 3.0);

    let e_l = 30.724 * z1 * z2 * z_sum.sqrt() * (a1 + a2) / a2;
    let f_l = 0.0793 * z1_23 * z2.sqrt() * (a1 + a2).powf(1.5)
        / (z_sum.powf(0.75) * a1.powf(1.5) * a2.sqrt());

    let eps = energy_ev / e_l;
    energy_ev / (1.0 + f_l * (3.4008 * eps.powf(1.0 / 6.0) + 0.40244 * eps.powf(0.75) + eps))
}

/// Stoller cascade efficiency for a damage energy in eV
///
/// Only iron lattices are corrected; every other lattice has efficiency 1.
pub fn md_efficiency(lattice_z: u32, damage_energy_ev: f64) -> f64 {
    if lattice_z != IRON || damage_energy_ev <= 0.0 {
        return 1.0;
    }
    let kev = damage_energy_ev / 1000.0;
    if kev <= EFFICIENCY_FIT_LIMIT_KEV {
        return 0.5608 * kev.powf(-0.3029) + 3.227e-3 * kev;
    }
    let (energies, values): (Vec<f64>, Vec<f64>) = MD_EFFICIENCY_TABLE.iter().copied().unzip();
    interpolate_table(kev, &energies, &values).unwrap_or(values[values.len() - 1])
}
