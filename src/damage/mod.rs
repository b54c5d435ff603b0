/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Displacement damage estimation
//!
//! Converts a channel's PKA spectrum into damage coefficients, a damage
//! (displacement energy) cross section and an NRT dpa rate.

mod errors;
mod model;
mod threshold;

pub use errors::{DamageError, Result};
pub use model::{damage_energy, md_efficiency, DamageModel};
pub use threshold::{displacement_threshold, DEFAULT_DISPLACEMENT_THRESHOLD};

use ndarray::Array1;

use crate::nuclide::NuclideIdentity;
use crate::spectrum::EnergyGroupStructure;
use crate::utils::constants::NRT_DISPLACEMENT_EFFICIENCY;

/// Damage arrays of one reaction channel
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelDamage {
    /// Displacement threshold of the lattice, eV
    pub threshold: f64,
    /// Damage coefficient per outgoing group, eV
    pub coefficients: Array1<f64>,
    /// Coefficients times PKA rate
    pub cross_section: Array1<f64>,
    /// NRT displacements per atom per second
    pub dpa: Array1<f64>,
}

/// NRT dpa from a damage cross section: `xs × 0.8 / (2 E_d)`
pub fn nrt_dpa(cross_section: &Array1<f64>, threshold: f64) -> Result<Array1<f64>> {
    if !(threshold.is_finite() && threshold > 0.0) {
        return Err(DamageError::InvalidThreshold(threshold));
    }
    Ok(cross_section * (NRT_DISPLACEMENT_EFFICIENCY / (2.0 * threshold)))
}

/// Estimate the damage caused by a PKA spectrum
///
/// # Arguments
///
/// * `groups` - Outgoing group structure of the spectrum
/// * `pka_spectrum` - PKA rate per outgoing group
/// * `pka` - Recoiling species
/// * `lattice` - Target nuclide; its element selects E_d
/// * `model` - Displacement model
pub fn estimate_damage(
    groups: &EnergyGroupStructure,
    pka_spectrum: &Array1<f64>,
    pka: &NuclideIdentity,
    lattice: &NuclideIdentity,
    model: DamageModel,
) -> Result<ChannelDamage> {
    if pka_spectrum.len() != groups.num_groups() {
        return Err(DamageError::LengthMismatch {
            expected: groups.num_groups(),
            found: pka_spectrum.len(),
        });
    }

    let threshold = displacement_threshold(lattice.z);
    let coefficients = groups
        .midpoints_ev()
        .mapv(|e| model.coefficient(e, (pka.z, pka.a), (lattice.z, lattice.a), threshold));
    let cross_section = &coefficients * pka_spectrum;
    let dpa = nrt_dpa(&cross_section, threshold)?;

    Ok(ChannelDamage {
        threshold,
        coefficients,
        cross_section,
        dpa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_estimate_damage_fe_in_fe() {
        // midpoints 50 eV and about 2 MeV
        let groups = EnergyGroupStructure::new(vec![0.0, 1.0e-4, 4.0]).unwrap();
        let fe56 = NuclideIdentity::new(26, 56).unwrap();
        let result =
            estimate_damage(&groups, &array![1.0, 2.0], &fe56, &fe56, DamageModel::Nrt).unwrap();

        assert_eq!(result.threshold, 40.0);
        let midpoint = groups.midpoints_ev()[1];
        assert_relative_eq!(midpoint, 2.00005e6, max_relative = 1e-12);
        let expected = damage_energy(midpoint, (26, 56), (26, 56), 40.0);
        assert_relative_eq!(result.coefficients[1], expected, max_relative = 1e-12);
        assert_relative_eq!(result.cross_section[1], 2.0 * expected, max_relative = 1e-12);
        assert_relative_eq!(result.dpa[1], 2.0 * expected * 0.8 / 80.0, max_relative = 1e-12);
    }

    #[test]
    fn test_below_threshold_groups_do_no_damage() {
        let groups = EnergyGroupStructure::new(vec![0.0, 1.0e-5]).unwrap();
        let fe56 = NuclideIdentity::new(26, 56).unwrap();
        let result =
            estimate_damage(&groups, &array![5.0], &fe56, &fe56, DamageModel::Md).unwrap();
        assert_eq!(result.cross_section[0], 0.0);
        assert_eq!(result.dpa[0], 0.0);
    }

    #[test]
    fn test_length_checked() {
        let groups = EnergyGroupStructure::new(vec![0.0, 1.0, 2.0]).unwrap();
        let fe56 = NuclideIdentity::new(26, 56).unwrap();
        assert!(matches!(
            estimate_damage(&groups, &array![1.0], &fe56, &fe56, DamageModel::Md),
            Err(DamageError::LengthMismatch { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_nrt_dpa_rejects_zero_threshold() {
        assert!(nrt_dpa(&array![1.0], 0.0).is_err());
        assert_relative_eq!(nrt_dpa(&array![100.0], 40.0).unwrap()[0], 1.0, max_relative = 1e-12);
    }
}
