/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Radiative capture recoil matrix synthesis
//!
//! When a file carries only the (n,γ) cross section, the recoil distribution
//! is estimated from two-body kinematics: the captured neutron's momentum is
//! carried by the compound nucleus, and the prompt gamma cascade adds a
//! recoil of Q²/(2Mc²) on top.

use log::debug;
use ndarray::{Array1, Array2};

use super::errors::{RecoilError, Result};
use super::matrix::RecoilMatrix;
use crate::spectrum::EnergyGroupStructure;
use crate::utils::mass_defect_to_mev;

/// Masses (amu) entering the capture kinematics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureKinematics {
    pub incident_mass: f64,
    pub parent_mass: f64,
    pub daughter_mass: f64,
}

impl CaptureKinematics {
    pub fn new(incident_mass: f64, parent_mass: f64, daughter_mass: f64) -> Result<Self> {
        if !(daughter_mass.is_finite() && daughter_mass > 0.0) {
            return Err(RecoilError::InvalidParameter(format!(
                "daughter mass must be positive, got {}",
                daughter_mass
            )));
        }
        if !(incident_mass.is_finite() && incident_mass > 0.0) || !parent_mass.is_finite() {
            return Err(RecoilError::InvalidParameter(format!(
                "invalid capture masses: incident {}, parent {}",
                incident_mass, parent_mass
            )));
        }
        Ok(Self {
            incident_mass,
            parent_mass,
            daughter_mass,
        })
    }

    /// Fraction of the incident energy handed to the daughter
    pub fn energy_ratio(&self) -> f64 {
        self.incident_mass / self.daughter_mass
    }

    /// Gamma recoil energy in MeV, Q²/(2·M_d·c²)
    pub fn extra_energy(&self) -> f64 {
        let q = mass_defect_to_mev(self.parent_mass + self.incident_mass - self.daughter_mass);
        let rest = mass_defect_to_mev(self.daughter_mass);
        q * q / (2.0 * rest)
    }
}

/// Synthesize the (n,γ) recoil matrix on `groups`
///
/// Incident group j maps to the outgoing interval
/// `[E_j·r + extra, E_{j+1}·r + extra]` with `r = m_inc / m_d`. The cross
/// section of group j is spread over the outgoing groups in proportion to
/// the fraction of that interval each one covers and divided by the outgoing
/// group's width, giving a per-MeV density like the tabulated channels. A
/// column whose interval lies inside the grid satisfies
/// `Σ_k M[j,k]·ΔE_k = xs[j]`. Parts of the interval above the last boundary
/// are lost.
///
/// The result uses the (incident row, outgoing column) convention of
/// [`RecoilMatrix::collapse`].
pub fn synthesize_capture_matrix(
    groups: &EnergyGroupStructure,
    cross_section: &Array1<f64>,
    kinematics: &CaptureKinematics,
) -> Result<RecoilMatrix> {
    let n = groups.num_groups();
    if cross_section.len() != n {
        return Err(RecoilError::ShapeMismatch(format!(
            "(n,g) cross section has {} values for {} groups",
            cross_section.len(),
            n
        )));
    }

    let bounds = groups.bounds();
    let ratio = kinematics.energy_ratio();
    let extra = kinematics.extra_energy();
    debug!(
        "Synthesizing (n,g) matrix: energy ratio {:e}, gamma recoil {:e} MeV",
        ratio, extra
    );

    // outgoing-row layout while filling, transposed at the end
    let mut outgoing = Array2::<f64>::zeros((n, n));
    for (j, &xs) in cross_section.iter().enumerate() {
        if xs == 0.0 {
            continue;
        }
        let lower = bounds[j] * ratio + extra;
        let upper = bounds[j + 1] * ratio + extra;
        let span = upper - lower;
        if span <= 0.0 {
            continue;
        }

        // first group whose upper bound exceeds `lower`
        let first = bounds[1..].partition_point(|&e| e <= lower);
        for k in first..n {
            if bounds[k] >= upper {
                break;
            }
            let overlap = upper.min(bounds[k + 1]) - lower.max(bounds[k]);
            if overlap > 0.0 {
                outgoing[[k, j]] += xs * (overlap / span) / (bounds[k + 1] - bounds[k]);
            }
        }
    }

    RecoilMatrix::from_dense(&outgoing.reversed_axes())
}
