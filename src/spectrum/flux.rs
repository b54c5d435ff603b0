/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Neutron flux spectra and regridding
//!
//! A flux spectrum is read on its own group structure and has to be carried
//! onto the native grid of every recoil-matrix file before collapsing. The
//! regridding interpolates the flux density linearly between group midpoints
//! and integrates it back over the target groups.

use std::ops::Deref;

use log::debug;
use ndarray::Array1;

use super::energy_group::EnergyGroupStructure;
use super::errors::{Result, SpectrumError};
use crate::utils::{LinearInterpolant, UtilsError};

/// Unit in which flux values are given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluxUnit {
    /// Integrated flux per group, n s^-1
    PerGroup,
    /// Flux density per unit energy, n s^-1 MeV^-1
    PerUnitEnergy,
}

impl FluxUnit {
    /// Decode the unit code of a flux file
    ///
    /// 1 is a per-MeV density; 0 and the legacy code 2 are per-group totals.
    /// Older readers took every code other than 2, including 0, as a per-MeV
    /// density, so files written with code 0 for densities must be relabelled.
    /// Any other code is rejected rather than guessed.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 | 2 => Ok(FluxUnit::PerGroup),
            1 => Ok(FluxUnit::PerUnitEnergy),
            other => Err(SpectrumError::UnknownUnit(other)),
        }
    }
}

/// Flux values on an energy group structure
#[derive(Debug, Clone)]
pub struct FluxSpectrum {
    groups: EnergyGroupStructure,
    values: Array1<f64>,
    unit: FluxUnit,
}

impl FluxSpectrum {
    /// Create a spectrum; `values` must have one entry per group
    pub fn new(groups: EnergyGroupStructure, values: Array1<f64>, unit: FluxUnit) -> Result<Self> {
        if values.len() != groups.num_groups() {
            return Err(SpectrumError::LengthMismatch {
                expected: groups.num_groups(),
                found: values.len(),
            });
        }
        Ok(Self {
            groups,
            values,
            unit,
        })
    }

    /// Group structure the values are defined on
    pub fn groups(&self) -> &EnergyGroupStructure {
        &self.groups
    }

    /// Raw values in the declared unit
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Declared unit
    pub fn unit(&self) -> FluxUnit {
        self.unit
    }

    /// Values as integrated flux per group
    pub fn per_group(&self) -> Array1<f64> {
        match self.unit {
            FluxUnit::PerGroup => self.values.clone(),
            FluxUnit::PerUnitEnergy => &self.values * &self.groups.widths(),
        }
    }

    /// Values as flux density per MeV
    pub fn per_unit_energy(&self) -> Array1<f64> {
        match self.unit {
            FluxUnit::PerGroup => &self.values / &self.groups.widths(),
            FluxUnit::PerUnitEnergy => self.values.clone(),
        }
    }

    /// Total integrated flux
    pub fn total(&self) -> f64 {
        self.per_group().sum()
    }

    /// Normalize the spectrum to unit total and rescale it to `total_flux`
    pub fn normalize(self, total_flux: f64) -> Result<NormalizedFlux> {
        let per_group = self.per_group();
        let sum = per_group.sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Err(SpectrumError::ZeroFlux(sum));
        }
        let values = per_group * (total_flux / sum);
        debug!(
            "Normalized flux over {} groups: raw total {:e}, rescaled to {:e}",
            self.groups.num_groups(),
            sum,
            total_flux
        );
        Ok(NormalizedFlux {
            spectrum: FluxSpectrum {
                groups: self.groups,
                values,
                unit: FluxUnit::PerGroup,
            },
            total_flux,
        })
    }

    /// Carry the spectrum onto `target`, returning integrated flux per target group
    ///
    /// The per-MeV density is interpolated linearly over the source group
    /// midpoints and evaluated at the target midpoints. No extrapolation is
    /// done: a target midpoint outside the source midpoint range fails with
    /// [`SpectrumError::OutOfRangeInterpolation`].
    pub fn regrid(&self, target: &EnergyGroupStructure) -> Result<Array1<f64>> {
        let density = self.per_unit_energy();
        let interpolant = LinearInterpolant::new(self.groups.midpoints().to_vec(), density.to_vec())
            .map_err(|e| SpectrumError::InvalidGroupStructure(e.to_string()))?;

        let target_widths = target.widths();
        target
            .midpoints()
            .iter()
            .zip(target_widths.iter())
            .map(|(&mid, &width)| {
                interpolant
                    .evaluate(mid)
                    .map(|d| d * width)
                    .map_err(|e| match e {
                        UtilsError::OutOfDomain { x, min, max } => {
                            SpectrumError::OutOfRangeInterpolation { energy: x, min, max }
                        }
                        other => SpectrumError::InvalidGroupStructure(other.to_string()),
                    })
            })
            .collect::<Result<Vec<f64>>>()
            .map(Array1::from)
    }
}

/// A flux spectrum that has been normalized and rescaled exactly once
///
/// Holding this type is the proof that the run-wide normalization happened;
/// every parent nuclide regrids from the same value.
#[derive(Debug, Clone)]
pub struct NormalizedFlux {
    spectrum: FluxSpectrum,
    total_flux: f64,
}

impl NormalizedFlux {
    /// Rescale constant the spectrum was normalized to
    pub fn total_flux(&self) -> f64 {
        self.total_flux
    }
}

impl Deref for NormalizedFlux {
    type Target = FluxSpectrum;

    fn deref(&self) -> &Self::Target {
        &self.spectrum
    }
}
