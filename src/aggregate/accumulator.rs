/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Weighted running totals for one daughter nuclide or element

use ndarray::Array1;

use crate::damage::ChannelDamage;
use crate::spectrum::EnergyGroupStructure;
use crate::utils::constants::{MEV_TO_EV, NRT_DISPLACEMENT_EFFICIENCY};

/// Summed damage arrays
#[derive(Debug, Clone, PartialEq)]
pub struct DamageTotals {
    pub coefficients: Array1<f64>,
    pub cross_section: Array1<f64>,
    pub dpa: Array1<f64>,
}

impl DamageTotals {
    fn weighted(damage: &ChannelDamage, ratio: f64) -> Self {
        Self {
            coefficients: &damage.coefficients * ratio,
            cross_section: &damage.cross_section * ratio,
            dpa: &damage.dpa * ratio,
        }
    }

    fn add_weighted(&mut self, damage: &ChannelDamage, ratio: f64) {
        self.coefficients.scaled_add(ratio, &damage.coefficients);
        self.cross_section.scaled_add(ratio, &damage.cross_section);
        self.dpa.scaled_add(ratio, &damage.dpa);
    }
}

/// Averages derived when the aggregation is finalized
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccumulatorSummary {
    /// Spectrum-weighted mean PKA energy, eV
    pub average_pka_energy_ev: f64,
    /// Summed damage cross section × 1e6
    pub average_displacement_energy: f64,
    /// NRT dpa rate equivalent to the displacement energy
    pub equivalent_dpa_rate: f64,
}

/// Running totals for one daughter species or element
#[derive(Debug, Clone)]
pub struct Accumulator {
    label: String,
    groups: EnergyGroupStructure,
    pka_spectrum: Array1<f64>,
    damage: Option<DamageTotals>,
    summary: Option<AccumulatorSummary>,
}

impl Accumulator {
    pub(crate) fn new(
        label: String,
        groups: EnergyGroupStructure,
        spectrum: &Array1<f64>,
        damage: Option<&ChannelDamage>,
        ratio: f64,
    ) -> Self {
        Self {
            label,
            groups,
            pka_spectrum: spectrum * ratio,
            damage: damage.map(|d| DamageTotals::weighted(d, ratio)),
            summary: None,
        }
    }

    pub(crate) fn add(&mut self, spectrum: &Array1<f64>, damage: Option<&ChannelDamage>, ratio: f64) {
        self.pka_spectrum.scaled_add(ratio, spectrum);
        if let Some(d) = damage {
            match self.damage.as_mut() {
                Some(totals) => totals.add_weighted(d, ratio),
                None => self.damage = Some(DamageTotals::weighted(d, ratio)),
            }
        }
        self.summary = None;
    }

    pub(crate) fn finalize(&mut self, assumed_ed: f64) {
        let midpoints = self.groups.midpoints();
        let total = self.pka_spectrum.sum();
        let average_pka_energy_ev = if total > 0.0 {
            self.pka_spectrum.dot(&midpoints) * MEV_TO_EV / total
        } else {
            0.0
        };

        let average_displacement_energy = self
            .damage
            .as_ref()
            .map_or(0.0, |d| d.cross_section.sum() * MEV_TO_EV);
        let equivalent_dpa_rate = if assumed_ed > 0.0 {
            average_displacement_energy * NRT_DISPLACEMENT_EFFICIENCY / (2.0 * assumed_ed)
        } else {
            0.0
        };

        self.summary = Some(AccumulatorSummary {
            average_pka_energy_ev,
            average_displacement_energy,
            equivalent_dpa_rate,
        });
    }

    /// Nuclide name or element symbol
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn groups(&self) -> &EnergyGroupStructure {
        &self.groups
    }

    pub fn pka_spectrum(&self) -> &Array1<f64> {
        &self.pka_spectrum
    }

    pub fn damage(&self) -> Option<&DamageTotals> {
        self.damage.as_ref()
    }

    /// Averages, available after [`super::AggregationContext::finalize`]
    pub fn summary(&self) -> Option<&AccumulatorSummary> {
        self.summary.as_ref()
    }
}
