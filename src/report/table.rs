/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Tabulated spectra ready for output

use ndarray::Array1;

use crate::aggregate::{Accumulator, AccumulatorSummary};
use crate::calculation::ParentNuclide;
use crate::recoil::RecoilChannel;
use crate::spectrum::EnergyGroupStructure;

/// One outgoing group with a positive PKA rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumRow {
    /// Zero-based outgoing group index
    pub group: usize,
    /// Lower group bound, MeV
    pub e_low: f64,
    /// Upper group bound, MeV
    pub e_high: f64,
    pub pka: f64,
    /// Share of the table's total PKA rate
    pub pka_fraction: f64,
    pub displacement_xs: f64,
    pub dpa: f64,
}

/// Averages printed under a total's table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub average_pka_energy_ev: f64,
    /// eV/s
    pub displacement_energy_rate: f64,
    /// dpa/s
    pub equivalent_dpa_rate: f64,
}

impl From<&AccumulatorSummary> for Summary {
    fn from(summary: &AccumulatorSummary) -> Self {
        Self {
            average_pka_energy_ev: summary.average_pka_energy_ev,
            displacement_energy_rate: summary.average_displacement_energy,
            equivalent_dpa_rate: summary.equivalent_dpa_rate,
        }
    }
}

/// A titled PKA spectrum table
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumTable {
    pub title: String,
    pub rows: Vec<SpectrumRow>,
    pub summary: Option<Summary>,
}

impl SpectrumTable {
    /// Tabulate a spectrum, keeping only groups with a positive rate
    ///
    /// Returns `None` when the spectrum has no positive total. Missing damage
    /// arrays are written as zeros.
    pub fn new(
        title: impl Into<String>,
        groups: &EnergyGroupStructure,
        pka: &Array1<f64>,
        damage: Option<(&Array1<f64>, &Array1<f64>)>,
    ) -> Option<Self> {
        let total = pka.sum();
        if !total.is_finite() || total <= 0.0 {
            return None;
        }

        let rows = pka
            .iter()
            .enumerate()
            .filter(|(_, rate)| **rate > 0.0)
            .map(|(i, &rate)| {
                let (displacement_xs, dpa) =
                    damage.map_or((0.0, 0.0), |(xs, dpa)| (xs[i], dpa[i]));
                SpectrumRow {
                    group: i,
                    e_low: groups.lower(i),
                    e_high: groups.upper(i),
                    pka: rate,
                    pka_fraction: rate / total,
                    displacement_xs,
                    dpa,
                }
            })
            .collect();

        Some(Self {
            title: title.into(),
            rows,
            summary: None,
        })
    }

    /// Table of one collapsed channel of a parent
    pub fn from_channel(parent: &ParentNuclide, channel: &RecoilChannel) -> Option<Self> {
        let pka = channel.pka_spectrum()?;
        Self::new(
            format!("{} -> {}: {}", parent.identity(), channel.daughter(), channel),
            parent.groups(),
            pka,
            channel.damage().map(|d| (&d.cross_section, &d.dpa)),
        )
    }

    /// Table of a nuclide or element total, with its averages
    pub fn from_accumulator(accumulator: &Accumulator) -> Option<Self> {
        let mut table = Self::new(
            accumulator.label(),
            accumulator.groups(),
            accumulator.pka_spectrum(),
            accumulator.damage().map(|d| (&d.cross_section, &d.dpa)),
        )?;
        table.summary = accumulator.summary().map(Summary::from);
        Some(table)
    }

    /// Sum of the tabulated PKA rates
    pub fn total_pka(&self) -> f64 {
        self.rows.iter().map(|row| row.pka).sum()
    }
}
