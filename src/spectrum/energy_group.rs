/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Multigroup energy structure

use std::sync::Arc;

use ndarray::Array1;

use super::errors::{Result, SpectrumError};
use crate::utils::{group_midpoints, group_widths, mev_to_ev};

/// Ordered ascending energy boundaries (MeV) defining N contiguous groups
///
/// The boundary array is shared: cloning a structure only bumps a reference
/// count, so a parent nuclide and every channel and accumulator derived from
/// it refer to the same grid.
#[derive(Debug, Clone)]
pub struct EnergyGroupStructure {
    bounds: Arc<[f64]>,
}

impl EnergyGroupStructure {
    /// Build a structure from N+1 strictly ascending boundaries
    pub fn new(bounds: Vec<f64>) -> Result<Self> {
        if bounds.len() < 2 {
            return Err(SpectrumError::InvalidGroupStructure(format!(
                "need at least 2 boundaries, got {}",
                bounds.len()
            )));
        }
        if let Some(bad) = bounds.iter().position(|e| !e.is_finite()) {
            return Err(SpectrumError::InvalidGroupStructure(format!(
                "boundary {} is not finite",
                bad
            )));
        }
        if let Some(i) = bounds.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SpectrumError::InvalidGroupStructure(format!(
                "boundaries must be strictly ascending: E[{}] = {:e} >= E[{}] = {:e}",
                i,
                bounds[i],
                i + 1,
                bounds[i + 1]
            )));
        }
        Ok(Self {
            bounds: bounds.into(),
        })
    }

    /// Number of groups N
    pub fn num_groups(&self) -> usize {
        self.bounds.len() - 1
    }

    /// The N+1 boundaries in MeV
    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// Lower boundary of group `i`
    pub fn lower(&self, i: usize) -> f64 {
        self.bounds[i]
    }

    /// Upper boundary of group `i`
    pub fn upper(&self, i: usize) -> f64 {
        self.bounds[i + 1]
    }

    /// Lowest boundary
    pub fn min_energy(&self) -> f64 {
        self.bounds[0]
    }

    /// Highest boundary
    pub fn max_energy(&self) -> f64 {
        self.bounds[self.bounds.len() - 1]
    }

    /// Group midpoints in MeV
    pub fn midpoints(&self) -> Array1<f64> {
        Array1::from(group_midpoints(&self.bounds))
    }

    /// Group midpoints in eV
    pub fn midpoints_ev(&self) -> Array1<f64> {
        self.midpoints().mapv(mev_to_ev)
    }

    /// Group widths in MeV
    pub fn widths(&self) -> Array1<f64> {
        Array1::from(group_widths(&self.bounds))
    }

    /// True if both structures share the same boundary storage or values
    pub fn same_grid(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.bounds, &other.bounds) || self.bounds == other.bounds
    }

    /// True if both structures share the same boundary storage
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.bounds, &other.bounds)
    }
}

impl PartialEq for EnergyGroupStructure {
    fn eq(&self, other: &Self) -> bool {
        self.same_grid(other)
    }
}
