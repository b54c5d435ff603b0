/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Run configuration
//!
//! The configuration is a JSON document naming the flux file and one entry
//! per parent nuclide. Missing optional keys take their documented defaults;
//! missing required keys are reported as
//! [`InputError::MissingRequiredConfig`] before any file is read.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

use super::errors::{InputError, Result};
use crate::damage::DamageModel;
use crate::nuclide::NuclideSpec;
use crate::utils::constants::ATOMS_PER_MOLE_BARN_CM;

fn default_assumed_ed() -> f64 {
    40.0
}

fn default_true() -> bool {
    true
}

/// One parent nuclide and its recoil-matrix file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PkaFileEntry {
    /// Parent identifier: "U235", 92235, [92, 235] or {"Z": 92, "A": 235}
    pub parent: NuclideSpec,
    /// Isotopic or elemental weighting ratio
    pub pka_ratios: f64,
    /// Parent mass in amu, used by (n,γ) synthesis
    #[serde(default)]
    pub ngamma_parent_mass: f64,
    /// Capture daughter mass in amu, used by (n,γ) synthesis
    #[serde(default)]
    pub ngamma_daughter_mass: f64,
    /// SPECTER-PKA recoil-matrix file
    pub pka_filename: PathBuf,
}

/// Configuration as written in the file, before validation
#[derive(Debug, Deserialize)]
struct RawRunConfig {
    flux_filename: Option<PathBuf>,
    #[serde(alias = "pka_files")]
    columns: Option<Vec<PkaFileEntry>>,
    flux_rescale_value: Option<f64>,
    number_pka_files: Option<usize>,
    #[serde(default = "default_assumed_ed")]
    assumed_ed: f64,
    #[serde(default)]
    do_gamma_estimate: bool,
    #[serde(default = "default_true")]
    do_damage: bool,
    #[serde(default)]
    damage_model: DamageModel,
    #[serde(default)]
    write_each_nuclide: bool,
    #[serde(default = "default_true")]
    write_total: bool,
    #[serde(default)]
    do_plot: bool,
    density: Option<f64>,
    atomic_mass: Option<f64>,
}

/// Validated run configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawRunConfig")]
pub struct RunConfig {
    pub flux_filename: PathBuf,
    pub pka_files: Vec<PkaFileEntry>,
    pub flux_rescale_value: f64,
    /// Displacement threshold (eV) for the equivalent dpa rates of totals
    pub assumed_ed: f64,
    pub do_gamma_estimate: bool,
    pub do_damage: bool,
    pub damage_model: DamageModel,
    pub write_each_nuclide: bool,
    pub write_total: bool,
    pub do_plot: bool,
    pub density: Option<f64>,
    pub atomic_mass: Option<f64>,
}

impl TryFrom<RawRunConfig> for RunConfig {
    type Error = InputError;

    fn try_from(raw: RawRunConfig) -> Result<Self> {
        let flux_filename = raw
            .flux_filename
            .ok_or_else(|| InputError::MissingRequiredConfig("flux_filename".to_string()))?;
        let mut pka_files = raw
            .columns
            .filter(|entries| !entries.is_empty())
            .ok_or_else(|| InputError::MissingRequiredConfig("columns".to_string()))?;
        let flux_rescale_value = raw
            .flux_rescale_value
            .ok_or_else(|| InputError::MissingRequiredConfig("flux_rescale_value".to_string()))?;

        if !(flux_rescale_value.is_finite() && flux_rescale_value > 0.0) {
            return Err(InputError::InvalidFormat(format!(
                "flux_rescale_value must be positive, got {}",
                flux_rescale_value
            )));
        }
        if !(raw.assumed_ed.is_finite() && raw.assumed_ed > 0.0) {
            return Err(InputError::InvalidFormat(format!(
                "assumed_ed must be positive, got {}",
                raw.assumed_ed
            )));
        }

        if let Some(n) = raw.number_pka_files {
            if n != pka_files.len() {
                warn!(
                    "number_pka_files is {} but {} entries are listed; using {}",
                    n,
                    pka_files.len(),
                    n.min(pka_files.len())
                );
                pka_files.truncate(n);
            }
            if pka_files.is_empty() {
                return Err(InputError::MissingRequiredConfig("columns".to_string()));
            }
        }

        Ok(Self {
            flux_filename,
            pka_files,
            flux_rescale_value,
            assumed_ed: raw.assumed_ed,
            do_gamma_estimate: raw.do_gamma_estimate,
            do_damage: raw.do_damage,
            damage_model: raw.damage_model,
            write_each_nuclide: raw.write_each_nuclide,
            write_total: raw.write_total,
            do_plot: raw.do_plot,
            density: raw.density,
            atomic_mass: raw.atomic_mass,
        })
    }
}

impl RunConfig {
    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawRunConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Load a configuration file, resolving relative paths against its directory
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let mut config = Self::from_json_str(&text)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Prefix every relative file name with `base`
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.flux_filename);
        for entry in &mut self.pka_files {
            resolve(&mut entry.pka_filename);
        }
    }

    /// Atoms per barn-cm scaling, `0.6022 × density / atomic_mass`
    pub fn number_density_scale(&self) -> Option<f64> {
        match (self.density, self.atomic_mass) {
            (Some(density), Some(mass)) if mass > 0.0 => {
                Some(ATOMS_PER_MOLE_BARN_CM * density / mass)
            }
            _ => None,
        }
    }
}
