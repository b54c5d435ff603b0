/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Calculation driver
//!
//! A run goes through three passes:
//!
//! 1. read the flux once and normalize it to the configured rescale value;
//! 2. read every recoil-matrix file into a [`ParentNuclide`], regrid the flux
//!    onto its groups and collapse its channels in parallel;
//! 3. fold every channel, in input order, into the per-nuclide and
//!    per-element totals and finalize them.
//!
//! Any error aborts the run; nothing is returned for a partial run.

mod errors;
mod parent;

pub use errors::{CalculationError, Result};
pub use parent::{ParentNuclide, CAPTURE_TITLE};

use log::info;
use rayon::prelude::*;

use crate::aggregate::AggregationContext;
use crate::input::{read_flux_file, RunConfig};
use crate::spectrum::NormalizedFlux;

/// A configured PKA calculation
#[derive(Debug, Clone)]
pub struct PkaCalculation {
    config: RunConfig,
}

impl PkaCalculation {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Configure and run in one step
    pub fn from_config(config: RunConfig) -> Result<PkaResults> {
        Self::new(config).run()
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run every pass and return the finalized results
    pub fn run(self) -> Result<PkaResults> {
        let config = self.config;

        let flux = read_flux_file(&config.flux_filename)
            .map_err(|source| CalculationError::File {
                path: config.flux_filename.clone(),
                source,
            })?
            .normalize(config.flux_rescale_value)?;
        info!("Flux normalized to {:e}", flux.total_flux());

        let parents = config
            .pka_files
            .iter()
            .map(|entry| ParentNuclide::load(entry, config.do_gamma_estimate))
            .collect::<Result<Vec<_>>>()?;
        info!("Loaded {} parent nuclides", parents.len());

        let damage = config.do_damage.then_some(config.damage_model);
        parents
            .par_iter()
            .try_for_each(|parent| parent.collapse(&flux, damage))?;
        info!(
            "Collapsed {} channels{}",
            parents.iter().map(|p| p.channels().len()).sum::<usize>(),
            match damage {
                Some(model) => format!(" with {} damage", model),
                None => String::new(),
            }
        );

        let mut totals = AggregationContext::new(config.assumed_ed);
        for parent in &parents {
            for channel in parent.channels() {
                totals.contribute(channel, parent.groups(), parent.ratio())?;
            }
        }
        totals.finalize();
        info!(
            "Aggregated {} nuclides and {} elements",
            totals.nuclides().count(),
            totals.elements().count()
        );

        Ok(PkaResults {
            config,
            flux,
            parents,
            totals,
        })
    }
}

/// Everything a finished run produced
#[derive(Debug)]
pub struct PkaResults {
    config: RunConfig,
    flux: NormalizedFlux,
    parents: Vec<ParentNuclide>,
    totals: AggregationContext,
}

impl PkaResults {
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// The run flux after normalization
    pub fn flux(&self) -> &NormalizedFlux {
        &self.flux
    }

    /// Parent nuclides in input order
    pub fn parents(&self) -> &[ParentNuclide] {
        &self.parents
    }

    /// Finalized per-nuclide and per-element totals
    pub fn totals(&self) -> &AggregationContext {
        &self.totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputError;
    use std::fs;
    use tempfile::TempDir;

    const FLUX: &str = "flux\nunits 0\n2\n0.1 1.0 10.0\n2.0 3.0\n";

    fn matrix_file() -> String {
        format!(
            "{:<30}{:>5} {}\n{}\n{}\n",
            "(n,el) recoil matrix", 2, "0 3 2", "0.1 1.0 10.0 0.1 1.0 10.0", "1 1 1.0\n2 2 1.0"
        )
    }

    fn write_run(dir: &TempDir, config: &str) -> RunConfig {
        fs::write(dir.path().join("flux.dat"), FLUX).unwrap();
        fs::write(dir.path().join("fe56.asc"), matrix_file()).unwrap();
        let path = dir.path().join("input.json");
        fs::write(&path, config).unwrap();
        RunConfig::load(&path).unwrap()
    }

    #[test]
    fn test_identity_run() {
        let dir = TempDir::new().unwrap();
        let config = write_run(
            &dir,
            r#"{"flux_filename": "flux.dat", "flux_rescale_value": 5.0,
                "columns": [{"parent": "Fe56", "pka_ratios": 1.0, "pka_filename": "fe56.asc"}]}"#,
        );
        let results = PkaCalculation::from_config(config).unwrap();

        let fe = results.totals().nuclide_by_name("Fe-56").unwrap();
        assert_eq!(fe.pka_spectrum().to_vec(), vec![2.0, 3.0]);
        assert!(fe.damage().is_some());
        assert!(results.totals().is_finalized());
        assert_eq!(results.parents().len(), 1);
    }

    #[test]
    fn test_missing_matrix_file_names_path() {
        let dir = TempDir::new().unwrap();
        let config = write_run(
            &dir,
            r#"{"flux_filename": "flux.dat", "flux_rescale_value": 1.0,
                "columns": [{"parent": "Fe56", "pka_ratios": 1.0, "pka_filename": "missing.asc"}]}"#,
        );
        match PkaCalculation::from_config(config) {
            Err(CalculationError::File { path, source }) => {
                assert!(path.ends_with("missing.asc"));
                assert!(matches!(source, InputError::IoError(_)));
            }
            other => panic!("expected file error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_invalid_parent_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = write_run(
            &dir,
            r#"{"flux_filename": "flux.dat", "flux_rescale_value": 1.0,
                "columns": [{"parent": "Xx99", "pka_ratios": 1.0, "pka_filename": "fe56.asc"}]}"#,
        );
        assert!(matches!(
            PkaCalculation::from_config(config),
            Err(CalculationError::Parent { .. })
        ));
    }
}
