/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Parent nuclides and their reaction channels

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use ndarray::Array1;
use once_cell::sync::OnceCell;
use rayon::prelude::*;

use super::errors::{CalculationError, Result};
use crate::damage::DamageModel;
use crate::input::{read_pka_file, CrossSectionSection, PkaFile, PkaFileEntry};
use crate::nuclide::{daughter_of, IncidentParticle, NuclideIdentity, MT_RADIATIVE_CAPTURE};
use crate::recoil::{synthesize_capture_matrix, CaptureKinematics, RecoilChannel, RecoilError};
use crate::spectrum::{EnergyGroupStructure, NormalizedFlux};

/// Title given to synthesized capture channels
pub const CAPTURE_TITLE: &str = "(n,g) recoil matrix";

/// One parent nuclide: its recoil-matrix file turned into channels
#[derive(Debug)]
pub struct ParentNuclide {
    identity: NuclideIdentity,
    ratio: f64,
    source: PathBuf,
    groups: EnergyGroupStructure,
    channels: Vec<RecoilChannel>,
    cross_section: Option<CrossSectionSection>,
    flux: OnceCell<Array1<f64>>,
}

impl ParentNuclide {
    /// Read the recoil-matrix file of a configuration entry
    ///
    /// With `estimate_capture` set, a capture channel is synthesized from
    /// the file's (n,γ) cross section when one is present.
    pub fn load(entry: &PkaFileEntry, estimate_capture: bool) -> Result<Self> {
        let identity = entry
            .parent
            .resolve()
            .map_err(|source| CalculationError::Parent {
                parent: entry.parent.to_string(),
                source,
            })?;
        let pka = read_pka_file(&entry.pka_filename).map_err(|source| CalculationError::File {
            path: entry.pka_filename.clone(),
            source,
        })?;

        let has_capture_xs = pka
            .cross_section
            .as_ref()
            .is_some_and(CrossSectionSection::is_capture_cross_section);
        if estimate_capture && !has_capture_xs {
            warn!(
                "{}: (n,g) estimation requested but {} has no capture cross section",
                identity,
                entry.pka_filename.display()
            );
        }

        // masses are only validated when a matrix will actually be synthesized
        let capture = match estimate_capture && has_capture_xs {
            true => Some(
                CaptureKinematics::new(
                    IncidentParticle::Neutron.mass(),
                    entry.ngamma_parent_mass,
                    entry.ngamma_daughter_mass,
                )
                .map_err(|source| CalculationError::Channel {
                    nuclide: identity.name(),
                    channel: CAPTURE_TITLE.to_string(),
                    source,
                })?,
            ),
            false => None,
        };

        Self::from_pka_file(identity, entry.pka_ratios, &entry.pka_filename, pka, capture)
    }

    /// Build the channels of an already-parsed file
    ///
    /// # Arguments
    ///
    /// * `identity` - Parent nuclide
    /// * `ratio` - Weighting ratio applied when aggregating
    /// * `source` - File the data came from, for the run log
    /// * `pka` - Parsed recoil-matrix file
    /// * `capture` - Kinematics for (n,γ) synthesis, or `None` to skip it
    pub fn from_pka_file(
        identity: NuclideIdentity,
        ratio: f64,
        source: &Path,
        pka: PkaFile,
        capture: Option<CaptureKinematics>,
    ) -> Result<Self> {
        let PkaFile {
            groups,
            matrices,
            cross_section,
        } = pka;

        let mut channels = matrices
            .into_iter()
            .map(|section| {
                let daughter = daughter_of(&section.title, section.mtd, &identity).map_err(
                    |source| CalculationError::Daughter {
                        nuclide: identity.name(),
                        source,
                    },
                )?;
                Ok(RecoilChannel::new(section.title, section.mtd, daughter, section.matrix))
            })
            .collect::<Result<Vec<_>>>()?;

        // `load` reports a requested estimate that has no cross section to use
        let capture_xs = cross_section
            .as_ref()
            .filter(|xs| xs.is_capture_cross_section());
        if let Some((kinematics, xs)) = capture.zip(capture_xs) {
            let channel_error = |source: RecoilError| CalculationError::Channel {
                nuclide: identity.name(),
                channel: CAPTURE_TITLE.to_string(),
                source,
            };
            let matrix =
                synthesize_capture_matrix(&groups, &xs.values, &kinematics).map_err(channel_error)?;
            let daughter = daughter_of(CAPTURE_TITLE, MT_RADIATIVE_CAPTURE, &identity).map_err(
                |source| CalculationError::Daughter {
                    nuclide: identity.name(),
                    source,
                },
            )?;
            debug!(
                "{}: synthesized (n,g) matrix with {} entries",
                identity,
                matrix.nnz()
            );
            channels.push(RecoilChannel::estimated(
                CAPTURE_TITLE,
                MT_RADIATIVE_CAPTURE,
                daughter,
                matrix,
            ));
        }

        info!(
            "{}: {} channels on {} groups from {}",
            identity,
            channels.len(),
            groups.num_groups(),
            source.display()
        );

        Ok(Self {
            identity,
            ratio,
            source: source.to_path_buf(),
            groups,
            channels,
            cross_section,
            flux: OnceCell::new(),
        })
    }

    pub fn identity(&self) -> &NuclideIdentity {
        &self.identity
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Group structure shared by every channel of this parent
    pub fn groups(&self) -> &EnergyGroupStructure {
        &self.groups
    }

    /// Channels in file order, synthesized ones last
    pub fn channels(&self) -> &[RecoilChannel] {
        &self.channels
    }

    pub fn cross_section(&self) -> Option<&CrossSectionSection> {
        self.cross_section.as_ref()
    }

    /// Flux carried onto this parent's groups, once collapsed
    pub fn flux(&self) -> Option<&Array1<f64>> {
        self.flux.get()
    }

    /// Regrid the run flux onto this parent's groups and collapse every channel
    ///
    /// Channels are collapsed in parallel. With a `damage` model the damage
    /// of each channel in a lattice of the parent nuclide is estimated too.
    pub fn collapse(&self, flux: &NormalizedFlux, damage: Option<DamageModel>) -> Result<()> {
        let incident = self.flux.get_or_try_init(|| {
            if flux.groups().same_grid(&self.groups) {
                Ok(flux.values().clone())
            } else {
                flux.regrid(&self.groups)
                    .map_err(|source| CalculationError::Regrid {
                        nuclide: self.identity.name(),
                        source,
                    })
            }
        })?;

        self.channels.par_iter().try_for_each(|channel| -> Result<()> {
            let channel_error = |source: RecoilError| CalculationError::Channel {
                nuclide: self.identity.name(),
                channel: channel.to_string(),
                source,
            };
            let spectrum = channel.collapse(incident).map_err(channel_error)?;
            if spectrum.sum() == 0.0 {
                warn!("{}: {} produces no recoils in this flux", self.identity, channel);
            }
            if let Some(model) = damage {
                channel
                    .estimate_damage(&self.groups, &self.identity, model)
                    .map_err(channel_error)?;
            }
            Ok(())
        })?;

        debug!(
            "{}: collapsed {} channels, total PKA rate {:e}",
            self.identity,
            self.channels.len(),
            self.total_pka_spectrum().map_or(0.0, |s| s.sum())
        );
        Ok(())
    }

    /// Sum of the PKA spectra of every collapsed channel
    pub fn total_pka_spectrum(&self) -> Option<Array1<f64>> {
        self.sum_channels(|channel| channel.pka_spectrum())
    }

    /// Sum of the damage cross sections of every channel with damage
    pub fn total_damage_cross_section(&self) -> Option<Array1<f64>> {
        self.sum_channels(|channel| channel.damage().map(|d| &d.cross_section))
    }

    /// Sum of the dpa arrays of every channel with damage
    pub fn total_dpa(&self) -> Option<Array1<f64>> {
        self.sum_channels(|channel| channel.damage().map(|d| &d.dpa))
    }

    fn sum_channels<'a, F>(&'a self, field: F) -> Option<Array1<f64>>
    where
        F: Fn(&'a RecoilChannel) -> Option<&'a Array1<f64>>,
    {
        self.channels
            .iter()
            .filter_map(field)
            .fold(None, |sum: Option<Array1<f64>>, values| match sum {
                Some(sum) => Some(sum + values),
                None => Some(values.clone()),
            })
    }
}
