/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Reaction channels of a parent nuclide

use std::fmt;

use ndarray::Array1;
use once_cell::sync::OnceCell;

use super::errors::{RecoilError, Result};
use super::matrix::RecoilMatrix;
use crate::damage::{estimate_damage, ChannelDamage, DamageModel};
use crate::nuclide::NuclideIdentity;
use crate::spectrum::EnergyGroupStructure;

/// One reaction channel of one parent nuclide
///
/// The title, tag, daughter and matrix are fixed at construction. The PKA
/// spectrum and damage arrays are derived later and can each be set exactly
/// once; both are write-once cells, so channels can be collapsed from
/// several threads through shared references.
#[derive(Debug, Clone)]
pub struct RecoilChannel {
    title: String,
    mtd: i32,
    daughter: NuclideIdentity,
    matrix: RecoilMatrix,
    estimated: bool,
    pka_spectrum: OnceCell<Array1<f64>>,
    damage: OnceCell<ChannelDamage>,
}

impl RecoilChannel {
    /// Channel read from a recoil-matrix file
    pub fn new(
        title: impl Into<String>,
        mtd: i32,
        daughter: NuclideIdentity,
        matrix: RecoilMatrix,
    ) -> Self {
        Self {
            title: title.into(),
            mtd,
            daughter,
            matrix,
            estimated: false,
            pka_spectrum: OnceCell::new(),
            damage: OnceCell::new(),
        }
    }

    /// Channel whose matrix was synthesized rather than read
    pub fn estimated(
        title: impl Into<String>,
        mtd: i32,
        daughter: NuclideIdentity,
        matrix: RecoilMatrix,
    ) -> Self {
        Self {
            estimated: true,
            ..Self::new(title, mtd, daughter, matrix)
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Reaction channel tag (MT-like code)
    pub fn mtd(&self) -> i32 {
        self.mtd
    }

    pub fn daughter(&self) -> &NuclideIdentity {
        &self.daughter
    }

    pub fn matrix(&self) -> &RecoilMatrix {
        &self.matrix
    }

    /// True if the matrix was synthesized
    pub fn is_estimated(&self) -> bool {
        self.estimated
    }

    /// PKA spectrum, once collapsed
    pub fn pka_spectrum(&self) -> Option<&Array1<f64>> {
        self.pka_spectrum.get()
    }

    /// Damage arrays, once estimated
    pub fn damage(&self) -> Option<&ChannelDamage> {
        self.damage.get()
    }

    /// Collapse the matrix against a flux on the same incident grid
    pub fn collapse(&self, flux: &Array1<f64>) -> Result<&Array1<f64>> {
        if self.pka_spectrum.get().is_some() {
            return Err(RecoilError::AlreadyComputed("PKA spectrum", self.to_string()));
        }
        let spectrum = self.matrix.collapse(flux)?;
        self.pka_spectrum
            .set(spectrum)
            .map_err(|_| RecoilError::AlreadyComputed("PKA spectrum", self.to_string()))?;
        self.pka_spectrum
            .get()
            .ok_or_else(|| RecoilError::NotCollapsed(self.to_string()))
    }

    /// Estimate damage in `lattice` from the collapsed PKA spectrum
    pub fn estimate_damage(
        &self,
        groups: &EnergyGroupStructure,
        lattice: &NuclideIdentity,
        model: DamageModel,
    ) -> Result<&ChannelDamage> {
        let spectrum = self
            .pka_spectrum
            .get()
            .ok_or_else(|| RecoilError::NotCollapsed(self.to_string()))?;
        if self.damage.get().is_some() {
            return Err(RecoilError::AlreadyComputed("damage", self.to_string()));
        }
        let damage = estimate_damage(groups, spectrum, &self.daughter, lattice, model)?;
        self.damage
            .set(damage)
            .map_err(|_| RecoilError::AlreadyComputed("damage", self.to_string()))?;
        self.damage
            .get()
            .ok_or_else(|| RecoilError::NotCollapsed(self.to_string()))
    }
}

impl fmt::Display for RecoilChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (MT {})", self.title, self.mtd)?;
        if self.estimated {
            write!(f, " [estimated]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn identity_channel() -> RecoilChannel {
        let matrix = RecoilMatrix::from_triplets(2, 2, [(0, 0, 1.0), (1, 1, 1.0)]).unwrap();
        RecoilChannel::new(
            "(n,n) recoil matrix",
            2,
            NuclideIdentity::new(26, 56).unwrap(),
            matrix,
        )
    }

    #[test]
    fn test_collapse_once() {
        let channel = identity_channel();
        assert!(channel.pka_spectrum().is_none());
        assert_eq!(channel.collapse(&array![2.0, 3.0]).unwrap(), &array![2.0, 3.0]);
        assert_eq!(channel.pka_spectrum(), Some(&array![2.0, 3.0]));
        assert!(matches!(
            channel.collapse(&array![1.0, 1.0]),
            Err(RecoilError::AlreadyComputed(_, _))
        ));
    }

    #[test]
    fn test_damage_requires_collapse() {
        let channel = identity_channel();
        let groups = EnergyGroupStructure::new(vec![0.1, 1.0, 10.0]).unwrap();
        let fe56 = NuclideIdentity::new(26, 56).unwrap();
        assert!(matches!(
            channel.estimate_damage(&groups, &fe56, DamageModel::Nrt),
            Err(RecoilError::NotCollapsed(_))
        ));

        channel.collapse(&array![2.0, 3.0]).unwrap();
        let damage = channel.estimate_damage(&groups, &fe56, DamageModel::Nrt).unwrap();
        assert_eq!(damage.threshold, 40.0);
        assert!(damage.dpa.iter().all(|&d| d > 0.0));
        assert!(channel.damage().is_some());
    }

    #[test]
    fn test_display_marks_estimated() {
        let matrix = RecoilMatrix::zeros(1, 1);
        let channel = RecoilChannel::estimated(
            "(n,g) recoil matrix",
            102,
            NuclideIdentity::new(26, 57).unwrap(),
            matrix,
        );
        assert!(channel.is_estimated());
        assert_eq!(channel.to_string(), "(n,g) recoil matrix (MT 102) [estimated]");
    }
}
