/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Reaction channel bookkeeping
//!
//! Maps ENDF MT reaction codes to the residual nucleus left behind, and
//! recoil-matrix titles to the daughter species whose PKA spectrum they carry.

use super::errors::{NuclideError, Result};
use super::identifier::NuclideIdentity;
use crate::utils::constants::{ALPHA_MASS, NEUTRON_MASS, PROTON_MASS};

/// MT code of the radiative capture (n,γ) channel
pub const MT_RADIATIVE_CAPTURE: i32 = 102;

/// MT code range of (z,p) channels to discrete levels
pub const MT_PROTON_RANGE: std::ops::RangeInclusive<i32> = 600..=649;

/// MT code range of (z,α) channels to discrete levels
pub const MT_ALPHA_RANGE: std::ops::RangeInclusive<i32> = 800..=849;

/// Incident particle of a reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentParticle {
    Neutron,
    Proton,
    Alpha,
}

impl IncidentParticle {
    /// (Z, A) of the particle
    pub fn za(&self) -> (u32, u32) {
        match self {
            IncidentParticle::Neutron => (0, 1),
            IncidentParticle::Proton => (1, 1),
            IncidentParticle::Alpha => (2, 4),
        }
    }

    /// Rest mass in amu
    pub fn mass(&self) -> f64 {
        match self {
            IncidentParticle::Neutron => NEUTRON_MASS,
            IncidentParticle::Proton => PROTON_MASS,
            IncidentParticle::Alpha => ALPHA_MASS,
        }
    }

    /// Parse the "(n," / "(p," / "(a," prefix of a channel title
    pub fn from_title(title: &str) -> Option<Self> {
        let prefix: String = title.trim_start().chars().take(3).collect();
        match prefix.to_ascii_lowercase().as_str() {
            "(n," => Some(IncidentParticle::Neutron),
            "(p," => Some(IncidentParticle::Proton),
            "(a," => Some(IncidentParticle::Alpha),
            _ => None,
        }
    }
}

/// Residual nucleus (Z, A) of reaction `mt` for a projectile on a target
///
/// Returns `None` for fission and for codes that would leave a non-physical
/// residual.
pub fn residual_za(mt: i32, projectile: (u32, u32), target: (u32, u32)) -> Option<(u32, u32)> {
    // Compound nucleus
    let kz = i64::from(target.0) + i64::from(projectile.0);
    let ka = i64::from(target.1) + i64::from(projectile.1);

    let (dz, da): (i64, i64) = match mt {
        2 => (i64::from(projectile.0), i64::from(projectile.1)),
        4 | 51..=91 => (0, 1),
        16 | 875..=891 => (0, 2),
        17 => (0, 3),
        18 => return None,
        22 => (2, 5),
        23 => (6, 13),
        24 => (2, 6),
        25 => (2, 7),
        28 => (1, 2),
        29 => (4, 9),
        30 => (4, 10),
        32 => (1, 3),
        33 => (1, 4),
        34 => (2, 4),
        35 => (5, 11),
        36 => (5, 12),
        37 => (0, 4),
        41 => (1, 3),
        42 => (1, 4),
        44 => (2, 3),
        45 => (3, 6),
        102 => (0, 0),
        103 | 600..=649 => (1, 1),
        104 | 650..=699 => (1, 2),
        105 | 700..=749 => (1, 3),
        106 | 750..=799 => (2, 3),
        107 | 800..=849 => (2, 4),
        108 => (4, 8),
        109 => (6, 12),
        111 => (2, 2),
        112 => (3, 5),
        _ => (0, 0),
    };

    let z = kz - dz;
    let a = ka - da;
    if z < 0 || a <= 0 || a < z {
        return None;
    }
    Some((z as u32, a as u32))
}

/// Daughter species whose recoil spectrum a matrix section describes
///
/// Light-particle sections ("alpha", "proton" in the title) describe the
/// emitted particle; "recoil" sections describe the residual nucleus.
pub fn daughter_of(title: &str, mtd: i32, parent: &NuclideIdentity) -> Result<NuclideIdentity> {
    let lower = title.to_ascii_lowercase();
    let unknown = || NuclideError::UnknownDaughter {
        title: title.to_string(),
        mtd,
        parent: parent.name(),
    };

    if lower.contains("alpha") {
        return Ok(NuclideIdentity::helium4());
    }
    if lower.contains("proton") {
        return Ok(NuclideIdentity::hydrogen1());
    }
    if !lower.contains("recoil") {
        return Err(unknown());
    }

    let incident = IncidentParticle::from_title(title).ok_or_else(unknown)?;
    let (z, a) = residual_za(mtd, incident.za(), (parent.z, parent.a)).ok_or_else(unknown)?;
    NuclideIdentity::new(z, a).map_err(|_| unknown())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fe56() -> NuclideIdentity {
        NuclideIdentity::new(26, 56).unwrap()
    }

    #[test]
    fn test_residuals_for_neutron_channels() {
        let n = IncidentParticle::Neutron.za();
        assert_eq!(residual_za(2, n, (26, 56)), Some((26, 56)));
        assert_eq!(residual_za(51, n, (26, 56)), Some((26, 56)));
        assert_eq!(residual_za(16, n, (26, 56)), Some((26, 55)));
        assert_eq!(residual_za(102, n, (26, 56)), Some((26, 57)));
        assert_eq!(residual_za(103, n, (26, 56)), Some((25, 56)));
        assert_eq!(residual_za(620, n, (26, 56)), Some((25, 56)));
        assert_eq!(residual_za(107, n, (26, 56)), Some((24, 53)));
        assert_eq!(residual_za(820, n, (26, 56)), Some((24, 53)));
        assert_eq!(residual_za(109, n, (26, 56)), Some((20, 45)));
        assert_eq!(residual_za(18, n, (92, 235)), None);
    }

    #[test]
    fn test_daughter_from_title() {
        let parent = fe56();
        assert_eq!(
            daughter_of("(n,a) alpha matrix", 107, &parent).unwrap(),
            NuclideIdentity::helium4()
        );
        assert_eq!(
            daughter_of("(n,p) proton matrix", 103, &parent).unwrap(),
            NuclideIdentity::hydrogen1()
        );
        assert_eq!(
            daughter_of("(n,2n) recoil matrix", 16, &parent).unwrap(),
            NuclideIdentity::new(26, 55).unwrap()
        );
        assert_eq!(
            daughter_of("(n,g) recoil matrix", 102, &parent).unwrap(),
            NuclideIdentity::new(26, 57).unwrap()
        );
    }

    #[test]
    fn test_unknown_daughters() {
        let parent = fe56();
        assert!(matches!(
            daughter_of("total cross section", 1, &parent),
            Err(NuclideError::UnknownDaughter { .. })
        ));
        assert!(daughter_of("(x,n) recoil matrix", 2, &parent).is_err());
        let u235 = NuclideIdentity::new(92, 235).unwrap();
        assert!(daughter_of("(n,f) recoil matrix", 18, &u235).is_err());
    }

    #[test]
    fn test_incident_particle_prefix() {
        assert_eq!(IncidentParticle::from_title("(N,2n) recoil"), Some(IncidentParticle::Neutron));
        assert_eq!(IncidentParticle::from_title("(p,n) recoil"), Some(IncidentParticle::Proton));
        assert_eq!(IncidentParticle::from_title("(a,n) recoil"), Some(IncidentParticle::Alpha));
        assert_eq!(IncidentParticle::from_title("recoil"), None);
    }
}
