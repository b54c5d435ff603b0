/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Nuclide identifiers and their resolution to (Z, A)
//!
//! Input files name nuclides in several ways: "U235", "235-U", "u-235",
//! ZAID integers such as 92235, or explicit (Z, A) pairs. The raw forms are
//! first classified into [`NuclideId`] and then resolved into a canonical
//! [`NuclideIdentity`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::database::{atomic_number_from_symbol, element_symbol, MAX_ATOMIC_NUMBER};
use super::errors::{NuclideError, Result};

/// Canonical nuclide identity
///
/// Ordering is lexicographic on (Z, A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NuclideIdentity {
    /// Atomic number
    pub z: u32,
    /// Mass number
    pub a: u32,
}

impl NuclideIdentity {
    /// Create an identity after checking Z against the element table
    pub fn new(z: u32, a: u32) -> Result<Self> {
        if z > MAX_ATOMIC_NUMBER {
            return Err(NuclideError::InvalidIdentifier(format!(
                "atomic number {} is outside the element table",
                z
            )));
        }
        if a == 0 || a < z {
            return Err(NuclideError::InvalidIdentifier(format!(
                "mass number {} is not valid for Z = {}",
                a, z
            )));
        }
        Ok(Self { z, a })
    }

    /// Helium-4, the alpha particle
    pub const fn helium4() -> Self {
        Self { z: 2, a: 4 }
    }

    /// Hydrogen-1, the proton
    pub const fn hydrogen1() -> Self {
        Self { z: 1, a: 1 }
    }

    /// Element symbol, e.g. "Fe"
    pub fn element(&self) -> &'static str {
        // z is validated on construction
        element_symbol(self.z).unwrap_or("?")
    }

    /// Display name, e.g. "Fe-56"
    pub fn name(&self) -> String {
        format!("{}-{}", self.element(), self.a)
    }

    /// ZAID integer, e.g. 26056
    pub fn zaid(&self) -> u32 {
        self.z * 1000 + self.a
    }
}

impl fmt::Display for NuclideIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.element(), self.a)
    }
}

/// Classified nuclide identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NuclideId {
    /// Symbol and mass in either order, optionally hyphenated ("U235", "235-u")
    SymbolMass(String),
    /// ZAID integer: last three digits are A, the rest is Z
    Zaid(u32),
    /// Explicit (Z, A)
    ZaPair(u32, u32),
}

impl NuclideId {
    /// Classify a free-form text identifier
    ///
    /// Text containing any letter is a symbol/mass string; purely numeric text
    /// is a ZAID.
    pub fn classify(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.chars().any(|c| c.is_ascii_alphabetic()) {
            return Ok(NuclideId::SymbolMass(trimmed.to_string()));
        }
        trimmed
            .parse::<u32>()
            .map(NuclideId::Zaid)
            .map_err(|_| NuclideError::InvalidIdentifier(text.to_string()))
    }

    /// Resolve into a canonical identity
    pub fn resolve(&self) -> Result<NuclideIdentity> {
        match self {
            NuclideId::SymbolMass(text) => resolve_symbol_mass(text),
            NuclideId::Zaid(zaid) => resolve_zaid(*zaid),
            NuclideId::ZaPair(z, a) => NuclideIdentity::new(*z, *a),
        }
    }
}

impl FromStr for NuclideId {
    type Err = NuclideError;

    fn from_str(s: &str) -> Result<Self> {
        Self::classify(s)
    }
}

/// Raw identifier shapes accepted in configuration files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NuclideSpec {
    /// "U235", "235-U", "92235"
    Text(String),
    /// 92235
    Number(u64),
    /// [92, 235]
    Pair(u32, u32),
    /// {"Z": 92, "A": 235}
    Record {
        #[serde(rename = "Z", alias = "z")]
        z: u32,
        #[serde(rename = "A", alias = "a")]
        a: u32,
    },
}

impl NuclideSpec {
    /// Classify the raw shape into a [`NuclideId`]
    pub fn classify(&self) -> Result<NuclideId> {
        match self {
            NuclideSpec::Text(text) => NuclideId::classify(text),
            NuclideSpec::Number(n) => u32::try_from(*n)
                .map(NuclideId::Zaid)
                .map_err(|_| NuclideError::InvalidIdentifier(n.to_string())),
            NuclideSpec::Pair(z, a) | NuclideSpec::Record { z, a } => {
                Ok(NuclideId::ZaPair(*z, *a))
            }
        }
    }

    /// Classify and resolve in one step
    pub fn resolve(&self) -> Result<NuclideIdentity> {
        self.classify()?.resolve()
    }
}

impl fmt::Display for NuclideSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NuclideSpec::Text(text) => write!(f, "{}", text),
            NuclideSpec::Number(n) => write!(f, "{}", n),
            NuclideSpec::Pair(z, a) | NuclideSpec::Record { z, a } => write!(f, "({}, {})", z, a),
        }
    }
}

fn resolve_zaid(zaid: u32) -> Result<NuclideIdentity> {
    let z = zaid / 1000;
    let a = zaid % 1000;
    if z == 0 {
        return Err(NuclideError::InvalidIdentifier(format!(
            "ZAID {} has no atomic number digits",
            zaid
        )));
    }
    NuclideIdentity::new(z, a)
}

fn resolve_symbol_mass(text: &str) -> Result<NuclideIdentity> {
    let invalid = || NuclideError::InvalidIdentifier(text.to_string());

    let (first, second) = match text.split_once('-') {
        Some((left, right)) => {
            if right.contains('-') {
                return Err(invalid());
            }
            (left.trim().to_string(), right.trim().to_string())
        }
        None => {
            let letters: String = text.chars().filter(|c| c.is_ascii_alphabetic()).collect();
            let others: String = text
                .chars()
                .filter(|c| !c.is_ascii_alphabetic() && !c.is_whitespace())
                .collect();
            (letters, others)
        }
    };

    // The order of symbol and mass is unknown, so try both
    let resolved = [(&first, &second), (&second, &first)]
        .into_iter()
        .find_map(|(symbol, mass)| {
            let z = atomic_number_from_symbol(symbol)?;
            if mass.is_empty() || !mass.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let a = mass.parse::<u32>().ok()?;
            Some((z, a))
        })
        .ok_or_else(invalid)
        .and_then(|(z, a)| NuclideIdentity::new(z, a));
    resolved
}
