/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Physical constants used in PKA and damage calculations

/// Avogadro constant in 1/mol
pub const AVOGADRO: f64 = 6.022141930e23;

/// Speed of light in m/s
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Conversion from Joule to MeV
pub const JOULE_TO_MEV: f64 = 1.0 / 1.602176565e-13;

/// Conversion from MeV to eV
pub const MEV_TO_EV: f64 = 1.0e6;

/// Neutron mass in amu
pub const NEUTRON_MASS: f64 = 1.008664923;

/// Proton (hydrogen-1) mass in amu
pub const PROTON_MASS: f64 = 1.007825032;

/// Alpha (helium-4) mass in amu
pub const ALPHA_MASS: f64 = 4.002603254;

/// Atoms per mole scaled to barn-cm units (Avogadro / 1e24)
pub const ATOMS_PER_MOLE_BARN_CM: f64 = 0.6022;

/// Fraction of the damage energy converted into stable displacements (NRT)
pub const NRT_DISPLACEMENT_EFFICIENCY: f64 = 0.8;
