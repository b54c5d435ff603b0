/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Displacement threshold energies

/// Threshold used for elements without a tabulated value, eV
pub const DEFAULT_DISPLACEMENT_THRESHOLD: f64 = 25.0;

/// Lattice displacement threshold energy E_d in eV for atomic number `z`
pub fn displacement_threshold(z: u32) -> f64 {
    match z {
        4 => 31.0,  // Be
        6 => 31.0,  // C
        12 => 25.0, // Mg
        13 => 27.0, // Al
        14 => 25.0, // Si
        20 => 40.0, // Ca
        22..=29 => 40.0,
        40 | 41 => 40.0,
        42 => 60.0, // Mo
        47 => 60.0, // Ag
        73 | 74 => 90.0,
        79 => 30.0, // Au
        82 => 25.0, // Pb
        _ => DEFAULT_DISPLACEMENT_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabulated_thresholds() {
        assert_eq!(displacement_threshold(26), 40.0);
        assert_eq!(displacement_threshold(74), 90.0);
        assert_eq!(displacement_threshold(42), 60.0);
        assert_eq!(displacement_threshold(13), 27.0);
        assert_eq!(displacement_threshold(79), 30.0);
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(displacement_threshold(1), DEFAULT_DISPLACEMENT_THRESHOLD);
        assert_eq!(displacement_threshold(92), DEFAULT_DISPLACEMENT_THRESHOLD);
    }
}
