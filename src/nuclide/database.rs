/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Element symbol table
//!
//! Symbols are indexed by atomic number; index 0 holds the neutron so that
//! light reaction products can be named with the same table.

/// Element symbols in order of atomic number, `ELEMENT_SYMBOLS[0]` is the neutron
pub const ELEMENT_SYMBOLS: [&str; 119] = [
    "n", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr",
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th",
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm",
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Highest atomic number in the table
pub const MAX_ATOMIC_NUMBER: u32 = 118;

/// Provides the element symbol for an atomic number (0 is the neutron)
pub fn element_symbol(atomic_number: u32) -> Option<&'static str> {
    ELEMENT_SYMBOLS.get(atomic_number as usize).copied()
}

/// Returns the atomic number for an element symbol
///
/// This function is case-insensitive and will handle both "Fe" and "FE".
/// The neutron entry is never matched: "N" is nitrogen.
pub fn atomic_number_from_symbol(symbol: &str) -> Option<u32> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return None;
    }

    ELEMENT_SYMBOLS
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, s)| s.eq_ignore_ascii_case(symbol))
        .map(|(z, _)| z as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_symbol() {
        assert_eq!(element_symbol(0), Some("n"));
        assert_eq!(element_symbol(26), Some("Fe"));
        assert_eq!(element_symbol(92), Some("U"));
        assert_eq!(element_symbol(118), Some("Og"));
        assert_eq!(element_symbol(119), None);
    }

    #[test]
    fn test_symbol_lookup_is_case_insensitive() {
        assert_eq!(atomic_number_from_symbol("Fe"), Some(26));
        assert_eq!(atomic_number_from_symbol("FE"), Some(26));
        assert_eq!(atomic_number_from_symbol("fe"), Some(26));
        assert_eq!(atomic_number_from_symbol(" u "), Some(92));
        assert_eq!(atomic_number_from_symbol("Xx"), None);
        assert_eq!(atomic_number_from_symbol(""), None);
    }

    #[test]
    fn test_n_is_nitrogen() {
        assert_eq!(atomic_number_from_symbol("N"), Some(7));
        assert_eq!(atomic_number_from_symbol("n"), Some(7));
    }
}
