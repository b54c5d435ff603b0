/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Flux spectrum file reader
//!
//! Layout: a free-text header line, a unit line whose last token is the unit
//! code, a line holding the group count N, then N+1 ascending group
//! boundaries in MeV followed by N flux values.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use ndarray::Array1;

use super::errors::Result;
use super::parser::LineCursor;
use crate::spectrum::{EnergyGroupStructure, FluxSpectrum, FluxUnit};

/// Read a flux file from disk
pub fn read_flux_file<P: AsRef<Path>>(path: P) -> Result<FluxSpectrum> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let flux = parse_flux(BufReader::new(file), path.display().to_string())?;
    info!(
        "Read flux {} with {} groups from {:e} to {:e} MeV",
        path.display(),
        flux.groups().num_groups(),
        flux.groups().min_energy(),
        flux.groups().max_energy()
    );
    Ok(flux)
}

/// Parse a flux spectrum from any buffered reader
pub fn parse_flux<R: BufRead>(reader: R, source: impl Into<String>) -> Result<FluxSpectrum> {
    let mut cursor = LineCursor::new(reader, source);

    cursor.expect_line("flux header")?;

    let unit_line = cursor.expect_line("flux unit line")?;
    let code_token = unit_line
        .split_whitespace()
        .last()
        .ok_or_else(|| cursor.format_error("empty flux unit line"))?;
    let code: i64 = cursor.parse_int(code_token)?;
    let unit = FluxUnit::from_code(code)?;

    let count_line = cursor.expect_line("group count")?;
    let num_groups: usize = count_line
        .split_whitespace()
        .next()
        .ok_or_else(|| cursor.format_error("empty group count line"))
        .and_then(|token| cursor.parse_int(token))?;
    if num_groups == 0 {
        return Err(cursor.format_error("flux file declares zero groups"));
    }

    let bounds = cursor.read_values(num_groups + 1, "flux group boundaries")?;
    let values = cursor.read_values(num_groups, "flux values")?;

    let groups = EnergyGroupStructure::new(bounds)?;
    Ok(FluxSpectrum::new(groups, Array1::from(values), unit)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputError;
    use crate::spectrum::SpectrumError;
    use std::io::Cursor;

    #[test]
    fn test_parse_one_value_per_line() {
        let text = "test flux\nunit  1\n2\n0.1\n1.0\n10.0\n5.0\n0.5\n";
        let flux = parse_flux(Cursor::new(text), "flux").unwrap();
        assert_eq!(flux.unit(), FluxUnit::PerUnitEnergy);
        assert_eq!(flux.groups().bounds(), &[0.1, 1.0, 10.0]);
        assert_eq!(flux.values().to_vec(), vec![5.0, 0.5]);
    }

    #[test]
    fn test_parse_per_group_codes() {
        for code in [0, 2] {
            let text = format!("header\nunits {}\n1\n0.0 1.0\n3.0\n", code);
            let flux = parse_flux(Cursor::new(text), "flux").unwrap();
            assert_eq!(flux.unit(), FluxUnit::PerGroup);
        }
    }

    #[test]
    fn test_unknown_unit_code() {
        let text = "header\nunits 7\n1\n0.0 1.0\n3.0\n";
        assert!(matches!(
            parse_flux(Cursor::new(text), "flux"),
            Err(InputError::Spectrum(SpectrumError::UnknownUnit(7)))
        ));
    }

    #[test]
    fn test_truncated_file() {
        let text = "header\nunits 0\n3\n0.0 1.0 2.0 3.0\n1.0 2.0\n";
        let err = parse_flux(Cursor::new(text), "short.flx").unwrap_err();
        assert!(matches!(err, InputError::InvalidFormat(_)));
        assert!(err.to_string().contains("short.flx"));
    }

    #[test]
    fn test_descending_boundaries_rejected() {
        let text = "header\nunits 0\n1\n1.0 0.5\n3.0\n";
        assert!(matches!(
            parse_flux(Cursor::new(text), "flux"),
            Err(InputError::Spectrum(SpectrumError::InvalidGroupStructure(_)))
        ));
    }
}
