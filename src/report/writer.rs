/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Fixed-width text report

use std::io::{self, Write};

use super::table::SpectrumTable;
use crate::calculation::PkaResults;

const RULE_WIDTH: usize = 98;

/// Write the run log and every requested table
pub fn write_report<W: Write>(mut writer: W, results: &PkaResults) -> io::Result<()> {
    write_run_log(&mut writer, results)?;

    let config = results.config();
    if config.write_each_nuclide {
        for parent in results.parents() {
            for channel in parent.channels() {
                if let Some(table) = SpectrumTable::from_channel(parent, channel) {
                    write_table(&mut writer, &table)?;
                }
            }
        }
    }

    if config.write_total {
        let totals = results.totals();
        writeln!(writer, "\nNuclide totals")?;
        for (_, accumulator) in totals.nuclides() {
            if let Some(table) = SpectrumTable::from_accumulator(accumulator) {
                write_table(&mut writer, &table)?;
            }
        }
        writeln!(writer, "\nElement totals")?;
        for accumulator in totals.elements() {
            if let Some(table) = SpectrumTable::from_accumulator(accumulator) {
                write_table(&mut writer, &table)?;
            }
        }
    }

    writer.flush()
}

fn write_run_log<W: Write>(writer: &mut W, results: &PkaResults) -> io::Result<()> {
    let config = results.config();
    let flux = results.flux();

    writeln!(writer, "gpka-rs {}", crate::VERSION)?;
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        writer,
        "Flux file      : {} ({} groups, rescaled to {:.4e})",
        config.flux_filename.display(),
        flux.groups().num_groups(),
        flux.total_flux()
    )?;
    match config.do_damage {
        true => writeln!(
            writer,
            "Damage model   : {} (assumed Ed {} eV)",
            config.damage_model, config.assumed_ed
        )?,
        false => writeln!(writer, "Damage model   : disabled")?,
    }
    if let Some(scale) = config.number_density_scale() {
        writeln!(writer, "Number density : {:.6e} atoms/(barn cm)", scale)?;
    }

    for parent in results.parents() {
        writeln!(
            writer,
            "\nParent {} (ratio {}) : {}",
            parent.identity(),
            parent.ratio(),
            parent.source().display()
        )?;
        for channel in parent.channels() {
            writeln!(
                writer,
                "  {:>5}  {:<30} -> {:<8}{}",
                channel.mtd(),
                channel.title(),
                channel.daughter().to_string(),
                if channel.is_estimated() { " [estimated]" } else { "" }
            )?;
        }
    }
    Ok(())
}

fn write_table<W: Write>(writer: &mut W, table: &SpectrumTable) -> io::Result<()> {
    writeln!(writer, "\n{}", table.title)?;
    writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(
        writer,
        "{:>6} {:>13} {:>13} {:>13} {:>13} {:>13} {:>13}",
        "Group", "E low (MeV)", "E high (MeV)", "PKAs", "PKA fraction", "Disp. xs", "NRT dpa"
    )?;
    for row in &table.rows {
        writeln!(
            writer,
            "{:>6} {:>13.4e} {:>13.4e} {:>13.4e} {:>13.4e} {:>13.4e} {:>13.4e}",
            row.group,
            row.e_low,
            row.e_high,
            row.pka,
            row.pka_fraction,
            row.displacement_xs,
            row.dpa
        )?;
    }
    if let Some(summary) = &table.summary {
        writeln!(
            writer,
            "  Average PKA energy  {:>13.4e} eV",
            summary.average_pka_energy_ev
        )?;
        writeln!(
            writer,
            "  Displacement energy {:>13.4e} eV/s",
            summary.displacement_energy_rate
        )?;
        writeln!(
            writer,
            "  Equivalent NRT dpa  {:>13.4e} dpa/s",
            summary.equivalent_dpa_rate
        )?;
    }
    Ok(())
}
