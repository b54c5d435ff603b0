/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command line interface

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use crate::calculation::PkaCalculation;
use crate::input::RunConfig;
use crate::report::write_report;

/// PKA spectra and displacement damage from SPECTER-PKA recoil matrices
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "gpka")]
#[command(version)]
pub struct Cli {
    /// JSON run configuration
    #[arg(default_value = "input.json")]
    pub input: PathBuf,

    /// Report file
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    pub threads: Option<usize>,
}

impl Cli {
    /// Default log filter for this invocation
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Run the configured calculation and write its report
    ///
    /// The report file is only created once the whole run has succeeded.
    pub fn run(&self) -> anyhow::Result<()> {
        if let Some(threads) = self.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }

        let config = RunConfig::load(&self.input)
            .with_context(|| format!("Failed to load {}", self.input.display()))?;
        let results = PkaCalculation::from_config(config)?;

        let file = File::create(&self.output)
            .with_context(|| format!("Failed to create {}", self.output.display()))?;
        write_report(BufWriter::new(file), &results)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;
        info!("Report written to {}", self.output.display());
        Ok(())
    }
}
