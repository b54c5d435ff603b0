/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Main executable for gpka-rs

use clap::Parser;
use env_logger::Env;
use log::info;

use gpka_rs::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();

    info!("gpka-rs v{}", gpka_rs::VERSION);
    cli.run()
}
