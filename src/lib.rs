/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # gpka-rs
//!
//! Primary knock-on atom (PKA) spectra and displacement damage rates from
//! SPECTER-PKA recoil matrices.
//!
//! A run reads one neutron flux spectrum and one recoil-matrix file per
//! parent nuclide, collapses every reaction channel against the flux,
//! estimates the damage each recoil spectrum causes, and sums the results per
//! daughter nuclide and per element.
//!
//! ```no_run
//! use gpka_rs::calculation::PkaCalculation;
//! use gpka_rs::input::RunConfig;
//!
//! let config = RunConfig::load("input.json")?;
//! let results = PkaCalculation::from_config(config)?;
//! if let Some(iron) = results.totals().element("Fe") {
//!     println!("Fe PKA rate: {:e}", iron.pka_spectrum().sum());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregate;
pub mod calculation;
pub mod cli;
pub mod damage;
pub mod input;
pub mod nuclide;
pub mod recoil;
pub mod report;
pub mod spectrum;
pub mod utils;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
