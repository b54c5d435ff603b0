/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Output of a finished run
//!
//! Reports are rendered from [`PkaResults`](crate::calculation::PkaResults),
//! which only exists once every pass succeeded.

mod table;
mod writer;

pub use table::{SpectrumRow, SpectrumTable, Summary};
pub use writer::write_report;
