/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! SPECTER-PKA recoil-matrix file reader
//!
//! A file holds, in order:
//!
//! 1. an energy-group section: a fixed-width header (title in columns 0-29,
//!    channel tag in columns 30-34, then the boundary count N+1 and point
//!    count N), 2(N+1) energies six per line of which the first N+1 are the
//!    group boundaries, and the 1-based `(row, col, value)` triplets of the
//!    first recoil matrix;
//! 2. further recoil-matrix sections, recognised by "matrix" in the title;
//! 3. optionally one cross-section section of 1-based `(group, value)` pairs
//!    running to the end of the file.
//!
//! Triplet lists end at the next line mentioning "matrix" or "section", or at
//! the first line that is not a triplet. Trailing lines that are neither a
//! section header nor data are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};
use ndarray::Array1;

use super::errors::{InputError, Result};
use super::parser::LineCursor;
use crate::nuclide::MT_RADIATIVE_CAPTURE;
use crate::recoil::{RecoilError, RecoilMatrix};
use crate::spectrum::EnergyGroupStructure;

const TITLE_END: usize = 30;
const TAG_END: usize = 35;
const FIELDS_START: usize = 36;

/// Fixed-width section header
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeader {
    pub title: String,
    pub mtd: i32,
    /// Whitespace-separated fields after the channel tag
    pub fields: Vec<String>,
}

/// One recoil matrix with its title and channel tag
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixSection {
    pub title: String,
    pub mtd: i32,
    pub matrix: RecoilMatrix,
}

/// Per-group cross section read from the trailing section
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSectionSection {
    pub title: String,
    pub mtd: i32,
    pub values: Array1<f64>,
}

impl CrossSectionSection {
    /// True for the (n,γ) capture cross section usable for matrix synthesis
    pub fn is_capture_cross_section(&self) -> bool {
        self.mtd == MT_RADIATIVE_CAPTURE && self.title.contains("cross")
    }
}

/// Contents of one recoil-matrix file
#[derive(Debug, Clone)]
pub struct PkaFile {
    pub groups: EnergyGroupStructure,
    pub matrices: Vec<MatrixSection>,
    pub cross_section: Option<CrossSectionSection>,
}

/// Read a recoil-matrix file from disk
pub fn read_pka_file<P: AsRef<Path>>(path: P) -> Result<PkaFile> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let pka = PkaFileReader::new(BufReader::new(file), path.display().to_string()).read()?;
    info!(
        "Read {} recoil matrices on {} groups from {}",
        pka.matrices.len(),
        pka.groups.num_groups(),
        path.display()
    );
    Ok(pka)
}

/// Streaming reader for the recoil-matrix file format
#[derive(Debug)]
pub struct PkaFileReader<R> {
    cursor: LineCursor<R>,
}

impl<R: BufRead> PkaFileReader<R> {
    /// Wrap a reader; `source` names it in error messages
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            cursor: LineCursor::new(reader, source),
        }
    }

    /// Read the whole file
    pub fn read(mut self) -> Result<PkaFile> {
        let (groups, first) = self.read_group_structure()?;
        let n = groups.num_groups();

        let mut matrices = vec![first];
        while let Some(section) = self.read_matrix_section(n)? {
            matrices.push(section);
        }
        let cross_section = self.read_cross_section(n)?;

        Ok(PkaFile {
            groups,
            matrices,
            cross_section,
        })
    }

    /// Read the energy-group section and the first matrix
    pub fn read_group_structure(&mut self) -> Result<(EnergyGroupStructure, MatrixSection)> {
        let line = self.cursor.expect_line("energy group header")?;
        let header = self.parse_header(&line)?;

        let boundary_count: usize = self.field(&header, 1)?;
        let point_count: usize = self.field(&header, 2)?;
        if boundary_count < 2 {
            return Err(self
                .cursor
                .format_error(format!("boundary count {} is too small", boundary_count)));
        }
        let n = boundary_count - 1;
        if point_count != n {
            return Err(self.cursor.format_error(format!(
                "point count {} must equal the group count {}",
                point_count, n
            )));
        }

        let mut energies = self.cursor.read_values(2 * (n + 1), "group energies")?;
        energies.truncate(n + 1);
        let groups = EnergyGroupStructure::new(energies)?;

        let matrix = self.read_triplets(n)?;
        debug!("{:>4} | {}", header.mtd, header.title);
        Ok((
            groups,
            MatrixSection {
                title: header.title,
                mtd: header.mtd,
                matrix,
            },
        ))
    }

    /// Read the next recoil-matrix section
    ///
    /// Returns `None`, leaving the line unread, at end of file or when the
    /// next line is not a matrix section header.
    pub fn read_matrix_section(&mut self, n: usize) -> Result<Option<MatrixSection>> {
        self.skip_blank_lines()?;
        let Some(line) = self.cursor.peek_line()?.map(str::to_string) else {
            return Ok(None);
        };
        let Ok(header) = self.parse_header(&line) else {
            return Ok(None);
        };
        if !header.title.contains("matrix") {
            return Ok(None);
        }
        self.cursor.next_line()?;

        let matrix = self.read_triplets(n)?;
        debug!("{:>4} | {}", header.mtd, header.title);
        Ok(Some(MatrixSection {
            title: header.title,
            mtd: header.mtd,
            matrix,
        }))
    }

    /// Read the trailing cross-section section, if any
    pub fn read_cross_section(&mut self, n: usize) -> Result<Option<CrossSectionSection>> {
        self.skip_blank_lines()?;
        let Some(line) = self.cursor.next_line()? else {
            return Ok(None);
        };
        let Ok(header) = self.parse_header(&line) else {
            warn!(
                "{}:{}: ignoring trailing data {:?}",
                self.cursor.source(),
                self.cursor.current_line(),
                line.trim()
            );
            return Ok(None);
        };

        let mut values = Array1::zeros(n);
        while let Some(line) = self.cursor.next_line()? {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() < 2 {
                return Err(self.cursor.format_error("expected a (group, value) pair"));
            }
            let group: usize = self.cursor.parse_int(fields[0])?;
            let value = self.cursor.parse_f64(fields[1])?;
            if group == 0 || group > n {
                return Err(self.matrix_error(RecoilError::ShapeMismatch(format!(
                    "cross-section group {} outside 1..={}",
                    group, n
                ))));
            }
            values[group - 1] = value;
        }

        debug!("{:>4} | {}", header.mtd, header.title);
        Ok(Some(CrossSectionSection {
            title: header.title,
            mtd: header.mtd,
            values,
        }))
    }

    fn read_triplets(&mut self, n: usize) -> Result<RecoilMatrix> {
        let mut matrix = RecoilMatrix::zeros(n, n);
        loop {
            let triplet = match self.cursor.peek_line()? {
                None => break,
                Some(line) if line.contains("matrix") || line.contains("section") => break,
                Some(line) if line.trim().is_empty() => None,
                Some(line) => match parse_triplet(line) {
                    Some(triplet) => Some(triplet),
                    None => break,
                },
            };
            self.cursor.next_line()?;
            let Some((row, col, value)) = triplet else {
                continue;
            };
            if row == 0 || col == 0 {
                return Err(self.cursor.format_error("matrix indices are 1-based"));
            }
            matrix
                .push(row - 1, col - 1, value)
                .map_err(|e| self.matrix_error(e))?;
        }
        Ok(matrix)
    }

    fn parse_header(&self, line: &str) -> Result<SectionHeader> {
        let title = line
            .get(..TITLE_END.min(line.len()))
            .ok_or_else(|| self.cursor.format_error("section title is not ASCII"))?
            .trim()
            .to_string();
        let tag = line
            .get(TITLE_END..TAG_END)
            .ok_or_else(|| self.cursor.format_error("section header has no channel tag"))?;
        let mtd: i32 = self.cursor.parse_int(tag)?;
        let fields = line
            .get(FIELDS_START..)
            .unwrap_or("")
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Ok(SectionHeader { title, mtd, fields })
    }

    fn field<T: std::str::FromStr>(&self, header: &SectionHeader, index: usize) -> Result<T> {
        let token = header.fields.get(index).ok_or_else(|| {
            self.cursor
                .format_error(format!("section header has no field {}", index))
        })?;
        self.cursor.parse_int(token)
    }

    fn skip_blank_lines(&mut self) -> Result<()> {
        while let Some(line) = self.cursor.peek_line()? {
            if !line.trim().is_empty() {
                break;
            }
            self.cursor.next_line()?;
        }
        Ok(())
    }

    fn matrix_error(&self, source: RecoilError) -> InputError {
        InputError::Matrix {
            context: format!("{}:{}", self.cursor.source(), self.cursor.current_line()),
            source,
        }
    }
}

fn parse_triplet(line: &str) -> Option<(usize, usize, f64)> {
    let mut fields = line.split_whitespace();
    let row = fields.next()?.parse().ok()?;
    let col = fields.next()?.parse().ok()?;
    let value = fields.next()?.replace(['D', 'd'], "E").parse().ok()?;
    Some((row, col, value))
}
