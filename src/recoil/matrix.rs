/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Sparse group-to-group recoil matrix
//!
//! Recoil matrices are stored in coordinate form with rows indexing the
//! incident neutron group and columns the outgoing recoil group. The files
//! they come from list only the nonzero entries, and most of an N×N matrix
//! is empty, so a dense representation is only built on request.

use ndarray::{Array1, Array2};

use super::errors::{RecoilError, Result};

/// One nonzero entry of a recoil matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixEntry {
    /// Incident group index (0-based)
    pub row: usize,
    /// Outgoing group index (0-based)
    pub col: usize,
    /// Reaction rate weight
    pub value: f64,
}

/// Sparse incident × outgoing recoil matrix
#[derive(Debug, Clone, PartialEq)]
pub struct RecoilMatrix {
    rows: usize,
    cols: usize,
    entries: Vec<MatrixEntry>,
}

impl RecoilMatrix {
    /// Create an empty matrix of the given shape
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: Vec::new(),
        }
    }

    /// Build a matrix from 0-based (row, col, value) triplets
    ///
    /// Entries are kept in the order given. Repeated coordinates are summed
    /// when the matrix is applied.
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of incident groups
    /// * `cols` - Number of outgoing groups
    /// * `triplets` - Nonzero entries
    ///
    /// # Returns
    ///
    /// The matrix, or an error if an index falls outside the shape or a value
    /// is negative or not finite
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut matrix = Self::zeros(rows, cols);
        for (row, col, value) in triplets {
            matrix.push(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Build a sparse matrix from a dense array, dropping zeros
    pub fn from_dense(dense: &Array2<f64>) -> Result<Self> {
        let (rows, cols) = dense.dim();
        let triplets = dense
            .indexed_iter()
            .filter(|(_, value)| **value != 0.0)
            .map(|((row, col), &value)| (row, col, value));
        Self::from_triplets(rows, cols, triplets)
    }

    /// Append one entry
    pub fn push(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(RecoilError::ShapeMismatch(format!(
                "entry ({}, {}) lies outside a {}x{} matrix",
                row, col, self.rows, self.cols
            )));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(RecoilError::InvalidEntry { row, col, value });
        }
        self.entries.push(MatrixEntry { row, col, value });
        Ok(())
    }

    /// Number of incident groups
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of outgoing groups
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True for an N×N matrix
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Stored entries in insertion order
    pub fn entries(&self) -> &[MatrixEntry] {
        &self.entries
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            entries: self
                .entries
                .iter()
                .map(|e| MatrixEntry {
                    row: e.col,
                    col: e.row,
                    value: e.value,
                })
                .collect(),
        }
    }

    /// Dense copy, with repeated coordinates summed
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::zeros((self.rows, self.cols));
        for e in &self.entries {
            dense[[e.row, e.col]] += e.value;
        }
        dense
    }

    /// Sum of every column
    pub fn column_sums(&self) -> Array1<f64> {
        let mut sums = Array1::zeros(self.cols);
        for e in &self.entries {
            sums[e.col] += e.value;
        }
        sums
    }

    /// Collapse the matrix against a flux vector: `S = Mᵗ · F`
    ///
    /// The flux must have one value per incident group. Entries are visited in
    /// storage order, so repeated calls give bit-identical results.
    pub fn collapse(&self, flux: &Array1<f64>) -> Result<Array1<f64>> {
        if flux.len() != self.rows {
            return Err(RecoilError::ShapeMismatch(format!(
                "matrix has {} incident groups but the flux has {} values",
                self.rows,
                flux.len()
            )));
        }
        let mut spectrum = Array1::zeros(self.cols);
        for e in &self.entries {
            spectrum[e.col] += e.value * flux[e.row];
        }
        Ok(spectrum)
    }
}
