/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gpka_rs::recoil::RecoilMatrix;
use gpka_rs::spectrum::{EnergyGroupStructure, FluxSpectrum, FluxUnit};
use ndarray::Array1;

fn log_grid(n: usize, min: f64, max: f64) -> EnergyGroupStructure {
    let ratio = (max / min).powf(1.0 / n as f64);
    let bounds = (0..=n).map(|i| min * ratio.powi(i as i32)).collect();
    EnergyGroupStructure::new(bounds).unwrap()
}

fn collapse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Collapse");

    for n in [100, 660] {
        // banded down-scattering matrix
        let triplets = (0..n).flat_map(|row| {
            (row.saturating_sub(20)..=row).map(move |col| (row, col, 1.0 / (1 + row - col) as f64))
        });
        let matrix = RecoilMatrix::from_triplets(n, n, triplets).unwrap();
        let flux = Array1::from_elem(n, 1.0e12);

        group.bench_function(format!("banded_{}", n), |b| {
            b.iter(|| black_box(matrix.collapse(black_box(&flux)).unwrap()))
        });
    }

    group.finish();
}

fn regrid_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Regrid");

    let source = log_grid(709, 1.0e-11, 20.0);
    let values = Array1::from_shape_fn(709, |i| 1.0 + (i % 17) as f64);
    let flux = FluxSpectrum::new(source, values, FluxUnit::PerGroup).unwrap();
    let target = log_grid(660, 1.0e-9, 15.0);

    group.bench_function("709_to_660", |b| {
        b.iter(|| black_box(flux.regrid(black_box(&target)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, collapse_benchmark, regrid_benchmark);
criterion_main!(benches);
