/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use approx::assert_relative_eq;
use gpka_rs::nuclide::IncidentParticle;
use gpka_rs::recoil::{synthesize_capture_matrix, CaptureKinematics, RecoilError, RecoilMatrix};
use gpka_rs::spectrum::EnergyGroupStructure;
use ndarray::array;

fn sample_matrix() -> RecoilMatrix {
    RecoilMatrix::from_triplets(
        3,
        3,
        [(0, 0, 0.5), (0, 1, 0.25), (1, 1, 2.0), (2, 0, 1.0), (2, 2, 0.125)],
    )
    .unwrap()
}

#[test]
fn test_collapse_is_linear_in_flux() {
    let matrix = sample_matrix();
    let f1 = array![1.0, 2.0, 3.0];
    let f2 = array![0.5, 0.0, 4.0];
    let combined = matrix.collapse(&(&f1 * 2.0 + &f2 * 3.0)).unwrap();
    let separate = matrix.collapse(&f1).unwrap() * 2.0 + matrix.collapse(&f2).unwrap() * 3.0;
    for (a, b) in combined.iter().zip(separate.iter()) {
        assert_relative_eq!(*a, *b, max_relative = 1e-12);
    }
}

#[test]
fn test_collapse_sums_incident_rows() {
    let spectrum = sample_matrix().collapse(&array![1.0, 2.0, 3.0]).unwrap();
    assert_relative_eq!(spectrum[0], 0.5 + 3.0, max_relative = 1e-12);
    assert_relative_eq!(spectrum[1], 0.25 + 4.0, max_relative = 1e-12);
    assert_relative_eq!(spectrum[2], 0.375, max_relative = 1e-12);
}

#[test]
fn test_collapse_rejects_wrong_flux_length() {
    assert!(matches!(
        sample_matrix().collapse(&array![1.0, 2.0]),
        Err(RecoilError::ShapeMismatch(_))
    ));
}

#[test]
fn test_negative_entries_rejected() {
    assert!(matches!(
        RecoilMatrix::from_triplets(2, 2, [(0, 0, -1.0)]),
        Err(RecoilError::InvalidEntry { .. })
    ));
}

#[test]
fn test_capture_matrix_conserves_cross_section() {
    let groups = EnergyGroupStructure::new(vec![1.0e-3, 1.0e-2, 0.1, 1.0, 10.0]).unwrap();
    let xs = array![1.0, 1.0, 2.0, 3.0];
    let kinematics =
        CaptureKinematics::new(IncidentParticle::Neutron.mass(), 55.934936, 56.935392).unwrap();
    let matrix = synthesize_capture_matrix(&groups, &xs, &kinematics).unwrap();
    assert_eq!(matrix.shape(), (4, 4));

    // entries are per-MeV densities over the outgoing groups
    let per_incident = matrix.to_dense().dot(&groups.widths());
    // recoils of the lowest group fall below the grid
    assert_eq!(per_incident[0], 0.0);
    assert!(per_incident[1] > 0.0 && per_incident[1] < 1.0);
    // the two upper groups recoil entirely inside the grid
    assert_relative_eq!(per_incident[2], 2.0, max_relative = 1e-10);
    assert_relative_eq!(per_incident[3], 3.0, max_relative = 1e-10);
}
