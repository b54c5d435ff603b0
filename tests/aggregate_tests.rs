/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use gpka_rs::aggregate::{AggregationContext, Merge};
use gpka_rs::nuclide::NuclideIdentity;
use gpka_rs::recoil::{RecoilChannel, RecoilMatrix};
use gpka_rs::spectrum::EnergyGroupStructure;
use ndarray::array;

fn groups() -> EnergyGroupStructure {
    EnergyGroupStructure::new(vec![0.1, 1.0, 10.0]).unwrap()
}

fn collapsed(title: &str, mtd: i32, daughter: NuclideIdentity) -> RecoilChannel {
    let matrix = RecoilMatrix::from_triplets(2, 2, [(0, 0, 1.0), (1, 1, 1.0)]).unwrap();
    let channel = RecoilChannel::new(title, mtd, daughter, matrix);
    channel.collapse(&array![2.0, 3.0]).unwrap();
    channel
}

#[test]
fn test_light_particle_codes_excluded_from_existing_entries() {
    let fe56 = NuclideIdentity::new(26, 56).unwrap();
    let mut totals = AggregationContext::new(40.0);

    let elastic = collapsed("(n,el) recoil matrix", 2, fe56);
    let first = totals.contribute(&elastic, &groups(), 1.0).unwrap();
    assert_eq!(first.nuclide, Merge::Created);

    let alpha_code = collapsed("(n,a) recoil matrix", 820, fe56);
    let second = totals.contribute(&alpha_code, &groups(), 1.0).unwrap();
    assert_eq!(second.nuclide, Merge::Excluded);
    assert_eq!(second.element, Merge::Excluded);
    assert_eq!(
        totals.nuclide(&fe56).unwrap().pka_spectrum().to_vec(),
        vec![2.0, 3.0]
    );

    let alpha = collapsed("(n,a) alpha matrix", 820, NuclideIdentity::helium4());
    let third = totals.contribute(&alpha, &groups(), 1.0).unwrap();
    assert_eq!(third.nuclide, Merge::Created);
    let fourth = totals.contribute(&alpha, &groups(), 1.0).unwrap();
    assert_eq!(fourth.nuclide, Merge::Merged);
    assert_eq!(
        totals.element("He").unwrap().pka_spectrum().to_vec(),
        vec![4.0, 6.0]
    );
}

#[test]
fn test_first_contribution_always_accepted() {
    let fe56 = NuclideIdentity::new(26, 56).unwrap();
    let mut totals = AggregationContext::new(40.0);
    let proton_code = collapsed("(n,p) recoil matrix", 620, fe56);
    let result = totals.contribute(&proton_code, &groups(), 0.5).unwrap();
    assert_eq!(result.nuclide, Merge::Created);
    assert_eq!(result.element, Merge::Created);
    assert_eq!(
        totals.nuclide_by_name("Fe-56").unwrap().pka_spectrum().to_vec(),
        vec![1.0, 1.5]
    );
}

#[test]
fn test_isotopes_share_an_element_total() {
    let fe54 = NuclideIdentity::new(26, 54).unwrap();
    let fe56 = NuclideIdentity::new(26, 56).unwrap();
    let mut totals = AggregationContext::new(40.0);
    totals
        .contribute(&collapsed("(n,el) recoil matrix", 2, fe54), &groups(), 0.25)
        .unwrap();
    totals
        .contribute(&collapsed("(n,el) recoil matrix", 2, fe56), &groups(), 0.75)
        .unwrap();
    totals.finalize();

    assert_eq!(totals.nuclides().count(), 2);
    let iron = totals.element("Fe").unwrap();
    assert_eq!(iron.pka_spectrum().to_vec(), vec![2.0, 3.0]);
    assert!(iron.summary().is_some());
}
