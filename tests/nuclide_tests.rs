/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use gpka_rs::nuclide::{daughter_of, NuclideError, NuclideIdentity, NuclideSpec};
use rstest::rstest;

#[rstest]
#[case::symbol_first("U235")]
#[case::symbol_hyphen("U-235")]
#[case::mass_first("235U")]
#[case::mass_hyphen("235-U")]
#[case::lowercase("u235")]
#[case::zaid("92235")]
fn test_text_identifiers_resolve(#[case] text: &str) {
    let spec = NuclideSpec::Text(text.to_string());
    assert_eq!(spec.resolve().unwrap(), NuclideIdentity::new(92, 235).unwrap());
}

#[rstest]
#[case(r#""Fe56""#)]
#[case("26056")]
#[case("[26, 56]")]
#[case(r#"{"Z": 26, "A": 56}"#)]
fn test_json_identifier_shapes(#[case] json: &str) {
    let spec: NuclideSpec = serde_json::from_str(json).unwrap();
    let fe56 = spec.resolve().unwrap();
    assert_eq!(fe56.name(), "Fe-56");
    assert_eq!(fe56.element(), "Fe");
    assert_eq!(fe56.zaid(), 26056);
}

#[rstest]
#[case("Xx56")]
#[case("Fe")]
#[case("Fe-56-2")]
#[case("")]
fn test_invalid_identifiers(#[case] text: &str) {
    assert!(matches!(
        NuclideSpec::Text(text.to_string()).resolve(),
        Err(NuclideError::InvalidIdentifier(_))
    ));
}

#[rstest]
#[case("(n,el) recoil matrix", 2, (26, 56))]
#[case("(n,2n) recoil matrix", 16, (26, 55))]
#[case("(n,g) recoil matrix", 102, (26, 57))]
#[case("(n,p) recoil matrix", 103, (25, 56))]
#[case("(n,a) recoil matrix", 107, (24, 53))]
#[case("(n,a) alpha matrix", 107, (2, 4))]
#[case("(n,p) proton matrix", 103, (1, 1))]
fn test_daughters_of_fe56(#[case] title: &str, #[case] mtd: i32, #[case] expected: (u32, u32)) {
    let parent = NuclideIdentity::new(26, 56).unwrap();
    let daughter = daughter_of(title, mtd, &parent).unwrap();
    assert_eq!((daughter.z, daughter.a), expected);
}

#[test]
fn test_fission_has_no_daughter() {
    let parent = NuclideIdentity::new(92, 235).unwrap();
    assert!(matches!(
        daughter_of("(n,f) recoil matrix", 18, &parent),
        Err(NuclideError::UnknownDaughter { .. })
    ));
}
