//! Snapshot tests: every conversion direction against the fixture.

use std::sync::OnceLock;

use hsluv::{Hpluv, Hsluv};

use crate::TOLERANCE;
use crate::snapshot::{self, DIRECTIONS, Direction, Snapshot};

fn fixture() -> &'static Snapshot {
    static SNAPSHOT: OnceLock<Snapshot> = OnceLock::new();
    SNAPSHOT.get_or_init(|| {
        crate::init_tracing();
        snapshot::load_default().expect("snapshot fixture should load")
    })
}

fn direction(name: &str) -> &'static Direction {
    DIRECTIONS
        .iter()
        .find(|d| d.name == name)
        .unwrap_or_else(|| panic!("unknown direction {name}"))
}

fn assert_direction(name: &str) {
    let snapshot = fixture();
    let mismatches = snapshot::check(snapshot, direction(name), TOLERANCE);
    if let Some(first) = mismatches.first() {
        panic!(
            "{name}: {} of {} samples differ, first {} expected {:?} got {:?} (diff {:e})",
            mismatches.len(),
            snapshot.len(),
            first.key,
            first.expected,
            first.actual,
            first.diff(),
        );
    }
}

#[test]
fn test_fixture_covers_cube() {
    let snapshot = fixture();
    assert_eq!(snapshot.len(), 4096);
    assert!(snapshot.contains_key("#000000"));
    assert!(snapshot.contains_key("#ffffff"));
    assert!(snapshot.keys().all(|k| snapshot::parse_hex(k).is_ok()));
}

/// sRGB primaries and white in XYZ, from the four-digit matrix of
/// IEC 61966-2-1.
const IEC_XYZ: &[(&str, [f64; 3])] = &[
    ("#ff0000", [0.4124, 0.2126, 0.0193]),
    ("#00ff00", [0.3576, 0.7152, 0.1192]),
    ("#0000ff", [0.1805, 0.0722, 0.9505]),
    ("#ffffff", [0.9505, 1.0000, 1.0890]),
];

/// CIE 1976 L*u*v* of the sRGB primaries (D65) as commonly tabulated to
/// two decimals.
const TABULATED_LUV: &[(&str, [f64; 3])] = &[
    ("#ff0000", [53.24, 175.01, 37.76]),
    ("#00ff00", [87.73, -83.07, 107.41]),
    ("#0000ff", [32.30, -9.40, -130.35]),
    ("#000000", [0.0, 0.0, 0.0]),
];

#[test]
fn test_fixture_matches_published_xyz() {
    let snapshot = fixture();
    for &(key, expected) in IEC_XYZ {
        let diff = snapshot::max_abs_diff(snapshot[key].xyz, expected);
        assert!(diff <= 1e-4, "{key}: xyz {:?} vs {:?}", snapshot[key].xyz, expected);
    }
}

#[test]
fn test_fixture_matches_tabulated_luv() {
    let snapshot = fixture();
    for &(key, expected) in TABULATED_LUV {
        let diff = snapshot::max_abs_diff(snapshot[key].luv, expected);
        assert!(diff <= 1e-2, "{key}: luv {:?} vs {:?}", snapshot[key].luv, expected);
    }
}

#[test]
fn test_fixture_extremes() {
    let snapshot = fixture();

    let black = &snapshot["#000000"];
    assert_eq!(black.hsluv[1..], [0.0, 0.0]);
    assert_eq!(black.hpluv[1..], [0.0, 0.0]);

    let white = &snapshot["#ffffff"];
    assert_eq!(white.hsluv[1..], [0.0, 100.0]);
    assert_eq!(white.hpluv[1..], [0.0, 100.0]);

    // Primaries sit on the gamut edge
    for key in ["#ff0000", "#00ff00", "#0000ff"] {
        assert!((snapshot[key].hsluv[1] - 100.0).abs() < 1e-9, "{key}");
    }
}

#[test]
fn test_rgb_to_xyz() {
    assert_direction("rgb_to_xyz");
}

#[test]
fn test_xyz_to_rgb() {
    assert_direction("xyz_to_rgb");
}

#[test]
fn test_xyz_to_luv() {
    assert_direction("xyz_to_luv");
}

#[test]
fn test_luv_to_xyz() {
    assert_direction("luv_to_xyz");
}

#[test]
fn test_luv_to_lch() {
    assert_direction("luv_to_lch");
}

#[test]
fn test_lch_to_luv() {
    assert_direction("lch_to_luv");
}

#[test]
fn test_lch_to_hsluv() {
    assert_direction("lch_to_hsluv");
}

#[test]
fn test_hsluv_to_lch() {
    assert_direction("hsluv_to_lch");
}

#[test]
fn test_lch_to_hpluv() {
    assert_direction("lch_to_hpluv");
}

#[test]
fn test_hpluv_to_lch() {
    assert_direction("hpluv_to_lch");
}

#[test]
fn test_rgb_to_hsluv() {
    assert_direction("rgb_to_hsluv");
}

#[test]
fn test_hsluv_to_rgb() {
    assert_direction("hsluv_to_rgb");
}

#[test]
fn test_rgb_to_hpluv() {
    assert_direction("rgb_to_hpluv");
}

#[test]
fn test_hpluv_to_rgb() {
    assert_direction("hpluv_to_rgb");
}

#[test]
fn test_records_match_fixture() {
    for (key, sample) in fixture() {
        let rgb8 = snapshot::parse_hex(key).unwrap();

        let hsl = Hsluv::from_rgb8(rgb8);
        assert!(snapshot::max_abs_diff(hsl.to_array(), sample.hsluv) <= TOLERANCE, "{key}");
        assert_eq!(Hsluv::from(sample.hsluv).to_rgb8().unwrap(), rgb8, "{key}");

        let hpl = Hpluv::from_rgb8(rgb8);
        assert!(snapshot::max_abs_diff(hpl.to_array(), sample.hpluv) <= TOLERANCE, "{key}");
        assert_eq!(Hpluv::from(sample.hpluv).to_rgb8().unwrap(), rgb8, "{key}");
    }
}
