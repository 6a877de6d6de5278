//! Snapshot fixture loading and comparison.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use serde::Deserialize;
use tracing::{debug, info};

/// One color in every space the pipeline passes through.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    /// sRGB in [0, 1]
    pub rgb: [f64; 3],
    /// CIE XYZ
    pub xyz: [f64; 3],
    /// CIE Luv
    pub luv: [f64; 3],
    /// LCh(uv)
    pub lch: [f64; 3],
    /// HSLuv
    pub hsluv: [f64; 3],
    /// HPLuv
    pub hpluv: [f64; 3],
}

/// Samples keyed by `#rrggbb`.
pub type Snapshot = BTreeMap<String, Sample>;

/// Path of the fixture shipped with this crate.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join("snapshot.json")
}

/// Loads and validates a snapshot file.
///
/// Every key must be a `#rrggbb` hex color whose channels match the
/// sample's `rgb` triple.
pub fn load(path: &Path) -> Result<Snapshot> {
    debug!(path = %path.display(), "Loading snapshot");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;

    for (key, sample) in &snapshot {
        let rgb = parse_hex(key)?;
        for (channel, expected) in rgb.into_iter().zip(sample.rgb) {
            ensure!(
                (channel as f64 / 255.0 - expected).abs() < 1e-12,
                "{key}: rgb {:?} does not match its key",
                sample.rgb
            );
        }
    }

    info!(samples = snapshot.len(), "Loaded snapshot");
    Ok(snapshot)
}

/// Loads the fixture shipped with this crate.
pub fn load_default() -> Result<Snapshot> {
    load(&fixture_path())
}

/// Parses `#rrggbb` into 8-bit channels.
pub fn parse_hex(key: &str) -> Result<[u8; 3]> {
    let Some(digits) = key.strip_prefix('#') else {
        bail!("{key}: missing '#'");
    };
    ensure!(
        digits.len() == 6 && digits.is_ascii(),
        "{key}: expected 6 hex digits"
    );

    let mut rgb = [0u8; 3];
    for (i, c) in rgb.iter_mut().enumerate() {
        let pair = &digits[i * 2..i * 2 + 2];
        *c = u8::from_str_radix(pair, 16).with_context(|| format!("{key}: bad digits {pair}"))?;
    }
    Ok(rgb)
}

/// Largest absolute per-component difference, NaN if any component is NaN.
pub fn max_abs_diff(a: [f64; 3], b: [f64; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, |worst: f64, d| if d > worst || d.is_nan() { d } else { worst })
}

/// One conversion checked against the fixture.
#[derive(Clone, Copy)]
pub struct Direction {
    /// Name of the conversion function.
    pub name: &'static str,
    /// Picks the input space from a sample.
    pub input: fn(&Sample) -> [f64; 3],
    /// Picks the expected output space from a sample.
    pub expected: fn(&Sample) -> [f64; 3],
    /// The conversion under test.
    pub convert: fn([f64; 3]) -> [f64; 3],
}

impl std::fmt::Debug for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

macro_rules! direction {
    ($convert:ident, $from:ident -> $to:ident) => {
        Direction {
            name: stringify!($convert),
            input: |s: &Sample| s.$from,
            expected: |s: &Sample| s.$to,
            convert: hsluv::$convert,
        }
    };
}

/// Every public conversion, in both directions.
pub const DIRECTIONS: &[Direction] = &[
    direction!(rgb_to_xyz, rgb -> xyz),
    direction!(xyz_to_rgb, xyz -> rgb),
    direction!(xyz_to_luv, xyz -> luv),
    direction!(luv_to_xyz, luv -> xyz),
    direction!(luv_to_lch, luv -> lch),
    direction!(lch_to_luv, lch -> luv),
    direction!(lch_to_hsluv, lch -> hsluv),
    direction!(hsluv_to_lch, hsluv -> lch),
    direction!(lch_to_hpluv, lch -> hpluv),
    direction!(hpluv_to_lch, hpluv -> lch),
    direction!(rgb_to_hsluv, rgb -> hsluv),
    direction!(hsluv_to_rgb, hsluv -> rgb),
    direction!(rgb_to_hpluv, rgb -> hpluv),
    direction!(hpluv_to_rgb, hpluv -> rgb),
];

/// A sample that a direction failed to reproduce.
#[derive(Debug, Clone)]
pub struct Mismatch {
    /// Fixture key.
    pub key: String,
    /// Direction that failed.
    pub direction: &'static str,
    /// Value from the fixture.
    pub expected: [f64; 3],
    /// Value computed by the pipeline.
    pub actual: [f64; 3],
}

impl Mismatch {
    /// Largest per-component difference.
    pub fn diff(&self) -> f64 {
        max_abs_diff(self.expected, self.actual)
    }
}

/// Runs one direction over the whole snapshot.
pub fn check(snapshot: &Snapshot, direction: &Direction, tolerance: f64) -> Vec<Mismatch> {
    let mismatches: Vec<Mismatch> = snapshot
        .iter()
        .filter_map(|(key, sample)| {
            let expected = (direction.expected)(sample);
            let actual = (direction.convert)((direction.input)(sample));
            // NaN fails the comparison and counts as a mismatch
            let within = max_abs_diff(expected, actual) <= tolerance;
            (!within).then(|| Mismatch {
                key: key.clone(),
                direction: direction.name,
                expected,
                actual,
            })
        })
        .collect();

    debug!(
        direction = direction.name,
        mismatches = mismatches.len(),
        "Checked direction"
    );
    mismatches
}

/// Largest difference a direction produces over the snapshot.
pub fn worst(snapshot: &Snapshot, direction: &Direction) -> Option<Mismatch> {
    snapshot
        .iter()
        .map(|(key, sample)| Mismatch {
            key: key.clone(),
            direction: direction.name,
            expected: (direction.expected)(sample),
            actual: (direction.convert)((direction.input)(sample)),
        })
        .max_by(|a, b| a.diff().total_cmp(&b.diff()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#c89614").unwrap(), [200, 150, 20]);
        assert_eq!(parse_hex("#FFFFFF").unwrap(), [255, 255, 255]);
        assert!(parse_hex("c89614").is_err());
        assert!(parse_hex("#c8961").is_err());
        assert!(parse_hex("#gg0000").is_err());
    }

    #[test]
    fn test_max_abs_diff() {
        assert_eq!(max_abs_diff([1.0, 2.0, 3.0], [1.5, 2.0, 1.0]), 2.0);
        assert!(max_abs_diff([f64::NAN, 0.0, 0.0], [0.0; 3]).is_nan());
        assert!(max_abs_diff([0.0, 0.0, f64::NAN], [0.0; 3]).is_nan());
    }

    #[test]
    fn test_directions_cover_every_conversion() {
        assert_eq!(DIRECTIONS.len(), 14);
        let mut names: Vec<_> = DIRECTIONS.iter().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 14);
    }
}
