//! Prints the largest deviation of every conversion from the snapshot.
//!
//! Usage: `snapshot_report [path/to/snapshot.json]`

use std::path::PathBuf;

use anyhow::Result;
use hsluv_tests::TOLERANCE;
use hsluv_tests::snapshot::{self, DIRECTIONS};
use tracing::{info, warn};

fn main() -> Result<()> {
    hsluv_tests::init_tracing();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(snapshot::fixture_path);
    let snapshot = snapshot::load(&path)?;

    println!("{} samples from {}", snapshot.len(), path.display());
    println!("{:<14} {:>12}  {}", "direction", "max diff", "worst sample");

    let mut failed = 0;
    for direction in DIRECTIONS {
        let Some(worst) = snapshot::worst(&snapshot, direction) else {
            continue;
        };
        let diff = worst.diff();
        println!("{:<14} {:>12.3e}  {}", direction.name, diff, worst.key);

        let mismatches = snapshot::check(&snapshot, direction, TOLERANCE);
        if mismatches.is_empty() {
            info!(direction = direction.name, diff, "Within tolerance");
        } else {
            failed += 1;
            warn!(
                direction = direction.name,
                mismatches = mismatches.len(),
                expected = ?worst.expected,
                actual = ?worst.actual,
                "Outside tolerance"
            );
        }
    }

    anyhow::ensure!(failed == 0, "{failed} directions outside tolerance {TOLERANCE:e}");
    Ok(())
}
