//! Snapshot regression tests for the HSLuv pipeline.
//!
//! `fixtures/snapshot.json` maps every `#rrggbb` color of the sRGB cube
//! stepped by `0x11` (4096 colors) to its value in every intermediate space.
//! The tests in `golden` push each sample through every conversion
//! direction and compare against the fixture within [`TOLERANCE`].
//!
//! # Regenerating
//!
//! ```bash
//! python scripts/generate_snapshot.py > fixtures/snapshot.json
//! ```
//!
//! The script checks the published reference vectors before writing.
//!
//! # Running
//!
//! ```bash
//! cargo test --package hsluv-tests
//! RUST_LOG=hsluv_tests=debug cargo run --package hsluv-tests --bin snapshot_report
//! ```

pub mod snapshot;

#[cfg(test)]
mod golden;

/// Maximum absolute difference allowed per component.
pub const TOLERANCE: f64 = 1e-9;

/// Installs a `RUST_LOG` controlled subscriber. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
