//! Input generators shared by the HSLuv benchmarks.
//!
//! Run with: `cargo bench --package hsluv-bench`

/// `n` sRGB colors spread along a diagonal of the cube.
pub fn rgb_samples(n: usize) -> Vec<[f64; 3]> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            [t, (t * 7.0).fract(), (t * 13.0).fract()]
        })
        .collect()
}

/// `n` HSLuv colors covering every hue at mid saturation and lightness.
pub fn hsluv_samples(n: usize) -> Vec<[f64; 3]> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            [t * 360.0, 20.0 + t * 60.0, 10.0 + t * 80.0]
        })
        .collect()
}
