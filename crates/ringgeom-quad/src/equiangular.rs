// ─────────────────────────────────────────────────────────────────────
// RingGeom — Equiangular (ECP) Ring Weights
// ─────────────────────────────────────────────────────────────────────
//! Closed-form Fourier-series weights for `2·bw` equidistant rings at
//! θ_j = (2j + 1)·π / (4bw):
//!
//!   w_j = (2/bw) · sin(θ_j) · Σ_{k<bw} sin((2k + 1)·θ_j) / (2k + 1)
//!
//! Σ_j w_j f(θ_j) reproduces ∫_0^π f(θ) sin θ dθ for band-limited f.

use std::f64::consts::PI;

/// Weights for an equidistant cylindrical grid of half-bandwidth `bw`.
///
/// Returns `2·bw` entries, north to south. `bw = 0` yields no weights.
pub fn ecp_weights(bw: usize) -> Vec<f64> {
    let fudge = PI / (4 * bw) as f64;
    (0..2 * bw)
        .map(|j| {
            let a = (2 * j + 1) as f64;
            let series: f64 = (0..bw)
                .map(|k| {
                    let b = (2 * k + 1) as f64;
                    (a * b * fudge).sin() / b
                })
                .sum();
            series * (a * fudge).sin() * 2.0 / bw as f64
        })
        .collect()
}
