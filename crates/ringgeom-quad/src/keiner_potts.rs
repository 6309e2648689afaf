// ─────────────────────────────────────────────────────────────────────
// RingGeom — Keiner-Potts Ring Weights
// ─────────────────────────────────────────────────────────────────────
//! Cosine-series weights for an odd number of equiangular rings
//! θ_m = π·m / (nrings - 1), poles included (Keiner & Potts, "Fast
//! evaluation of quadrature formulae on the sphere", 2000).
//!
//! With lmax = (nrings - 1) / 2:
//!
//!   W_m = 4π·ε(m, 2·lmax)/lmax · Σ_{l=0}^{lmax} ε(l, lmax)/(1 - 4l²) · cos(π·m·l/lmax)
//!
//! `W_m` is the quadrature mass of the whole ring; callers spread it over
//! the ring's pixels.

use std::f64::consts::PI;

use ringgeom_types::{GeomError, GeomResult};

/// Trapezoid endpoint factor: ½ at either end of [0, J], 1 inside, 0 outside.
pub fn trapezoid_eps(j: i64, big_j: i64) -> f64 {
    if j == 0 || j == big_j {
        0.5
    } else if j > 0 && j < big_j {
        1.0
    } else {
        0.0
    }
}

/// Per-ring quadrature masses for `nrings` equiangular rings.
///
/// `nrings` must be odd and at least 3.
pub fn keiner_potts_weights(nrings: usize) -> GeomResult<Vec<f64>> {
    if nrings % 2 != 1 || nrings < 3 {
        return Err(GeomError::Config(format!(
            "Keiner-Potts weights need an odd ring count >= 3, got {nrings}"
        )));
    }
    let lmax = ((nrings - 1) / 2) as i64;
    let lmax_f = lmax as f64;

    let weights = (0..nrings as i64)
        .map(|m| {
            let prefac = 4.0 * PI * trapezoid_eps(m, 2 * lmax) / lmax_f;
            let mut series = 0.0;
            for l in 0..=lmax {
                let lf = l as f64;
                series += trapezoid_eps(l, lmax) / (1.0 - 4.0 * lf * lf)
                    * ((PI * m as f64 * lf) / lmax_f).cos();
            }
            prefac * series
        })
        .collect();
    Ok(weights)
}
