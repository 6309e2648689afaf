// ─────────────────────────────────────────────────────────────────────
// RingGeom — Driscoll-Healy Ring Geometry
// ─────────────────────────────────────────────────────────────────────
//! Equiangular rings from pole to pole, θ_m = π·m/(nrings - 1), with
//! Keiner-Potts weights. `nrings` must be odd.
//!
//! The polar rings are pulled in to 1e-15 rad from the poles because
//! the downstream Legendre recursions are singular at exactly 0 and π.

use std::f64::consts::PI;

use ringgeom_quad::keiner_potts_weights;
use ringgeom_types::config::{check_driscoll_healy, check_phi0};
use ringgeom_types::{GeomResult, GridGeometry, GridKind, RingDescriptor, RingLayout};

use crate::assembler::GridBuilder;

/// Smallest distance of any ring from a pole (rad).
pub const POLE_CLEARANCE: f64 = 1e-15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriscollHealyGrid {
    pub nrings: usize,
    pub ppring: usize,
    pub phi0: f64,
    pub stride_lon: i64,
    pub stride_lat: i64,
}

impl DriscollHealyGrid {
    pub fn new(nrings: usize, ppring: usize, phi0: f64, stride_lon: i64, stride_lat: i64) -> Self {
        Self {
            nrings,
            ppring,
            phi0,
            stride_lon,
            stride_lat,
        }
    }
}

impl GridBuilder for DriscollHealyGrid {
    fn layout(&self) -> GeomResult<RingLayout> {
        check_driscoll_healy(self.nrings, self.ppring)?;
        check_phi0(self.phi0)?;
        let masses = keiner_potts_weights(self.nrings)?;
        let spacing = (self.nrings - 1) as f64;

        let rings = masses
            .iter()
            .enumerate()
            .map(|(m, &mass)| RingDescriptor {
                theta: (PI * m as f64 / spacing).clamp(POLE_CLEARANCE, PI - POLE_CLEARANCE),
                nphi: self.ppring,
                phi0: self.phi0,
                offset: m as i64 * self.stride_lat,
                stride: self.stride_lon,
                weight: mass / self.ppring as f64,
            })
            .collect();

        Ok(RingLayout::new(GridKind::DriscollHealy, rings))
    }
}

pub fn make_driscoll_healy_geometry(
    nrings: usize,
    ppring: usize,
    phi0: f64,
    stride_lon: i64,
    stride_lat: i64,
) -> GeomResult<GridGeometry> {
    DriscollHealyGrid::new(nrings, ppring, phi0, stride_lon, stride_lat).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_rings_rejected() {
        let err = make_driscoll_healy_geometry(6, 8, 0.0, 1, 8).unwrap_err();
        assert!(err.is_config(), "{err}");
    }

    #[test]
    fn test_single_ring_rejected() {
        assert!(make_driscoll_healy_geometry(1, 8, 0.0, 1, 8).unwrap_err().is_config());
    }

    #[test]
    fn test_five_ring_theta() {
        let g = make_driscoll_healy_geometry(5, 8, 0.0, 1, 8).unwrap();
        let theta = g.thetas();
        for m in 1..theta.len() {
            assert!(theta[m] > theta[m - 1], "theta not increasing at {m}");
        }
        assert!(theta[0] >= POLE_CLEARANCE && theta[0] < 1e-14);
        assert!(theta[4] <= PI - POLE_CLEARANCE && theta[4] > PI - 1e-14);
        for m in 0..5 {
            assert!(
                (theta[m] + theta[4 - m] - PI).abs() < 1e-14,
                "theta[{m}] not mirrored"
            );
        }
        assert!((theta[2] - PI / 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_weights_spread_over_ring() {
        let g = make_driscoll_healy_geometry(5, 8, 0.0, 1, 8).unwrap();
        let expected_mass = [
            2.0 * PI / 15.0,
            16.0 * PI / 15.0,
            8.0 * PI / 5.0,
            16.0 * PI / 15.0,
            2.0 * PI / 15.0,
        ];
        for (m, r) in g.rings().iter().enumerate() {
            assert!(
                (r.weight * 8.0 - expected_mass[m]).abs() < 1e-13,
                "ring {m}: weight {}",
                r.weight
            );
        }
        assert!((g.total_weight() - 4.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_integrates_band_limited_field() {
        // ∫ sin²θ cos²θ dΩ = 8π/15
        let g = make_driscoll_healy_geometry(17, 34, 0.0, 1, 34).unwrap();
        let got = g.integrate(|theta, _| (theta.sin() * theta.cos()).powi(2));
        assert!((got - 8.0 * PI / 15.0).abs() < 1e-12, "got {got}");
    }

    #[test]
    fn test_layout_fields() {
        let g = make_driscoll_healy_geometry(3, 5, 0.1, 3, 15).unwrap();
        assert_eq!(g.offsets(), vec![0, 15, 30]);
        assert_eq!(g.strides(), vec![3, 3, 3]);
        assert_eq!(g.nphis(), vec![5, 5, 5]);
        assert_eq!(g.phi0s(), vec![0.1, 0.1, 0.1]);
    }
}
