// ─────────────────────────────────────────────────────────────────────
// RingGeom — Equidistant Cylindrical Ring Geometry
// ─────────────────────────────────────────────────────────────────────
//! ECP rings at θ_m = (m + ½)·π/nrings. The half-ring shift keeps both
//! poles off the grid. `nrings` must be even.

use std::f64::consts::PI;

use ringgeom_quad::ecp_weights;
use ringgeom_types::config::{check_ecp, check_phi0};
use ringgeom_types::{GeomResult, GridGeometry, GridKind, RingDescriptor, RingLayout};

use crate::assembler::GridBuilder;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcpGrid {
    pub nrings: usize,
    pub nphi: usize,
    pub phi0: f64,
    pub stride_lon: i64,
    pub stride_lat: i64,
}

impl EcpGrid {
    pub fn new(nrings: usize, nphi: usize, phi0: f64, stride_lon: i64, stride_lat: i64) -> Self {
        Self {
            nrings,
            nphi,
            phi0,
            stride_lon,
            stride_lat,
        }
    }
}

impl GridBuilder for EcpGrid {
    fn layout(&self) -> GeomResult<RingLayout> {
        check_ecp(self.nrings, self.nphi)?;
        check_phi0(self.phi0)?;
        let weights = ecp_weights(self.nrings / 2);
        let lon_mass = 2.0 * PI / self.nphi as f64;

        let rings = weights
            .iter()
            .enumerate()
            .map(|(m, &w)| RingDescriptor {
                theta: (m as f64 + 0.5) * PI / self.nrings as f64,
                nphi: self.nphi,
                phi0: self.phi0,
                offset: m as i64 * self.stride_lat,
                stride: self.stride_lon,
                weight: w * lon_mass,
            })
            .collect();

        Ok(RingLayout::new(GridKind::Ecp, rings))
    }
}

pub fn make_ecp_geometry(
    nrings: usize,
    nphi: usize,
    phi0: f64,
    stride_lon: i64,
    stride_lat: i64,
) -> GeomResult<GridGeometry> {
    EcpGrid::new(nrings, nphi, phi0, stride_lon, stride_lat).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_rings_rejected() {
        let err = make_ecp_geometry(5, 10, 0.0, 1, 10).unwrap_err();
        assert!(err.is_config(), "{err}");
    }

    #[test]
    fn test_zero_counts_rejected() {
        assert!(make_ecp_geometry(0, 10, 0.0, 1, 10).is_err());
        assert!(make_ecp_geometry(4, 0, 0.0, 1, 10).is_err());
    }

    #[test]
    fn test_theta_avoids_poles() {
        let g = make_ecp_geometry(8, 16, 0.0, 1, 16).unwrap();
        let rings = g.rings();
        assert!((rings[0].theta - PI / 16.0).abs() < 1e-15);
        assert!((rings[7].theta - 15.0 * PI / 16.0).abs() < 1e-15);
        for m in 1..rings.len() {
            let step = rings[m].theta - rings[m - 1].theta;
            assert!((step - PI / 8.0).abs() < 1e-14, "ring {m} step {step}");
        }
    }

    #[test]
    fn test_total_weight_is_sphere_area() {
        for nrings in [2usize, 4, 8, 16, 64] {
            let g = make_ecp_geometry(nrings, 2 * nrings, 0.0, 1, 2 * nrings as i64).unwrap();
            assert!(
                (g.total_weight() - 4.0 * PI).abs() < 1e-9,
                "nrings={nrings}: Σ nphi·w = {}",
                g.total_weight()
            );
        }
    }

    #[test]
    fn test_phi0_and_layout_propagated() {
        let g = make_ecp_geometry(4, 6, 0.3, 2, 12).unwrap();
        assert!(g.rings().iter().all(|r| r.phi0 == 0.3 && r.nphi == 6 && r.stride == 2));
        assert_eq!(g.offsets(), vec![0, 12, 24, 36]);
        assert!((g.pixel_phi(0, 3) - (0.3 + PI)).abs() < 1e-15);
    }

    #[test]
    fn test_integrates_cos_squared() {
        let g = make_ecp_geometry(16, 32, 0.0, 1, 32).unwrap();
        let got = g.integrate(|theta, _| theta.cos().powi(2));
        assert!((got - 4.0 * PI / 3.0).abs() < 1e-12, "got {got}");
    }

    #[test]
    fn test_nonfinite_phi0_rejected() {
        assert!(make_ecp_geometry(4, 6, f64::NAN, 1, 6).unwrap_err().is_config());
    }
}
