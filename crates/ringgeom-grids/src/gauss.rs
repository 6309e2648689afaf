// ─────────────────────────────────────────────────────────────────────
// RingGeom — Gauss-Legendre Ring Geometry
// ─────────────────────────────────────────────────────────────────────
//! Rings at the Gauss-Legendre nodes: θ_m = acos(-x_m), so ring 0 is the
//! northernmost. Ring weights are the Legendre weights spread evenly
//! over `nphi` longitudes.

use std::f64::consts::PI;

use ringgeom_quad::gauss_legendre;
use ringgeom_types::config::check_gauss;
use ringgeom_types::{GeomResult, GridGeometry, GridKind, RingDescriptor, RingLayout};

use crate::assembler::GridBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaussGrid {
    pub nrings: usize,
    pub nphi: usize,
    pub stride_lon: i64,
    pub stride_lat: i64,
}

impl GaussGrid {
    pub fn new(nrings: usize, nphi: usize, stride_lon: i64, stride_lat: i64) -> Self {
        Self {
            nrings,
            nphi,
            stride_lon,
            stride_lat,
        }
    }
}

impl GridBuilder for GaussGrid {
    fn layout(&self) -> GeomResult<RingLayout> {
        check_gauss(self.nrings, self.nphi)?;
        let rule = gauss_legendre(self.nrings)?;
        let lon_mass = 2.0 * PI / self.nphi as f64;

        let rings = rule
            .x
            .iter()
            .zip(&rule.w)
            .enumerate()
            .map(|(m, (&x, &w))| RingDescriptor {
                theta: (-x).acos(),
                nphi: self.nphi,
                phi0: 0.0,
                offset: m as i64 * self.stride_lat,
                stride: self.stride_lon,
                weight: w * lon_mass,
            })
            .collect();

        Ok(RingLayout::new(GridKind::Gauss, rings))
    }
}

pub fn make_gauss_geometry(
    nrings: usize,
    nphi: usize,
    stride_lon: i64,
    stride_lat: i64,
) -> GeomResult<GridGeometry> {
    GaussGrid::new(nrings, nphi, stride_lon, stride_lat).build()
}
