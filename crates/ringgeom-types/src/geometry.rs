// ─────────────────────────────────────────────────────────────────────
// RingGeom — Validated Grid Geometry
// ─────────────────────────────────────────────────────────────────────
//! `GridGeometry` is the geometry handle produced by the default
//! assembler. Construction validates the ring contract once; after that
//! every ring is known to satisfy:
//!
//! - `theta` strictly inside (0, π)
//! - `nphi > 0`
//! - `weight` finite and non-negative
//! - optional longitude table of exactly `nrings × max(nphi)` finite entries

use std::f64::consts::{PI, TAU};

use crate::error::{GeomError, GeomResult};
use crate::ring::{GridKind, RingDescriptor, RingLayout};

#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    kind: GridKind,
    rings: Vec<RingDescriptor>,
    phi: Option<Vec<f64>>,
    max_nphi: usize,
}

impl GridGeometry {
    /// Validate a ring layout and take ownership of its arrays.
    pub fn from_layout(layout: RingLayout) -> GeomResult<Self> {
        if layout.rings.is_empty() {
            return Err(GeomError::Validation("geometry has no rings".to_string()));
        }
        for (m, r) in layout.rings.iter().enumerate() {
            if !(r.theta > 0.0 && r.theta < PI) {
                return Err(GeomError::Validation(format!(
                    "ring {m}: theta must be in (0, pi), got {}",
                    r.theta
                )));
            }
            if r.nphi == 0 {
                return Err(GeomError::Validation(format!("ring {m}: nphi must be > 0")));
            }
            if !r.phi0.is_finite() {
                return Err(GeomError::Validation(format!(
                    "ring {m}: phi0 must be finite, got {}",
                    r.phi0
                )));
            }
            if !r.weight.is_finite() || r.weight < 0.0 {
                return Err(GeomError::Validation(format!(
                    "ring {m}: weight must be finite and >= 0, got {}",
                    r.weight
                )));
            }
        }

        let max_nphi = layout.max_nphi();
        if let Some(phi) = &layout.phi {
            let expected = layout.rings.len() * max_nphi;
            if phi.len() != expected {
                return Err(GeomError::Validation(format!(
                    "longitude table must have {expected} entries, got {}",
                    phi.len()
                )));
            }
            if phi.iter().any(|p| !p.is_finite()) {
                return Err(GeomError::Validation(
                    "longitude table contains NaN or Inf".to_string(),
                ));
            }
        }

        Ok(Self {
            kind: layout.kind,
            rings: layout.rings,
            phi: layout.phi,
            max_nphi,
        })
    }

    pub fn kind(&self) -> GridKind {
        self.kind
    }

    pub fn rings(&self) -> &[RingDescriptor] {
        &self.rings
    }

    pub fn ring(&self, m: usize) -> Option<&RingDescriptor> {
        self.rings.get(m)
    }

    pub fn nrings(&self) -> usize {
        self.rings.len()
    }

    /// Total number of pixels over all rings.
    pub fn npix(&self) -> usize {
        self.rings.iter().map(|r| r.nphi).sum()
    }

    pub fn max_nphi(&self) -> usize {
        self.max_nphi
    }

    pub fn has_phi_table(&self) -> bool {
        self.phi.is_some()
    }

    /// Longitude of pixel `j` on ring `m`.
    ///
    /// Uses the explicit longitude table when one was supplied, otherwise
    /// pixels are spaced evenly from `phi0`.
    pub fn pixel_phi(&self, m: usize, j: usize) -> f64 {
        let r = &self.rings[m];
        match &self.phi {
            Some(table) => table[m * self.max_nphi + j],
            None => r.phi0 + TAU * j as f64 / r.nphi as f64,
        }
    }

    /// Σ nphi·weight — the quadrature of the constant 1.
    pub fn total_weight(&self) -> f64 {
        self.rings.iter().map(|r| r.nphi as f64 * r.weight).sum()
    }

    /// Weighted sum of `f(theta, phi)` over every pixel.
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut total = 0.0;
        for (m, r) in self.rings.iter().enumerate() {
            let mut ring_sum = 0.0;
            for j in 0..r.nphi {
                ring_sum += f(r.theta, self.pixel_phi(m, j));
            }
            total += r.weight * ring_sum;
        }
        total
    }

    pub fn thetas(&self) -> Vec<f64> {
        self.rings.iter().map(|r| r.theta).collect()
    }

    pub fn weights(&self) -> Vec<f64> {
        self.rings.iter().map(|r| r.weight).collect()
    }

    pub fn nphis(&self) -> Vec<usize> {
        self.rings.iter().map(|r| r.nphi).collect()
    }

    pub fn phi0s(&self) -> Vec<f64> {
        self.rings.iter().map(|r| r.phi0).collect()
    }

    pub fn offsets(&self) -> Vec<i64> {
        self.rings.iter().map(|r| r.offset).collect()
    }

    pub fn strides(&self) -> Vec<i64> {
        self.rings.iter().map(|r| r.stride).collect()
    }
}
