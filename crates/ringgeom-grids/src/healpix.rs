// ─────────────────────────────────────────────────────────────────────
// RingGeom — HEALPix Ring Geometry
// ─────────────────────────────────────────────────────────────────────
//! Ring geometry of the HEALPix equal-area pixelization.
//!
//! For resolution `nside` there are `4·nside - 1` rings and
//! `12·nside²` pixels. Rings `1..nside-1` (counted from either pole) form
//! the polar caps with `4·ring` pixels each; the remaining rings form the
//! equatorial belt with `4·nside` pixels and alternating longitude shift.
//! Southern rings are computed from their northern mirror.

use std::f64::consts::PI;

use ringgeom_types::config::check_healpix;
use ringgeom_types::{GeomError, GeomResult, GridGeometry, GridKind, RingDescriptor, RingLayout};

use crate::assembler::GridBuilder;

/// HEALPix ring grid, optionally with per-iso-latitude weights.
#[derive(Debug, Clone, PartialEq)]
pub struct HealpixGrid {
    pub nside: usize,
    pub stride: i64,
    /// `2·nside` factors from the north pole down to the equator,
    /// applied to both hemispheres. `None` means uniform.
    pub weights: Option<Vec<f64>>,
}

impl HealpixGrid {
    pub fn new(nside: usize, stride: i64) -> Self {
        Self {
            nside,
            stride,
            weights: None,
        }
    }

    pub fn weighted(nside: usize, stride: i64, weights: Vec<f64>) -> Self {
        Self {
            nside,
            stride,
            weights: Some(weights),
        }
    }

    pub fn nrings(&self) -> usize {
        (4 * self.nside).saturating_sub(1)
    }

    pub fn npix(&self) -> i64 {
        let n = self.nside as i64;
        12 * n * n
    }
}

impl GridBuilder for HealpixGrid {
    fn layout(&self) -> GeomResult<RingLayout> {
        check_healpix(self.nside, self.weights.as_deref())?;

        let nside = self.nside as i64;
        let stride = self.stride;
        let npix = self.npix();
        let ncap = 2 * nside * (nside - 1);
        if npix.checked_mul(stride).is_none() {
            return Err(GeomError::Config(format!(
                "stride {stride} overflows pixel offsets for nside {nside}"
            )));
        }
        if let Some(w) = &self.weights {
            if w.iter().all(|&x| x == 0.0) {
                log::warn!("weighted HEALPix geometry with all-zero weights (nside {nside})");
            }
        }

        let pixel_area = 4.0 * PI / npix as f64;
        let sqrt6_nside = 6f64.sqrt() * nside as f64;
        let fact1 = (8 * nside) as f64 / npix as f64;

        let rings = (1..=4 * nside - 1)
            .map(|ring| {
                let northring = if ring > 2 * nside { 4 * nside - ring } else { ring };

                let (theta, nphi, phi0, offset) = if northring < nside {
                    let nphi = 4 * northring;
                    (
                        2.0 * (northring as f64 / sqrt6_nside).asin(),
                        nphi,
                        PI / nphi as f64,
                        2 * northring * (northring - 1) * stride,
                    )
                } else {
                    let costheta = (2 * nside - northring) as f64 * fact1;
                    let nphi = 4 * nside;
                    // Adjacent belt rings are shifted by half a pixel
                    let phi0 = if (northring - nside) & 1 == 1 {
                        0.0
                    } else {
                        PI / nphi as f64
                    };
                    (
                        costheta.acos(),
                        nphi,
                        phi0,
                        (ncap + (northring - nside) * nphi) * stride,
                    )
                };

                let (theta, offset) = if northring != ring {
                    (PI - theta, (npix - nphi) * stride - offset)
                } else {
                    (theta, offset)
                };

                let factor = self
                    .weights
                    .as_ref()
                    .map_or(1.0, |w| w[(northring - 1) as usize]);

                RingDescriptor {
                    theta,
                    nphi: nphi as usize,
                    phi0,
                    offset,
                    stride,
                    weight: pixel_area * factor,
                }
            })
            .collect();

        Ok(RingLayout::new(GridKind::Healpix, rings))
    }
}

/// HEALPix geometry with uniform per-latitude weighting.
pub fn make_healpix_geometry(nside: usize, stride: i64) -> GeomResult<GridGeometry> {
    HealpixGrid::new(nside, stride).build()
}

/// HEALPix geometry with caller-supplied per-latitude weights
/// (`2·nside` entries, north pole to equator).
pub fn make_weighted_healpix_geometry(
    nside: usize,
    stride: i64,
    weights: &[f64],
) -> GeomResult<GridGeometry> {
    HealpixGrid::weighted(nside, stride, weights.to_vec()).build()
}
