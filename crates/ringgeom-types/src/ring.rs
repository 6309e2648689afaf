// ─────────────────────────────────────────────────────────────────────
// RingGeom — Ring Descriptors
// ─────────────────────────────────────────────────────────────────────
//! Per-ring geometry as produced by the grid builders.
//!
//! Rings are ordered north to south. A `RingLayout` is the transient
//! bundle a builder hands to an assembler; the assembler takes it by
//! value and owns whatever it keeps.

use serde::{Deserialize, Serialize};

/// Pixelization scheme a layout was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridKind {
    Healpix,
    Gauss,
    Ecp,
    DriscollHealy,
}

impl GridKind {
    pub fn name(&self) -> &'static str {
        match self {
            GridKind::Healpix => "healpix",
            GridKind::Gauss => "gauss",
            GridKind::Ecp => "ecp",
            GridKind::DriscollHealy => "driscoll_healy",
        }
    }
}

/// One iso-colatitude ring of sample points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingDescriptor {
    /// Colatitude (rad), strictly inside (0, π).
    pub theta: f64,
    /// Number of pixels on the ring.
    pub nphi: usize,
    /// Longitude of the first pixel (rad).
    pub phi0: f64,
    /// Index of the first pixel in the flattened pixel array.
    pub offset: i64,
    /// Element stride between consecutive pixels of this ring.
    pub stride: i64,
    /// Quadrature weight applied to every pixel of this ring.
    pub weight: f64,
}

/// Ring arrays for one builder invocation, ready for assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct RingLayout {
    pub kind: GridKind,
    pub rings: Vec<RingDescriptor>,
    /// Optional explicit longitudes, `nrings × max(nphi)` row-major.
    /// None of the built-in grids use it.
    pub phi: Option<Vec<f64>>,
}

impl RingLayout {
    pub fn new(kind: GridKind, rings: Vec<RingDescriptor>) -> Self {
        Self {
            kind,
            rings,
            phi: None,
        }
    }

    pub fn nrings(&self) -> usize {
        self.rings.len()
    }

    /// Largest pixel count over all rings.
    pub fn max_nphi(&self) -> usize {
        self.rings.iter().map(|r| r.nphi).max().unwrap_or(0)
    }
}
