// ─────────────────────────────────────────────────────────────────────
// RingGeom — Grid Builders
// (C) 2026 RingGeom contributors.
// License: GNU GPL v2 or later
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Ring geometries for sampling scalar fields on the sphere.
//!
//! Each builder produces, per ring and north to south, the colatitude,
//! pixel count, first-pixel longitude, storage offset/stride and a
//! quadrature weight such that Σ weight·f over all pixels approximates
//! ∫ f dΩ. The rings are handed to a `GeometryAssembler`, which owns the
//! final representation.
//!
//! # Invariants
//!
//! 1. **No partial geometry**: parameter checks run before any ring is
//!    computed, and an assembler is only called with a complete layout.
//!
//! 2. **Poles are never sampled exactly**: every ring has θ strictly in
//!    (0, π). The default assembler rejects layouts that break this.
//!
//! 3. **Builders are pure**: the same parameters always give bit-identical
//!    rings; nothing is cached between calls.

pub mod assembler;
pub mod dispatch;
pub mod driscoll_healy;
pub mod ecp;
pub mod gauss;
pub mod healpix;

pub use assembler::{ExternalAssembler, GeometryAssembler, GridBuilder, RingTableAssembler};
pub use dispatch::{build_grid, build_grid_with, layout_for};
pub use driscoll_healy::{make_driscoll_healy_geometry, DriscollHealyGrid};
pub use ecp::{make_ecp_geometry, EcpGrid};
pub use gauss::{make_gauss_geometry, GaussGrid};
pub use healpix::{make_healpix_geometry, make_weighted_healpix_geometry, HealpixGrid};
