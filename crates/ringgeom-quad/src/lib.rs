// ─────────────────────────────────────────────────────────────────────
// RingGeom — Ring Quadrature
// (C) 2026 RingGeom contributors.
// License: GNU GPL v2 or later
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Latitude quadrature for ring grids on the sphere.
//!
//!   - gauss_legendre: Newton solver for Gauss-Legendre nodes/weights
//!   - equiangular: closed-form weights for equidistant (ECP) rings
//!   - keiner_potts: closed-form weights for odd pole-to-pole rings

pub mod equiangular;
pub mod gauss_legendre;
pub mod keiner_potts;

pub use equiangular::ecp_weights;
pub use gauss_legendre::{gauss_legendre, QuadratureRule, MAX_NEWTON_PASSES};
pub use keiner_potts::{keiner_potts_weights, trapezoid_eps};
