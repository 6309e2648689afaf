// ─────────────────────────────────────────────────────────────────────
// RingGeom — Types
// (C) 2026 RingGeom contributors.
// License: GNU GPL v2 or later
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Ring descriptors, grid configuration, validated geometry handle and
//! error hierarchy shared by the RingGeom crates.

pub mod config;
pub mod error;
pub mod geometry;
pub mod ring;

pub use config::GridSpec;
pub use error::{GeomError, GeomResult};
pub use geometry::GridGeometry;
pub use ring::{GridKind, RingDescriptor, RingLayout};
