// ─────────────────────────────────────────────────────────────────────
// RingGeom — Config-Driven Grid Construction
// ─────────────────────────────────────────────────────────────────────

use ringgeom_types::config::contiguous_stride_lat;
use ringgeom_types::{GeomResult, GridGeometry, GridSpec, RingLayout};

use crate::assembler::{GeometryAssembler, GridBuilder, RingTableAssembler};
use crate::driscoll_healy::DriscollHealyGrid;
use crate::ecp::EcpGrid;
use crate::gauss::GaussGrid;
use crate::healpix::HealpixGrid;

/// Ring layout for the grid described by `spec`.
pub fn layout_for(spec: &GridSpec) -> GeomResult<RingLayout> {
    match spec {
        GridSpec::Healpix {
            nside,
            stride,
            weights,
        } => HealpixGrid {
            nside: *nside,
            stride: *stride,
            weights: weights.clone(),
        }
        .layout(),
        GridSpec::Gauss {
            nrings,
            nphi,
            stride_lon,
            stride_lat,
        } => GaussGrid::new(
            *nrings,
            *nphi,
            *stride_lon,
            contiguous_stride_lat(*stride_lat, *nphi, *stride_lon),
        )
        .layout(),
        GridSpec::Ecp {
            nrings,
            nphi,
            phi0,
            stride_lon,
            stride_lat,
        } => EcpGrid::new(
            *nrings,
            *nphi,
            *phi0,
            *stride_lon,
            contiguous_stride_lat(*stride_lat, *nphi, *stride_lon),
        )
        .layout(),
        GridSpec::DriscollHealy {
            nrings,
            ppring,
            phi0,
            stride_lon,
            stride_lat,
        } => DriscollHealyGrid::new(
            *nrings,
            *ppring,
            *phi0,
            *stride_lon,
            contiguous_stride_lat(*stride_lat, *ppring, *stride_lon),
        )
        .layout(),
    }
}

pub fn build_grid_with<A: GeometryAssembler>(
    spec: &GridSpec,
    assembler: &A,
) -> GeomResult<A::Handle> {
    assembler.assemble(layout_for(spec)?)
}

pub fn build_grid(spec: &GridSpec) -> GeomResult<GridGeometry> {
    build_grid_with(spec, &RingTableAssembler)
}
