// ─────────────────────────────────────────────────────────────────────
// RingGeom — Geometry Assembler Interface
// ─────────────────────────────────────────────────────────────────────
//! Builders compute ring arrays; an assembler turns them into whatever
//! geometry handle the downstream transform engine works with.
//!
//! The assembler receives the `RingLayout` by value. Nothing a builder
//! allocated survives the call except what the assembler keeps.

use ringgeom_types::{GeomResult, GridGeometry, RingLayout};

/// Trait for geometry assemblers.
pub trait GeometryAssembler {
    type Handle;

    fn assemble(&self, layout: RingLayout) -> GeomResult<Self::Handle>;
}

/// Default assembler: validates the ring contract and keeps the rings as
/// a `GridGeometry`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingTableAssembler;

impl GeometryAssembler for RingTableAssembler {
    type Handle = GridGeometry;

    fn assemble(&self, layout: RingLayout) -> GeomResult<GridGeometry> {
        let geometry = GridGeometry::from_layout(layout)?;
        log::debug!(
            "assembled {} geometry: {} rings, {} pixels",
            geometry.kind().name(),
            geometry.nrings(),
            geometry.npix()
        );
        Ok(geometry)
    }
}

type AssembleFn<H> = Box<dyn Fn(RingLayout) -> GeomResult<H> + Send + Sync>;

/// Assembler backed by a closure.
///
/// Lets a transform engine plug in its own handle construction without
/// implementing the trait on a dedicated type.
pub struct ExternalAssembler<H> {
    assemble_fn: AssembleFn<H>,
}

impl<H> ExternalAssembler<H> {
    pub fn new(assemble_fn: impl Fn(RingLayout) -> GeomResult<H> + Send + Sync + 'static) -> Self {
        Self {
            assemble_fn: Box::new(assemble_fn),
        }
    }
}

impl<H> GeometryAssembler for ExternalAssembler<H> {
    type Handle = H;

    fn assemble(&self, layout: RingLayout) -> GeomResult<H> {
        (self.assemble_fn)(layout)
    }
}

/// A grid scheme that can produce its ring layout.
pub trait GridBuilder {
    /// Check parameters and compute every ring.
    ///
    /// Fails before any ring is computed if a parameter is invalid.
    fn layout(&self) -> GeomResult<RingLayout>;

    /// Build and hand the rings to `assembler`.
    fn build_with<A: GeometryAssembler>(&self, assembler: &A) -> GeomResult<A::Handle> {
        assembler.assemble(self.layout()?)
    }

    /// Build with the default assembler.
    fn build(&self) -> GeomResult<GridGeometry> {
        self.build_with(&RingTableAssembler)
    }
}
