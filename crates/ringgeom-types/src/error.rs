// ─────────────────────────────────────────────────────────────────────
// RingGeom — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all ring geometry failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Invalid structural parameter (parity, non-positive counts,
    /// malformed per-latitude weights).
    #[error("config error: {0}")]
    Config(String),

    /// Newton refinement of a Gauss-Legendre node did not settle.
    #[error("convergence error: node {node} of order {order} not converged after {passes} passes")]
    Convergence {
        order: usize,
        node: usize,
        passes: usize,
    },

    /// Ring arrays handed to an assembler break the boundary contract.
    #[error("validation error: {0}")]
    Validation(String),
}

impl GeomError {
    /// True for precondition failures the caller can fix by changing
    /// parameters.
    pub fn is_config(&self) -> bool {
        matches!(self, GeomError::Config(_))
    }
}

pub type GeomResult<T> = Result<T, GeomError>;
