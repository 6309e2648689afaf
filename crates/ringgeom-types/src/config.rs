// ─────────────────────────────────────────────────────────────────────
// RingGeom — Grid Configuration
// ─────────────────────────────────────────────────────────────────────
//! Serializable description of a ring grid plus the parameter checks
//! every builder runs before touching any ring array.

use serde::{Deserialize, Serialize};

use crate::error::{GeomError, GeomResult};

/// Largest supported HEALPix resolution (depth 29).
pub const NSIDE_MAX: usize = 1 << 29;

fn default_stride() -> i64 {
    1
}

/// Parameters for one of the supported ring grids.
///
/// JSON form is tagged by `kind`, e.g.
/// `{"kind": "gauss", "nrings": 8, "nphi": 16}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridSpec {
    Healpix {
        nside: usize,
        #[serde(default = "default_stride")]
        stride: i64,
        /// Per-iso-latitude correction factors, `2·nside` entries,
        /// north pole to equator. `None` means all ones.
        #[serde(default)]
        weights: Option<Vec<f64>>,
    },
    Gauss {
        nrings: usize,
        nphi: usize,
        #[serde(default = "default_stride")]
        stride_lon: i64,
        /// Defaults to `nphi · stride_lon` (rings stored back to back).
        #[serde(default)]
        stride_lat: Option<i64>,
    },
    Ecp {
        nrings: usize,
        nphi: usize,
        #[serde(default)]
        phi0: f64,
        #[serde(default = "default_stride")]
        stride_lon: i64,
        #[serde(default)]
        stride_lat: Option<i64>,
    },
    DriscollHealy {
        nrings: usize,
        ppring: usize,
        #[serde(default)]
        phi0: f64,
        #[serde(default = "default_stride")]
        stride_lon: i64,
        #[serde(default)]
        stride_lat: Option<i64>,
    },
}

impl GridSpec {
    /// Run every parameter check the matching builder would run.
    pub fn validate(&self) -> GeomResult<()> {
        match self {
            GridSpec::Healpix { nside, weights, .. } => {
                check_healpix(*nside, weights.as_deref())
            }
            GridSpec::Gauss { nrings, nphi, .. } => check_gauss(*nrings, *nphi),
            GridSpec::Ecp { nrings, nphi, phi0, .. } => {
                check_ecp(*nrings, *nphi)?;
                check_phi0(*phi0)
            }
            GridSpec::DriscollHealy {
                nrings, ppring, phi0, ..
            } => {
                check_driscoll_healy(*nrings, *ppring)?;
                check_phi0(*phi0)
            }
        }
    }

    /// Number of rings the described grid has.
    pub fn nrings(&self) -> usize {
        match self {
            GridSpec::Healpix { nside, .. } => (4 * nside).saturating_sub(1),
            GridSpec::Gauss { nrings, .. }
            | GridSpec::Ecp { nrings, .. }
            | GridSpec::DriscollHealy { nrings, .. } => *nrings,
        }
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> GeomResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| GeomError::Config(format!("JSON parse error: {e}")))
    }

    pub fn to_json(&self) -> GeomResult<String> {
        serde_json::to_string(self)
            .map_err(|e| GeomError::Config(format!("JSON encode error: {e}")))
    }
}

/// Latitude stride for rings stored back to back.
pub fn contiguous_stride_lat(stride_lat: Option<i64>, nphi: usize, stride_lon: i64) -> i64 {
    stride_lat.unwrap_or(nphi as i64 * stride_lon)
}

pub fn check_healpix(nside: usize, weights: Option<&[f64]>) -> GeomResult<()> {
    if nside == 0 {
        return Err(GeomError::Config("nside must be > 0".to_string()));
    }
    if nside > NSIDE_MAX {
        return Err(GeomError::Config(format!(
            "nside must be <= {NSIDE_MAX}, got {nside}"
        )));
    }
    if let Some(w) = weights {
        if w.len() != 2 * nside {
            return Err(GeomError::Config(format!(
                "weights must have 2*nside = {} entries, got {}",
                2 * nside,
                w.len()
            )));
        }
        if let Some(i) = w.iter().position(|x| !x.is_finite() || *x < 0.0) {
            return Err(GeomError::Config(format!(
                "weights[{i}] must be finite and >= 0, got {}",
                w[i]
            )));
        }
    }
    Ok(())
}

pub fn check_gauss(nrings: usize, nphi: usize) -> GeomResult<()> {
    check_positive("nrings", nrings)?;
    check_positive("nphi", nphi)
}

pub fn check_ecp(nrings: usize, nphi: usize) -> GeomResult<()> {
    check_positive("nrings", nrings)?;
    check_positive("nphi", nphi)?;
    if nrings % 2 != 0 {
        return Err(GeomError::Config(format!(
            "even number of rings needed for equidistant grid, got {nrings}"
        )));
    }
    Ok(())
}

pub fn check_driscoll_healy(nrings: usize, ppring: usize) -> GeomResult<()> {
    check_positive("ppring", ppring)?;
    if nrings % 2 != 1 {
        return Err(GeomError::Config(format!(
            "nrings must be an odd number, got {nrings}"
        )));
    }
    if nrings < 3 {
        return Err(GeomError::Config(format!(
            "nrings must be >= 3 for a Driscoll-Healy grid, got {nrings}"
        )));
    }
    Ok(())
}

pub fn check_phi0(phi0: f64) -> GeomResult<()> {
    if !phi0.is_finite() {
        return Err(GeomError::Config(format!("phi0 must be finite, got {phi0}")));
    }
    Ok(())
}

fn check_positive(name: &str, value: usize) -> GeomResult<()> {
    if value == 0 {
        return Err(GeomError::Config(format!("{name} must be > 0")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healpix_from_json_defaults() {
        let spec = GridSpec::from_json(r#"{"kind": "healpix", "nside": 4}"#).unwrap();
        assert_eq!(
            spec,
            GridSpec::Healpix {
                nside: 4,
                stride: 1,
                weights: None
            }
        );
        assert_eq!(spec.nrings(), 15);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_ecp_from_json() {
        let spec = GridSpec::from_json(
            r#"{"kind": "ecp", "nrings": 6, "nphi": 12, "phi0": 0.25, "stride_lat": 20}"#,
        )
        .unwrap();
        match &spec {
            GridSpec::Ecp {
                phi0,
                stride_lon,
                stride_lat,
                ..
            } => {
                assert_eq!(*phi0, 0.25);
                assert_eq!(*stride_lon, 1);
                assert_eq!(*stride_lat, Some(20));
            }
            other => panic!("unexpected spec {other:?}"),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let spec = GridSpec::DriscollHealy {
            nrings: 9,
            ppring: 16,
            phi0: 0.0,
            stride_lon: 1,
            stride_lat: None,
        };
        let back = GridSpec::from_json(&spec.to_json().unwrap()).unwrap();
        assert_eq!(spec, back);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = GridSpec::from_json(r#"{"kind": "mollweide"}"#).unwrap_err();
        assert!(err.is_config(), "{err}");
    }

    #[test]
    fn test_ecp_parity() {
        assert!(check_ecp(5, 10).is_err());
        assert!(check_ecp(6, 10).is_ok());
        assert!(check_ecp(0, 10).is_err());
        assert!(check_ecp(6, 0).is_err());
    }

    #[test]
    fn test_driscoll_healy_parity() {
        assert!(check_driscoll_healy(6, 10).is_err());
        assert!(check_driscoll_healy(5, 10).is_ok());
        assert!(check_driscoll_healy(1, 10).is_err());
        assert!(check_driscoll_healy(5, 0).is_err());
    }

    #[test]
    fn test_gauss_counts() {
        assert!(check_gauss(1, 1).is_ok());
        assert!(check_gauss(0, 4).is_err());
        assert!(check_gauss(4, 0).is_err());
    }

    #[test]
    fn test_healpix_weights_checked() {
        assert!(check_healpix(2, Some(&[1.0; 4][..])).is_ok());
        assert!(check_healpix(2, Some(&[1.0; 3][..])).is_err());
        assert!(check_healpix(2, Some(&[1.0, f64::NAN, 1.0, 1.0][..])).is_err());
        assert!(check_healpix(2, Some(&[1.0, -0.5, 1.0, 1.0][..])).is_err());
        assert!(check_healpix(0, None).is_err());
        assert!(check_healpix(NSIDE_MAX + 1, None).is_err());
    }

    #[test]
    fn test_nonfinite_phi0_rejected() {
        let spec = GridSpec::Ecp {
            nrings: 4,
            nphi: 8,
            phi0: f64::INFINITY,
            stride_lon: 1,
            stride_lat: None,
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_contiguous_stride_lat() {
        assert_eq!(contiguous_stride_lat(None, 16, 2), 32);
        assert_eq!(contiguous_stride_lat(Some(5), 16, 2), 5);
    }
}
