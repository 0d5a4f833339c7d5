//! Point clouds with a density value per point, and the plain-text reader.
//!
//! Format: one point per line, whitespace-separated floats. The last value is
//! the density, everything before it is a coordinate. Blank lines are skipped;
//! anything else that does not parse aborts the read with the line number.

use std::fs;
use std::path::{Path, PathBuf};

use nalgebra::DVector;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected at least one coordinate and a density, found {found} value(s)")]
    TooFewValues { line: usize, found: usize },
    #[error("line {line}: `{token}` is not a number")]
    BadToken { line: usize, token: String },
    #[error("line {line}: `{token}` is not finite")]
    NonFinite { line: usize, token: String },
    #[error("line {line}: point has {found} coordinate(s), earlier points have {expected}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("{coords} coordinate vector(s) but {densities} density value(s)")]
    LengthMismatch { coords: usize, densities: usize },
    #[error("scaled filtration value {value} does not fit an exponent")]
    OutOfRange { value: f64 },
}

/// Points in R^k plus a raw density per point. Both lists always have the
/// same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    coords: Vec<DVector<f64>>,
    densities: Vec<f64>,
}

impl PointCloud {
    pub fn new(coords: Vec<DVector<f64>>, densities: Vec<f64>) -> Result<Self, InputError> {
        if coords.len() != densities.len() {
            return Err(InputError::LengthMismatch {
                coords: coords.len(),
                densities: densities.len(),
            });
        }
        Ok(Self { coords, densities })
    }

    /// Convenience for fixed-size literals (tests, examples).
    pub fn from_rows<const K: usize>(rows: &[([f64; K], f64)]) -> Self {
        let coords = rows
            .iter()
            .map(|(c, _)| DVector::from_column_slice(c))
            .collect();
        let densities = rows.iter().map(|&(_, d)| d).collect();
        Self { coords, densities }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut cloud = PointCloud::default();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let tokens: Vec<&str> = raw.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            if tokens.len() < 2 {
                return Err(InputError::TooFewValues {
                    line,
                    found: tokens.len(),
                });
            }
            let mut values = Vec::with_capacity(tokens.len());
            for tok in tokens {
                let v: f64 = tok.parse().map_err(|_| InputError::BadToken {
                    line,
                    token: tok.to_string(),
                })?;
                if !v.is_finite() {
                    return Err(InputError::NonFinite {
                        line,
                        token: tok.to_string(),
                    });
                }
                values.push(v);
            }
            let density = values.pop().unwrap_or_default();
            if let Some(first) = cloud.coords.first() {
                if first.len() != values.len() {
                    return Err(InputError::DimensionMismatch {
                        line,
                        expected: first.len(),
                        found: values.len(),
                    });
                }
            }
            cloud.push(DVector::from_vec(values), density);
        }
        Ok(cloud)
    }

    /// Append one point.
    pub fn push(&mut self, coord: DVector<f64>, density: f64) {
        self.coords.push(coord);
        self.densities.push(density);
    }

    #[inline]
    pub fn coords(&self) -> &[DVector<f64>] {
        &self.coords
    }
    #[inline]
    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Keep only the first `max` points.
    pub fn truncate(&mut self, max: usize) {
        self.coords.truncate(max);
        self.densities.truncate(max);
    }

    /// Ambient dimension (0 for an empty cloud).
    pub fn dim(&self) -> usize {
        self.coords.first().map_or(0, |c| c.len())
    }
}
