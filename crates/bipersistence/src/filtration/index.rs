//! Integer filtration values and the edge index table.
//!
//! Built once per point cloud and borrowed read-only by the boundary builder
//! and the algebra (through `FiltrationGrading`).
//!
//! Conventions
//! - Densities are inverted, `d_i = round(scale · (max_density − density_i))`,
//!   so dense points enter first (sub-level sets of the inverted density).
//! - Distances are `round(scale · ‖p_i − p_j‖)`.
//! - Edges `(i, j)`, `i < j`, are numbered lexicographically from 0.
//! - A scaled value beyond `cfg::MAX_EXPONENT` is an input error, never a
//!   clamped exponent.

use nalgebra::DMatrix;

use super::points::{InputError, PointCloud};
use crate::bidegree::Bidegree;
use crate::cfg::{DEFAULT_SCALE, MAX_EXPONENT};
use crate::module::{RowGrading, SimplexKind};

/// Filtration parameters.
#[derive(Clone, Copy, Debug)]
pub struct FiltrationCfg {
    /// Factor applied before rounding distances and densities to integers.
    pub scale: f64,
    /// Only the first `max_points` points of the cloud are used.
    pub max_points: Option<usize>,
}

impl Default for FiltrationCfg {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            max_points: None,
        }
    }
}

/// 1-simplex `{i, j}` (`i < j`) and the bidegree at which it appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub i: usize,
    pub j: usize,
    pub time: Bidegree,
}

/// Scaled densities, scaled distance matrix and edge table of a point cloud.
#[derive(Clone, Debug)]
pub struct Filtration {
    densities: Vec<i64>,
    distances: DMatrix<i64>,
    edges: Vec<Edge>,
}

impl Filtration {
    /// Scale and index the first `cfg.max_points` points of `cloud`.
    ///
    /// Fails with `InputError::OutOfRange` when a scaled distance or density is
    /// not finite or exceeds `MAX_EXPONENT`.
    pub fn new(cloud: &PointCloud, cfg: FiltrationCfg) -> Result<Self, InputError> {
        let n = cfg
            .max_points
            .map_or(cloud.len(), |max| cloud.len().min(max));
        let coords = &cloud.coords()[..n];
        let raw = &cloud.densities()[..n];

        let max_density = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let densities = raw
            .iter()
            .map(|&d| scale_to_int(cfg.scale, max_density - d))
            .collect::<Result<Vec<i64>, _>>()?;

        let mut distances = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = scale_to_int(cfg.scale, (&coords[i] - &coords[j]).norm())?;
                distances[(i, j)] = d;
                distances[(j, i)] = d;
            }
        }

        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                let time = Bidegree::new(distances[(i, j)], densities[i].max(densities[j]));
                edges.push(Edge { i, j, time });
            }
        }
        tracing::debug!(points = n, edges = edges.len(), "filtration indexed");
        Ok(Self {
            densities,
            distances,
            edges,
        })
    }

    #[inline]
    pub fn n_points(&self) -> usize {
        self.densities.len()
    }
    #[inline]
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    #[inline]
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Scaled, inverted density of point `i`.
    #[inline]
    pub fn density(&self, i: usize) -> i64 {
        self.densities[i]
    }

    /// Scaled distance between points `i` and `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> i64 {
        self.distances[(i, j)]
    }

    /// Bidegree at which the segment `{i, j}` appears: (distance, later density).
    #[inline]
    pub fn seg_time(&self, i: usize, j: usize) -> Bidegree {
        Bidegree::new(self.distance(i, j), self.density(i).max(self.density(j)))
    }

    /// Row index of the segment `{i, j}`; `None` unless `i < j < n`.
    pub fn seg_index(&self, i: usize, j: usize) -> Option<usize> {
        let n = self.n_points();
        (i < j && j < n).then(|| i * (2 * n - i - 1) / 2 + (j - i - 1))
    }

    /// Row grading for modules whose rows are simplices of `kind`.
    #[inline]
    pub fn grading(&self, kind: SimplexKind) -> FiltrationGrading<'_> {
        FiltrationGrading { filt: self, kind }
    }
}

fn scale_to_int(scale: f64, value: f64) -> Result<i64, InputError> {
    let scaled = (scale * value).round();
    if !scaled.is_finite() || scaled.abs() > MAX_EXPONENT as f64 {
        return Err(InputError::OutOfRange { value: scaled });
    }
    Ok(scaled as i64)
}

/// Vertex rows shift by `(0, d_i)`, edge rows by the edge's `seg_time`.
#[derive(Clone, Copy, Debug)]
pub struct FiltrationGrading<'a> {
    filt: &'a Filtration,
    kind: SimplexKind,
}

impl FiltrationGrading<'_> {
    #[inline]
    pub fn kind(&self) -> SimplexKind {
        self.kind
    }
}

impl RowGrading for FiltrationGrading<'_> {
    #[inline]
    fn shift(&self, row: usize) -> Bidegree {
        match self.kind {
            SimplexKind::Vertex => Bidegree::new(0, self.filt.density(row)),
            SimplexKind::Edge => self.filt.edges[row].time,
        }
    }
}
