//! Boundary matrices of the bifiltered Rips complex, column by column.
//!
//! Over GF(2) signs vanish, so a column is just the faces of the simplex, each
//! carrying the monomial that lifts the face's own degree to the simplex's:
//! `exp(face) = time(simplex) − time(face)`. Columns are therefore homogeneous
//! of degree `time(simplex)` for the matching `FiltrationGrading`.

use super::index::Filtration;
use crate::bidegree::{Bidegree, Term};
use crate::module::{ModuleElement, SimplexKind};

/// ∂₁: one column per edge `(i, j)` in index order, rows are vertices.
pub fn boundary_d1(filt: &Filtration) -> Vec<ModuleElement> {
    filt.edges()
        .iter()
        .map(|e| {
            // Every point is born at distance 0, so only the density lags.
            ModuleElement::from_distinct_rows([
                Term::new(e.i, e.time - Bidegree::new(0, filt.density(e.i))),
                Term::new(e.j, e.time - Bidegree::new(0, filt.density(e.j))),
            ])
        })
        .collect()
}

/// ∂₂: one column per triangle `(i, j, k)` in lexicographic order, rows are edges.
pub fn boundary_d2(filt: &Filtration) -> Vec<ModuleElement> {
    let n = filt.n_points();
    let mut cols = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let time = filt.seg_time(i, j).lcm(filt.seg_time(i, k)).lcm(filt.seg_time(j, k));
                let faces = [(i, j), (i, k), (j, k)];
                let terms = faces.into_iter().filter_map(|(a, b)| {
                    let row = filt.seg_index(a, b)?;
                    Some(Term::new(row, time - filt.seg_time(a, b)))
                });
                cols.push(ModuleElement::from_distinct_rows(terms));
            }
        }
    }
    cols
}

/// Boundary whose rows are simplices of `rows`: vertices → ∂₁, edges → ∂₂.
pub fn boundary(filt: &Filtration, rows: SimplexKind) -> Vec<ModuleElement> {
    match rows {
        SimplexKind::Vertex => boundary_d1(filt),
        SimplexKind::Edge => boundary_d2(filt),
    }
}
