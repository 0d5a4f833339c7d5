//! Text renderings of a basis: a diagnostic listing and a GAP/homalg matrix.
//!
//! The GAP form is dense: one row per generator, one column per module row,
//! `x^a*y^b` where the generator holds that row and `0` elsewhere, followed by
//! the matrix dimensions, ready for `HomalgMatrix` in homalg.

use crate::bidegree::Bidegree;
use crate::module::ModuleElement;

/// `x^a*y^b`.
pub fn monomial(exp: Bidegree) -> String {
    format!("x^{}*y^{}", exp.x, exp.y)
}

/// One generator per line, then `Length: <count>`.
pub fn diagnostic(basis: &[ModuleElement]) -> String {
    basis
        .iter()
        .map(ToString::to_string)
        .chain(std::iter::once(format!("Length: {}", basis.len())))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `HomalgMatrix("[...]", <generators>, <n_rows>)`.
pub fn gap_matrix(basis: &[ModuleElement], n_rows: usize) -> String {
    let entries: Vec<String> = basis
        .iter()
        .flat_map(|g| {
            (0..n_rows).map(move |row| g.get(row).map_or_else(|| "0".to_string(), monomial))
        })
        .collect();
    format!(
        "HomalgMatrix(\"[{}]\", {}, {})",
        entries.join(", "),
        basis.len(),
        n_rows
    )
}
