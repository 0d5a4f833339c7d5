//! One call from a filtration to a reduced Gröbner basis.

use crate::filtration::{boundary, Filtration};
use crate::groebner::{reduce, saturate, SaturationCfg, SaturationStats};
use crate::module::{AlgebraError, ModuleElement, SimplexKind};

/// Presentation data of the image of one boundary map.
#[derive(Clone, Debug)]
pub struct Presentation {
    /// Simplices indexing the rows: vertices for ∂₁, edges for ∂₂.
    pub rows: SimplexKind,
    pub n_rows: usize,
    pub boundary: Vec<ModuleElement>,
    /// Saturated basis before reduction.
    pub groebner: Vec<ModuleElement>,
    pub reduced: Vec<ModuleElement>,
    pub stats: SaturationStats,
}

impl Presentation {
    /// Build the boundary columns whose rows are `rows`, saturate them with the
    /// matching grading and reduce the result.
    pub fn compute(
        filt: &Filtration,
        rows: SimplexKind,
        cfg: SaturationCfg,
    ) -> Result<Self, AlgebraError> {
        let n_rows = match rows {
            SimplexKind::Vertex => filt.n_points(),
            SimplexKind::Edge => filt.n_edges(),
        };
        let columns = boundary(filt, rows);
        tracing::info!(rows = ?rows, n_rows, columns = columns.len(), "boundary built");
        let sat = saturate(&columns, &filt.grading(rows), cfg)?;
        let reduced = reduce(&sat.basis)?;
        Ok(Self {
            rows,
            n_rows,
            boundary: columns,
            groebner: sat.basis,
            reduced,
            stats: sat.stats,
        })
    }
}
