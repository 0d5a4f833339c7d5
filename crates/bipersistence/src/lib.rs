//! Bifiltered (Rips distance × density) persistence presentations over GF(2).
//!
//! A point cloud with a density per point gives a chain complex graded by
//! pairs `(distance, density)`. Its boundary maps are matrices over
//! GF(2)[x, y]; this crate computes a Gröbner basis of their image with a
//! module version of Buchberger's algorithm and reduces it.
//!
//! Layout
//! - `bidegree`: exponent pairs and terms (divisibility, lcm).
//! - `module`: sparse GF(2) module elements, row gradings, algebra errors.
//! - `filtration`: point reader, integer filtration, boundary columns.
//! - `groebner`: division, S-polynomials, saturation, reduction.
//! - `pipeline` / `format`: end-to-end call and text output.

pub mod bidegree;
pub mod cfg;
pub mod filtration;
pub mod format;
pub mod groebner;
pub mod module;
pub mod pipeline;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bidegree::{Bidegree, Term};
pub use filtration::{Filtration, FiltrationCfg, InputError, PointCloud};
pub use groebner::{divide, reduce, s_poly, saturate, SaturationCfg};
pub use module::{AlgebraError, ModuleElement, RowGrading, SimplexKind};
pub use pipeline::Presentation;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::filtration::{boundary_d1, boundary_d2, Filtration, FiltrationCfg, PointCloud};
    pub use crate::groebner::{divide, reduce, s_poly, saturate, SaturationCfg, SaturationStats};
    pub use crate::module::{degree, ModuleElement, SimplexKind};
    pub use crate::pipeline::Presentation;
    pub use crate::{Bidegree, Term};
}
