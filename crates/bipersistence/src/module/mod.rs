//! Free GF(2)[x, y]-modules with bigraded rows.
//!
//! - `ModuleElement`: sparse column, position-over-term order.
//! - `RowGrading`/`SimplexKind`: how rows contribute to an element's degree.
//! - `AlgebraError`: invariant violations (always fatal).

mod element;
mod error;
mod grading;

pub use element::ModuleElement;
pub use error::AlgebraError;
pub use grading::{degree, RowGrading, SimplexKind};
