//! Gröbner bases of graded submodules of free GF(2)[x, y]-modules.
//!
//! Pipeline: `saturate` (Buchberger work queue built on `s_poly` and `divide`)
//! then `reduce`. All routines assume homogeneous inputs for the grading they
//! are given; a broken assumption surfaces as an `AlgebraError`, never as a
//! silently wrong basis.
//!
//! Term order is position over term: the leading term of an element is the
//! one on its smallest row, whatever its exponent.

mod buchberger;
mod division;
mod reduce;
mod spoly;

pub use buchberger::{saturate, Saturation, SaturationCfg, SaturationStats};
pub use division::{divide, Division};
pub use reduce::reduce;
pub use spoly::s_poly;
