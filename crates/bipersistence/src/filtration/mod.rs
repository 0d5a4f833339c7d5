//! Geometry side of the pipeline: points → integer filtration → boundary columns.
//!
//! - `PointCloud` and the text reader (`points`).
//! - `Filtration`: scaled densities, distance matrix, edge table, row gradings.
//! - `boundary_d1` / `boundary_d2`: sparse boundary matrices as module elements.
//! - `rand`: reproducible noisy-circle clouds for benches and tests.

mod boundary;
mod index;
mod points;
pub mod rand;

pub use boundary::{boundary, boundary_d1, boundary_d2};
pub use index::{Edge, Filtration, FiltrationCfg, FiltrationGrading};
pub use points::{InputError, PointCloud};
