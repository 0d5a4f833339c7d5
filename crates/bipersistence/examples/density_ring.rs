//! Timing probe: presentation of a noisy ring with a few outliers.
//!
//! Purpose
//! - Give a reproducible data point for "how large a cloud can the naive
//!   saturation handle?" at a handful of sizes.
//! - Print basis sizes next to timings so growth of the Gröbner basis is
//!   visible, not only wall time.

use std::time::Instant;

use bipersistence::filtration::rand::{noisy_circle, CircleCfg};
use bipersistence::prelude::*;

fn main() {
    for points in [6usize, 9, 12, 15] {
        let cfg = CircleCfg {
            points,
            outliers: points / 3,
            ..CircleCfg::default()
        };
        let cloud = noisy_circle(cfg, 2024);
        let filt = Filtration::new(&cloud, FiltrationCfg::default())
            .expect("ring coordinates fit the exponent range");

        let start = Instant::now();
        let pres = Presentation::compute(&filt, SimplexKind::Vertex, SaturationCfg::default())
            .expect("homogeneous boundary columns");
        let elapsed = start.elapsed().as_secs_f64() * 1e3;

        println!(
            "points={} columns={} groebner={} reduced={} pairs={} time_ms={elapsed:.3}",
            filt.n_points(),
            pres.boundary.len(),
            pres.groebner.len(),
            pres.reduced.len(),
            pres.stats.pairs_examined,
        );
    }
}
