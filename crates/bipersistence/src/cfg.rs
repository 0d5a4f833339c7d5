//! Defaults shared by the filtration builder, the saturation loop and the CLI.
//!
//! Policy
//! - Fixed constants so call sites agree on one scale. Runtime overrides go
//!   through `FiltrationCfg` / `SaturationCfg`, not through these values.

/// Factor turning distances and densities into integer exponents.
///
/// Exponents are added and subtracted many times during division; integers keep
/// that bookkeeping exact.
pub const DEFAULT_SCALE: f64 = 1e8;

/// Point-count cap applied by the CLI when nothing else is configured.
pub const DEFAULT_MAX_POINTS: usize = 100;

/// Largest magnitude a scaled distance or density may take.
///
/// S-polynomials and division add a few exponents and shifts together; a
/// quarter of the `i64` range keeps those sums from overflowing.
pub const MAX_EXPONENT: i64 = i64::MAX / 4;
