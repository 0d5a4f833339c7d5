//! Buchberger saturation as an explicit work queue.
//!
//! The basis is one append-only list split at a cursor: `basis[..next]` are
//! accepted generators whose pairs are all settled, `basis[next..]` is the
//! frontier. Accepting `basis[next]` means pairing it with every accepted
//! generator, dividing each non-empty S-polynomial by the whole current list
//! and appending non-zero remainders to the frontier. The loop stops when the
//! frontier is empty; every unordered pair has then been examined exactly once.
//!
//! Termination: remainders are homogeneous with exponents bounded by the
//! largest scaled distance/density, and each new leading term is outside the
//! monomial module of the earlier ones (Dickson's lemma bounds the chain).
//! `SaturationCfg` still offers hard ceilings since the basis can blow up
//! combinatorially long before that bound.

use crate::module::{AlgebraError, ModuleElement, RowGrading};

use super::division::divide;
use super::spoly::s_poly;

/// Safety valves for the saturation loop (`None` = unlimited).
#[derive(Clone, Copy, Debug, Default)]
pub struct SaturationCfg {
    pub max_basis: Option<usize>,
    pub max_pairs: Option<u64>,
}

/// Counters collected while saturating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaturationStats {
    pub pairs_examined: u64,
    /// Pairs skipped because their leading rows differ.
    pub disjoint_leads: u64,
    /// Pairs whose S-polynomial cancelled completely.
    pub zero_s_polys: u64,
    /// Pairs whose S-polynomial reduced to zero.
    pub zero_reductions: u64,
    pub generators_added: u64,
}

/// A Gröbner basis (not reduced) and how it was obtained.
#[derive(Clone, Debug, Default)]
pub struct Saturation {
    pub basis: Vec<ModuleElement>,
    pub stats: SaturationStats,
}

/// Complete `gens` to a Gröbner basis of the submodule they generate.
///
/// The input generators keep their order at the front of the result; new
/// generators follow in discovery order.
pub fn saturate<G: RowGrading + ?Sized>(
    gens: &[ModuleElement],
    grading: &G,
    cfg: SaturationCfg,
) -> Result<Saturation, AlgebraError> {
    if let Some(index) = gens.iter().position(ModuleElement::is_empty) {
        return Err(AlgebraError::NullGenerator { index });
    }
    let mut basis = gens.to_vec();
    let mut stats = SaturationStats::default();
    let mut next = 0;
    while next < basis.len() {
        for k in 0..next {
            if let Some(max) = cfg.max_pairs {
                if stats.pairs_examined >= max {
                    return Err(AlgebraError::PairLimit { limit: max });
                }
            }
            stats.pairs_examined += 1;
            let (f, g) = (&basis[k], &basis[next]);
            let same_row = match (f.leading_term(), g.leading_term()) {
                (Some(lf), Some(lg)) => lf.row == lg.row,
                _ => false,
            };
            if !same_row {
                stats.disjoint_leads += 1;
                continue;
            }
            let s = s_poly(f, g, grading)?;
            if s.is_empty() {
                stats.zero_s_polys += 1;
                continue;
            }
            let r = divide(&s, &basis)?.remainder;
            if r.is_empty() {
                stats.zero_reductions += 1;
                continue;
            }
            tracing::trace!(pair = ?(k, next), remainder = %r, "s-pair survived");
            basis.push(r);
            stats.generators_added += 1;
            tracing::debug!(size = basis.len(), accepted = next, "generator appended");
            if let Some(max) = cfg.max_basis {
                if basis.len() > max {
                    return Err(AlgebraError::BasisLimit { limit: max });
                }
            }
        }
        next += 1;
    }
    tracing::info!(
        generators = basis.len(),
        pairs = stats.pairs_examined,
        added = stats.generators_added,
        zero_reductions = stats.zero_reductions,
        "saturation finished"
    );
    Ok(Saturation { basis, stats })
}
