//! Division with remainder of a module element by an ordered list of generators.
//!
//! At each step the leading term of the working element is compared with the
//! generators' leading terms in list order. The first one that divides it
//! cancels it (`p += m·f` with `m = lead(p) / lead(f)`); if none does, the term
//! moves to the remainder. The leading row of the working element strictly
//! increases every step, so the loop ends after at most `#rows` steps.

use std::collections::{BTreeMap, BTreeSet};

use crate::bidegree::{Bidegree, Term};
use crate::module::{AlgebraError, ModuleElement};

/// Quotients and remainder of one division.
///
/// Generator indices refer to the concatenation of the slices passed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Division {
    /// Quotient polynomial per generator, as a set of monomials over GF(2).
    pub quotients: BTreeMap<usize, BTreeSet<Bidegree>>,
    pub remainder: ModuleElement,
}

impl Division {
    fn record(&mut self, generator: usize, m: Bidegree) {
        let q = self.quotients.entry(generator).or_default();
        if !q.remove(&m) {
            q.insert(m);
        }
        if q.is_empty() {
            self.quotients.remove(&generator);
        }
    }

    /// `Σ quotient[f] · f + remainder`, which must give back the dividend.
    pub fn reconstruct(&self, basis: &[ModuleElement]) -> Result<ModuleElement, AlgebraError> {
        let mut acc = self.remainder.clone();
        for (&k, monomials) in &self.quotients {
            for &m in monomials {
                acc.add_multiple(m, &basis[k])?;
            }
        }
        Ok(acc)
    }
}

/// Divide `vec` by `basis`.
pub fn divide(vec: &ModuleElement, basis: &[ModuleElement]) -> Result<Division, AlgebraError> {
    divide_parts(vec, &[basis])
}

/// Divide by the concatenation of `parts`, without materializing it.
pub(crate) fn divide_parts(
    vec: &ModuleElement,
    parts: &[&[ModuleElement]],
) -> Result<Division, AlgebraError> {
    let mut p = vec.clone();
    let mut out = Division::default();
    while let Some(lead) = p.leading_term() {
        match first_divisor(parts, &lead) {
            Some((k, f, m)) => {
                out.record(k, m);
                p.add_multiple(m, f)?;
            }
            None => {
                p.pop_leading();
                out.remainder.toggle(lead)?;
            }
        }
    }
    out.remainder.check_nonnegative()?;
    Ok(out)
}

fn first_divisor<'a>(
    parts: &[&'a [ModuleElement]],
    lead: &Term,
) -> Option<(usize, &'a ModuleElement, Bidegree)> {
    parts
        .iter()
        .copied()
        .flat_map(|part| part.iter())
        .enumerate()
        .find_map(|(k, f)| {
            let lf = f.leading_term()?;
            lf.divides(lead).then(|| (k, f, lead.exp - lf.exp))
        })
}
