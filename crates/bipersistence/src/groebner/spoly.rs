//! S-polynomials for modules whose rows carry their own degree.
//!
//! For `f`, `g` with leading terms on the same row `j`, set
//! `l = lcm(lead(f), lead(g)) + shift(j)`: the common degree both lifts reach.
//! Every row `i` of `f` or `g` then contributes `x^(l − shift(i))` on row `i`;
//! rows held by both cancel over GF(2), the leading row among them. With
//! `shift = 0` this is the classical S-polynomial.

use crate::bidegree::Term;
use crate::module::{AlgebraError, ModuleElement, RowGrading};

/// S-polynomial of `f` and `g`; empty when their leading rows differ.
pub fn s_poly<G: RowGrading + ?Sized>(
    f: &ModuleElement,
    g: &ModuleElement,
    grading: &G,
) -> Result<ModuleElement, AlgebraError> {
    let mut s = ModuleElement::new();
    let (Some(lf), Some(lg)) = (f.leading_term(), g.leading_term()) else {
        return Ok(s);
    };
    // Different leading rows: nothing to cancel (first criterion).
    let Some(lcm) = lf.lcm(&lg) else {
        return Ok(s);
    };
    let l = lcm.exp + grading.shift(lcm.row);
    for t in f.iter().chain(g.iter()) {
        s.toggle(Term::new(t.row, l - grading.shift(t.row)))?;
    }
    s.check_nonnegative()?;
    Ok(s)
}
