//! Sparse module elements over GF(2)[x, y].
//!
//! A `ModuleElement` maps row index → exponent. With coefficients in GF(2) the
//! presence of a row *is* its coefficient, so adding a term that is already
//! there removes it (`a + a = 0`). `toggle` is that rule; every other
//! arithmetic operation goes through it.
//!
//! Invariant (assumed, not enforced): elements are homogeneous for the grading
//! they are used with, so a row never needs two different exponents.

use std::collections::BTreeMap;
use std::fmt;

use super::error::AlgebraError;
use crate::bidegree::{Bidegree, Term};

/// Column of a boundary matrix or basis generator. Rows iterate ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModuleElement {
    terms: BTreeMap<usize, Bidegree>,
}

impl ModuleElement {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of the given terms (repeated terms cancel pairwise).
    pub fn from_terms<I>(terms: I) -> Result<Self, AlgebraError>
    where
        I: IntoIterator<Item = Term>,
    {
        let mut out = Self::new();
        for t in terms {
            out.toggle(t)?;
        }
        Ok(out)
    }

    /// Build from terms known to sit on pairwise distinct rows (boundary columns).
    pub(crate) fn from_distinct_rows<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        let terms: BTreeMap<usize, Bidegree> = terms.into_iter().map(|t| (t.row, t.exp)).collect();
        Self { terms }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }
    #[inline]
    pub fn get(&self, row: usize) -> Option<Bidegree> {
        self.terms.get(&row).copied()
    }
    #[inline]
    pub fn contains_row(&self, row: usize) -> bool {
        self.terms.contains_key(&row)
    }

    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.terms.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Term> + '_ {
        self.terms.iter().map(|(&row, &exp)| Term::new(row, exp))
    }

    /// Position-over-term leader: the entry on the smallest row.
    #[inline]
    pub fn leading_term(&self) -> Option<Term> {
        self.terms
            .first_key_value()
            .map(|(&row, &exp)| Term::new(row, exp))
    }

    /// Remove and return the leading term.
    #[inline]
    pub fn pop_leading(&mut self) -> Option<Term> {
        self.terms
            .pop_first()
            .map(|(row, exp)| Term::new(row, exp))
    }

    /// Add one term over GF(2): insert if the row is free, cancel if it holds
    /// the same exponent.
    pub fn toggle(&mut self, term: Term) -> Result<(), AlgebraError> {
        match self.terms.get(&term.row) {
            None => {
                self.terms.insert(term.row, term.exp);
                Ok(())
            }
            Some(&stored) if stored == term.exp => {
                self.terms.remove(&term.row);
                Ok(())
            }
            Some(&stored) => Err(AlgebraError::CancellationMismatch {
                row: term.row,
                stored,
                incoming: term.exp,
            }),
        }
    }

    /// `self += m · other`.
    pub fn add_multiple(&mut self, m: Bidegree, other: &ModuleElement) -> Result<(), AlgebraError> {
        for t in other.iter() {
            self.toggle(Term::new(t.row, t.exp + m))?;
        }
        Ok(())
    }

    /// `self += other`.
    #[inline]
    pub fn add_assign(&mut self, other: &ModuleElement) -> Result<(), AlgebraError> {
        self.add_multiple(Bidegree::ZERO, other)
    }

    /// `m · self`.
    pub fn shifted(&self, m: Bidegree) -> ModuleElement {
        ModuleElement {
            terms: self.terms.iter().map(|(&row, &exp)| (row, exp + m)).collect(),
        }
    }

    /// Check that every stored exponent is a genuine monomial.
    pub fn check_nonnegative(&self) -> Result<(), AlgebraError> {
        match self.iter().find(|t| !t.exp.is_nonnegative()) {
            Some(t) => Err(AlgebraError::NegativeExponent {
                row: t.row,
                exp: t.exp,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for ModuleElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (k, (row, exp)) in self.terms.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{row}: {exp}")?;
        }
        f.write_str("}")
    }
}
