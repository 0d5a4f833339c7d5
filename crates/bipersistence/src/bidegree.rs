//! Bidegrees (distance exponent, density exponent) and module terms.
//!
//! - `Bidegree`: the monomial `x^a y^b` of the two-parameter grading, stored as
//!   its exponent pair. Arithmetic is componentwise and may go negative in
//!   intermediate results; `is_nonnegative` is the check for stored values.
//! - `Term`: a monomial placed on one row (basis vector) of a free module.
//!   Divisibility and lcm only make sense between terms on the same row.

use std::fmt;
use std::ops::{Add, Sub};

/// Exponent pair `(x, y)`: `x` tracks the Rips distance, `y` the density.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bidegree {
    pub x: i64,
    pub y: i64,
}

impl Bidegree {
    pub const ZERO: Bidegree = Bidegree { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Monomial divisibility: `self ≤ other` componentwise.
    #[inline]
    pub fn divides(self, other: Bidegree) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// Componentwise maximum.
    #[inline]
    pub fn lcm(self, other: Bidegree) -> Bidegree {
        Bidegree::new(self.x.max(other.x), self.y.max(other.y))
    }

    #[inline]
    pub fn is_nonnegative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

impl Add for Bidegree {
    type Output = Bidegree;
    #[inline]
    fn add(self, rhs: Bidegree) -> Bidegree {
        Bidegree::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Bidegree {
    type Output = Bidegree;
    #[inline]
    fn sub(self, rhs: Bidegree) -> Bidegree {
        Bidegree::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Bidegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Monomial `exp` on module row `row`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    pub row: usize,
    pub exp: Bidegree,
}

impl Term {
    #[inline]
    pub const fn new(row: usize, exp: Bidegree) -> Self {
        Self { row, exp }
    }

    /// `self | other`: same row and exponent-wise divisibility.
    #[inline]
    pub fn divides(&self, other: &Term) -> bool {
        self.row == other.row && self.exp.divides(other.exp)
    }

    /// Least common multiple; `None` when the rows differ (no overlap).
    #[inline]
    pub fn lcm(&self, other: &Term) -> Option<Term> {
        (self.row == other.row).then(|| Term::new(self.row, self.exp.lcm(other.exp)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Bidegree::new(3, 7);
        let b = Bidegree::new(5, 2);
        assert_eq!(a + b, Bidegree::new(8, 9));
        assert_eq!(a - b, Bidegree::new(-2, 5));
        assert!(!(a - b).is_nonnegative());
        assert_eq!((a - b) + b, a);
    }

    #[test]
    fn divisibility_is_a_partial_order() {
        let a = Bidegree::new(1, 4);
        let b = Bidegree::new(2, 4);
        let c = Bidegree::new(0, 5);
        assert!(a.divides(a));
        assert!(a.divides(b));
        assert!(!b.divides(a));
        // incomparable
        assert!(!b.divides(c) && !c.divides(b));
    }

    #[test]
    fn term_divisibility_needs_matching_rows() {
        let u = Term::new(2, Bidegree::new(1, 1));
        let v = Term::new(2, Bidegree::new(4, 1));
        let w = Term::new(3, Bidegree::new(4, 1));
        assert!(u.divides(&v));
        assert!(!u.divides(&w));
        assert!(!v.divides(&u));
    }

    #[test]
    fn lcm_takes_componentwise_max_or_reports_no_overlap() {
        // Matches the hand example (8,8) vs (0,10) -> (8,10).
        let f = Term::new(0, Bidegree::new(8, 8));
        let g = Term::new(0, Bidegree::new(0, 10));
        assert_eq!(f.lcm(&g), Some(Term::new(0, Bidegree::new(8, 10))));
        assert_eq!(f.lcm(&Term::new(1, Bidegree::ZERO)), None);
        assert_eq!(f.exp.lcm(g.exp), g.exp.lcm(f.exp));
    }
}
