//! Per-row degree shifts.
//!
//! Rows of the degree-1 boundary are vertices, graded by their scaled density
//! `(0, d_i)`; rows of the degree-2 boundary are edges, graded by the edge's
//! own filtration value. An element is homogeneous of degree `D` when
//! `exp(row) + shift(row) == D` for every row it holds.

use super::element::ModuleElement;
use crate::bidegree::Bidegree;

/// Dimension of the simplices that index the rows of a module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimplexKind {
    Vertex,
    Edge,
}

/// Intrinsic degree of each row (basis vector) of a free module.
pub trait RowGrading {
    fn shift(&self, row: usize) -> Bidegree;
}

impl<F> RowGrading for F
where
    F: Fn(usize) -> Bidegree,
{
    #[inline]
    fn shift(&self, row: usize) -> Bidegree {
        self(row)
    }
}

/// Common degree of a homogeneous element; `None` if empty or inhomogeneous.
pub fn degree<G: RowGrading + ?Sized>(elem: &ModuleElement, grading: &G) -> Option<Bidegree> {
    let mut terms = elem.iter();
    let first = terms.next()?;
    let deg = first.exp + grading.shift(first.row);
    terms
        .all(|t| t.exp + grading.shift(t.row) == deg)
        .then_some(deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidegree::Term;

    #[test]
    fn degree_of_homogeneous_element() {
        let shifts = [Bidegree::new(0, 0), Bidegree::new(0, 4), Bidegree::new(0, 7)];
        let grading = |row: usize| shifts[row];
        let v = ModuleElement::from_terms([
            Term::new(0, Bidegree::new(10, 7)),
            Term::new(2, Bidegree::new(10, 0)),
        ])
        .unwrap();
        assert_eq!(degree(&v, &grading), Some(Bidegree::new(10, 7)));

        let w = ModuleElement::from_terms([
            Term::new(0, Bidegree::new(10, 7)),
            Term::new(1, Bidegree::new(10, 0)),
        ])
        .unwrap();
        assert_eq!(degree(&w, &grading), None);
        assert_eq!(degree(&ModuleElement::new(), &grading), None);
    }
}
