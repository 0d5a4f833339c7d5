//! Interreduction of a Gröbner basis.
//!
//! One pass walks the generators in list order and divides each by the
//! generators already kept in this pass followed by those not yet visited.
//! A zero remainder drops the generator; otherwise the remainder replaces it
//! at the end of the kept list. Passes repeat until one changes nothing, so
//! every survivor is its own remainder modulo the others.
//!
//! Each replacement keeps the set a Gröbner basis of the same module: either
//! the old leading term is still covered by a sibling, or the remainder keeps
//! that leading term.

use crate::module::{AlgebraError, ModuleElement};

use super::division::divide_parts;

/// Drop redundant generators and normalize the rest against each other.
pub fn reduce(gens: &[ModuleElement]) -> Result<Vec<ModuleElement>, AlgebraError> {
    let mut current = gens.to_vec();
    let mut passes = 0usize;
    loop {
        passes += 1;
        let (next, changed) = reduce_pass(&current)?;
        current = next;
        if !changed {
            break;
        }
    }
    tracing::info!(
        input = gens.len(),
        output = current.len(),
        passes,
        "basis reduced"
    );
    Ok(current)
}

fn reduce_pass(gens: &[ModuleElement]) -> Result<(Vec<ModuleElement>, bool), AlgebraError> {
    let mut kept: Vec<ModuleElement> = Vec::with_capacity(gens.len());
    let mut changed = false;
    for (k, g) in gens.iter().enumerate() {
        let r = divide_parts(g, &[&kept[..], &gens[k + 1..]])?.remainder;
        if r != *g {
            changed = true;
        }
        if !r.is_empty() {
            kept.push(r);
        }
    }
    Ok((kept, changed))
}
