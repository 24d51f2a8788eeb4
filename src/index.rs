//! Variable-indexed inverted index over a clause set: resolution pairs a
//! clause containing `+v` against one containing `-v`, so indexing by
//! variable (not by signed literal) is what both `minimal` and `rcnucl`
//! actually need.

use multimap::MultiMap;

use crate::clause::Clause;
use crate::intern::Var;

/// Maps each variable mentioned anywhere in a clause set to the indices (into
/// the caller-provided slice) of the clauses mentioning it.
pub struct ClauseIndex {
    by_var: MultiMap<Var, usize>,
    empty: Vec<usize>,
}

impl ClauseIndex {
    pub fn build(clauses: &[&Clause]) -> Self {
        let mut by_var = MultiMap::new();
        let mut empty = Vec::new();
        for (i, c) in clauses.iter().enumerate() {
            if c.is_empty() {
                empty.push(i);
                continue;
            }
            for &l in c.iter() {
                by_var.insert(crate::clause::var_of(l), i);
            }
        }
        ClauseIndex { by_var, empty }
    }

    /// Indices of clauses that could possibly be in a strict-subset or
    /// resolution relationship with `c`: those sharing a variable with it,
    /// plus every empty clause, since `∅` is a subset of everything but
    /// shares no variable with anything.
    pub fn candidates(&self, c: &Clause) -> Vec<usize> {
        let mut out: Vec<usize> = c
            .iter()
            .filter_map(|&l| self.by_var.get_vec(&crate::clause::var_of(l)))
            .flatten()
            .copied()
            .chain(self.empty.iter().copied())
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}
