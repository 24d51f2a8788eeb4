//! Reachable-consequence set and usable-clause set (component C).
//!
//! A clause's body and its head variable live in the same (unsigned)
//! variable space, so `heads` and the precondition `b` are both
//! `BTreeSet<Var>` here.

use std::collections::BTreeSet;

use crate::clause::Formula;
use crate::intern::Var;
use crate::resolution::minimal_of;

/// `RCN(B, F)` and `UCL(B, F)`: the least `heads` such that, starting from
/// `heads = ∅`, whenever a clause `body -> h` of `f` has `body ⊆ b ∪ heads`,
/// `h` joins `heads`. `UCL` is the minimal sub-family of `f` whose body is
/// contained in `b ∪ heads_final`, computed in two explicit passes (fixpoint
/// first, then a membership test over the stabilized `heads`) so that a
/// clause already satisfied by an earlier pass doesn't get silently excluded.
pub fn rcnucl(b: &BTreeSet<Var>, f: &Formula) -> (BTreeSet<Var>, Formula) {
    let mut heads: BTreeSet<Var> = BTreeSet::new();
    loop {
        let mut grew = false;
        for c in f {
            if let Some(h) = c.head() {
                let hv = crate::clause::var_of(h);
                if heads.contains(&hv) {
                    continue;
                }
                let body = c.body();
                if body.iter().all(|v| b.contains(v) || heads.contains(v)) {
                    heads.insert(hv);
                    grew = true;
                }
            }
        }
        if !grew {
            break;
        }
    }

    let usable: BTreeSet<_> = f
        .iter()
        .filter(|c| {
            c.head().is_some() && c.body().iter().all(|v| b.contains(v) || heads.contains(v))
        })
        .cloned()
        .collect();

    (heads, minimal_of(&usable))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::{negative, positive, Clause};

    fn v(n: u32) -> Var {
        Var(n)
    }

    #[test]
    fn rcn_chains_forward_through_the_formula() {
        let mut f = Formula::new();
        f.insert(Clause::from_literals([positive(v(2)), negative(v(1))])); // a->b
        f.insert(Clause::from_literals([positive(v(3)), negative(v(2))])); // b->c
        let b = BTreeSet::from([v(1)]);
        let (heads, usable) = rcnucl(&b, &f);
        assert_eq!(heads, BTreeSet::from([v(2), v(3)]));
        assert_eq!(usable, f);
    }

    #[test]
    fn ucl_excludes_unreachable_clauses() {
        let mut f = Formula::new();
        f.insert(Clause::from_literals([positive(v(2)), negative(v(1))])); // a->b
        f.insert(Clause::from_literals([positive(v(9)), negative(v(8))])); // x->y, unreachable
        let b = BTreeSet::from([v(1)]);
        let (heads, usable) = rcnucl(&b, &f);
        assert_eq!(heads, BTreeSet::from([v(2)]));
        assert_eq!(usable.len(), 1);
    }

    #[test]
    fn rcn_of_b_equals_rcn_of_b_over_its_own_ucl() {
        let mut f = Formula::new();
        f.insert(Clause::from_literals([positive(v(2)), negative(v(1))]));
        f.insert(Clause::from_literals([positive(v(3)), negative(v(2))]));
        f.insert(Clause::from_literals([positive(v(9)), negative(v(8))]));
        let b = BTreeSet::from([v(1)]);
        let (heads1, ucl) = rcnucl(&b, &f);
        let (heads2, _) = rcnucl(&b, &ucl);
        assert_eq!(heads1, heads2);
    }

    #[test]
    fn usable_includes_redundant_clauses_sharing_a_derived_head() {
        let mut f = Formula::new();
        f.insert(Clause::from_literals([positive(v(2)), negative(v(1))])); // a->b
        f.insert(Clause::from_literals([positive(v(2)), negative(v(1)), negative(v(3))])); // ac->b, subsumed
        let b = BTreeSet::from([v(1), v(3)]);
        let (heads, usable) = rcnucl(&b, &f);
        assert_eq!(heads, BTreeSet::from([v(2)]));
        // minimal() drops the subsumed longer-body clause.
        assert_eq!(usable.len(), 1);
    }
}
