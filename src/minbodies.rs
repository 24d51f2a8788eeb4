//! Minimal-bodies search (component E): a guided back-chaining walk over a
//! head-restricted closure, extracting the set of minimal bodies it
//! contains. A back-step that lands on an already-`done`-or-already-`min`
//! clause aborts the walk for the *current* starting clause without
//! committing it (the `aborted` flag) rather than finalizing a partial
//! result.

use std::collections::BTreeSet;

use crate::clause::{Clause, Formula};
use crate::intern::Var;

/// `MINBODIES(minbcl, uclscl)`: the set of minimal bodies reachable from
/// `minbcl` (typically a `hclose` result) by back-chaining through `uclscl`
/// (typically `ucl[p] ∩ used`).
pub fn minbodies(minbcl: &Formula, uclscl: &Formula) -> BTreeSet<BTreeSet<Var>> {
    let mut done: BTreeSet<Clause> = BTreeSet::new();
    let mut min: BTreeSet<BTreeSet<Var>> = BTreeSet::new();

    for start in minbcl {
        if done.contains(start) || min.contains(&start.body()) {
            continue;
        }
        let mut trace: BTreeSet<Clause> = BTreeSet::from([start.clone()]);
        done.insert(start.clone());

        let mut b = start.clone();
        let mut bprev: Option<Clause> = None;
        while bprev.as_ref() != Some(&b) {
            bprev = Some(b.clone());
            let mut aborted = false;

            'find_step: for c in uclscl {
                if !c.body().is_subset(&b.body()) {
                    continue;
                }
                let head_c = match c.head() {
                    Some(h) => h,
                    None => continue,
                };
                let mut found_bc: Option<Clause> = None;
                for bc in minbcl {
                    if bc.contains(-head_c) {
                        let combined = bc
                            .union(c)
                            .difference(&Clause::from_literals([head_c, -head_c]));
                        if combined == b {
                            found_bc = Some(bc.clone());
                            break;
                        }
                    }
                }
                let bc = match found_bc {
                    Some(bc) => bc,
                    None => continue,
                };

                if trace.contains(&bc) {
                    continue;
                }
                if done.contains(&bc) || min.contains(&bc.body()) {
                    bprev = Some(b.clone());
                    aborted = true;
                    break 'find_step;
                }

                b = bc.clone();
                trace.insert(b.clone());
                done.insert(b.clone());
            }

            if !aborted && bprev.as_ref() == Some(&b) {
                min.insert(b.body());
            }
        }
    }
    min
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::{negative, positive};

    fn v(n: u32) -> Var {
        Var(n)
    }

    #[test]
    fn trivial_single_clause_body_is_its_own_minimal_body() {
        let c = Clause::from_literals([positive(v(2)), negative(v(1))]); // a->b
        let minbcl = BTreeSet::from([c.clone()]);
        let uclscl = BTreeSet::new();
        let result = minbodies(&minbcl, &uclscl);
        assert_eq!(result, BTreeSet::from([BTreeSet::from([v(1)])]));
    }

    #[test]
    fn back_chains_through_a_usable_clause() {
        // target: ac->d. A used clause ac->b justifies replacing the {a,c}
        // body with the single already-derived variable b, via a companion
        // clause b->d sharing target's head.
        let target = Clause::from_literals([positive(v(4)), negative(v(1)), negative(v(3))]); // ac->d
        let companion = Clause::from_literals([positive(v(4)), negative(v(2))]); // b->d
        let step = Clause::from_literals([positive(v(2)), negative(v(1)), negative(v(3))]); // ac->b
        let minbcl = BTreeSet::from([target, companion]);
        let uclscl = BTreeSet::from([step]);
        let result = minbodies(&minbcl, &uclscl);
        assert_eq!(result, BTreeSet::from([BTreeSet::from([v(2)])]));
    }
}
