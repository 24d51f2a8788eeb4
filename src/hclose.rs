//! Head-restricted closure (component D): minimal clauses derivable from a
//! usable clause set by repeated resolution, restricted to clauses whose
//! head lies in a prescribed set `H`.

use std::collections::BTreeSet;

use crate::clause::Clause;
use crate::intern::Var;
use crate::resolution::{minimal_of, resolve};

/// `HCLOSE(H, U)`: seed with `{c ∈ U : head(c) ∈ H}`, minimize, then
/// repeatedly resolve each not-yet-processed clause `c` against every
/// `u ∈ U`, keeping only non-tautological resolvents whose head equals
/// `head(c)` (body-side resolution only; the head variable never changes).
/// Each round strictly grows a finite, minimality-pruned set bounded by
/// `2^|vars|`, so the fixpoint is reached in finitely many rounds.
pub fn hclose(h: &BTreeSet<Var>, u: &BTreeSet<Clause>) -> BTreeSet<Clause> {
    let mut closure: BTreeSet<Clause> = u
        .iter()
        .filter(|c| {
            !c.is_tautology() && c.head().is_some_and(|lit| h.contains(&crate::clause::var_of(lit)))
        })
        .cloned()
        .collect();
    closure = minimal_of(&closure);

    let mut processed: BTreeSet<Clause> = BTreeSet::new();
    loop {
        let to_process: Vec<Clause> = closure.difference(&processed).cloned().collect();
        if to_process.is_empty() {
            break;
        }
        for c in &to_process {
            let c_head = c.head();
            for uc in u {
                if let Some(r) = resolve(c, uc) {
                    if r.head() == c_head {
                        closure.insert(r);
                    }
                }
            }
        }
        processed.extend(to_process);
        closure = minimal_of(&closure);
    }
    closure
}
