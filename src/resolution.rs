//! Resolution kernel (component B): binary resolution, minimality filtering,
//! full resolution closure, and the equivalence oracle (component G).

use std::collections::BTreeSet;

use crate::clause::Clause;
use crate::index::ClauseIndex;

/// Resolve two clauses on their first complementary literal pair (in sorted
/// order, since `Clause` is canonically sorted). Returns `None` if no
/// complementary pair exists, or if the resolvent would be a tautology.
pub fn resolve(a: &Clause, b: &Clause) -> Option<Clause> {
    for &x in a.iter() {
        if b.contains(-x) {
            let r = a.difference(&Clause::from_literals([x])).union(
                &b.difference(&Clause::from_literals([-x])),
            );
            return if r.is_tautology() { None } else { Some(r) };
        }
    }
    None
}

/// Remove tautological clauses from a formula.
pub fn detautologize(s: &BTreeSet<Clause>) -> BTreeSet<Clause> {
    s.iter().filter(|c| !c.is_tautology()).cloned().collect()
}

/// Clauses of `s` with no strict subset among `s ∪ e`. `e` is a background
/// set of already-known clauses (e.g. a previously-closed formula) that can
/// eliminate members of `s` without itself being a candidate result.
pub fn minimal(s: &BTreeSet<Clause>, e: &BTreeSet<Clause>) -> BTreeSet<Clause> {
    let background: Vec<&Clause> = s.iter().chain(e.iter()).collect();
    let index = ClauseIndex::build(&background);

    let mut out = BTreeSet::new();
    'outer: for c in s {
        for &i in &index.candidates(c) {
            let d = background[i];
            if d.is_strict_subset(c) {
                continue 'outer;
            }
        }
        out.insert(c.clone());
    }
    out
}

pub fn minimal_of(s: &BTreeSet<Clause>) -> BTreeSet<Clause> {
    minimal(s, &BTreeSet::new())
}

/// Resolution closure of `s`: iterate, extending by all resolvents of all
/// pairs and then minimizing, until a fixpoint is reached.
pub fn close(s: &BTreeSet<Clause>) -> BTreeSet<Clause> {
    let mut n = s.clone();
    let mut r: BTreeSet<Clause> = BTreeSet::new();
    while n != r {
        r = n.clone();
        let members: Vec<&Clause> = r.iter().collect();
        for &a in &members {
            for &b in &members {
                if let Some(resolvent) = resolve(a, b) {
                    n.insert(resolvent);
                }
            }
        }
        n = minimal_of(&n);
    }
    n
}

/// Two formulas are equivalent iff their detautologized, minimized resolution
/// closures coincide.
pub fn equivalent(s: &BTreeSet<Clause>, r: &BTreeSet<Clause>) -> bool {
    minimal_of(&close(&detautologize(s))) == minimal_of(&close(&detautologize(r)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::{negative, positive};
    use crate::intern::Var;

    fn v(n: u32) -> Var {
        Var(n)
    }

    #[test]
    fn resolve_splices_on_first_complementary_pair() {
        let a = Clause::from_literals([positive(v(1)), negative(v(2))]);
        let b = Clause::from_literals([positive(v(2)), negative(v(3))]);
        let r = resolve(&a, &b).unwrap();
        assert_eq!(r, Clause::from_literals([positive(v(1)), negative(v(3))]));
    }

    #[test]
    fn resolve_rejects_tautological_resolvents() {
        let a = Clause::from_literals([positive(v(1)), negative(v(2))]);
        let b = Clause::from_literals([positive(v(2)), negative(v(1))]);
        assert_eq!(resolve(&a, &b), None);
    }

    #[test]
    fn resolve_returns_none_without_complementary_literal() {
        let a = Clause::from_literals([positive(v(1))]);
        let b = Clause::from_literals([positive(v(2))]);
        assert_eq!(resolve(&a, &b), None);
    }

    #[test]
    fn minimal_drops_strict_supersets() {
        let small = Clause::from_literals([positive(v(1))]);
        let big = Clause::from_literals([positive(v(1)), negative(v(2))]);
        let s = BTreeSet::from([small.clone(), big]);
        assert_eq!(minimal_of(&s), BTreeSet::from([small]));
    }

    #[test]
    fn minimal_collapses_everything_to_the_empty_clause() {
        let empty = Clause::new();
        let c = Clause::from_literals([positive(v(1)), negative(v(2))]);
        let s = BTreeSet::from([empty.clone(), c]);
        assert_eq!(minimal_of(&s), BTreeSet::from([empty]));
    }

    #[test]
    fn minimal_is_idempotent() {
        let s = BTreeSet::from([
            Clause::from_literals([positive(v(1))]),
            Clause::from_literals([positive(v(1)), negative(v(2))]),
            Clause::from_literals([positive(v(3))]),
        ]);
        let once = minimal_of(&s);
        let twice = minimal_of(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn close_is_idempotent() {
        let s = BTreeSet::from([
            Clause::from_literals([positive(v(1)), negative(v(2))]),
            Clause::from_literals([positive(v(2)), negative(v(3))]),
        ]);
        let once = close(&s);
        let twice = close(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn close_chains_resolution() {
        let s = BTreeSet::from([
            Clause::from_literals([positive(v(2)), negative(v(1))]), // a->b
            Clause::from_literals([positive(v(3)), negative(v(2))]), // b->c
        ]);
        let closure = close(&s);
        let transitive = Clause::from_literals([positive(v(3)), negative(v(1))]); // a->c
        assert!(closure.contains(&transitive));
    }

    #[test]
    fn equivalent_formulas_with_detautologized_duplicates() {
        let s = BTreeSet::from([Clause::from_literals([positive(v(1)), negative(v(2))])]);
        let r = BTreeSet::from([
            Clause::from_literals([positive(v(1)), negative(v(2))]),
            Clause::from_literals([positive(v(5)), negative(v(5))]), // tautology
        ]);
        assert!(equivalent(&s, &r));
    }
}
