//! Human-readable rendering of clauses and formulas: `BODY->HEADS` form
//! (mirroring the input syntax in `parser.rs`) and raw signed-literal form
//! (`Clause`'s own `Display`), both resolving variable names through an
//! `Interner` rather than storing names on the clause itself.

use std::collections::BTreeMap;

use crate::clause::{is_positive, var_of, Clause, Formula};
use crate::intern::Interner;

/// Renders one clause as `BODY->HEAD` (negative literals first, sorted, then
/// the single head), falling back to a `[...]` disjunctive listing for a
/// clause with no head (non-Horn or purely negative).
pub fn clause_to_string(c: &Clause, interner: &Interner) -> String {
    match c.head() {
        Some(h) => {
            let body: String = c
                .iter()
                .filter(|&&l| !is_positive(l))
                .map(|&l| interner.name(var_of(l)))
                .collect();
            format!("{}->{}", body, interner.name(var_of(h)))
        }
        None if c.is_empty() => "()".to_string(),
        None => {
            let lits: Vec<String> = c
                .iter()
                .map(|&l| {
                    let name = interner.name(var_of(l));
                    if is_positive(l) {
                        name.to_string()
                    } else {
                        format!("-{name}")
                    }
                })
                .collect();
            format!("[{}]", lits.join(" "))
        }
    }
}

/// Renders a formula by grouping clauses that share the same head variable
/// and collecting their bodies into a comma-separated `HEAD<-BODY1,BODY2`
/// line per head, plus one line per headless clause. Lines are sorted by
/// interned variable id for determinism, not by discovery order.
pub fn formula_to_string(f: &Formula, interner: &Interner) -> String {
    let mut by_head: BTreeMap<u32, Vec<&Clause>> = BTreeMap::new();
    let mut headless: Vec<&Clause> = Vec::new();

    for c in f {
        match c.head() {
            Some(h) => by_head.entry(var_of(h).0).or_default().push(c),
            None => headless.push(c),
        }
    }

    let mut lines: Vec<String> = Vec::new();
    for (_, clauses) in by_head {
        let head_name = interner.name(var_of(clauses[0].head().unwrap()));
        let bodies: Vec<String> = clauses
            .iter()
            .map(|c| {
                c.iter()
                    .filter(|&&l| !is_positive(l))
                    .map(|&l| interner.name(var_of(l)))
                    .collect::<String>()
            })
            .collect();
        lines.push(format!("{}<-{}", head_name, bodies.join(",")));
    }
    for c in headless {
        lines.push(clause_to_string(c, interner));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::{negative, positive};

    #[test]
    fn horn_clause_renders_as_arrow_form() {
        let mut it = Interner::new();
        let a = it.intern("a");
        let b = it.intern("b");
        let c = it.intern("c");
        let clause = Clause::from_literals([positive(c), negative(a), negative(b)]);
        assert_eq!(clause_to_string(&clause, &it), "ab->c");
    }

    #[test]
    fn empty_clause_renders_as_parens() {
        let it = Interner::new();
        assert_eq!(clause_to_string(&Clause::new(), &it), "()");
    }

    #[test]
    fn headless_clause_renders_as_bracket_list() {
        let mut it = Interner::new();
        let a = it.intern("a");
        let b = it.intern("b");
        let clause = Clause::from_literals([negative(a), negative(b)]);
        assert_eq!(clause_to_string(&clause, &it), "[-a -b]");
    }

    #[test]
    fn formula_groups_shared_heads_on_one_line() {
        let mut it = Interner::new();
        let a = it.intern("a");
        let b = it.intern("b");
        let c = it.intern("c");
        let f = Formula::from([
            Clause::from_literals([positive(c), negative(a)]),
            Clause::from_literals([positive(c), negative(b)]),
        ]);
        let s = formula_to_string(&f, &it);
        assert_eq!(s, "c<-a,b");
    }
}
