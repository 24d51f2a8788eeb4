//! Clause input syntax: `BODY->HEADS`, `L=R`, bare disjunctive `abc`, and
//! `()`. A hand-rolled character scanner: the grammar is three shapes wide,
//! so a parser-combinator crate isn't warranted.
//!
//! A dangling `-` or an unterminated `&name;` is a parse error rather than
//! being silently dropped, and the head side of `BODY->HEADS` is always
//! treated as positive: a literal sign on a head token would produce a
//! headless denial clause, a form this crate's data model has no place for
//! (see DESIGN.md, Open Question dispositions).

use std::collections::BTreeSet;

use crate::clause::{negative, positive, var_of, Clause, Formula, Literal};
use crate::error::ParseError;
use crate::intern::Interner;

/// Parses one `BODY`/`HEADS`/disjunctive-side token string into a set of
/// signed literals, honoring `-` prefixes and `&name;` multi-character
/// variables.
pub fn parse_literal_set(s: &str, interner: &mut Interner) -> Result<BTreeSet<Literal>, ParseError> {
    let mut out = BTreeSet::new();
    let mut negate = false;
    let mut buf: Option<String> = None;

    for c in s.chars() {
        match c {
            '-' if buf.is_none() => negate = true,
            '&' if buf.is_none() => buf = Some(String::new()),
            ';' if buf.is_some() => {
                let name = buf.take().unwrap();
                if name.is_empty() {
                    return Err(ParseError::EmptyToken(s.to_string()));
                }
                let var = interner.intern(&name);
                out.insert(if negate { negative(var) } else { positive(var) });
                negate = false;
            }
            _ => {
                if let Some(b) = buf.as_mut() {
                    b.push(c);
                } else {
                    let var = interner.intern(&c.to_string());
                    out.insert(if negate { negative(var) } else { positive(var) });
                    negate = false;
                }
            }
        }
    }
    if buf.is_some() {
        return Err(ParseError::UnterminatedVariableName(s.to_string()));
    }
    if negate {
        return Err(ParseError::DanglingNegation(s.to_string()));
    }
    Ok(out)
}

/// Parses one clause-syntax string (as appears between commas/spaces on the
/// `-f`/test-script command line) into the set of clauses it expands to:
/// `()` is the single empty clause, `BODY->HEADS` expands to one clause per
/// head variable, and any other string is one disjunctive clause.
pub fn parse_clause(s: &str, interner: &mut Interner) -> Result<BTreeSet<Clause>, ParseError> {
    if s == "()" {
        let mut out = BTreeSet::new();
        out.insert(Clause::new());
        return Ok(out);
    }

    if let Some(idx) = s.find("->") {
        let body_str = &s[..idx];
        let head_str = &s[idx + 2..];
        let body_lits = parse_literal_set(body_str, interner)?;
        let head_lits = parse_literal_set(head_str, interner)?;
        if head_lits.is_empty() {
            return Err(ParseError::UnrecognizedClause(s.to_string()));
        }
        let body_vars: Vec<_> = body_lits.iter().map(|&l| var_of(l)).collect();
        let mut out = BTreeSet::new();
        for &h in &head_lits {
            let mut c = Clause::new();
            for &bv in &body_vars {
                c.insert(negative(bv));
            }
            c.insert(positive(var_of(h)));
            out.insert(c);
        }
        Ok(out)
    } else {
        let lits = parse_literal_set(s, interner)?;
        let mut out = BTreeSet::new();
        out.insert(Clause::from_literals(lits));
        Ok(out)
    }
}

/// Parses a whole formula from its clause-syntax strings, expanding `L=R`
/// into both `L->R` and `R->L`.
pub fn parse_formula(clauses: &[String], interner: &mut Interner) -> Result<Formula, ParseError> {
    let mut f = Formula::new();
    for s in clauses {
        if let Some(eq) = s.find('=') {
            let (l, r) = (&s[..eq], &s[eq + 1..]);
            if r.contains('=') {
                return Err(ParseError::MalformedEquivalence(s.clone()));
            }
            f.extend(parse_clause(&format!("{l}->{r}"), interner)?);
            f.extend(parse_clause(&format!("{r}->{l}"), interner)?);
        } else {
            f.extend(parse_clause(s, interner)?);
        }
    }
    Ok(f)
}
