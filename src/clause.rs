//! Clause algebra (component A): literal sign, clause head/body, tautology
//! test, containment, canonical construction.

use std::collections::BTreeSet;
use std::fmt;

use crate::intern::Var;

/// A signed literal: `Var(v).0 as i32` for the positive occurrence of `v`,
/// its negation for the negative occurrence. Horn discipline (at most one
/// positive literal per clause) is enforced by callers, not by `Clause`
/// itself. `Clause` is a general disjunction; `head()` returns `None` for
/// non-Horn clauses rather than guessing (see DESIGN.md Open Question 2).
pub type Literal = i32;

pub fn positive(v: Var) -> Literal {
    v.0 as Literal
}

pub fn negative(v: Var) -> Literal {
    -(v.0 as Literal)
}

pub fn var_of(l: Literal) -> Var {
    Var(l.unsigned_abs())
}

pub fn is_positive(l: Literal) -> bool {
    l > 0
}

/// An unordered set of literals, represented as a sorted set for a canonical
/// form. Duplicates collapse by construction; opposite-literal pairs are
/// *not* rejected at construction time. Input tautologies are legal and are
/// dropped later by `detautologize`, not refused at the data-structure level.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause(BTreeSet<Literal>);

impl Clause {
    pub fn new() -> Self {
        Clause(BTreeSet::new())
    }

    pub fn from_literals<I: IntoIterator<Item = Literal>>(lits: I) -> Self {
        Clause(lits.into_iter().collect())
    }

    pub fn contains(&self, l: Literal) -> bool {
        self.0.contains(&l)
    }

    pub fn insert(&mut self, l: Literal) -> bool {
        self.0.insert(l)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn union(&self, other: &Clause) -> Clause {
        Clause(self.0.union(&other.0).copied().collect())
    }

    pub fn difference(&self, other: &Clause) -> Clause {
        Clause(self.0.difference(&other.0).copied().collect())
    }

    /// `self` is a (non-strict) subset of `other`.
    pub fn is_subset(&self, other: &Clause) -> bool {
        self.0.is_subset(&other.0)
    }

    /// `self` is a *strict* subset of `other`.
    pub fn is_strict_subset(&self, other: &Clause) -> bool {
        self.0.is_subset(&other.0) && self.0.len() < other.0.len()
    }

    /// True iff the clause contains some literal and its complement.
    pub fn is_tautology(&self) -> bool {
        self.0.iter().any(|&l| self.0.contains(&-l))
    }

    /// The unique positive literal, or `None` if the clause is purely
    /// negative or has more than one positive literal (non-Horn).
    pub fn head(&self) -> Option<Literal> {
        let mut positives = self.0.iter().filter(|&&l| is_positive(l));
        let h = *positives.next()?;
        if positives.next().is_some() {
            None
        } else {
            Some(h)
        }
    }

    /// True iff the clause has exactly one positive literal (is Horn and has
    /// a head, i.e. is not purely negative).
    pub fn is_horn_with_head(&self) -> bool {
        self.head().is_some()
    }

    /// The set of (unsigned) variables appearing negatively.
    pub fn body(&self) -> BTreeSet<Var> {
        self.0
            .iter()
            .filter(|&&l| !is_positive(l))
            .map(|&l| var_of(l))
            .collect()
    }

    pub fn literals(&self) -> &BTreeSet<Literal> {
        &self.0
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::from_literals(iter)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, l) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{l}")?;
        }
        write!(f, ")")
    }
}

/// An unordered set of clauses.
pub type Formula = BTreeSet<Clause>;

pub fn heads(f: &Formula) -> BTreeSet<Literal> {
    f.iter().filter_map(Clause::head).collect()
}

/// `heads(f)` as a multiset, used by `is_single_head` to detect repeats.
pub fn head_multiset(f: &Formula) -> Vec<Literal> {
    f.iter().filter_map(Clause::head).collect()
}

pub fn is_single_head(f: &Formula) -> bool {
    let multi = head_multiset(f);
    let unique: BTreeSet<Literal> = multi.iter().copied().collect();
    multi.len() == unique.len()
}

pub fn bodies(f: &Formula) -> BTreeSet<BTreeSet<Var>> {
    f.iter().map(Clause::body).collect()
}

pub fn is_horn(f: &Formula) -> bool {
    f.iter().all(|c| c.head().is_some() || c.iter().filter(|&&l| is_positive(l)).count() == 0)
}
